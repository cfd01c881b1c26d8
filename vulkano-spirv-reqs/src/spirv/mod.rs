//! The SPIR-V vocabulary known to the validator.
//!
//! Extensions, capabilities and opcodes are closed enumerations. The relations between them are
//! static tables attached to the enumerations themselves:
//!
//! - [`Capability::requires_one_of`] lists the extensions that can enable a capability.
//! - [`Op::requires_one_of`] lists the capabilities that permit an instruction.
//! - [`Extension::implied_capabilities`] and [`Capability::implicitly_declares`] list the
//!   capabilities that become available without their own `OpCapability`.
//!
//! The tables follow the SPIR-V 1.2 grammar and the extension registry of the same period.

pub use self::{capability::Capability, extension::Extension, op::Op};

mod capability;
mod extension;
mod op;

/// A decoded SPIR-V instruction, as far as requirement checking is concerned.
///
/// Decoding a module into instructions is done elsewhere. Only the declaration instructions keep
/// their operands; for everything else the opcode is all that matters here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `OpExtension`, with the literal extension name.
    Extension { name: String },

    /// `OpCapability`.
    Capability { capability: Capability },

    /// Any other instruction.
    ///
    /// An `Other` carrying `Op::Extension` or `Op::Capability` declares nothing.
    Other { opcode: Op },
}

impl Instruction {
    /// Returns the opcode of the instruction.
    #[inline]
    pub fn opcode(&self) -> Op {
        match *self {
            Instruction::Extension { .. } => Op::Extension,
            Instruction::Capability { .. } => Op::Capability,
            Instruction::Other { opcode } => opcode,
        }
    }

    /// Returns whether the instruction is an `OpExtension` or `OpCapability` declaration.
    #[inline]
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            Instruction::Extension { .. } | Instruction::Capability { .. }
        )
    }
}

impl From<Op> for Instruction {
    #[inline]
    fn from(opcode: Op) -> Self {
        Instruction::Other { opcode }
    }
}

impl From<Capability> for Instruction {
    #[inline]
    fn from(capability: Capability) -> Self {
        Instruction::Capability { capability }
    }
}

#[cfg(test)]
mod tests {
    use super::{Capability, Instruction, Op};

    #[test]
    fn opcode() {
        let extension = Instruction::Extension {
            name: "SPV_KHR_device_group".to_owned(),
        };
        assert_eq!(extension.opcode(), Op::Extension);
        assert!(extension.is_declaration());

        let capability = Instruction::from(Capability::Shader);
        assert_eq!(capability.opcode(), Op::Capability);
        assert!(capability.is_declaration());

        let other = Instruction::from(Op::MemoryModel);
        assert_eq!(other.opcode(), Op::MemoryModel);
        assert!(!other.is_declaration());
    }

    #[test]
    fn other_declaration_opcodes_declare_nothing() {
        assert!(!Instruction::from(Op::Capability).is_declaration());
    }
}
