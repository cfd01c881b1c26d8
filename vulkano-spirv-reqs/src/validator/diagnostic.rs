use crate::spirv::{Capability, Extension, Op};
use std::{
    error::Error,
    fmt::{Display, Error as FmtError, Formatter},
};

/// The outcome of a requirement validation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ResultCode {
    /// No requirement was violated. Soft diagnostics may still have been recorded.
    Success,

    /// A capability was declared without any of the extensions that enable it.
    MissingExtension,

    /// An instruction was used without any of the capabilities that permit it.
    InvalidCapability,
}

impl ResultCode {
    /// Returns the name of the result code, in the form callers match on.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            ResultCode::Success => "SUCCESS",
            ResultCode::MissingExtension => "MISSING_EXTENSION",
            ResultCode::InvalidCapability => "INVALID_CAPABILITY",
        }
    }
}

impl Display for ResultCode {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        f.write_str(self.as_str())
    }
}

/// How a diagnostic affects the validation result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Severity {
    /// Informational. The module is still accepted.
    Soft,

    /// The module is rejected and the pass stopped at the offending instruction.
    Hard,
}

/// A message produced by the validator about one instruction of the module.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    pub severity: Severity,

    /// The message text.
    pub message: String,

    /// The zero-based position of the offending instruction in the instruction stream.
    pub instruction: usize,
}

impl Diagnostic {
    pub(crate) fn unrecognized_extension(instruction: usize, name: &str) -> Self {
        Diagnostic {
            severity: Severity::Soft,
            message: format!("Found unrecognized extension {}", name),
            instruction,
        }
    }
}

impl From<&RequirementError> for Diagnostic {
    #[inline]
    fn from(err: &RequirementError) -> Self {
        Diagnostic {
            severity: Severity::Hard,
            message: err.to_string(),
            instruction: err.instruction,
        }
    }
}

impl Display for Diagnostic {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        f.write_str(&self.message)
    }
}

/// A requirement of the SPIR-V vocabulary that a module does not meet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequirementError {
    /// The zero-based position of the offending instruction in the instruction stream.
    pub instruction: usize,

    pub problem: RequirementProblem,
}

/// The requirement that was not met.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequirementProblem {
    /// A capability operand names a capability whose enabling extensions were not declared.
    MissingExtension {
        /// The one-based position of the offending operand.
        operand: usize,
        capability: Capability,
        requires_one_of: &'static [Extension],
    },

    /// An instruction was used while none of the capabilities permitting it were declared.
    InvalidCapability {
        opcode: Op,
        requires_one_of: &'static [Capability],
    },
}

impl RequirementError {
    /// Returns the result code that the validation pass reports for this error.
    #[inline]
    pub fn result_code(&self) -> ResultCode {
        match self.problem {
            RequirementProblem::MissingExtension { .. } => ResultCode::MissingExtension,
            RequirementProblem::InvalidCapability { .. } => ResultCode::InvalidCapability,
        }
    }
}

impl Error for RequirementError {}

impl Display for RequirementError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self.problem {
            RequirementProblem::MissingExtension {
                operand,
                capability,
                requires_one_of,
            } => write!(
                f,
                "{} operand of {}: operand {}({}) requires one of these extensions: {}",
                Ordinal(operand),
                Op::Capability,
                capability,
                u32::from(capability),
                List(requires_one_of),
            ),
            RequirementProblem::InvalidCapability {
                opcode,
                requires_one_of,
            } => write!(
                f,
                "Opcode {} requires one of these capabilities: {}",
                opcode,
                List(requires_one_of),
            ),
        }
    }
}

/// Formats a one-based position as an English ordinal: `1st`, `2nd`, `3rd`, `4th`, `11th`...
struct Ordinal(usize);

impl Display for Ordinal {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        let suffix = match (self.0 % 10, self.0 % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        };

        write!(f, "{}{}", self.0, suffix)
    }
}

/// Formats a list of names separated by `, `.
struct List<'a, T>(&'a [T]);

impl<T> Display for List<'_, T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        let mut items = self.0.iter();

        if let Some(first) = items.next() {
            write!(f, "{}", first)?;

            for item in items {
                write!(f, ", {}", item)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Diagnostic, List, Ordinal, RequirementError, RequirementProblem, ResultCode, Severity,
    };
    use crate::spirv::{Capability, Extension, Op};

    #[test]
    fn ordinals() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (102, "102nd"),
            (111, "111th"),
        ];

        for (n, expected) in cases {
            assert_eq!(Ordinal(n).to_string(), expected);
        }
    }

    #[test]
    fn lists() {
        assert_eq!(List::<Capability>(&[]).to_string(), "");
        assert_eq!(List(&[Capability::Groups]).to_string(), "Groups");
        assert_eq!(
            List(&[Capability::Kernel, Capability::ImageQuery]).to_string(),
            "Kernel, ImageQuery",
        );
    }

    #[test]
    fn missing_extension_message() {
        let err = RequirementError {
            instruction: 2,
            problem: RequirementProblem::MissingExtension {
                operand: 1,
                capability: Capability::DeviceGroup,
                requires_one_of: Capability::DeviceGroup.requires_one_of(),
            },
        };

        assert_eq!(err.result_code(), ResultCode::MissingExtension);
        assert_eq!(
            err.to_string(),
            "1st operand of Capability: operand DeviceGroup(4437) requires one of these \
            extensions: SPV_KHR_device_group",
        );
    }

    #[test]
    fn missing_extension_message_lists_every_alternative() {
        let err = RequirementError {
            instruction: 0,
            problem: RequirementProblem::MissingExtension {
                operand: 1,
                capability: Capability::ShaderViewportIndexLayerEXT,
                requires_one_of: &[
                    Extension::ExtShaderViewportIndexLayer,
                    Extension::NvViewportArray2,
                ],
            },
        };

        assert!(err.to_string().ends_with(
            "requires one of these extensions: SPV_EXT_shader_viewport_index_layer, \
            SPV_NV_viewport_array2"
        ));
    }

    #[test]
    fn invalid_capability_message() {
        let err = RequirementError {
            instruction: 7,
            problem: RequirementProblem::InvalidCapability {
                opcode: Op::GroupFMinNonUniformAMD,
                requires_one_of: Op::GroupFMinNonUniformAMD.requires_one_of(),
            },
        };

        assert_eq!(err.result_code(), ResultCode::InvalidCapability);
        assert_eq!(
            err.to_string(),
            "Opcode GroupFMinNonUniformAMD requires one of these capabilities: Groups",
        );

        let diagnostic = Diagnostic::from(&err);
        assert_eq!(diagnostic.severity, Severity::Hard);
        assert_eq!(diagnostic.instruction, 7);
        assert_eq!(diagnostic.message, err.to_string());
    }

    #[test]
    fn unrecognized_extension_message() {
        let diagnostic = Diagnostic::unrecognized_extension(3, "SPV_KHR_");

        assert_eq!(diagnostic.severity, Severity::Soft);
        assert_eq!(diagnostic.instruction, 3);
        assert_eq!(diagnostic.to_string(), "Found unrecognized extension SPV_KHR_");
    }

    #[test]
    fn result_code_names() {
        assert_eq!(ResultCode::Success.to_string(), "SUCCESS");
        assert_eq!(ResultCode::MissingExtension.to_string(), "MISSING_EXTENSION");
        assert_eq!(ResultCode::InvalidCapability.to_string(), "INVALID_CAPABILITY");
    }
}
