//! Checking the extension and capability requirements of a SPIR-V module.
//!
//! A module declares the extensions it uses with `OpExtension` and the capabilities it uses with
//! `OpCapability`. The validator walks the instructions of the module once, in order, and checks
//! that:
//!
//! - every declared capability that belongs to an extension has one of its enabling extensions
//!   declared as well, and
//! - every instruction that is gated behind capabilities has one of them declared.
//!
//! The first violation stops the pass; it is reported as a [`Severity::Hard`] diagnostic and
//! decides the [`ResultCode`]. Extension names that are not part of the vocabulary are only
//! reported as [`Severity::Soft`] diagnostics, since a module may legitimately use an extension
//! that is newer than this crate.
//!
//! # Declaration section
//!
//! SPIR-V requires all `OpCapability` instructions to come before all `OpExtension`
//! instructions. The capabilities declared in the leading run of declarations are therefore only
//! checked against the extensions once that run ends, in the order they were declared.
//! Capabilities declared later in the module are checked right away, against the extensions
//! declared before them.
//!
//! # Examples
//!
//! ```
//! use vulkano_spirv_reqs::{
//!     spirv::{Capability, Instruction, Op},
//!     validator::{validate, ResultCode, ValidatorOptions},
//! };
//!
//! let module = [
//!     Instruction::from(Capability::Shader),
//!     Instruction::from(Capability::DeviceGroup),
//!     Instruction::Extension {
//!         name: "SPV_KHR_device_group".to_owned(),
//!     },
//!     Instruction::from(Op::MemoryModel),
//! ];
//!
//! let report = validate(&module, &ValidatorOptions::default());
//! assert_eq!(report.result(), ResultCode::Success);
//! ```

pub use self::diagnostic::{Diagnostic, RequirementError, RequirementProblem, ResultCode, Severity};
use crate::spirv::{Capability, Extension, Instruction, Op};
use foldhash::HashSet;
use smallvec::{smallvec, SmallVec};

mod diagnostic;

/// Parameters of a validation pass.
#[derive(Clone, Debug)]
pub struct ValidatorOptions {
    /// Whether to record a soft diagnostic for every `OpExtension` whose name is not part of the
    /// vocabulary. This never changes the result code.
    ///
    /// The default value is `true`.
    pub report_unrecognized_extensions: bool,

    pub _ne: crate::NonExhaustive,
}

impl Default for ValidatorOptions {
    #[inline]
    fn default() -> Self {
        Self {
            report_unrecognized_extensions: true,
            _ne: crate::NonExhaustive(()),
        }
    }
}

/// Validates the extension and capability requirements of a module, given as its instructions in
/// module order.
///
/// The pass holds no state between calls; validating the same instructions again gives the same
/// report.
pub fn validate<'a>(
    instructions: impl IntoIterator<Item = &'a Instruction>,
    options: &ValidatorOptions,
) -> ValidationReport {
    let mut validator = RequirementValidator::new(options);
    let result = validator.scan(instructions);

    validator.finish(result)
}

/// The result of a validation pass, with the diagnostics it produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    diagnostics: Vec<Diagnostic>,
    error: Option<Box<RequirementError>>,
}

impl ValidationReport {
    /// Returns the result code of the pass.
    #[inline]
    pub fn result(&self) -> ResultCode {
        self.error
            .as_ref()
            .map_or(ResultCode::Success, |err| err.result_code())
    }

    /// Returns whether the module met all requirements.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Returns all diagnostics, in the order they were produced. If the pass failed, the hard
    /// diagnostic is the last one.
    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns the requirement that was violated, if any.
    #[inline]
    pub fn error(&self) -> Option<&RequirementError> {
        self.error.as_deref()
    }

    /// Returns the messages of all diagnostics, one per line.
    pub fn diagnostic_string(&self) -> String {
        self.diagnostics
            .iter()
            .map(|diagnostic| diagnostic.message.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Converts the report into a `Result`.
    ///
    /// On success, the soft diagnostics are returned. On failure, only the violated requirement
    /// is returned.
    pub fn into_result(self) -> Result<Vec<Diagnostic>, Box<RequirementError>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.diagnostics),
        }
    }
}

/// The extensions and capabilities declared so far in the module being validated.
#[derive(Debug, Default)]
struct ModuleState {
    declared_extensions: HashSet<Extension>,
    declared_capabilities: HashSet<Capability>,
}

impl ModuleState {
    fn declare_extension(&mut self, extension: Extension) {
        if self.declared_extensions.insert(extension) {
            for &capability in extension.implied_capabilities() {
                self.declare_capability(capability);
            }
        }
    }

    /// Declares `capability` along with everything it implicitly declares.
    fn declare_capability(&mut self, capability: Capability) {
        let mut stack: SmallVec<[Capability; 4]> = smallvec![capability];

        while let Some(capability) = stack.pop() {
            if self.declared_capabilities.insert(capability) {
                stack.extend_from_slice(capability.implicitly_declares());
            }
        }
    }

    fn has_any_extension(&self, extensions: &[Extension]) -> bool {
        extensions
            .iter()
            .any(|extension| self.declared_extensions.contains(extension))
    }

    fn has_any_capability(&self, capabilities: &[Capability]) -> bool {
        capabilities
            .iter()
            .any(|capability| self.declared_capabilities.contains(capability))
    }
}

struct RequirementValidator<'a> {
    options: &'a ValidatorOptions,
    state: ModuleState,
    soft_diagnostics: Vec<Diagnostic>,

    // Capabilities declared in the declaration section, with their position, waiting for the
    // section to end before their extensions are checked.
    in_declaration_section: bool,
    pending_capabilities: SmallVec<[(usize, Capability); 8]>,
}

impl<'a> RequirementValidator<'a> {
    fn new(options: &'a ValidatorOptions) -> Self {
        RequirementValidator {
            options,
            state: ModuleState::default(),
            soft_diagnostics: Vec::new(),
            in_declaration_section: true,
            pending_capabilities: SmallVec::new(),
        }
    }

    fn scan<'i>(
        &mut self,
        instructions: impl IntoIterator<Item = &'i Instruction>,
    ) -> Result<(), Box<RequirementError>> {
        for (index, instruction) in instructions.into_iter().enumerate() {
            if self.in_declaration_section && !instruction.is_declaration() {
                self.end_declaration_section()?;
            }

            match instruction {
                Instruction::Extension { name } => self.declare_extension(index, name),
                &Instruction::Capability { capability } => {
                    self.declare_capability(index, capability)?
                }
                Instruction::Other { .. } => (),
            }

            self.validate_opcode(index, instruction.opcode())?;
        }

        if self.in_declaration_section {
            self.end_declaration_section()?;
        }

        Ok(())
    }

    fn declare_extension(&mut self, index: usize, name: &str) {
        match Extension::from_name(name) {
            Some(extension) => self.state.declare_extension(extension),
            None => {
                if self.options.report_unrecognized_extensions {
                    tracing::warn!(instruction = index, extension = name, "unrecognized extension");
                    self.soft_diagnostics
                        .push(Diagnostic::unrecognized_extension(index, name));
                }
            }
        }
    }

    fn declare_capability(
        &mut self,
        index: usize,
        capability: Capability,
    ) -> Result<(), Box<RequirementError>> {
        self.state.declare_capability(capability);

        if self.in_declaration_section {
            self.pending_capabilities.push((index, capability));
            Ok(())
        } else {
            self.validate_capability(index, capability)
        }
    }

    fn end_declaration_section(&mut self) -> Result<(), Box<RequirementError>> {
        self.in_declaration_section = false;

        for (index, capability) in std::mem::take(&mut self.pending_capabilities) {
            self.validate_capability(index, capability)?;
        }

        Ok(())
    }

    fn validate_capability(
        &self,
        index: usize,
        capability: Capability,
    ) -> Result<(), Box<RequirementError>> {
        let requires_one_of = capability.requires_one_of();

        if !requires_one_of.is_empty() && !self.state.has_any_extension(requires_one_of) {
            return Err(Box::new(RequirementError {
                instruction: index,
                problem: RequirementProblem::MissingExtension {
                    operand: 1,
                    capability,
                    requires_one_of,
                },
            }));
        }

        Ok(())
    }

    fn validate_opcode(&self, index: usize, opcode: Op) -> Result<(), Box<RequirementError>> {
        let requires_one_of = opcode.requires_one_of();

        if !requires_one_of.is_empty() && !self.state.has_any_capability(requires_one_of) {
            return Err(Box::new(RequirementError {
                instruction: index,
                problem: RequirementProblem::InvalidCapability {
                    opcode,
                    requires_one_of,
                },
            }));
        }

        Ok(())
    }

    fn finish(self, result: Result<(), Box<RequirementError>>) -> ValidationReport {
        let mut diagnostics = self.soft_diagnostics;

        let error = match result {
            Ok(()) => {
                tracing::debug!(
                    soft_diagnostics = diagnostics.len(),
                    "module meets its extension and capability requirements"
                );
                None
            }
            Err(err) => {
                tracing::debug!(
                    instruction = err.instruction,
                    result = %err.result_code(),
                    "{}",
                    err
                );
                diagnostics.push(Diagnostic::from(&*err));
                Some(err)
            }
        };

        ValidationReport { diagnostics, error }
    }
}
