//! Extension and capability requirement checking for SPIR-V modules.
//!
//! A SPIR-V module opts into optional functionality in two layers. Extensions, declared with
//! `OpExtension`, add new capabilities to the language. Capabilities, declared with
//! `OpCapability`, unlock instructions. This crate knows which extensions enable which
//! capabilities and which capabilities permit which instructions, and checks that a module
//! declares everything it uses.
//!
//! - The [`spirv`] module holds the vocabulary: [`Extension`](spirv::Extension),
//!   [`Capability`](spirv::Capability) and [`Op`](spirv::Op), with their requirement tables.
//! - The [`validator`] module holds the pass that walks a decoded module and reports the first
//!   requirement it violates.
//!
//! Decoding modules from their binary or textual form is not part of this crate; the validator
//! takes a stream of already decoded [`Instruction`](spirv::Instruction)s.
//!
//! # Logging
//!
//! The validator emits [`tracing`] events: a `warn` event for every unrecognized extension and a
//! `debug` event when a pass ends. No subscriber is installed by this crate.
//!
//! # Cargo features
//!
//! | Feature | Description                                                         |
//! |---------|---------------------------------------------------------------------|
//! | `serde` | Enables (de)serialization of the vocabulary and of the diagnostics. |

pub use self::validator::{validate, ValidationReport, ValidatorOptions};

mod macros;
pub mod spirv;
pub mod validator;

/// A helper type for non-exhaustive structs.
///
/// This type cannot be constructed outside this crate. Structures with a field of this type can
/// only be constructed by calling a constructor function or `Default::default()`. The effect is
/// similar to the standard Rust `#[non_exhaustive]` attribute, except that it does not prevent
/// update syntax from being used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)] // add traits as needed
pub struct NonExhaustive(pub(crate) ());
