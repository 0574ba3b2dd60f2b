//! Language handles and the shape checks behind them.

use thiserror::Error;

use crate::descriptor::GrammarDescriptor;
use crate::{LANGUAGE_VERSION, MIN_COMPATIBLE_LANGUAGE_VERSION};

/// A descriptor is well-formed as data but unusable as a grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDescriptorError {
	/// The grammar name is empty.
	#[error("descriptor carries no grammar name")]
	UnnamedGrammar,

	/// The symbol inventory is empty; nothing could ever be parsed.
	#[error("grammar {grammar} declares no symbols")]
	NoSymbols {
		grammar: &'static str,
	},

	/// The parse table has no states, so the grammar accepts nothing.
	#[error("grammar {grammar} declares no parse states")]
	NoTransitions {
		grammar: &'static str,
	},

	/// The artifact was generated for a contract version this crate does
	/// not speak.
	#[error(
		"grammar {grammar} was generated for version {found}, supported range is {min}..={max}"
	)]
	IncompatibleVersion {
		grammar: &'static str,
		found: u32,
		min: u32,
		max: u32,
	},
}

/// Checks that a descriptor can back a usable language.
///
/// Degenerate descriptors are representable on purpose: wrapping an artifact
/// never fails, the same way holding a null parser pointer doesn't. This is
/// the gate where such descriptors are rejected.
///
/// # Errors
///
/// Returns the first defect found, in a fixed order: missing name, empty
/// symbol inventory, empty parse table, version mismatch.
pub fn check_descriptor(descriptor: &GrammarDescriptor) -> Result<(), InvalidDescriptorError> {
	if descriptor.name().is_empty() {
		return Err(InvalidDescriptorError::UnnamedGrammar);
	}
	let grammar = descriptor.name();
	if descriptor.symbol_count() == 0 {
		return Err(InvalidDescriptorError::NoSymbols { grammar });
	}
	if descriptor.state_count() == 0 {
		return Err(InvalidDescriptorError::NoTransitions { grammar });
	}
	let found = descriptor.abi_version();
	if !(MIN_COMPATIBLE_LANGUAGE_VERSION..=LANGUAGE_VERSION).contains(&found) {
		return Err(InvalidDescriptorError::IncompatibleVersion {
			grammar,
			found,
			min: MIN_COMPATIBLE_LANGUAGE_VERSION,
			max: LANGUAGE_VERSION,
		});
	}
	Ok(())
}

/// A validated, copyable reference to one loaded grammar.
///
/// Holding a handle proves the underlying descriptor passed
/// [`check_descriptor`]. Handles are two words wide; pass them by value.
/// Any number of parser instances may be built from one handle, each with
/// its own cursor state, because the descriptor behind it is immutable.
#[derive(Debug, Clone, Copy)]
pub struct LanguageHandle {
	descriptor: &'static GrammarDescriptor,
}

impl LanguageHandle {
	/// Validates the descriptor and wraps it.
	///
	/// # Errors
	///
	/// Returns [`InvalidDescriptorError`] when the descriptor cannot back a
	/// usable language; the descriptor itself is left untouched.
	pub fn new(descriptor: &'static GrammarDescriptor) -> Result<Self, InvalidDescriptorError> {
		check_descriptor(descriptor)?;
		Ok(Self { descriptor })
	}

	/// The descriptor this handle was built from.
	pub fn descriptor(&self) -> &'static GrammarDescriptor {
		self.descriptor
	}

	/// Name of the grammar behind this handle.
	pub fn grammar_name(&self) -> &'static str {
		self.descriptor.name()
	}

	/// Fingerprint of the grammar behind this handle.
	pub fn fingerprint(&self) -> u64 {
		self.descriptor.fingerprint()
	}
}
