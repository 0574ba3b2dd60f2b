//! One entry point from descriptor to handle, with every failure named.

use thiserror::Error;

use crate::artifact::GrammarLoadError;
use crate::descriptor::GrammarDescriptor;
use crate::handle::{InvalidDescriptorError, LanguageHandle, check_descriptor};
use crate::runtime::LanguageRuntime;

/// Everything that can go wrong between raw tables and a usable handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
	/// The backing artifact failed integrity verification.
	#[error(transparent)]
	Load(#[from] GrammarLoadError),

	/// The descriptor cannot back a usable language.
	#[error(transparent)]
	Descriptor(#[from] InvalidDescriptorError),

	/// The runtime refused the descriptor.
	#[error("runtime rejected grammar {grammar}: {reason}")]
	Rejected {
		grammar: &'static str,
		reason: String,
	},

	/// The runtime reported success but produced no handle.
	#[error("runtime produced no handle for grammar {grammar}")]
	MissingHandle {
		grammar: &'static str,
	},
}

/// Builds a language handle through the given runtime.
///
/// The descriptor is checked before the runtime ever sees it; a runtime is
/// never asked to build from a descriptor that fails [`check_descriptor`].
/// Runtimes that decline by returning `Ok(None)` and runtimes that decline
/// by returning `Err` both surface here as a [`LanguageError`], so callers
/// have a single failure path regardless of runtime style.
///
/// Loading is deterministic: same runtime, same descriptor, same outcome.
/// There is no retry and no fallback.
///
/// # Errors
///
/// Returns [`LanguageError::Descriptor`] for malformed descriptors,
/// [`LanguageError::Rejected`] or [`LanguageError::MissingHandle`] when the
/// runtime declines.
pub fn load_language<R>(
	runtime: &R,
	grammar: &'static GrammarDescriptor,
) -> Result<LanguageHandle, LanguageError>
where
	R: LanguageRuntime + ?Sized,
{
	if let Err(err) = check_descriptor(grammar) {
		tracing::warn!(grammar = %grammar.name(), %err, "descriptor failed validation");
		return Err(err.into());
	}

	match runtime.build(grammar) {
		Ok(Some(handle)) => {
			tracing::debug!(
				grammar = %handle.grammar_name(),
				symbols = grammar.symbol_count(),
				states = grammar.state_count(),
				fingerprint = %format_args!("{:#018x}", handle.fingerprint()),
				"language loaded"
			);
			Ok(handle)
		}
		Ok(None) => {
			tracing::warn!(grammar = %grammar.name(), "runtime produced no handle");
			Err(LanguageError::MissingHandle { grammar: grammar.name() })
		}
		Err(rejection) => {
			tracing::warn!(grammar = %grammar.name(), reason = %rejection.reason, "runtime rejected grammar");
			Err(LanguageError::Rejected {
				grammar: grammar.name(),
				reason: rejection.reason,
			})
		}
	}
}
