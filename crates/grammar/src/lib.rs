//! AppArmor profile grammar, packaged for the language loading contract.
//!
//! The compiled tables live in `tables.rs` (regenerate with
//! `scripts/gen_tables.py`). This crate wraps them in the handshake
//! `apparmor-language` defines: [`grammar`] verifies the tables once and
//! hands out the canonical [`GrammarDescriptor`], and [`language`] builds a
//! shareable [`LanguageHandle`] from it through the in-process runtime.
//!
//! Verification happens exactly once per process. Whatever the first call
//! observes, success or a defect in the tables, every later call observes
//! the same outcome; there is no retry path.

use std::sync::OnceLock;

use apparmor_language::{
	GrammarDescriptor, GrammarLoadError, LanguageError, LanguageHandle, LanguageRuntime,
	NativeRuntime, load_language,
};

mod tables;

use tables::ARTIFACT;

/// Name of the grammar carried by this crate.
pub const GRAMMAR_NAME: &str = "apparmor";

/// Syntax highlighting queries for AppArmor profiles.
pub const HIGHLIGHTS_QUERY: &str = include_str!("../queries/highlights.scm");

static DESCRIPTOR: OnceLock<Result<GrammarDescriptor, GrammarLoadError>> = OnceLock::new();

/// Returns the canonical descriptor for the AppArmor grammar.
///
/// The first call verifies the compiled tables and caches the outcome for
/// the life of the process. Repeated calls return the identical descriptor
/// reference, so callers may compare descriptors by address.
///
/// # Errors
///
/// Returns [`GrammarLoadError`] if the tables are corrupt. The error is as
/// permanent as a success would be; rebuilding the crate is the only fix.
pub fn grammar() -> Result<&'static GrammarDescriptor, GrammarLoadError> {
	DESCRIPTOR
		.get_or_init(|| match ARTIFACT.verify() {
			Ok(()) => {
				let descriptor = GrammarDescriptor::from_artifact(ARTIFACT);
				tracing::debug!(
					grammar = %descriptor.name(),
					symbols = descriptor.symbol_count(),
					states = descriptor.state_count(),
					fingerprint = %format_args!("{:#018x}", descriptor.fingerprint()),
					"grammar tables verified"
				);
				Ok(descriptor)
			}
			Err(err) => {
				tracing::error!(grammar = %ARTIFACT.name, %err, "grammar tables rejected");
				Err(err)
			}
		})
		.as_ref()
		.map_err(Clone::clone)
}

/// Builds an AppArmor language handle through the given runtime.
///
/// # Errors
///
/// Returns [`LanguageError`] if the tables are corrupt or the runtime
/// declines the descriptor.
pub fn language_with<R>(runtime: &R) -> Result<LanguageHandle, LanguageError>
where
	R: LanguageRuntime + ?Sized,
{
	load_language(runtime, grammar()?)
}

/// Builds an AppArmor language handle through the in-process runtime.
///
/// # Errors
///
/// Returns [`LanguageError`] if the tables are corrupt or fail validation.
pub fn language() -> Result<LanguageHandle, LanguageError> {
	language_with(&NativeRuntime)
}
