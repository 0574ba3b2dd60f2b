//! The injected seam between descriptors and whatever consumes them.

use thiserror::Error;

use crate::descriptor::GrammarDescriptor;
use crate::handle::LanguageHandle;

/// A runtime declined to build a handle from a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct RuntimeRejection {
	pub reason: String,
}

impl RuntimeRejection {
	pub fn new(reason: impl Into<String>) -> Self {
		Self { reason: reason.into() }
	}
}

/// Turns validated descriptors into language handles.
///
/// The concrete runtime is injected rather than reached for globally so that
/// loading can be driven against a fake in tests. Implementations signal
/// failure two ways, mirroring the runtimes found in the wild: returning
/// `Ok(None)` (the null-returning style) or `Err` (the raising style).
/// [`crate::load::load_language`] folds both into one error.
pub trait LanguageRuntime: Send + Sync {
	/// Builds a handle for the given descriptor, or explains why not.
	fn build(
		&self,
		descriptor: &'static GrammarDescriptor,
	) -> Result<Option<LanguageHandle>, RuntimeRejection>;
}

/// The in-process runtime: handle construction is descriptor validation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeRuntime;

impl LanguageRuntime for NativeRuntime {
	fn build(
		&self,
		descriptor: &'static GrammarDescriptor,
	) -> Result<Option<LanguageHandle>, RuntimeRejection> {
		LanguageHandle::new(descriptor)
			.map(Some)
			.map_err(|err| RuntimeRejection::new(err.to_string()))
	}
}
