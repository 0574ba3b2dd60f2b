//! Grammar descriptor contract and language handle construction.
//!
//! A generated grammar artifact and a host parsing runtime meet across a
//! deliberately small boundary: the artifact supplies an immutable
//! [`GrammarDescriptor`], and the runtime turns it into a [`LanguageHandle`]
//! that any number of parser instances may then share. This crate defines
//! both sides of that handshake and the validation between them, keeping the
//! runtime itself behind the [`LanguageRuntime`] capability so the contract
//! can be exercised without a real parser engine.
//!
//! # Architecture
//!
//! * [`artifact`]: raw generated tables and load-time integrity checks
//! * [`descriptor`]: the validated, opaque view of one grammar
//! * [`handle`]: descriptor validation and the shareable handle
//! * [`runtime`]: the injected host-runtime capability
//! * [`load`]: the full descriptor-to-handle pipeline

pub mod artifact;
pub mod descriptor;
pub mod handle;
pub mod load;
pub mod runtime;

pub use artifact::{GrammarArtifact, GrammarLoadError, Symbol, SymbolKind, TableShape};
pub use descriptor::GrammarDescriptor;
pub use handle::{InvalidDescriptorError, LanguageHandle, check_descriptor};
pub use load::{LanguageError, load_language};
pub use runtime::{LanguageRuntime, NativeRuntime, RuntimeRejection};

/// Contract version handles are currently built for.
pub const LANGUAGE_VERSION: u32 = 1;

/// Oldest artifact contract version still accepted when building a handle.
pub const MIN_COMPATIBLE_LANGUAGE_VERSION: u32 = 1;
