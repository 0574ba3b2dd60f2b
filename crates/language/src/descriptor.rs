//! The validated, opaque view of one grammar.

use std::fmt;

use crate::artifact::{GrammarArtifact, Symbol, SymbolKind};

/// Immutable descriptor of one grammar's compiled tables.
///
/// Descriptors are cheap to copy and safe to share: everything behind the
/// accessors is `static` data fixed at link time, so concurrent readers need
/// no synchronization. A descriptor never changes shape once constructed;
/// parser instances built from it keep their own mutable state elsewhere.
///
/// Construction via [`GrammarDescriptor::from_artifact`] is an unchecked
/// wrap, like holding the raw pointer a generated parser returns. Integrity
/// of the backing data is a provider concern ([`GrammarArtifact::verify`])
/// and shape is re-validated when a handle is built
/// ([`crate::handle::check_descriptor`]).
#[derive(Clone, Copy)]
pub struct GrammarDescriptor {
	artifact: GrammarArtifact,
	fingerprint: u64,
}

impl GrammarDescriptor {
	/// Wraps a raw artifact without validating it.
	pub fn from_artifact(artifact: GrammarArtifact) -> Self {
		Self {
			fingerprint: artifact.fingerprint(),
			artifact,
		}
	}

	/// Grammar name, e.g. `"apparmor"`.
	pub fn name(&self) -> &'static str {
		self.artifact.name
	}

	/// Contract version the backing artifact was generated for.
	pub fn abi_version(&self) -> u32 {
		self.artifact.abi_version
	}

	/// Number of symbols actually carried by the inventory.
	pub fn symbol_count(&self) -> u32 {
		self.artifact.symbols.len() as u32
	}

	/// Name of the symbol with the given id, if it exists.
	pub fn symbol_name(&self, id: u32) -> Option<&'static str> {
		self.artifact.symbols.get(id as usize).map(|symbol| symbol.name)
	}

	/// Kind of the symbol with the given id, if it exists.
	pub fn symbol_kind(&self, id: u32) -> Option<SymbolKind> {
		self.artifact.symbols.get(id as usize).map(|symbol| symbol.kind)
	}

	/// Iterates the symbol inventory in id order.
	pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
		self.artifact.symbols.iter().copied()
	}

	/// Number of field names actually carried.
	pub fn field_count(&self) -> u32 {
		self.artifact.fields.len() as u32
	}

	/// Name of the field with the given id, if it exists.
	pub fn field_name(&self, id: u32) -> Option<&'static str> {
		self.artifact.fields.get(id as usize).copied()
	}

	/// All field names in id order.
	pub fn field_names(&self) -> &'static [&'static str] {
		self.artifact.fields
	}

	/// Declared number of parse states.
	pub fn state_count(&self) -> u32 {
		self.artifact.shape.state_count
	}

	/// Declared number of terminal tokens.
	pub fn token_count(&self) -> u32 {
		self.artifact.shape.token_count
	}

	/// Declared number of externally scanned tokens.
	pub fn external_token_count(&self) -> u32 {
		self.artifact.shape.external_token_count
	}

	/// Fingerprint of the described grammar, computed once at construction.
	pub fn fingerprint(&self) -> u64 {
		self.fingerprint
	}

	/// Structural equality: do the two descriptors describe the identical
	/// grammar (same name, version, symbol set, fields, and geometry)?
	///
	/// Storage identity is irrelevant; two descriptors over distinct copies
	/// of the same tables compare equal here.
	pub fn same_shape(&self, other: &GrammarDescriptor) -> bool {
		self.artifact.name == other.artifact.name
			&& self.artifact.abi_version == other.artifact.abi_version
			&& self.artifact.symbols == other.artifact.symbols
			&& self.artifact.fields == other.artifact.fields
			&& self.artifact.shape == other.artifact.shape
	}
}

impl fmt::Debug for GrammarDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		// The full inventory is hundreds of entries; keep Debug output flat.
		f.debug_struct("GrammarDescriptor")
			.field("name", &self.artifact.name)
			.field("abi_version", &self.artifact.abi_version)
			.field("symbols", &self.artifact.symbols.len())
			.field("fields", &self.artifact.fields.len())
			.field("states", &self.artifact.shape.state_count)
			.field("fingerprint", &format_args!("{:#018x}", self.fingerprint))
			.finish()
	}
}
