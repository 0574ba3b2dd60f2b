//! Raw generated grammar tables and load-time integrity checks.
//!
//! A [`GrammarArtifact`] is the data block a grammar compiler emits for one
//! grammar: its symbol and field inventory, the declared geometry of its
//! parse tables, and a stored checksum binding the two together. The fields
//! are public on purpose. This is the unguarded side of the boundary, the
//! moral equivalent of the raw pointer a generated parser hands out, and it
//! only becomes trustworthy once [`GrammarArtifact::verify`] has accepted it.

use thiserror::Error;

/// Errors raised when the compiled grammar data backing a descriptor is
/// absent or corrupt at load time. Not recoverable: the data is static, so
/// retrying without regenerating the artifact cannot succeed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarLoadError {
	#[error("grammar {grammar} carries no compiled tables")]
	MissingTables { grammar: String },

	#[error("grammar {grammar} {table} table declares {declared} entries but carries {found}")]
	TableTruncated {
		grammar: String,
		table: &'static str,
		declared: u32,
		found: u32,
	},

	#[error("grammar {grammar} checksum mismatch: stored {stored:#018x}, computed {computed:#018x}")]
	ChecksumMismatch {
		grammar: String,
		stored: u64,
		computed: u64,
	},
}

/// How a symbol participates in the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
	/// A named rule visible in parse trees.
	Regular,
	/// A literal token (keywords, punctuation).
	Anonymous,
	/// A generated helper (repeat expansions and the like).
	Auxiliary,
}

/// One entry in a grammar's symbol inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
	pub name: &'static str,
	pub kind: SymbolKind,
}

/// Declared geometry of a grammar's compiled tables.
///
/// The counts describing carried tables (`symbol_count`, `field_count`) are
/// cross-checked against the tables themselves during [`GrammarArtifact::verify`];
/// the rest describe the parse automaton the host runtime consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableShape {
	pub symbol_count: u32,
	pub field_count: u32,
	pub token_count: u32,
	pub external_token_count: u32,
	pub state_count: u32,
	pub large_state_count: u32,
	pub production_count: u32,
}

/// The raw, build-time data block emitted for one grammar.
///
/// Process-wide and immutable: artifacts are `static` data, never mutated
/// after link time, and safe to read from any thread.
#[derive(Debug, Clone, Copy)]
pub struct GrammarArtifact {
	/// Grammar name (e.g. `"apparmor"`).
	pub name: &'static str,
	/// Contract version the artifact was generated for.
	pub abi_version: u32,
	/// Symbol inventory, regular rules first, in generation order.
	pub symbols: &'static [Symbol],
	/// Field names attachable to parse-tree children.
	pub fields: &'static [&'static str],
	/// Declared table geometry.
	pub shape: TableShape,
	/// FNV-1a-64 over [`canonical bytes`](Self::fingerprint), computed by the
	/// table generator when the artifact is emitted.
	pub checksum: u64,
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a(hash: u64, bytes: &[u8]) -> u64 {
	bytes
		.iter()
		.fold(hash, |hash, byte| (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME))
}

impl GrammarArtifact {
	/// Recomputes the artifact's fingerprint from its canonical byte form.
	///
	/// The canonical form covers everything except the stored checksum: name,
	/// version, each symbol name and kind, each field name, and the declared
	/// geometry. Two artifacts describing the same grammar fingerprint
	/// identically regardless of where their tables are stored.
	pub fn fingerprint(&self) -> u64 {
		let mut hash = fnv1a(FNV_OFFSET, self.name.as_bytes());
		hash = fnv1a(hash, &[0x00]);
		hash = fnv1a(hash, &self.abi_version.to_le_bytes());
		for symbol in self.symbols {
			hash = fnv1a(hash, symbol.name.as_bytes());
			hash = fnv1a(hash, &[0x00, symbol.kind as u8]);
		}
		hash = fnv1a(hash, &[0xff]);
		for field in self.fields {
			hash = fnv1a(hash, field.as_bytes());
			hash = fnv1a(hash, &[0x00]);
		}
		hash = fnv1a(hash, &[0xff]);
		for count in [
			self.shape.symbol_count,
			self.shape.field_count,
			self.shape.token_count,
			self.shape.external_token_count,
			self.shape.state_count,
			self.shape.large_state_count,
			self.shape.production_count,
		] {
			hash = fnv1a(hash, &count.to_le_bytes());
		}
		hash
	}

	/// Checks the artifact's integrity: declared counts against carried
	/// tables, and the stored checksum against a freshly computed
	/// fingerprint.
	///
	/// # Errors
	///
	/// * [`GrammarLoadError::MissingTables`] if the symbol inventory is empty.
	/// * [`GrammarLoadError::TableTruncated`] if a declared count disagrees
	///   with the table actually carried.
	/// * [`GrammarLoadError::ChecksumMismatch`] if the stored checksum does
	///   not match the recomputed fingerprint.
	pub fn verify(&self) -> Result<(), GrammarLoadError> {
		if self.symbols.is_empty() {
			return Err(GrammarLoadError::MissingTables {
				grammar: self.name.to_owned(),
			});
		}

		self.check_count("symbol", self.shape.symbol_count, self.symbols.len() as u32)?;
		self.check_count("field", self.shape.field_count, self.fields.len() as u32)?;
		if self.shape.token_count > self.shape.symbol_count {
			// More tokens than symbols means the inventory lost entries.
			return Err(GrammarLoadError::TableTruncated {
				grammar: self.name.to_owned(),
				table: "token",
				declared: self.shape.token_count,
				found: self.shape.symbol_count,
			});
		}

		let computed = self.fingerprint();
		if computed != self.checksum {
			return Err(GrammarLoadError::ChecksumMismatch {
				grammar: self.name.to_owned(),
				stored: self.checksum,
				computed,
			});
		}

		Ok(())
	}

	fn check_count(&self, table: &'static str, declared: u32, found: u32) -> Result<(), GrammarLoadError> {
		if declared == found {
			Ok(())
		} else {
			Err(GrammarLoadError::TableTruncated {
				grammar: self.name.to_owned(),
				table,
				declared,
				found,
			})
		}
	}
}
