//! End-to-end handshake: descriptor in, runtime consulted, handle out.

use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror as _;
use tracing as _;

use pretty_assertions::assert_eq;

use apparmor_language::{
	GrammarArtifact, GrammarDescriptor, InvalidDescriptorError, LANGUAGE_VERSION, LanguageError,
	LanguageHandle, LanguageRuntime, RuntimeRejection, Symbol, SymbolKind, TableShape,
	load_language,
};

static SYMBOLS: &[Symbol] = &[
	Symbol { name: "source_file", kind: SymbolKind::Regular },
	Symbol { name: "profile", kind: SymbolKind::Regular },
	Symbol { name: "comment", kind: SymbolKind::Regular },
	Symbol { name: "{", kind: SymbolKind::Anonymous },
];

static FIELDS: &[&str] = &["name", "path"];

fn artifact() -> GrammarArtifact {
	GrammarArtifact {
		name: "toy",
		abi_version: LANGUAGE_VERSION,
		symbols: SYMBOLS,
		fields: FIELDS,
		shape: TableShape {
			symbol_count: 4,
			field_count: 2,
			token_count: 1,
			external_token_count: 0,
			state_count: 9,
			large_state_count: 0,
			production_count: 6,
		},
		checksum: 0,
	}
}

fn leaked(artifact: GrammarArtifact) -> &'static GrammarDescriptor {
	Box::leak(Box::new(GrammarDescriptor::from_artifact(artifact)))
}

enum Behavior {
	Succeed,
	Vanish,
	Raise,
}

/// Scripted runtime that also counts how often it is consulted.
struct FakeRuntime {
	behavior: Behavior,
	calls: AtomicUsize,
}

impl FakeRuntime {
	fn new(behavior: Behavior) -> Self {
		Self { behavior, calls: AtomicUsize::new(0) }
	}

	fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

impl LanguageRuntime for FakeRuntime {
	fn build(
		&self,
		descriptor: &'static GrammarDescriptor,
	) -> Result<Option<LanguageHandle>, RuntimeRejection> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		match self.behavior {
			Behavior::Succeed => LanguageHandle::new(descriptor)
				.map(Some)
				.map_err(|err| RuntimeRejection::new(err.to_string())),
			Behavior::Vanish => Ok(None),
			Behavior::Raise => Err(RuntimeRejection::new("host refused the tables")),
		}
	}
}

#[test]
fn test_handshake_yields_handle() {
	let runtime = FakeRuntime::new(Behavior::Succeed);
	let descriptor = leaked(artifact());

	let handle = load_language(&runtime, descriptor).unwrap();

	assert_eq!(runtime.calls(), 1);
	assert_eq!(handle.grammar_name(), "toy");
	assert!(std::ptr::eq(handle.descriptor(), descriptor));
}

#[test]
fn test_validation_runs_before_the_runtime() {
	let runtime = FakeRuntime::new(Behavior::Succeed);
	let mut raw = artifact();
	raw.symbols = &[];

	let err = load_language(&runtime, leaked(raw)).unwrap_err();

	// A malformed descriptor never reaches the runtime.
	assert_eq!(runtime.calls(), 0);
	assert_eq!(
		err,
		LanguageError::Descriptor(InvalidDescriptorError::NoSymbols { grammar: "toy" })
	);
}

#[test]
fn test_vanishing_runtime_surfaces_as_missing_handle() {
	let runtime = FakeRuntime::new(Behavior::Vanish);

	let err = load_language(&runtime, leaked(artifact())).unwrap_err();

	assert_eq!(runtime.calls(), 1);
	assert_eq!(err, LanguageError::MissingHandle { grammar: "toy" });
}

#[test]
fn test_raising_runtime_keeps_its_reason() {
	let runtime = FakeRuntime::new(Behavior::Raise);

	let err = load_language(&runtime, leaked(artifact())).unwrap_err();

	assert_eq!(
		err,
		LanguageError::Rejected {
			grammar: "toy",
			reason: "host refused the tables".into(),
		}
	);
}

#[test]
fn test_handle_is_shareable_across_threads() {
	let handle = load_language(&FakeRuntime::new(Behavior::Succeed), leaked(artifact())).unwrap();

	std::thread::scope(|scope| {
		for _ in 0..4 {
			scope.spawn(move || {
				assert_eq!(handle.grammar_name(), "toy");
				assert_eq!(handle.descriptor().symbol_name(1), Some("profile"));
			});
		}
	});
}

/// Minimal stand-in for a parser: owns its own cursor, borrows the grammar.
struct Parser {
	language: LanguageHandle,
	cursor: u32,
}

impl Parser {
	fn new(language: LanguageHandle) -> Self {
		Self { language, cursor: 0 }
	}

	fn step(&mut self) -> Option<&'static str> {
		let name = self.language.descriptor().symbol_name(self.cursor);
		if name.is_some() {
			self.cursor += 1;
		}
		name
	}
}

#[test]
fn test_one_handle_feeds_many_parsers() {
	let handle = load_language(&FakeRuntime::new(Behavior::Succeed), leaked(artifact())).unwrap();

	let mut first = Parser::new(handle);
	let mut second = Parser::new(handle);

	assert_eq!(first.step(), Some("source_file"));
	assert_eq!(first.step(), Some("profile"));

	// The second parser starts from its own cursor, unaffected by the first.
	assert_eq!(second.step(), Some("source_file"));
	assert_eq!(first.step(), Some("comment"));
	assert_eq!(second.step(), Some("profile"));

	assert_eq!(first.cursor, 3);
	assert_eq!(second.cursor, 2);
}
