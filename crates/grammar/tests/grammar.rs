//! The packaged AppArmor grammar, exercised through the public contract.

use std::collections::HashSet;
use std::sync::Mutex;

use tracing as _;

use pretty_assertions::assert_eq;

use apparmor_grammar::{GRAMMAR_NAME, HIGHLIGHTS_QUERY, grammar, language, language_with};
use apparmor_language::{
	GrammarDescriptor, LanguageHandle, LanguageRuntime, RuntimeRejection, SymbolKind,
};

#[test]
fn test_descriptor_is_the_same_every_time() {
	let first = grammar().expect("Error loading AppArmor grammar");
	let second = grammar().expect("Error loading AppArmor grammar");

	assert!(std::ptr::eq(first, second));
	assert_eq!(first.fingerprint(), second.fingerprint());
	assert!(first.same_shape(second));
}

#[test]
fn test_language_builds_end_to_end() {
	let handle = language().expect("Error loading AppArmor grammar");

	assert_eq!(handle.grammar_name(), GRAMMAR_NAME);
	let descriptor = grammar().expect("Error loading AppArmor grammar");
	assert!(std::ptr::eq(handle.descriptor(), descriptor));
}

#[test]
fn test_inventory_names_real_rules() {
	let descriptor = grammar().expect("Error loading AppArmor grammar");

	assert_eq!(descriptor.symbol_name(0), Some("source_file"));

	let names: Vec<&str> = descriptor.symbols().map(|symbol| symbol.name).collect();
	for rule in [
		"profile",
		"profile_header",
		"capability_rule_line",
		"network_rule_line",
		"dbus_rule_line",
		"pivot_root_rule_line",
		"rlimit_rule_line",
		"conditional_rule",
	] {
		assert!(names.contains(&rule), "missing rule {rule}");
	}

	let brace = names.iter().position(|name| *name == "{").unwrap() as u32;
	assert_eq!(descriptor.symbol_kind(brace), Some(SymbolKind::Anonymous));

	let repeat = names
		.iter()
		.position(|name| *name == "flags_repeat1")
		.unwrap() as u32;
	assert_eq!(descriptor.symbol_kind(repeat), Some(SymbolKind::Auxiliary));
}

#[test]
fn test_fields_cover_rule_anatomy() {
	let descriptor = grammar().expect("Error loading AppArmor grammar");

	assert_eq!(descriptor.field_name(0), Some("path"));
	for field in ["target", "perms", "condition", "oldroot"] {
		assert!(
			descriptor.field_names().contains(&field),
			"missing field {field}"
		);
	}
	assert_eq!(descriptor.field_count(), descriptor.field_names().len() as u32);
}

#[test]
fn test_repeated_loads_share_one_descriptor() {
	let first = language().expect("Error loading AppArmor grammar");
	let second = language().expect("Error loading AppArmor grammar");

	assert!(std::ptr::eq(first.descriptor(), second.descriptor()));
	assert_eq!(first.fingerprint(), second.fingerprint());
}

#[test]
fn test_handle_is_shared_across_threads() {
	let handle = language().expect("Error loading AppArmor grammar");

	std::thread::scope(|scope| {
		for _ in 0..4 {
			scope.spawn(move || {
				assert_eq!(handle.grammar_name(), GRAMMAR_NAME);
				assert_eq!(handle.descriptor().symbol_name(0), Some("source_file"));
			});
		}
	});
}

/// Runtime that records what it was handed before delegating.
struct RecordingRuntime {
	seen: Mutex<Option<(&'static str, u32)>>,
}

impl LanguageRuntime for RecordingRuntime {
	fn build(
		&self,
		descriptor: &'static GrammarDescriptor,
	) -> Result<Option<LanguageHandle>, RuntimeRejection> {
		*self.seen.lock().unwrap() = Some((descriptor.name(), descriptor.symbol_count()));
		LanguageHandle::new(descriptor)
			.map(Some)
			.map_err(|err| RuntimeRejection::new(err.to_string()))
	}
}

#[test]
fn test_injected_runtime_sees_the_real_descriptor() {
	let runtime = RecordingRuntime { seen: Mutex::new(None) };

	let handle = language_with(&runtime).expect("Error loading AppArmor grammar");

	let descriptor = grammar().expect("Error loading AppArmor grammar");
	assert_eq!(
		*runtime.seen.lock().unwrap(),
		Some((GRAMMAR_NAME, descriptor.symbol_count()))
	);
	assert_eq!(handle.grammar_name(), GRAMMAR_NAME);
}

#[test]
fn test_highlights_only_reference_known_symbols() {
	let descriptor = grammar().expect("Error loading AppArmor grammar");
	let known: HashSet<&str> = descriptor.symbols().map(|symbol| symbol.name).collect();

	for line in HIGHLIGHTS_QUERY.lines() {
		let line = line.trim();
		if let Some(rest) = line.strip_prefix('(') {
			if let Some(end) = rest.find(')') {
				let node = &rest[..end];
				assert!(known.contains(node), "query names unknown node {node}");
			}
		} else if let Some(rest) = line.strip_prefix('"') {
			if let Some(end) = rest.find('"') {
				let token = &rest[..end];
				assert!(known.contains(token), "query names unknown token {token}");
			}
		}
	}
}
