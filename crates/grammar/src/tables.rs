//! Generated by `scripts/gen_tables.py`; do not edit by hand.
//!
//! Compiled inventory of the AppArmor grammar: every symbol and field
//! name, the table geometry, and the checksum the loader verifies.

use apparmor_language::{GrammarArtifact, Symbol, SymbolKind, TableShape};

static SYMBOLS: [Symbol; 144] = [
	Symbol { name: "source_file", kind: SymbolKind::Regular },
	Symbol { name: "comment_line", kind: SymbolKind::Regular },
	Symbol { name: "include_line", kind: SymbolKind::Regular },
	Symbol { name: "abi_line", kind: SymbolKind::Regular },
	Symbol { name: "tunables_assignment_line", kind: SymbolKind::Regular },
	Symbol { name: "conditional_var_assignment_line", kind: SymbolKind::Regular },
	Symbol { name: "alias_line", kind: SymbolKind::Regular },
	Symbol { name: "profile", kind: SymbolKind::Regular },
	Symbol { name: "modifier_block", kind: SymbolKind::Regular },
	Symbol { name: "profile_header", kind: SymbolKind::Regular },
	Symbol { name: "profile_header_bare", kind: SymbolKind::Regular },
	Symbol { name: "ns_profile_name", kind: SymbolKind::Regular },
	Symbol { name: "profile_header_hat", kind: SymbolKind::Regular },
	Symbol { name: "profile_header_hat_keyword", kind: SymbolKind::Regular },
	Symbol { name: "exec_rule_line", kind: SymbolKind::Regular },
	Symbol { name: "file_rule_line", kind: SymbolKind::Regular },
	Symbol { name: "alias_rule_line", kind: SymbolKind::Regular },
	Symbol { name: "capability_rule_line", kind: SymbolKind::Regular },
	Symbol { name: "network_rule_line", kind: SymbolKind::Regular },
	Symbol { name: "userns_rule_line", kind: SymbolKind::Regular },
	Symbol { name: "umount_rule_line", kind: SymbolKind::Regular },
	Symbol { name: "ptrace_rule_line", kind: SymbolKind::Regular },
	Symbol { name: "signal_rule_line", kind: SymbolKind::Regular },
	Symbol { name: "signal_fragment", kind: SymbolKind::Regular },
	Symbol { name: "signal_cont_fragment", kind: SymbolKind::Regular },
	Symbol { name: "file_directive_line", kind: SymbolKind::Regular },
	Symbol { name: "mount_rule_line", kind: SymbolKind::Regular },
	Symbol { name: "remount_rule_line", kind: SymbolKind::Regular },
	Symbol { name: "mqueue_rule_line", kind: SymbolKind::Regular },
	Symbol { name: "io_uring_rule_line", kind: SymbolKind::Regular },
	Symbol { name: "dbus_rule_line", kind: SymbolKind::Regular },
	Symbol { name: "unix_rule_line", kind: SymbolKind::Regular },
	Symbol { name: "all_rule_line", kind: SymbolKind::Regular },
	Symbol { name: "link_rule_line", kind: SymbolKind::Regular },
	Symbol { name: "change_profile_rule_line", kind: SymbolKind::Regular },
	Symbol { name: "rlimit_rule_line", kind: SymbolKind::Regular },
	Symbol { name: "rlimit_name", kind: SymbolKind::Regular },
	Symbol { name: "rlimit_value", kind: SymbolKind::Regular },
	Symbol { name: "rlimit_unit", kind: SymbolKind::Regular },
	Symbol { name: "conditional_rule", kind: SymbolKind::Regular },
	Symbol { name: "cond_expr", kind: SymbolKind::Regular },
	Symbol { name: "cond_var", kind: SymbolKind::Regular },
	Symbol { name: "cond_bool_var", kind: SymbolKind::Regular },
	Symbol { name: "exec_mode", kind: SymbolKind::Regular },
	Symbol { name: "comment", kind: SymbolKind::Regular },
	Symbol { name: "angle_path", kind: SymbolKind::Regular },
	Symbol { name: "quoted_path", kind: SymbolKind::Regular },
	Symbol { name: "include_path", kind: SymbolKind::Regular },
	Symbol { name: "bare_path", kind: SymbolKind::Regular },
	Symbol { name: "var_path", kind: SymbolKind::Regular },
	Symbol { name: "newline", kind: SymbolKind::Regular },
	Symbol { name: "profile_name", kind: SymbolKind::Regular },
	Symbol { name: "xattrs", kind: SymbolKind::Regular },
	Symbol { name: "xattr_entry", kind: SymbolKind::Regular },
	Symbol { name: "flags", kind: SymbolKind::Regular },
	Symbol { name: "flag_entry", kind: SymbolKind::Regular },
	Symbol { name: "flags_value", kind: SymbolKind::Regular },
	Symbol { name: "flags_bare_path", kind: SymbolKind::Regular },
	Symbol { name: "flags_var_path", kind: SymbolKind::Regular },
	Symbol { name: "rest_of_line", kind: SymbolKind::Regular },
	Symbol { name: "dbus_fragment", kind: SymbolKind::Regular },
	Symbol { name: "dbus_cont_fragment", kind: SymbolKind::Regular },
	Symbol { name: "unix_fragment", kind: SymbolKind::Regular },
	Symbol { name: "unix_cont_fragment", kind: SymbolKind::Regular },
	Symbol { name: "identifier_with_vars", kind: SymbolKind::Regular },
	Symbol { name: "rule_modifiers", kind: SymbolKind::Regular },
	Symbol { name: "perm_set", kind: SymbolKind::Regular },
	Symbol { name: "priority_prefix", kind: SymbolKind::Regular },
	Symbol { name: "pivot_root_rule_line", kind: SymbolKind::Regular },
	Symbol { name: "tunable_var", kind: SymbolKind::Regular },
	Symbol { name: "tunable_op", kind: SymbolKind::Regular },
	Symbol { name: "tunable_value", kind: SymbolKind::Regular },
	Symbol { name: "conditional_var", kind: SymbolKind::Regular },
	Symbol { name: "conditional_value", kind: SymbolKind::Regular },
	Symbol { name: "pathish", kind: SymbolKind::Regular },
	Symbol { name: "targetish", kind: SymbolKind::Regular },
	Symbol { name: "eol", kind: SymbolKind::Regular },
	Symbol { name: "include", kind: SymbolKind::Anonymous },
	Symbol { name: "#include", kind: SymbolKind::Anonymous },
	Symbol { name: "if", kind: SymbolKind::Anonymous },
	Symbol { name: "exists", kind: SymbolKind::Anonymous },
	Symbol { name: "abi", kind: SymbolKind::Anonymous },
	Symbol { name: "=", kind: SymbolKind::Anonymous },
	Symbol { name: "alias", kind: SymbolKind::Anonymous },
	Symbol { name: "->", kind: SymbolKind::Anonymous },
	Symbol { name: "}", kind: SymbolKind::Anonymous },
	Symbol { name: "{", kind: SymbolKind::Anonymous },
	Symbol { name: "owner", kind: SymbolKind::Anonymous },
	Symbol { name: "other", kind: SymbolKind::Anonymous },
	Symbol { name: "profile", kind: SymbolKind::Anonymous },
	Symbol { name: "^", kind: SymbolKind::Anonymous },
	Symbol { name: "hat", kind: SymbolKind::Anonymous },
	Symbol { name: "unsafe", kind: SymbolKind::Anonymous },
	Symbol { name: "safe", kind: SymbolKind::Anonymous },
	Symbol { name: "capability", kind: SymbolKind::Anonymous },
	Symbol { name: "network", kind: SymbolKind::Anonymous },
	Symbol { name: "userns", kind: SymbolKind::Anonymous },
	Symbol { name: "umount", kind: SymbolKind::Anonymous },
	Symbol { name: "fstype=", kind: SymbolKind::Anonymous },
	Symbol { name: "ptrace", kind: SymbolKind::Anonymous },
	Symbol { name: "signal", kind: SymbolKind::Anonymous },
	Symbol { name: "file", kind: SymbolKind::Anonymous },
	Symbol { name: "mount", kind: SymbolKind::Anonymous },
	Symbol { name: "remount", kind: SymbolKind::Anonymous },
	Symbol { name: "options=", kind: SymbolKind::Anonymous },
	Symbol { name: "(", kind: SymbolKind::Anonymous },
	Symbol { name: ")", kind: SymbolKind::Anonymous },
	Symbol { name: "mqueue", kind: SymbolKind::Anonymous },
	Symbol { name: "io_uring", kind: SymbolKind::Anonymous },
	Symbol { name: "dbus", kind: SymbolKind::Anonymous },
	Symbol { name: "unix", kind: SymbolKind::Anonymous },
	Symbol { name: "all", kind: SymbolKind::Anonymous },
	Symbol { name: "link", kind: SymbolKind::Anonymous },
	Symbol { name: "subset", kind: SymbolKind::Anonymous },
	Symbol { name: "change_profile", kind: SymbolKind::Anonymous },
	Symbol { name: "set", kind: SymbolKind::Anonymous },
	Symbol { name: "rlimit", kind: SymbolKind::Anonymous },
	Symbol { name: "<=", kind: SymbolKind::Anonymous },
	Symbol { name: "else", kind: SymbolKind::Anonymous },
	Symbol { name: "not", kind: SymbolKind::Anonymous },
	Symbol { name: "defined", kind: SymbolKind::Anonymous },
	Symbol { name: "xattrs", kind: SymbolKind::Anonymous },
	Symbol { name: ",", kind: SymbolKind::Anonymous },
	Symbol { name: "flags", kind: SymbolKind::Anonymous },
	Symbol { name: "audit", kind: SymbolKind::Anonymous },
	Symbol { name: "allow", kind: SymbolKind::Anonymous },
	Symbol { name: "deny", kind: SymbolKind::Anonymous },
	Symbol { name: "prompt", kind: SymbolKind::Anonymous },
	Symbol { name: "priority", kind: SymbolKind::Anonymous },
	Symbol { name: "pivot_root", kind: SymbolKind::Anonymous },
	Symbol { name: "oldroot=", kind: SymbolKind::Anonymous },
	Symbol { name: "source_file_repeat1", kind: SymbolKind::Auxiliary },
	Symbol { name: "profile_repeat1", kind: SymbolKind::Auxiliary },
	Symbol { name: "modifier_block_repeat1", kind: SymbolKind::Auxiliary },
	Symbol { name: "profile_header_repeat1", kind: SymbolKind::Auxiliary },
	Symbol { name: "profile_header_bare_repeat1", kind: SymbolKind::Auxiliary },
	Symbol { name: "signal_rule_line_repeat1", kind: SymbolKind::Auxiliary },
	Symbol { name: "dbus_rule_line_repeat1", kind: SymbolKind::Auxiliary },
	Symbol { name: "unix_rule_line_repeat1", kind: SymbolKind::Auxiliary },
	Symbol { name: "conditional_rule_repeat1", kind: SymbolKind::Auxiliary },
	Symbol { name: "conditional_rule_repeat2", kind: SymbolKind::Auxiliary },
	Symbol { name: "cond_expr_repeat1", kind: SymbolKind::Auxiliary },
	Symbol { name: "xattrs_repeat1", kind: SymbolKind::Auxiliary },
	Symbol { name: "flags_repeat1", kind: SymbolKind::Auxiliary },
];

static FIELDS: [&str; 19] = [
	"path",
	"var",
	"op",
	"value",
	"source",
	"target",
	"name",
	"attachment",
	"mode",
	"perms",
	"rest",
	"first",
	"cont",
	"exec",
	"limit",
	"unit",
	"condition",
	"key",
	"oldroot",
];

pub(crate) static ARTIFACT: GrammarArtifact = GrammarArtifact {
	name: "apparmor",
	abi_version: 1,
	symbols: &SYMBOLS,
	fields: &FIELDS,
	shape: TableShape {
		symbol_count: 144,
		field_count: 19,
		token_count: 84,
		external_token_count: 0,
		state_count: 734,
		large_state_count: 41,
		production_count: 286,
	},
	checksum: 0x40da8c425ecf8e50,
};
