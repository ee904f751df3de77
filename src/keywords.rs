use std::collections::HashSet;

use lazy_static::lazy_static;

// names of interview-assistance and coding-help tools
pub const SUSPICION_KEYWORDS: &[&str] = &[
    "interview",
    "coder",
    "leetcode",
    "hackerrank",
    "codility",
    "coderpad",
    "replit",
    "codepen",
];

// our own binary and the names it runs under during development
pub const SELF_NAMES: &[&str] = &["palantir_integrity", "palantir-integrity", "cargo"];

// system processes and everyday tools that must never be flagged
pub const IGNORE_KEYWORDS: &[&str] = &[
    "decoder",
    "encoder",
    "system",
    "service",
    "daemon",
    "vscode",
    "terminal",
    "iterm",
    "chrome",
    "firefox",
    "safari",
];

// vendor and system directories skipped during the install-tree walk
pub const EXCLUDED_INSTALL_DIRS: &[&str] = &[
    "Windows",
    "System32",
    "SysWOW64",
    "node_modules",
    "Python",
    "Java",
    "Android",
    "Adobe",
    "Microsoft",
    "Git",
    "PostgreSQL",
    "MySQL",
];

lazy_static! {
    pub static ref EXEC_EXTENSIONS: HashSet<&'static str> =
        ["exe", "msi", "bat", "cmd", "ps1"].into_iter().collect();
}
