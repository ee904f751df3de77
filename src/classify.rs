use crate::keywords::{IGNORE_KEYWORDS, SELF_NAMES, SUSPICION_KEYWORDS};

// ignore list takes precedence over suspicion keywords
pub fn is_suspicious(name: &str, cmdline: &str) -> bool {
    let name = name.to_lowercase();
    let cmdline = cmdline.to_lowercase();

    if SELF_NAMES.iter().any(|t| name.contains(t)) {
        return false;
    }
    if IGNORE_KEYWORDS.iter().any(|t| name.contains(t)) {
        return false;
    }
    SUSPICION_KEYWORDS
        .iter()
        .any(|t| name.contains(t) || cmdline.contains(t))
}
