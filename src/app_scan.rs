use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use walkdir::WalkDir;

use crate::keywords::{EXCLUDED_INSTALL_DIRS, EXEC_EXTENSIONS, SUSPICION_KEYWORDS};

pub fn scan_bundle_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))?;

    let mut found = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        if !name.ends_with(".app") {
            continue;
        }
        let lower = name.to_lowercase();
        if SUSPICION_KEYWORDS.iter().any(|k| lower.contains(k)) {
            found.push(entry.path());
        }
    }
    found.sort();
    Ok(found)
}

pub fn scan_install_roots(roots: &[PathBuf]) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for root in roots {
        if !root.exists() {
            continue;
        }
        scan_root(root, &mut found);
    }
    found.sort();
    found
}

fn scan_root(root: &Path, found: &mut Vec<PathBuf>) {
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && is_excluded(root, e.path())));
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("could not read entry under {}: {e}", root.display());
                continue;
            }
        };
        let name = entry.file_name().to_string_lossy().to_lowercase();
        if SUSPICION_KEYWORDS.iter().any(|k| name.contains(k))
            && is_executable_like(entry.path())
        {
            found.push(entry.path().to_path_buf());
        }
    }
}

// case-sensitive match against the path below the scanned root; a hit prunes
// the whole subtree, it is not filtered per file
fn is_excluded(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
    EXCLUDED_INSTALL_DIRS.iter().any(|d| rel.contains(d))
}

fn is_executable_like(path: &Path) -> bool {
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        if EXEC_EXTENSIONS.contains(ext.to_lowercase().as_str()) {
            return true;
        }
    }
    has_exec_bit(path)
}

#[cfg(unix)]
fn has_exec_bit(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|m| m.file_type().is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn has_exec_bit(_path: &Path) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[cfg(unix)]
    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms).unwrap();
    }

    #[test]
    fn bundle_scan_matches_keyword_apps() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("CoderPad.app")).unwrap();
        fs::create_dir(dir.path().join("Numbers.app")).unwrap();
        File::create(dir.path().join("leetcode.txt")).unwrap();

        let found = scan_bundle_dir(dir.path()).unwrap();
        assert_eq!(found, vec![dir.path().join("CoderPad.app")]);
    }

    #[test]
    fn bundle_scan_errors_on_missing_dir() {
        let dir = tempdir().unwrap();
        assert!(scan_bundle_dir(&dir.path().join("Applications")).is_err());
    }

    #[test]
    fn walk_requires_executable_extension() {
        let dir = tempdir().unwrap();
        let tools = dir.path().join("tools");
        fs::create_dir(&tools).unwrap();
        File::create(tools.join("leetcode_client.exe")).unwrap();
        File::create(tools.join("interview_notes.txt")).unwrap();

        let found = scan_install_roots(&[dir.path().to_path_buf()]);
        assert_eq!(found, vec![tools.join("leetcode_client.exe")]);
    }

    #[cfg(unix)]
    #[test]
    fn walk_accepts_exec_bit_instead_of_extension() {
        let dir = tempdir().unwrap();
        let bin = dir.path().join("bin");
        fs::create_dir(&bin).unwrap();
        let agent = bin.join("hackerrank_sync");
        File::create(&agent).unwrap();
        make_executable(&agent);
        File::create(bin.join("codility_dump")).unwrap();

        let found = scan_install_roots(&[dir.path().to_path_buf()]);
        assert_eq!(found, vec![agent]);
    }

    #[test]
    fn excluded_dirs_prune_descent() {
        let dir = tempdir().unwrap();
        let nm = dir.path().join("node_modules").join("replit-agent");
        fs::create_dir_all(&nm).unwrap();
        File::create(nm.join("replit.exe")).unwrap();
        let vendor = dir.path().join("Microsoft").join("tools");
        fs::create_dir_all(&vendor).unwrap();
        File::create(vendor.join("coderpad.exe")).unwrap();
        let keep = dir.path().join("apps");
        fs::create_dir(&keep).unwrap();
        File::create(keep.join("coderpad.exe")).unwrap();

        let found = scan_install_roots(&[dir.path().to_path_buf()]);
        assert_eq!(found, vec![keep.join("coderpad.exe")]);
    }

    #[test]
    fn missing_roots_scan_clean() {
        let dir = tempdir().unwrap();
        let found = scan_install_roots(&[dir.path().join("nope")]);
        assert!(found.is_empty());
    }
}
