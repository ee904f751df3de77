use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Result;

use super::{Desktop, WindowVisibility};
use crate::app_scan;

pub struct MacosDesktop;

impl Desktop for MacosDesktop {
    // System Events prints an empty list for processes with no on-screen
    // windows
    fn window_visibility(&self, pid: u32) -> WindowVisibility {
        let script =
            format!("tell application \"System Events\" to get windows of process id {pid}");
        match Command::new("osascript").arg("-e").arg(&script).output() {
            Ok(out) if out.status.success() => {
                if String::from_utf8_lossy(&out.stdout).trim().is_empty() {
                    WindowVisibility::Hidden
                } else {
                    WindowVisibility::Visible
                }
            }
            _ => WindowVisibility::Unknown,
        }
    }

    fn installed_apps(&self) -> Result<Vec<PathBuf>> {
        app_scan::scan_bundle_dir(Path::new("/Applications"))
    }
}
