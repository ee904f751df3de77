use std::path::PathBuf;

use anyhow::Result;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowVisibility {
    Visible,
    Hidden,
    Unknown,
}

pub trait Desktop {
    fn window_visibility(&self, pid: u32) -> WindowVisibility;
    fn installed_apps(&self) -> Result<Vec<PathBuf>>;
}

#[cfg(target_os = "windows")]
pub fn detect() -> Box<dyn Desktop> {
    Box::new(windows::WindowsDesktop)
}

#[cfg(target_os = "macos")]
pub fn detect() -> Box<dyn Desktop> {
    Box::new(macos::MacosDesktop)
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub fn detect() -> Box<dyn Desktop> {
    Box::new(UnsupportedDesktop)
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
struct UnsupportedDesktop;

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
impl Desktop for UnsupportedDesktop {
    fn window_visibility(&self, _pid: u32) -> WindowVisibility {
        WindowVisibility::Unknown
    }

    fn installed_apps(&self) -> Result<Vec<PathBuf>> {
        anyhow::bail!("installed application scan is not supported on this platform")
    }
}

#[cfg(test)]
mod tests {
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    use super::*;

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    #[test]
    fn unsupported_platform_reports_unknown() {
        let desktop = detect();
        assert_eq!(desktop.window_visibility(1), WindowVisibility::Unknown);
        assert!(desktop.installed_apps().is_err());
    }
}
