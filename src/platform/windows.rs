use std::env;
use std::path::PathBuf;

use anyhow::Result;
use windows::Win32::Foundation::{BOOL, HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetWindowThreadProcessId, IsWindowVisible,
};

use super::{Desktop, WindowVisibility};
use crate::app_scan;

pub struct WindowsDesktop;

struct EnumState {
    target: u32,
    found: bool,
}

unsafe extern "system" fn visible_window_owner(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let state = &mut *(lparam.0 as *mut EnumState);
    if IsWindowVisible(hwnd).as_bool() {
        let mut owner = 0u32;
        GetWindowThreadProcessId(hwnd, Some(&mut owner));
        if owner == state.target {
            state.found = true;
            return BOOL(0);
        }
    }
    BOOL(1)
}

impl Desktop for WindowsDesktop {
    fn window_visibility(&self, pid: u32) -> WindowVisibility {
        let mut state = EnumState {
            target: pid,
            found: false,
        };
        // EnumWindows reports failure when the callback stops it early, so
        // the found flag must be checked before the call result
        let res = unsafe {
            EnumWindows(
                Some(visible_window_owner),
                LPARAM(&mut state as *mut EnumState as isize),
            )
        };
        if state.found {
            WindowVisibility::Visible
        } else if res.is_ok() {
            WindowVisibility::Hidden
        } else {
            WindowVisibility::Unknown
        }
    }

    fn installed_apps(&self) -> Result<Vec<PathBuf>> {
        Ok(app_scan::scan_install_roots(&install_roots()))
    }
}

fn install_roots() -> Vec<PathBuf> {
    let home = env::var("USERPROFILE").unwrap_or_else(|_| "C:\\Users\\Default".to_string());
    [
        env::var("ProgramFiles").unwrap_or_else(|_| "C:\\Program Files".to_string()),
        env::var("ProgramFiles(x86)").unwrap_or_else(|_| "C:\\Program Files (x86)".to_string()),
        env::var("LocalAppData").unwrap_or_else(|_| format!("{home}\\AppData\\Local")),
        env::var("AppData").unwrap_or_else(|_| format!("{home}\\AppData\\Roaming")),
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}
