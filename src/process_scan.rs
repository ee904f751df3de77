use log::debug;
use sysinfo::System;

use crate::classify;
use crate::platform::{Desktop, WindowVisibility};

pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    pub cmdline: Vec<String>,
}

pub struct SuspiciousProcess {
    pub record: ProcessRecord,
    pub visibility: WindowVisibility,
}

pub fn check_processes(desktop: &dyn Desktop) -> Vec<SuspiciousProcess> {
    let mut system = System::new_all();
    system.refresh_all();
    let own_pid = std::process::id();
    debug!("snapshotted {} processes", system.processes().len());

    let mut flagged = Vec::new();
    for (pid, process) in system.processes() {
        let pid = pid.as_u32();
        if pid == own_pid {
            continue;
        }
        let name = process.name().to_string_lossy().to_string();
        let cmdline: Vec<String> = process
            .cmd()
            .iter()
            .map(|a| a.to_string_lossy().to_string())
            .collect();
        if !classify::is_suspicious(&name, &cmdline.join(" ")) {
            continue;
        }
        // Unknown counts as hidden: a process the probe cannot see stays
        // flagged
        match desktop.window_visibility(pid) {
            WindowVisibility::Visible => continue,
            visibility => flagged.push(SuspiciousProcess {
                record: ProcessRecord { pid, name, cmdline },
                visibility,
            }),
        }
    }
    flagged.sort_by_key(|p| p.record.pid);
    flagged
}
