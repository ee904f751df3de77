use std::path::PathBuf;

use colored::Colorize;

use crate::process_scan::SuspiciousProcess;

pub fn render_report(processes: &[SuspiciousProcess], apps: &[PathBuf]) -> String {
    if processes.is_empty() && apps.is_empty() {
        return format!(
            "{}\n",
            "✅ No suspicious processes or applications detected.".green()
        );
    }

    let mut out = format!(
        "{}\n",
        "⚠️  Warning: Potentially hidden interview coding processes or applications detected!"
            .red()
    );
    if !processes.is_empty() {
        out.push_str("\nSuspicious processes:\n");
        for p in processes {
            let cmdline = if p.record.cmdline.is_empty() {
                "N/A".to_string()
            } else {
                p.record.cmdline.join(" ")
            };
            out.push_str(&format!("- {} (PID: {})\n", p.record.name, p.record.pid));
            out.push_str(&format!("  Command: {cmdline}\n"));
        }
    }
    if !apps.is_empty() {
        out.push_str("\nSuspicious installed applications:\n");
        for app in apps {
            out.push_str(&format!("- {}\n", app.display()));
        }
    }
    out
}

pub fn exit_code(processes: &[SuspiciousProcess], apps: &[PathBuf]) -> i32 {
    if processes.is_empty() && apps.is_empty() {
        0
    } else {
        1
    }
}
