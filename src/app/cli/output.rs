//! Human and JSON rendering of command results.

use std::io;

use serde::Serialize;
use serde_json::json;

use crate::app::operation_log::{OperationLog, OperationOutcome};
use crate::app::sysctl::ReloadOutcome;
use crate::domain::{AppError, EditResult};

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let text = serde_json::to_string_pretty(value).map_err(io::Error::from)?;
    println!("{}", text);
    Ok(())
}

pub fn print_edit(
    result: &EditResult,
    reload: Option<&ReloadOutcome>,
    json: bool,
) -> Result<(), AppError> {
    if json {
        return print_json(&json!({ "success": true, "result": result, "sysctl_reload": reload }));
    }

    if result.changed() {
        println!("✅ Applied {} to {}", result.setting(), result.file().display());
    } else {
        println!("✅ {} already compliant ({})", result.file().display(), result.setting());
    }
    println!("   Backup: {}", result.backup().display());
    let diff = result.diff().text();
    if !diff.is_empty() {
        println!();
        print!("{}", diff);
        if !diff.ends_with('\n') {
            println!();
        }
    }
    print_reload(reload);
    Ok(())
}

pub fn print_log(
    log: &OperationLog,
    reload: Option<&ReloadOutcome>,
    json: bool,
) -> Result<(), AppError> {
    if json {
        return print_json(&json!({
            "success": log.all_succeeded(),
            "operations": log.records(),
            "sysctl_reload": reload,
        }));
    }

    for record in log.records() {
        match &record.outcome {
            OperationOutcome::Applied { backup, changed, .. } => {
                let state = if *changed { "applied" } else { "already compliant" };
                println!("✅ {}: {} (backup: {})", record.setting, state, backup.display());
            }
            OperationOutcome::Failed { message, .. } => {
                println!("❌ {}: {}", record.setting, message);
            }
        }
    }
    print_reload(reload);
    Ok(())
}

pub fn print_notice(message: &str, json: bool) -> Result<(), AppError> {
    if json {
        return print_json(&json!({ "success": true, "message": message }));
    }
    println!("ℹ️ {}", message);
    Ok(())
}

fn print_reload(reload: Option<&ReloadOutcome>) {
    match reload {
        Some(ReloadOutcome::Reloaded) => println!("✅ Reloaded sysctl settings"),
        Some(ReloadOutcome::Failed { message }) => {
            println!("⚠️ File updated but sysctl reload failed: {}", message)
        }
        Some(ReloadOutcome::Skipped) | None => {}
    }
}

pub fn print_error(err: &AppError, json: bool) {
    if json {
        let body = json!({
            "success": false,
            "error": {
                "kind": err.kind_name(),
                "message": err.to_string(),
                "backup": err.backup_path(),
            },
        });
        println!("{}", body);
        return;
    }

    eprintln!("Error: {}", err);
    if let AppError::WriteFailed { path, backup, .. } = err {
        eprintln!(
            "Hint: restore with `cp {} {}` if the file was damaged",
            backup.display(),
            path.display()
        );
    }
}
