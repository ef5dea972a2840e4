//! Loading edited kernel parameters into the running kernel.

use serde::Serialize;

use crate::ports::SysctlLoader;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReloadOutcome {
    /// Disabled in configuration.
    Skipped,
    Reloaded,
    /// The edit stands; only the live kernel is out of date.
    Failed { message: String },
}

/// Reload sysctl settings when `enabled`. A failure is reported, not raised.
pub fn reload<L: SysctlLoader>(loader: &L, enabled: bool) -> ReloadOutcome {
    if !enabled {
        tracing::debug!("sysctl reload disabled");
        return ReloadOutcome::Skipped;
    }
    match loader.reload() {
        Ok(output) => {
            tracing::info!(lines = output.lines().count(), "sysctl settings reloaded");
            ReloadOutcome::Reloaded
        }
        Err(err) => {
            tracing::warn!(error = %err, "sysctl reload failed");
            ReloadOutcome::Failed { message: err.to_string() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubSysctl;

    #[test]
    fn disabled_reload_does_not_run_loader() {
        let loader = StubSysctl::default();

        assert_eq!(reload(&loader, false), ReloadOutcome::Skipped);
        assert_eq!(loader.reloads(), 0);
    }

    #[test]
    fn successful_reload() {
        let loader = StubSysctl::default();

        assert_eq!(reload(&loader, true), ReloadOutcome::Reloaded);
        assert_eq!(loader.reloads(), 1);
    }

    #[test]
    fn failed_reload_is_an_outcome() {
        let outcome = reload(&StubSysctl::failing(), true);

        assert!(matches!(
            outcome,
            ReloadOutcome::Failed { message } if message.contains("permission denied")
        ));
    }
}
