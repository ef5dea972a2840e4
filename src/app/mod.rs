pub mod api;
pub mod backup;
pub mod cli;
pub mod config;
mod context;
pub mod diff_report;
pub mod operation_log;
pub mod policy;
pub mod profile;
pub mod safe_edit;
pub mod sysctl;
pub mod telemetry;

pub use context::AppContext;
