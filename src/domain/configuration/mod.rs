pub mod app_config;
pub mod parse;

pub use app_config::{
    AppConfig, DiffConfig, HardeningProfile, LogFormat, LoggingConfig, Privilege, SysctlConfig,
    SystemConfig,
};
pub use parse::parse_config_content;
