pub mod backup;
pub mod configuration;
pub mod edit_result;
pub mod error;
pub mod setting;
pub mod transform;

pub use configuration::{AppConfig, HardeningProfile, LogFormat, Privilege};
pub use edit_result::{DIFF_UNAVAILABLE, DiffReport, EditResult};
pub use error::AppError;
pub use setting::{ManagedEdit, ManagedFile, MinPasswordLength, PasswordRemember, Setting};
pub use transform::EditTransform;
