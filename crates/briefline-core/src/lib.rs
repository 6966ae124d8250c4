mod app_config;
mod brief;
mod config;
mod draft;
mod error;

pub use app_config::{AppConfig, Environment};
pub use brief::{BriefInput, FieldIssue, ValidationError};
pub use config::{load_app_config, load_app_config_from_env};
pub use draft::{ChannelPlanEntry, StrategyDraft, DRAFT_PENDING_SUMMARY};
pub use error::ConfigError;
