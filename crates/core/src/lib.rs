pub mod config;
pub mod error;
pub mod navigation;
pub mod permalink;
pub mod types;

pub use config::{parse_navigation_toml, parse_navigation_toml_str};
pub use error::{Error, Result};
pub use navigation::site_navigation;
pub use permalink::{PermalinkConfig, PermalinkKind, Permalinks};
pub use types::*;
