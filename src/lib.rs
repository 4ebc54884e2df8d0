//! `soundwrap` - default sink picker for `WirePlumber`
//!
//! Lists the sinks reported by `wpctl status` in a dmenu-style chooser (wofi by
//! default) and makes the chosen one the default with `wpctl set-default`.
//!
//! # Flow
//! - [`status`]: strip the tree drawing and parse the `Sinks:` section
//! - [`menu`]: render the chooser menu and map the choice back to a sink
//! - [`wpctl`] / [`chooser`]: the external tools, behind small traits
//! - [`commands`]: the end-to-end run

pub mod chooser;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod menu;
pub mod notification;
pub mod status;
pub mod style;
pub mod wpctl;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::SinkError;
pub use status::Sink;
