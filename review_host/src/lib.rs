//! # Detection Review Host
//!
//! Runs a review session over one image and its text detection record.
//!
//! ## Responsibilities
//!
//! The host:
//! - Loads the record and sizes the image
//! - Runs the tick loop (synchronize → render → input)
//! - Feeds keys from a script or from stdin
//! - Writes the edited texts back into the record on exit
//!
//! ## Non-Responsibilities
//!
//! The host does NOT:
//! - Open a window or decode pixels
//! - Run text recognition
//! - Write the record back to disk

pub mod config;
pub mod input_script;
pub mod runtime;

pub use config::{ConfigError, HostConfig};
pub use input_script::{InputScript, InputScriptError, ScriptedInput};
pub use runtime::{load_script, probe_image, HostRuntime, HostRuntimeConfig, HostRuntimeError};
