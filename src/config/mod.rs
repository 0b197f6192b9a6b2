//! Configuration loading and validation.
//!
//! TOML-backed, with defaults for every field so a missing config file is a
//! valid config. The stage sequence itself is not configurable — only display
//! text and demo-driver pacing are.

mod settings;

pub use settings::{DisplayConfig, DriverConfig, StagelineConfig};
