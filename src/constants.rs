//! Common constants used throughout the Sprout application.

/// Directory under the install root that holds one subdirectory per template
pub const TEMPLATES_DIR: &str = "templates";

/// Environment variable that overrides the install root
pub const HOME_ENV_VAR: &str = "SPROUT_HOME";
