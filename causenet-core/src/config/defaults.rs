// Single source of truth for all default values.

// --- Dataset ---
pub const DEFAULT_COUNTRY: &str = "FRANCE";
pub const DEFAULT_CONFIG_FILENAME: &str = "causenet.toml";

// --- Graph ---
/// Weight given to a descriptor whose impact is absent or unconvertible.
pub const DEFAULT_IMPACT: f64 = 0.1;
/// Divisor of `impact × total_deaths` in hierarchical mode.
pub const DEFAULT_WEIGHT_DIVISOR: f64 = 1200.0;

// --- Explorer ---
/// Length of the cause list shown to the user.
pub const DEFAULT_MAX_LISTED_CAUSES: Option<usize> = Some(50);

// --- Logging ---
pub const DEFAULT_LOG_FILTER: &str = "causenet=info";
pub const LOG_ENV_VAR: &str = "CAUSENET_LOG";
