//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary values (e.g. feature widths) from the primary lists here
//! to avoid drift between the encoder, the model and the tests.

/// Default HTTP port when `NESTRANK_PORT` is not set.
pub const DEFAULT_PORT: u16 = 8000;

/// Default per-request candidate bound when `NESTRANK_MAX_CANDIDATES` is not set.
///
/// Bounds scoring work per ranking request. Candidates beyond the bound are dropped
/// with a warning before scoring, never mid-sort.
pub const DEFAULT_MAX_CANDIDATES: usize = 512;

/// Score attached to an article whose scoring attempt failed.
pub const FALLBACK_SCORE: f32 = 0.0;

/// Concern values that constrain candidates to heat-sensitive articles.
pub const HEAT_CONCERNS: [&str; 2] = ["heat", "heatwave"];

/// Concern values that constrain candidates to pollution-sensitive articles.
pub const POLLUTION_CONCERNS: [&str; 2] = ["pollution", "air_pollution"];

/// File name of the encoder vocabulary sidecar, resolved from the model's directory.
pub const ENCODER_FILE_NAME: &str = "encoder.json";

/// Number of boolean passthrough features appended after the one-hot blocks
/// (heat_sensitive, pollution_sensitive).
pub const BOOLEAN_FEATURE_COUNT: usize = 2;

/// Built-in age-group vocabulary used by the stub encoder.
pub const BUILTIN_AGE_GROUPS: [&str; 4] = ["20-25", "26-30", "30-35", "35+"];

/// Built-in trimester vocabulary used by the stub encoder.
pub const BUILTIN_TRIMESTERS: [&str; 3] = ["1", "2", "3"];

/// Built-in concern vocabulary used by the stub encoder.
pub const BUILTIN_CONCERNS: [&str; 4] = ["heatwave", "air_pollution", "nutrition", "sleep"];

/// Feature width produced by the built-in stub vocabulary.
pub const BUILTIN_FEATURE_LEN: usize = BUILTIN_AGE_GROUPS.len()
    + BUILTIN_TRIMESTERS.len()
    + BUILTIN_CONCERNS.len()
    + BOOLEAN_FEATURE_COUNT;

/// Response header carrying the coarse service status.
pub const STATUS_HEADER: &str = "x-nestrank-status";

/// [`STATUS_HEADER`] value on the health endpoint and successful API responses.
pub const STATUS_HEALTHY: &str = "healthy";

/// [`STATUS_HEADER`] value when a component is serving.
pub const STATUS_READY: &str = "ready";

/// [`STATUS_HEADER`] value on error responses and failed components.
pub const STATUS_ERROR: &str = "error";
