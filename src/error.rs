use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `FlavorForge`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; internal code continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum ForgeError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Request validation ──────────────────────────────────────────────
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Request validation errors ──────────────────────────────────────────────

/// Rejection of a malformed analysis request.
///
/// The gateway surfaces these as HTTP 400 with the display message as the
/// `error` body field; the messages match what API clients already expect.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// `ingredients` missing, empty, or not a list.
    #[error("Invalid ingredients data")]
    EmptyFormula,

    /// Formula percentages fall outside 100 ± 0.1.
    #[error("Ingredient percentages must sum to 100%")]
    PercentageSum { total: f64 },

    /// `productDescription` empty or whitespace-only.
    #[error("Product description is required")]
    EmptyDescription,
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, ForgeError>;
