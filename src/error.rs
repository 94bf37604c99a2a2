//! Error types for the shot2code library.
//!
//! One enum covers the whole pipeline. Each variant maps to exactly one
//! outward-facing HTTP status via [`GenerateError::status_code`], so the
//! server boundary never has to reason about error classes itself:
//!
//! * request problems the caller can fix (missing field, unknown framework,
//!   malformed image payload) → 400;
//! * operational problems only the operator can fix (missing API key) → 500;
//! * upstream API failures → the upstream-reported status verbatim, or 500
//!   when the failure produced no status (network error, timeout).
//!
//! No retry is attempted anywhere: a failed upstream call fails the whole
//! request once, and the caller owns any "try again" affordance.

use thiserror::Error;

/// All errors returned by the shot2code library.
#[derive(Debug, Error)]
pub enum GenerateError {
    // ── Request errors ────────────────────────────────────────────────────
    /// A required request field was absent.
    #[error("Missing required field '{field}'")]
    MissingField { field: &'static str },

    /// The requested framework is not one of the supported values.
    #[error("Invalid framework '{value}'. Use react, vue, or html.")]
    UnsupportedFramework { value: String },

    /// The image payload did not match the data-URL grammar.
    #[error(
        "Invalid image payload: expected a base64 data URL \
         (data:image/<subtype>;base64,<data>)"
    )]
    MalformedImage,

    // ── Configuration errors ──────────────────────────────────────────────
    /// The API credential is absent; no upstream call was attempted.
    #[error("API key not configured. Set ANTHROPIC_API_KEY.")]
    MissingApiKey,

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Upstream errors ───────────────────────────────────────────────────
    /// The vision API could not be reached (connect failure, timeout).
    #[error("Vision API unreachable: {reason}")]
    UpstreamUnavailable { reason: String },

    /// The vision API answered with a non-success status.
    ///
    /// `status` is forwarded verbatim as the outward-facing status so the
    /// caller sees e.g. a 429 as a 429.
    #[error("Vision API error ({status}): {message}")]
    Upstream { status: u16, message: String },

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GenerateError {
    /// The HTTP status the boundary should report for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            GenerateError::MissingField { .. }
            | GenerateError::UnsupportedFramework { .. }
            | GenerateError::MalformedImage => 400,
            GenerateError::Upstream { status, .. } => *status,
            GenerateError::MissingApiKey
            | GenerateError::InvalidConfig(_)
            | GenerateError::UpstreamUnavailable { .. }
            | GenerateError::Internal(_) => 500,
        }
    }

    /// True when the error is the caller's to fix (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}
