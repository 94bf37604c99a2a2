//! Output types for code generation.

use crate::request::Framework;
use serde::{Deserialize, Serialize};

/// The result of one successful generation.
///
/// `code` is the cleaned source text; the remaining fields are per-request
/// diagnostics. Everything here is created and owned within one request's
/// lifetime — no state is shared across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOutput {
    /// The generated source code, fences stripped and whitespace trimmed.
    ///
    /// May be empty when the model returned no textual content.
    pub code: String,

    /// The framework the code was generated for.
    pub framework: Framework,

    /// The model that produced the code.
    pub model: String,

    /// Input tokens consumed, as reported by the API (0 when unreported).
    pub input_tokens: u64,

    /// Output tokens produced, as reported by the API (0 when unreported).
    pub output_tokens: u64,

    /// Wall-clock duration of the whole pipeline in milliseconds.
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_with_wire_framework_name() {
        let out = GenerationOutput {
            code: "<div/>".into(),
            framework: Framework::React,
            model: "claude-sonnet-4-20250514".into(),
            input_tokens: 1200,
            output_tokens: 80,
            duration_ms: 2500,
        };
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["framework"], "react");
        assert_eq!(json["code"], "<div/>");
    }
}
