//! Inbound request types.
//!
//! [`GenerateRequest`] is deliberately loose — both fields are `Option` so a
//! body with a missing field still deserialises and reaches the validator,
//! which can then report *which* field is missing instead of a generic serde
//! error. The validator turns it into the strictly-typed [`ValidRequest`]
//! used by the rest of the pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The raw inbound request body: `{ "image": ..., "framework": ... }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Base64 data URL of the screenshot (`data:image/<subtype>;base64,<data>`).
    #[serde(default)]
    pub image: Option<String>,

    /// Target framework: `react`, `vue`, or `html`.
    #[serde(default)]
    pub framework: Option<String>,
}

/// A request that passed validation: both fields present, framework known.
#[derive(Debug, Clone)]
pub struct ValidRequest {
    pub image: String,
    pub framework: Framework,
}

/// The three supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// React functional component, Tailwind utility classes.
    React,
    /// Vue 3 single-file component with `<script setup>`.
    Vue,
    /// Plain semantic HTML5 with the Tailwind CDN.
    Html,
}

impl Framework {
    /// The wire name, as it appears in request bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Html => "html",
        }
    }

    /// All supported frameworks, in documentation order.
    pub const ALL: [Framework; 3] = [Framework::React, Framework::Vue, Framework::Html];
}

impl FromStr for Framework {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "react" => Ok(Framework::React),
            "vue" => Ok(Framework::Vue),
            "html" => Ok(Framework::Html),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_round_trips_through_str() {
        for fw in Framework::ALL {
            assert_eq!(fw.as_str().parse::<Framework>(), Ok(fw));
        }
    }

    #[test]
    fn unknown_framework_rejected() {
        assert!("svelte".parse::<Framework>().is_err());
        assert!("React".parse::<Framework>().is_err(), "names are lowercase");
        assert!("".parse::<Framework>().is_err());
    }

    #[test]
    fn request_tolerates_missing_fields() {
        let req: GenerateRequest = serde_json::from_str("{}").expect("empty body deserialises");
        assert!(req.image.is_none());
        assert!(req.framework.is_none());
    }

    #[test]
    fn request_keeps_unvalidated_framework_string() {
        let req: GenerateRequest =
            serde_json::from_str(r#"{"image":"x","framework":"angular"}"#).unwrap();
        assert_eq!(req.framework.as_deref(), Some("angular"));
    }
}
