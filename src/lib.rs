//! # shot2code
//!
//! Generate front-end code from UI screenshots using Vision Language Models.
//!
//! ## Why this crate?
//!
//! Rebuilding a UI by hand from a screenshot is slow and error-prone. A
//! vision-capable LLM can read the screenshot the way a front-end developer
//! would and emit a working component directly. This crate wraps that into a
//! single request pipeline: hand it a base64 data URL and a target framework,
//! get back cleaned source code.
//!
//! All semantic work — layout understanding, colour matching, component
//! structure — is delegated to the model. Locally the crate only validates
//! the request, unpacks the image payload, picks the right instruction
//! prompt, makes one API call, and strips formatting artefacts from the
//! reply. It never parses or compiles the generated code.
//!
//! ## Pipeline Overview
//!
//! ```text
//! request
//!  │
//!  ├─ 1. Validate   required fields, known framework, API key present
//!  ├─ 2. Decode     data:image/<subtype>;base64,<data> → DecodedImage
//!  ├─ 3. Select     framework → fixed instruction prompt
//!  ├─ 4. Invoke     one Anthropic Messages call (image + instruction)
//!  └─ 5. Normalize  keep text blocks, join, strip outer code fences
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shot2code::{generate, GenerateRequest, GenerationConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // API key read from ANTHROPIC_API_KEY
//!     let config = GenerationConfig::from_env()?;
//!     let request = GenerateRequest {
//!         image: Some("data:image/png;base64,iVBORw0KGgo...".into()),
//!         framework: Some("react".into()),
//!     };
//!     let output = generate(&request, &config).await?;
//!     println!("{}", output.code);
//!     eprintln!("tokens: {} in / {} out",
//!         output.input_tokens, output.output_tokens);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `shot2code` binary (clap + axum + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in the server
//! and CLI deps:
//! ```toml
//! shot2code = { version = "0.3", default-features = false }
//! ```
//!
//! ## Known Limitation
//!
//! Fence stripping only removes code-fence markers sitting exactly at the
//! start and end of the trimmed reply. If the model wraps the code fence in
//! explanatory prose despite the prompt, that prose is returned verbatim.
//! See [`pipeline::normalize`] for details.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod pipeline;
pub mod prompts;
pub mod request;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{GenerationConfig, GenerationConfigBuilder};
pub use error::GenerateError;
pub use generate::generate;
pub use output::GenerationOutput;
pub use request::{Framework, GenerateRequest};
