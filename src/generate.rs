//! The top-level generation entry point.
//!
//! Control flow is strictly linear — validate, decode, select, invoke,
//! normalize — with the single upstream call as the only suspension point.
//! The pipeline is stateless: nothing is shared between requests beyond the
//! read-only config, so the host may run any number of calls concurrently
//! without coordination.

use crate::config::GenerationConfig;
use crate::error::GenerateError;
use crate::output::GenerationOutput;
use crate::pipeline::{decode, normalize, validate, vision};
use crate::prompts;
use crate::request::GenerateRequest;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Generate front-end code from a screenshot.
///
/// This is the primary entry point for the library and the operation the
/// HTTP handler exposes as `POST /api/generate`.
///
/// # Arguments
/// * `request` — the raw inbound body (fields may be absent; validation
///   reports which)
/// * `config`  — process-wide generation configuration
///
/// # Errors
/// Every failure is a [`GenerateError`] whose
/// [`status_code`](GenerateError::status_code) gives the outward-facing
/// HTTP status: 400 for bad input, 500 for missing credential or transport
/// failure, and the upstream status verbatim when the vision API rejected
/// the call. An empty model reply is not an error — it yields an empty
/// `code` string.
pub async fn generate(
    request: &GenerateRequest,
    config: &GenerationConfig,
) -> Result<GenerationOutput, GenerateError> {
    let start = Instant::now();

    // ── Step 1: Validate ─────────────────────────────────────────────────
    let valid = validate::validate_request(request, config)?;
    info!(framework = %valid.framework, "starting generation");

    // ── Step 2: Decode the image payload ─────────────────────────────────
    let image = decode::decode_data_url(&valid.image)?;
    debug!(
        media_type = %image.media_type(),
        payload_len = image.data.len(),
        "decoded image payload"
    );

    // ── Step 3: Select the instruction prompt ────────────────────────────
    let instruction = prompts::instruction_for(valid.framework);

    // ── Step 4: Call the vision API (the only await) ─────────────────────
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| GenerateError::Internal(format!("HTTP client: {e}")))?;
    let reply = vision::request_completion(&http, config, &image, instruction).await?;

    // ── Step 5: Normalize the reply into code ────────────────────────────
    let code = normalize::normalize(&reply.content);

    let duration_ms = start.elapsed().as_millis() as u64;
    info!(
        framework = %valid.framework,
        code_len = code.len(),
        input_tokens = reply.usage.input_tokens,
        output_tokens = reply.usage.output_tokens,
        duration_ms,
        "generation complete"
    );

    Ok(GenerationOutput {
        code,
        framework: valid.framework,
        model: config.model.clone(),
        input_tokens: reply.usage.input_tokens,
        output_tokens: reply.usage.output_tokens,
        duration_ms,
    })
}
