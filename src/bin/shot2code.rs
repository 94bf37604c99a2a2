//! CLI binary for shot2code.
//!
//! A thin shim over the library crate with two modes:
//!
//! * `shot2code serve`    — HTTP server exposing `POST /api/generate`
//! * `shot2code generate` — one-shot client: screenshot file in, code out
//!
//! All pipeline logic lives in the library; this file only maps HTTP and
//! CLI surfaces onto [`shot2code::generate`].

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use clap::{Parser, Subcommand};
use serde_json::json;
use shot2code::{generate, Framework, GenerateRequest, GenerationConfig};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Start the HTTP server (presentation layer posts to /api/generate)
  shot2code serve --addr 127.0.0.1:3000

  # One-shot: screenshot file → React component on stdout
  shot2code generate screenshot.png --framework react

  # Vue component, written to a file
  shot2code generate dashboard.jpg -f vue -o Dashboard.vue

REQUEST CONTRACT (serve mode):
  POST /api/generate
    { "image": "data:image/png;base64,...", "framework": "react|vue|html" }
  → 200 { "code": "..." }
  → 4xx/5xx { "error": "..." }   (upstream API status forwarded verbatim)

ENVIRONMENT VARIABLES:
  ANTHROPIC_API_KEY   Anthropic API key (required to generate)
  ANTHROPIC_MODEL     Override the model ID (default: claude-sonnet-4-20250514)
  SHOT2CODE_ADDR      Listen address for serve mode

SETUP:
  1. Set API key:  export ANTHROPIC_API_KEY=sk-ant-...
  2. Serve:        shot2code serve
"#;

/// Generate front-end code from UI screenshots using Vision LLMs.
#[derive(Parser, Debug)]
#[command(
    name = "shot2code",
    version,
    about = "Generate React, Vue, or HTML code from UI screenshots using Vision LLMs",
    after_long_help = AFTER_HELP
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, global = true, env = "SHOT2CODE_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true, env = "SHOT2CODE_QUIET")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server.
    Serve {
        /// Listen address.
        #[arg(long, env = "SHOT2CODE_ADDR", default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },

    /// Generate code for a single screenshot file and exit.
    Generate {
        /// PNG or JPEG screenshot file.
        image: PathBuf,

        /// Target framework.
        #[arg(short, long, value_enum, default_value = "react")]
        framework: FrameworkArg,

        /// Write the code to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum FrameworkArg {
    React,
    Vue,
    Html,
}

impl From<FrameworkArg> for Framework {
    fn from(v: FrameworkArg) -> Self {
        match v {
            FrameworkArg::React => Framework::React,
            FrameworkArg::Vue => Framework::Vue,
            FrameworkArg::Html => Framework::Html,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GenerationConfig::from_env().context("Invalid configuration")?;

    match cli.command {
        Command::Serve { addr } => serve(addr, config).await,
        Command::Generate {
            image,
            framework,
            output,
        } => generate_once(&image, framework.into(), output.as_deref(), &config, cli.quiet).await,
    }
}

// ── Serve mode ───────────────────────────────────────────────────────────

async fn serve(addr: SocketAddr, config: GenerationConfig) -> Result<()> {
    if config.api_key.is_empty() {
        // Start anyway: requests will answer 500 with an actionable message,
        // which is friendlier during setup than refusing to boot.
        warn!("ANTHROPIC_API_KEY is not set; all generate requests will fail");
    }

    let app = app(Arc::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "shot2code listening");

    axum::serve(listener, app)
        .await
        .context("Server terminated")?;
    Ok(())
}

/// Build the router. Split out so it stays testable without a socket.
fn app(config: Arc<GenerationConfig>) -> Router {
    Router::new()
        .route("/api/generate", post(generate_handler))
        .route("/health", get(health_handler))
        .with_state(config)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// `POST /api/generate` — the single inbound operation of the core.
///
/// Success: `200 {"code": ...}`. Failure: `{"error": ...}` with the status
/// from [`shot2code::GenerateError::status_code`]; the caller never sees a
/// partially-formed success body.
async fn generate_handler(
    State(config): State<Arc<GenerationConfig>>,
    request: Result<Json<GenerateRequest>, JsonRejection>,
) -> Response {
    // A body that is not JSON at all still gets the {"error": ...} shape.
    let Json(request) = match request {
        Ok(body) => body,
        Err(rejection) => {
            warn!(error = %rejection, "rejecting unparseable request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("Invalid request body: {rejection}") })),
            )
                .into_response();
        }
    };

    match generate(&request, &config).await {
        Ok(output) => (StatusCode::OK, Json(json!({ "code": output.code }))).into_response(),
        Err(e) => {
            let status =
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            if status.is_server_error() {
                error!(status = status.as_u16(), error = %e, "generation failed");
            } else {
                warn!(status = status.as_u16(), error = %e, "request rejected");
            }
            (status, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}

// ── One-shot mode ────────────────────────────────────────────────────────

/// Read a screenshot file, wrap it as a data URL, and run one generation.
///
/// The data-URL encoding normally done by the browser happens here instead,
/// since in this mode the CLI *is* the presentation layer.
async fn generate_once(
    image_path: &std::path::Path,
    framework: Framework,
    output: Option<&std::path::Path>,
    config: &GenerationConfig,
    quiet: bool,
) -> Result<()> {
    let bytes = std::fs::read(image_path)
        .with_context(|| format!("Failed to read '{}'", image_path.display()))?;

    let subtype = match image::guess_format(&bytes) {
        Ok(image::ImageFormat::Png) => "png",
        Ok(image::ImageFormat::Jpeg) => "jpeg",
        Ok(other) => bail!(
            "Unsupported image format {:?} in '{}': use PNG or JPEG",
            other,
            image_path.display()
        ),
        Err(_) => bail!("'{}' is not a recognisable image", image_path.display()),
    };

    let request = GenerateRequest {
        image: Some(format!("data:image/{subtype};base64,{}", STANDARD.encode(&bytes))),
        framework: Some(framework.as_str().to_string()),
    };

    let result = generate(&request, config)
        .await
        .context("Generation failed")?;

    match output {
        Some(path) => {
            std::fs::write(path, &result.code)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            if !quiet {
                eprintln!("Wrote {} bytes to {}", result.code.len(), path.display());
            }
        }
        None => {
            println!("{}", result.code);
        }
    }

    if !quiet {
        eprintln!(
            "{} · {} tokens in / {} tokens out · {}ms",
            result.model, result.input_tokens, result.output_tokens, result.duration_ms
        );
    }

    Ok(())
}
