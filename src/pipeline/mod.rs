//! Pipeline stages for screenshot-to-code generation.
//!
//! Each submodule implements exactly one transformation step. Keeping stages
//! separate makes each independently testable and lets us swap
//! implementations (e.g. a different vision backend) without touching other
//! stages.
//!
//! ## Data Flow
//!
//! ```text
//! validate ──▶ decode ──▶ vision ──▶ normalize
//! (fields,     (data URL  (one API   (filter text,
//!  key check)   grammar)   call)      strip fences)
//! ```
//!
//! 1. [`validate`]  — check required fields, framework name, API credential
//! 2. [`decode`]    — split the data URL into media subtype + base64 data
//! 3. [`vision`]    — build and send the Messages API request; the only
//!    stage with network I/O and the pipeline's only suspension point
//! 4. [`normalize`] — keep textual reply segments, strip outer code fences
//!
//! Prompt selection sits between [`decode`] and [`vision`] but is a pure
//! lookup and lives in [`crate::prompts`].

pub mod decode;
pub mod normalize;
pub mod validate;
pub mod vision;
