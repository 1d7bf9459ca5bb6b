//! Declaration generation pipeline.
//!
//! The pipeline mirrors the shape of the input-to-output transformation:
//! 1. Parse: JSON documents -> raw definition structs (`schema`)
//! 2. Normalize: raw definitions -> typed component model (`normalize`, `model`)
//! 3. Resolve: fixed-point propagation of inherited events (`resolve`)
//! 4. Emit: component model -> declaration text (`members`, `component`,
//!    `assemble`), written through the shared line buffer (`text`)
//!
//! ## Module structure
//!
//! - `schema`: serde structs mirroring the JSON definition documents
//! - `normalize`: raw definitions -> [`model::ComponentSchema`]
//! - `model`: the typed component model and the ordered [`model::SchemaSet`]
//! - `resolve`: include resolution (event-set inheritance)
//! - `text`: indentation-aware line buffer
//! - `doc`: description wrapping and block-comment construction
//! - `members`: per-member declaration emitters
//! - `component`: per-component orchestration
//! - `assemble`: whole-document assembly with the static preamble
//! - `header`: the static preamble of built-in type aliases

mod assemble;
mod component;
mod doc;
mod header;
mod members;
pub mod model;
pub mod normalize;
mod resolve;
pub mod schema;
mod text;

use crate::error::GenerateError;
use model::SchemaSet;

/// Generate the complete TypeScript declaration document for a definition
/// set, substituting `version` into the static preamble.
///
/// Resolution mutates the set in place (inherited events are merged into
/// each component's event map); afterwards the set is treated as read-only.
pub fn generate(set: &mut SchemaSet, version: &str) -> Result<String, GenerateError> {
    assemble::assemble(set, version)
}
