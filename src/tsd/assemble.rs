//! Document assembly: resolve includes once, then concatenate the static
//! preamble and every component declaration into the final text.

use tracing::debug;

use super::component::emit_component;
use super::header::preamble;
use super::model::{SchemaSet, UNIVERSAL_BASE};
use super::resolve::resolve_includes;
use super::text::LineBuffer;
use crate::error::GenerateError;

/// Generate the complete declaration document for the given definition set.
///
/// Components are emitted in the set's insertion order (the order their
/// definition files were loaded), never re-sorted. Any error raised by a
/// nested emitter aborts the whole assembly; no partial output is produced.
pub fn assemble(set: &mut SchemaSet, version: &str) -> Result<String, GenerateError> {
    resolve_includes(set, UNIVERSAL_BASE)?;
    debug!(components = set.len(), version, "Assembling declaration document.");

    let mut out = LineBuffer::new();
    out.append(&preamble(version));
    out.blank();
    for schema in set.iter() {
        emit_component(&mut out, schema)?;
    }
    out.blank();
    Ok(out.into_string())
}
