//! Error types for definition loading and declaration generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading widget definitions or generating the
/// declaration document. All of them are fatal: generation aborts with no
/// partial output, and the invoking build step is expected to fail.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Filesystem I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failure, with the offending file or member for context.
    #[error("failed to parse {context}: {source}")]
    Parse {
        /// File path or member path being parsed.
        context: String,
        /// Underlying serde_json error.
        source: serde_json::Error,
    },

    /// A definition document declares neither `type` nor `object`.
    #[error("definition {} has neither \"type\" nor \"object\"", .0.display())]
    MissingName(PathBuf),

    /// Two definition documents resolve to the same component name.
    #[error("duplicate component definition: {0}")]
    DuplicateComponent(String),

    /// A method's overload list is not a JSON array.
    #[error("method definition is not an array: {component}.{method}")]
    SchemaShape {
        /// Owning component name.
        component: String,
        /// Method name whose value is malformed.
        method: String,
    },

    /// A description field is not textual.
    #[error("description is not a string: {0}")]
    DescriptionType(String),

    /// A component declares more than one non-base structural include.
    #[error("multiple inheritance: {0}")]
    MultipleSupertype(String),

    /// An include on the propagation frontier has no definition document.
    #[error("unknown include '{include}' referenced by '{component}'")]
    UnknownInclude {
        /// Component declaring the include.
        component: String,
        /// The include name that could not be resolved.
        include: String,
    },

    /// The include relation contains a cycle, so event propagation cannot
    /// reach a fixed point.
    #[error("include cycle detected involving '{0}'")]
    IncludeCycle(String),
}
