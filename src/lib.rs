//! `tsdgen` turns a set of JSON widget/API definition documents into a
//! single TypeScript declaration file describing a UI component library's
//! public surface: classes, constructor options, fields, methods,
//! properties, and the event-subscription method family synthesized from
//! each component's resolved event set.

pub mod error;
pub mod loader;
pub mod tsd;

pub use error::GenerateError;
pub use loader::load_definitions;
pub use tsd::generate;
