//! IDE helper files for GraphQL schemas.
//!
//! [`SchemaIntrospectionExporter`] writes three files into an output directory
//! so that editors can understand a schema that is partly defined in code:
//!
//! - [`DIRECTIVES_FILE`]: the definition of every directive found in the
//!   configured namespaces,
//! - [`PROGRAMMATIC_TYPES_FILE`]: types added by schema-build hooks, removed
//!   again when there are none,
//! - a stub file copied from a static source.
//!
//! Every file starts with the banner produced by [`banner`].

mod directives;
mod error;
mod exporter;
mod output;
mod stub;
mod types;

pub use directives::{render_directive_definitions, DEPRECATED_DIRECTIVE};
pub use error::{ExportError, Result};
pub use exporter::{
    ExportOptions, ExportReport, FileAction, SchemaIntrospectionExporter, Stage, StageOutcome,
    DIRECTIVES_FILE, PROGRAMMATIC_TYPES_FILE,
};
pub use output::{banner, DEFAULT_COMMAND};
pub use stub::{stub_with_banner, StubSource};
pub use types::render_type_definitions;
