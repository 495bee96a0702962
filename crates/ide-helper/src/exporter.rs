//! The three-stage IDE helper export.

use crate::directives::render_directive_definitions;
use crate::output::{banner, remove_if_exists, write_atomic, DEFAULT_COMMAND};
use crate::stub::{stub_with_banner, StubSource};
use crate::types::render_type_definitions;
use crate::{ExportError, Result};
use graphql_directives::DirectiveRegistry;
use graphql_schema::TypeRegistry;
use std::fmt;
use std::path::{Path, PathBuf};

/// File holding every known directive definition.
pub const DIRECTIVES_FILE: &str = "schema-directives.graphql";

/// File holding the types created by schema-build hooks.
pub const PROGRAMMATIC_TYPES_FILE: &str = "programmatic-types.graphql";

/// Settings for one export run.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Directory receiving all generated files
    pub output_dir: PathBuf,
    /// Directive namespaces to scan, in priority order
    pub namespaces: Vec<String>,
    pub stub_source: StubSource,
    /// Stub file name, relative to `output_dir`
    pub stub_output: PathBuf,
    pub opening_marker: String,
    /// Command named in the banner
    pub command: String,
}

impl ExportOptions {
    #[must_use]
    pub fn new(
        output_dir: impl Into<PathBuf>,
        stub_source: StubSource,
        stub_output: impl Into<PathBuf>,
        opening_marker: impl Into<String>,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            namespaces: Vec::new(),
            stub_source,
            stub_output: stub_output.into(),
            opening_marker: opening_marker.into(),
            command: DEFAULT_COMMAND.to_string(),
        }
    }

    #[must_use]
    pub fn with_namespaces<I, S>(mut self, namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.namespaces = namespaces.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }
}

/// One export stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Directives,
    ProgrammaticTypes,
    Stub,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directives => write!(f, "directive definitions"),
            Self::ProgrammaticTypes => write!(f, "programmatic types"),
            Self::Stub => write!(f, "stub"),
        }
    }
}

/// What a successful stage did on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileAction {
    Wrote(PathBuf),
    /// A stale file was deleted because there was nothing to write
    Removed(PathBuf),
    /// Nothing to write and nothing to clean up
    Skipped,
}

/// Result of one stage.
#[derive(Debug)]
pub struct StageOutcome {
    pub stage: Stage,
    pub result: Result<FileAction>,
}

impl StageOutcome {
    /// Human-readable confirmation, or `None` when the stage failed.
    #[must_use]
    pub fn confirmation(&self) -> Option<String> {
        let action = self.result.as_ref().ok()?;
        let message = match (self.stage, action) {
            (Stage::Directives, FileAction::Wrote(path)) => {
                format!("Wrote schema directive definitions to {}.", path.display())
            }
            (Stage::ProgrammaticTypes, FileAction::Wrote(path)) => format!(
                "Wrote definitions for programmatically registered types to {}.",
                path.display()
            ),
            (Stage::ProgrammaticTypes, FileAction::Removed(path)) => format!(
                "There are no programmatically registered types, removed {}.",
                path.display()
            ),
            (Stage::Stub, FileAction::Wrote(path)) => {
                format!("Wrote stub definitions to {}.", path.display())
            }
            (stage, FileAction::Removed(path)) => {
                format!("Removed {stage} file {}.", path.display())
            }
            (Stage::ProgrammaticTypes, FileAction::Skipped) => {
                "There are no programmatically registered types.".to_string()
            }
            (stage, FileAction::Skipped) => format!("Nothing to write for {stage}."),
        };
        Some(message)
    }

    #[must_use]
    pub fn error(&self) -> Option<&ExportError> {
        self.result.as_ref().err()
    }
}

/// Outcomes of every stage, in run order.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub stages: Vec<StageOutcome>,
}

impl ExportReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.stages.iter().all(|outcome| outcome.result.is_ok())
    }

    pub fn errors(&self) -> impl Iterator<Item = (Stage, &ExportError)> {
        self.stages
            .iter()
            .filter_map(|outcome| outcome.error().map(|error| (outcome.stage, error)))
    }

    #[must_use]
    pub fn stage(&self, stage: Stage) -> Option<&StageOutcome> {
        self.stages.iter().find(|outcome| outcome.stage == stage)
    }
}

/// Writes the IDE helper files for a directive registry and a built schema.
#[derive(Debug)]
pub struct SchemaIntrospectionExporter<'a> {
    directives: &'a DirectiveRegistry,
    types: &'a TypeRegistry,
    options: ExportOptions,
    banner: String,
}

impl<'a> SchemaIntrospectionExporter<'a> {
    #[must_use]
    pub fn new(
        directives: &'a DirectiveRegistry,
        types: &'a TypeRegistry,
        options: ExportOptions,
    ) -> Self {
        let banner = banner(&options.command);
        Self {
            directives,
            types,
            options,
            banner,
        }
    }

    #[must_use]
    pub fn directives_path(&self) -> PathBuf {
        self.options.output_dir.join(DIRECTIVES_FILE)
    }

    #[must_use]
    pub fn programmatic_types_path(&self) -> PathBuf {
        self.options.output_dir.join(PROGRAMMATIC_TYPES_FILE)
    }

    #[must_use]
    pub fn stub_path(&self) -> PathBuf {
        self.options.output_dir.join(&self.options.stub_output)
    }

    /// Run all stages. A failing stage does not stop the ones after it.
    #[tracing::instrument(skip(self), fields(output_dir = %self.options.output_dir.display()))]
    pub fn run(&self) -> ExportReport {
        let mut report = ExportReport::default();
        for (stage, result) in [
            (Stage::Directives, self.export_directives()),
            (Stage::ProgrammaticTypes, self.export_programmatic_types()),
            (Stage::Stub, self.export_stub()),
        ] {
            if let Err(error) = &result {
                tracing::error!(%stage, %error, "Export stage failed");
            }
            report.stages.push(StageOutcome { stage, result });
        }
        report
    }

    /// Write [`DIRECTIVES_FILE`]. Nothing is written if any definition is invalid.
    pub fn export_directives(&self) -> Result<FileAction> {
        let definitions = render_directive_definitions(self.directives, &self.options.namespaces)?;
        let path = self.directives_path();
        write_generated(&path, &self.banner, &definitions)?;
        Ok(FileAction::Wrote(path))
    }

    /// Write [`PROGRAMMATIC_TYPES_FILE`], or remove it when there are no such types.
    pub fn export_programmatic_types(&self) -> Result<FileAction> {
        let path = self.programmatic_types_path();
        let types = self.types.resolved_types();

        if types.is_empty() {
            tracing::debug!("No programmatic types");
            return Ok(if remove_if_exists(&path)? {
                FileAction::Removed(path)
            } else {
                FileAction::Skipped
            });
        }

        write_generated(&path, &self.banner, &render_type_definitions(types))?;
        Ok(FileAction::Wrote(path))
    }

    pub fn export_stub(&self) -> Result<FileAction> {
        let stub = self.options.stub_source.read()?;
        let path = self.stub_path();
        let content = stub_with_banner(&stub, &self.options.opening_marker, &self.banner);
        write_atomic(&path, &content)?;
        Ok(FileAction::Wrote(path))
    }
}

fn write_generated(path: &Path, banner: &str, body: &str) -> Result<()> {
    let content = format!("{banner}\n{body}\n");
    write_atomic(path, content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(stage: Stage, action: FileAction) -> StageOutcome {
        StageOutcome {
            stage,
            result: Ok(action),
        }
    }

    #[test]
    fn test_confirmations() {
        let path = PathBuf::from("out/schema-directives.graphql");
        assert_eq!(
            outcome(Stage::Directives, FileAction::Wrote(path)).confirmation(),
            Some("Wrote schema directive definitions to out/schema-directives.graphql.".into())
        );
        assert_eq!(
            outcome(Stage::ProgrammaticTypes, FileAction::Skipped).confirmation(),
            Some("There are no programmatically registered types.".into())
        );
    }

    #[test]
    fn test_failed_stage_has_no_confirmation() {
        let failed = StageOutcome {
            stage: Stage::Stub,
            result: Err(ExportError::ReadStub {
                path: PathBuf::from("stub.php"),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        };
        assert!(failed.confirmation().is_none());

        let report = ExportReport {
            stages: vec![outcome(Stage::Directives, FileAction::Skipped), failed],
        };
        assert!(!report.is_success());
        let failed_stages: Vec<Stage> = report.errors().map(|(stage, _)| stage).collect();
        assert_eq!(failed_stages, vec![Stage::Stub]);
    }
}
