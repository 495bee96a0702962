use crate::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Namespace holding the directives that ship with the toolkit.
pub const DEFAULT_DIRECTIVE_NAMESPACE: &str = "builtin";

/// File name of the generated stub, relative to the output directory.
pub const DEFAULT_STUB_OUTPUT: &str = "_graphql_ide_helper.php";

/// Prologue of the stub file that the banner is spliced behind.
pub const DEFAULT_OPENING_MARKER: &str = "<?php\n";

/// Top-level IDE helper configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeHelperConfig {
    /// Schema source files (paths or glob patterns relative to the config file)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaConfig>,

    /// Directive namespaces to scan, in priority order
    #[serde(default = "default_directive_namespaces")]
    pub directive_namespaces: Vec<String>,

    /// Directory the generated files are written to (default: config directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    #[serde(default)]
    pub stub: StubConfig,

    #[serde(default)]
    pub order_by: OrderByConfig,
}

impl Default for IdeHelperConfig {
    fn default() -> Self {
        Self {
            schema: None,
            directive_namespaces: default_directive_namespaces(),
            output_dir: None,
            stub: StubConfig::default(),
            order_by: OrderByConfig::default(),
        }
    }
}

fn default_directive_namespaces() -> Vec<String> {
    vec![DEFAULT_DIRECTIVE_NAMESPACE.to_string()]
}

impl IdeHelperConfig {
    /// Resolve the output directory against the directory holding the config.
    #[must_use]
    pub fn output_dir(&self, base_dir: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => base_dir.join(dir),
            None => base_dir.to_path_buf(),
        }
    }

    /// Expand the configured schema patterns into concrete files.
    ///
    /// Files are returned in pattern order; a file matched by several patterns
    /// is only returned once.
    #[tracing::instrument(skip(self), fields(base = %base_dir.display()))]
    pub fn schema_files(&self, base_dir: &Path) -> Result<Vec<PathBuf>> {
        let Some(schema) = &self.schema else {
            return Ok(Vec::new());
        };

        let mut files = Vec::new();
        let mut seen = HashSet::new();

        for pattern in schema.patterns() {
            let full_pattern = base_dir.join(pattern).display().to_string();
            let entries = glob::glob(&full_pattern).map_err(|e| ConfigError::Pattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;

            for entry in entries {
                let path = entry.map_err(|e| ConfigError::Pattern {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })?;
                if path.is_file() && seen.insert(path.clone()) {
                    files.push(path);
                }
            }
        }

        tracing::debug!(files = files.len(), "Resolved schema files");
        Ok(files)
    }
}

/// Schema source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaConfig {
    /// Single file path or glob pattern
    Path(String),
    /// Multiple file paths or glob patterns
    Paths(Vec<String>),
}

impl SchemaConfig {
    #[must_use]
    pub fn patterns(&self) -> Vec<&str> {
        match self {
            Self::Path(path) => vec![path.as_str()],
            Self::Paths(paths) => paths.iter().map(String::as_str).collect(),
        }
    }
}

/// Static stub export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StubConfig {
    /// Stub source file; the bundled stub is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    #[serde(default = "default_stub_output")]
    pub output: String,

    #[serde(default = "default_opening_marker")]
    pub opening_marker: String,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            source: None,
            output: default_stub_output(),
            opening_marker: default_opening_marker(),
        }
    }
}

fn default_stub_output() -> String {
    DEFAULT_STUB_OUTPUT.to_string()
}

fn default_opening_marker() -> String {
    DEFAULT_OPENING_MARKER.to_string()
}

/// Settings for the injected ordering types.
///
/// Unset fields fall back to the injector's defaults (`OrderByClause`,
/// `String` columns).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderByConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_type: Option<String>,

    /// Extra ordering inputs, e.g. for non-string columns
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional: Vec<OrderByInputConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderByInputConfig {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_type: Option<String>,
}
