use crate::{ConfigError, IdeHelperConfig, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference
pub const CONFIG_FILES: &[&str] = &[
    "graphql-ide-helper.yml",
    "graphql-ide-helper.yaml",
    "graphql-ide-helper.json",
    "graphql-ide-helper.toml",
];

/// Find a config file by walking up the directory tree from the given start directory.
/// Returns the path to the config file if found.
#[tracing::instrument(fields(start = %start_dir.display()))]
pub fn find_config(start_dir: &Path) -> Result<Option<PathBuf>> {
    let mut current_dir = start_dir.to_path_buf();
    let mut checked_dirs = 0;

    loop {
        tracing::trace!(dir = %current_dir.display(), "Checking directory for config files");
        for file_name in CONFIG_FILES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                tracing::info!(path = %config_path.display(), checked_dirs, "Found config file");
                return Ok(Some(config_path));
            }
        }

        checked_dirs += 1;
        if !current_dir.pop() {
            tracing::debug!(checked_dirs, "No config file found");
            break;
        }
    }

    Ok(None)
}

/// Load a config from the specified path.
/// The format is detected from the file extension.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<IdeHelperConfig> {
    tracing::debug!("Reading config file");
    let contents = fs::read_to_string(path)?;
    let config = load_config_from_str(&contents, path)?;
    tracing::info!(
        namespaces = config.directive_namespaces.len(),
        "Config loaded successfully"
    );
    Ok(config)
}

/// Load a config from a string.
/// The path is used for error messages and format detection.
#[tracing::instrument(skip(contents), fields(path = %path.display(), size = contents.len()))]
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<IdeHelperConfig> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    let config = match extension {
        "yml" | "yaml" => parse_yaml(contents, path)?,
        "json" => parse_json(contents, path)?,
        "toml" => parse_toml(contents, path)?,
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    validate_config(&config, path)?;
    Ok(config)
}

fn parse_yaml(contents: &str, path: &Path) -> Result<IdeHelperConfig> {
    // An empty YAML document means "all defaults".
    if contents.trim().is_empty() {
        return Ok(IdeHelperConfig::default());
    }
    serde_saphyr::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("YAML parse error: {e}"),
    })
}

fn parse_json(contents: &str, path: &Path) -> Result<IdeHelperConfig> {
    serde_json::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("JSON parse error: {e}"),
    })
}

fn parse_toml(contents: &str, path: &Path) -> Result<IdeHelperConfig> {
    toml::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("TOML parse error: {e}"),
    })
}

#[tracing::instrument(skip(config, path), fields(path = %path.display()))]
fn validate_config(config: &IdeHelperConfig, path: &Path) -> Result<()> {
    let invalid = |message: String| ConfigError::Invalid {
        path: path.to_path_buf(),
        message,
    };

    if config
        .directive_namespaces
        .iter()
        .any(|namespace| namespace.trim().is_empty())
    {
        return Err(invalid("Directive namespace names cannot be empty".to_string()));
    }

    if let Some(schema) = &config.schema {
        let patterns = schema.patterns();
        if patterns.is_empty() {
            return Err(invalid("Schema configuration is empty".to_string()));
        }
        if patterns.iter().any(|pattern| pattern.trim().is_empty()) {
            return Err(invalid("Schema configuration has an empty path".to_string()));
        }
    }

    if config.stub.opening_marker.is_empty() {
        return Err(invalid("Stub opening marker cannot be empty".to_string()));
    }

    if config.stub.output.trim().is_empty() {
        return Err(invalid("Stub output file name cannot be empty".to_string()));
    }

    for input in &config.order_by.additional {
        if input.name.trim().is_empty() {
            return Err(invalid("Additional orderBy inputs need a name".to_string()));
        }
    }

    tracing::debug!("Config validation passed");
    Ok(())
}
