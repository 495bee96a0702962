use crate::{ExitCode, OutputOptions};
use anyhow::{Context, Result};
use colored::Colorize;
use graphql_config::{find_config, load_config, IdeHelperConfig, OrderByConfig};
use graphql_directives::{builtin_namespace, DirectiveRegistry};
use graphql_ide_helper::{
    ExportOptions, ExportReport, SchemaIntrospectionExporter, StubSource, DEFAULT_COMMAND,
};
use graphql_schema::{OrderByInput, OrderByTypeInjector, SchemaBuilder};
use std::path::{Path, PathBuf};

/// Stub written when the config does not name a stub source.
const BUNDLED_STUB: &str = include_str!("../../stubs/ide-helper.php");

/// Loaded config and the directory its relative paths resolve against.
struct ProjectContext {
    config: IdeHelperConfig,
    base_dir: PathBuf,
}

impl ProjectContext {
    /// Load the config from `config_path`, or search for one from the current
    /// directory. Without a config file every setting takes its default.
    fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let current_dir = std::env::current_dir().context("Failed to read current directory")?;

        let config_path = match config_path {
            Some(path) => Some(path),
            None => find_config(&current_dir).context("Failed to search for config")?,
        };

        let Some(config_path) = config_path else {
            tracing::info!(dir = %current_dir.display(), "No config file found, using defaults");
            return Ok(Self {
                config: IdeHelperConfig::default(),
                base_dir: current_dir,
            });
        };

        let config = load_config(&config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()))?;

        let base_dir = match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => current_dir,
        };

        Ok(Self { config, base_dir })
    }
}

#[tracing::instrument(skip_all)]
pub fn run(
    config_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    output_opts: OutputOptions,
) -> Result<ExitCode> {
    let ctx = match ProjectContext::load(config_path) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{} {e:#}", "✗ Failed to load config:".red());
            return Ok(ExitCode::ConfigError);
        }
    };

    let schema_files = match ctx.config.schema_files(&ctx.base_dir) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("{} {e}", "✗ Invalid schema pattern:".red());
            return Ok(ExitCode::ConfigError);
        }
    };

    let mut builder = SchemaBuilder::new();
    for path in &schema_files {
        match std::fs::read_to_string(path) {
            Ok(text) => builder.add_source(path.display().to_string(), text),
            Err(e) => {
                eprintln!("{} {}: {e}", "✗ Failed to read schema".red(), path.display());
                return Ok(ExitCode::IoError);
            }
        }
    }
    builder.add_hook(order_by_injector(&ctx.config.order_by));

    let schema = match builder.build() {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("{} {e}", "✗ Failed to build schema:".red());
            return Ok(ExitCode::SchemaError);
        }
    };

    let directives = DirectiveRegistry::new().with_namespace(builtin_namespace());
    for name in unknown_namespaces(&directives, &ctx.config.directive_namespaces) {
        eprintln!(
            "{} {}",
            "⚠".yellow().bold(),
            format!("Unknown directive namespace \"{name}\", skipping it").yellow()
        );
    }

    let options = export_options(&ctx.config, &ctx.base_dir, output_dir);
    let report = SchemaIntrospectionExporter::new(&directives, &schema.registry, options).run();

    print_report(&report, output_opts);

    if report.is_success() {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::ExportError)
    }
}

/// Build the ordering hook from config, keeping defaults for unset fields.
fn order_by_injector(config: &OrderByConfig) -> OrderByTypeInjector {
    let mut injector = OrderByTypeInjector::new();
    if let Some(name) = &config.name {
        injector = injector.with_name(name);
    }
    if let Some(description) = &config.description {
        injector = injector.with_description(description);
    }
    if let Some(column_type) = &config.column_type {
        injector = injector.with_column_type(column_type);
    }

    for input in &config.additional {
        let mut additional = OrderByInput::named(&input.name);
        if let Some(description) = &input.description {
            additional.description.clone_from(description);
        }
        if let Some(column_type) = &input.column_type {
            additional.column_type.clone_from(column_type);
        }
        injector = injector.with_additional(additional);
    }

    injector
}

/// Configured namespace names the registry does not provide.
fn unknown_namespaces<'a>(registry: &DirectiveRegistry, configured: &'a [String]) -> Vec<&'a str> {
    configured
        .iter()
        .map(String::as_str)
        .filter(|name| registry.namespace(name).is_none())
        .collect()
}

fn export_options(
    config: &IdeHelperConfig,
    base_dir: &Path,
    output_dir: Option<PathBuf>,
) -> ExportOptions {
    let output_dir = output_dir.unwrap_or_else(|| config.output_dir(base_dir));

    let stub_source = config
        .stub
        .source
        .as_ref()
        .map_or(StubSource::Bundled(BUNDLED_STUB), |source| {
            StubSource::Path(base_dir.join(source))
        });

    ExportOptions::new(
        output_dir,
        stub_source,
        &config.stub.output,
        &config.stub.opening_marker,
    )
    .with_namespaces(&config.directive_namespaces)
    .with_command(DEFAULT_COMMAND)
}

fn print_report(report: &ExportReport, output_opts: OutputOptions) {
    for outcome in &report.stages {
        if let Some(error) = outcome.error() {
            eprintln!(
                "{} {}",
                "✗".red().bold(),
                format!("Failed to export {}: {error}", outcome.stage).red()
            );
        } else if let Some(message) = outcome.confirmation() {
            if output_opts.show_info {
                println!("{} {message}", "✓".green());
            }
        }
    }

    let wrote_any = report.stages.iter().any(|outcome| outcome.result.is_ok());
    if output_opts.show_info && wrote_any {
        println!();
        println!(
            "{}",
            "It is recommended to add them to your .gitignore file.".dimmed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_config::{load_config_from_str, OrderByInputConfig};
    use graphql_schema::SchemaManipulator;

    fn config(yaml: &str) -> IdeHelperConfig {
        load_config_from_str(yaml, Path::new("graphql-ide-helper.yml")).unwrap()
    }

    #[test]
    fn test_order_by_injector_defaults() {
        let injector = order_by_injector(&OrderByConfig::default());
        assert_eq!(injector.clause(), &OrderByInput::default());
    }

    #[test]
    fn test_order_by_injector_from_config() {
        let order_by = OrderByConfig {
            name: Some("Sort".to_string()),
            column_type: Some("ID".to_string()),
            additional: vec![OrderByInputConfig {
                name: "SortByInt".to_string(),
                description: None,
                column_type: Some("Int".to_string()),
            }],
            ..OrderByConfig::default()
        };

        let mut document = graphql_schema::SchemaDocument::new();
        order_by_injector(&order_by)
            .manipulate(&mut document)
            .unwrap();

        assert!(document.contains_type("Sort"));
        assert!(document.contains_type("SortByInt"));
        assert!(!document.contains_type("OrderByClause"));
    }

    #[test]
    fn test_unknown_namespaces() {
        let registry = DirectiveRegistry::new().with_namespace(builtin_namespace());
        let configured = ["app".to_string(), "builtin".to_string(), "vendor".to_string()];

        assert_eq!(unknown_namespaces(&registry, &configured), vec!["app", "vendor"]);
        assert!(unknown_namespaces(&registry, &["builtin".to_string()]).is_empty());
    }

    #[test]
    fn test_export_options_resolve_against_base_dir() {
        let config = config("outputDir: ide\nstub:\n  source: stubs/custom.php\n");
        let options = export_options(&config, Path::new("/project"), None);

        assert_eq!(options.output_dir, PathBuf::from("/project/ide"));
        assert_eq!(
            options.stub_source,
            StubSource::Path(PathBuf::from("/project/stubs/custom.php"))
        );
        assert_eq!(options.namespaces, vec!["builtin".to_string()]);
        assert_eq!(options.command, "graphql ide-helper");
    }

    #[test]
    fn test_output_dir_flag_wins() {
        let config = config("outputDir: ide\n");
        let output_dir = Some(PathBuf::from("/tmp/out"));
        let options = export_options(&config, Path::new("/project"), output_dir);

        assert_eq!(options.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(options.stub_source, StubSource::Bundled(BUNDLED_STUB));
        assert_eq!(options.stub_output, PathBuf::from("_graphql_ide_helper.php"));
    }

    #[test]
    fn test_bundled_stub_starts_with_marker() {
        assert!(BUNDLED_STUB.starts_with(graphql_config::DEFAULT_OPENING_MARKER));
    }
}
