//! End-to-end export runs against a temporary output directory.

use graphql_directives::{
    builtin_namespace, DirectiveNamespace, DirectiveRegistry, BUILTIN_NAMESPACE,
};
use graphql_ide_helper::{
    banner, ExportError, ExportOptions, FileAction, SchemaIntrospectionExporter, Stage,
    StubSource, DEFAULT_COMMAND, DIRECTIVES_FILE, PROGRAMMATIC_TYPES_FILE,
};
use graphql_schema::{OrderByTypeInjector, SchemaBuilder, TypeRegistry};
use graphql_test_utils::assertions::{count_occurrences, format_messages, strip_banner};
use graphql_test_utils::fixtures::{broken, BASIC_SCHEMA, ORDERED_SCHEMA, STUB};
use graphql_test_utils::{
    fixture_registry, TestWorkspace, APP_NAMESPACE, BROKEN_NAMESPACE, VENDOR_NAMESPACE,
};

const STUB_OUTPUT: &str = "_graphql_ide_helper.php";
const MARKER: &str = "<?php\n";

fn options(workspace: &TestWorkspace, namespaces: &[&str]) -> ExportOptions {
    ExportOptions::new(
        workspace.join("generated"),
        StubSource::Bundled(STUB),
        STUB_OUTPUT,
        MARKER,
    )
    .with_namespaces(namespaces.iter().copied())
}

fn programmatic_types(schema: &str) -> TypeRegistry {
    SchemaBuilder::new()
        .with_source("schema.graphql", schema)
        .with_hook(OrderByTypeInjector::new())
        .build()
        .unwrap()
        .registry
}

fn generated(workspace: &TestWorkspace, file: &str) -> String {
    workspace.read(format!("generated/{file}"))
}

#[test]
fn full_run_writes_all_files() {
    let workspace = TestWorkspace::new();
    let registry = DirectiveRegistry::new().with_namespace(builtin_namespace());
    let types = programmatic_types(ORDERED_SCHEMA);

    let options = options(&workspace, &[BUILTIN_NAMESPACE]);
    let report = SchemaIntrospectionExporter::new(&registry, &types, options).run();

    let messages: Vec<String> = report
        .stages
        .iter()
        .filter_map(graphql_ide_helper::StageOutcome::confirmation)
        .collect();
    assert!(report.is_success(), "{}", format_messages(&messages));
    assert_eq!(messages.len(), 3, "{}", format_messages(&messages));

    let directives = generated(&workspace, DIRECTIVES_FILE);
    let body = strip_banner(&directives, &banner(DEFAULT_COMMAND));
    assert!(body.starts_with("\n\"\"\"\nMarks an element of a GraphQL schema"));
    assert!(body.contains("# Directive class: graphql_directives::mock::MockDirective\n"));
    assert!(body.contains("directive @mock("));

    let types_file = generated(&workspace, PROGRAMMATIC_TYPES_FILE);
    let body = strip_banner(&types_file, &banner(DEFAULT_COMMAND));
    assert!(body.contains("enum SortOrder"));
    assert!(body.contains("input OrderByClause"));
    assert!(!body.contains("type User"));

    assert!(workspace.exists(format!("generated/{STUB_OUTPUT}")));
}

#[test]
fn colliding_directive_names_keep_first_namespace() {
    let workspace = TestWorkspace::new();
    let registry = fixture_registry();
    let types = TypeRegistry::new();

    let exporter = SchemaIntrospectionExporter::new(
        &registry,
        &types,
        options(&workspace, &[APP_NAMESPACE, VENDOR_NAMESPACE]),
    );
    exporter.export_directives().unwrap();

    let directives = generated(&workspace, DIRECTIVES_FILE);
    assert_eq!(count_occurrences(&directives, "directive @upper"), 1);
    assert!(directives
        .contains("# Directive class: graphql_test_utils::fixtures::app::UpperDirective"));
    assert!(!directives.contains("vendor::UpperDirective"));
    assert!(!directives.contains("locale: String"));
    assert!(directives.contains("directive @lower on FIELD_DEFINITION"));

    let names: Vec<usize> = ["@deprecated", "@upper", "@rename", "@lower"]
        .iter()
        .map(|name| directives.find(&format!("directive {name}")).unwrap())
        .collect();
    assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn reversed_scan_order_prefers_vendor() {
    let workspace = TestWorkspace::new();
    let registry = fixture_registry();
    let types = TypeRegistry::new();

    SchemaIntrospectionExporter::new(
        &registry,
        &types,
        options(&workspace, &[VENDOR_NAMESPACE, APP_NAMESPACE]),
    )
    .export_directives()
    .unwrap();

    let directives = generated(&workspace, DIRECTIVES_FILE);
    assert_eq!(count_occurrences(&directives, "directive @upper"), 1);
    assert!(directives.contains("locale: String"));
}

#[test]
fn empty_programmatic_types_remove_stale_file() {
    let workspace = TestWorkspace::new();
    workspace.write(format!("generated/{PROGRAMMATIC_TYPES_FILE}"), "stale");
    let registry = DirectiveRegistry::new();
    let types = programmatic_types(BASIC_SCHEMA);
    assert!(types.is_empty());

    let exporter = SchemaIntrospectionExporter::new(&registry, &types, options(&workspace, &[]));

    let first = exporter.export_programmatic_types().unwrap();
    assert_eq!(first, FileAction::Removed(exporter.programmatic_types_path()));
    assert!(!workspace.exists(format!("generated/{PROGRAMMATIC_TYPES_FILE}")));

    let second = exporter.export_programmatic_types().unwrap();
    assert_eq!(second, FileAction::Skipped);
}

#[test]
fn invalid_directive_sdl_writes_nothing() {
    let workspace = TestWorkspace::new();
    let registry = fixture_registry();
    let types = TypeRegistry::new();

    let exporter = SchemaIntrospectionExporter::new(
        &registry,
        &types,
        options(&workspace, &[APP_NAMESPACE, BROKEN_NAMESPACE]),
    );
    let err = exporter.export_directives().unwrap_err();

    let ExportError::InvalidDirectiveDefinition { class_name, .. } = &err else {
        panic!("expected an invalid definition error, got {err}");
    };
    assert!(class_name.ends_with("broken::BrokenDirective"));
    assert!(!workspace.exists(format!("generated/{DIRECTIVES_FILE}")));
    assert!(!workspace.exists("generated"), "no temp file may be left behind");
}

#[test]
fn invalid_directive_sdl_leaves_prior_file_untouched() {
    let workspace = TestWorkspace::new();
    workspace.write(format!("generated/{DIRECTIVES_FILE}"), "previous");
    let registry = fixture_registry();
    let types = TypeRegistry::new();

    let report = SchemaIntrospectionExporter::new(
        &registry,
        &types,
        options(&workspace, &[BROKEN_NAMESPACE]),
    )
    .run();

    assert!(!report.is_success());
    assert_eq!(generated(&workspace, DIRECTIVES_FILE), "previous");

    // Later stages still ran
    let stub = report.stage(Stage::Stub).unwrap();
    assert!(stub.result.is_ok());
    assert!(workspace.exists(format!("generated/{STUB_OUTPUT}")));
}

#[test]
fn non_directive_sdl_is_rejected() {
    let workspace = TestWorkspace::new();
    let registry = DirectiveRegistry::new().with_namespace(
        DirectiveNamespace::new("types").with::<broken::TypeOnlyDirective>(),
    );
    let types = TypeRegistry::new();

    let err = SchemaIntrospectionExporter::new(&registry, &types, options(&workspace, &["types"]))
        .export_directives()
        .unwrap_err();

    assert!(err.to_string().contains("TypeOnlyDirective"));
    assert!(err.to_string().contains("not a directive definition"));
}

#[test]
fn stub_starts_with_marker_and_banner() {
    let workspace = TestWorkspace::new();
    let source = workspace.write("stubs/helper.php", "#!php\nclass Helper {}\n");
    let registry = DirectiveRegistry::new();
    let types = TypeRegistry::new();

    let options = ExportOptions::new(
        workspace.path(),
        StubSource::Path(source),
        "helper.php",
        MARKER,
    )
    .with_command("graphql ide-helper --config custom.yml");
    let exporter = SchemaIntrospectionExporter::new(&registry, &types, options);
    exporter.export_stub().unwrap();

    let stub = workspace.read("helper.php");
    let expected_prefix = format!("{MARKER}{}", banner("graphql ide-helper --config custom.yml"));
    assert!(stub.starts_with(&expected_prefix));
    // "#!php\n" is exactly as long as the marker
    assert_eq!(&stub[expected_prefix.len()..], "class Helper {}\n");
}

#[test]
fn unreadable_stub_reports_path() {
    let workspace = TestWorkspace::new();
    let registry = DirectiveRegistry::new();
    let types = TypeRegistry::new();
    let missing = workspace.join("missing.php");

    let options = ExportOptions::new(
        workspace.path(),
        StubSource::Path(missing.clone()),
        STUB_OUTPUT,
        MARKER,
    );
    let err = SchemaIntrospectionExporter::new(&registry, &types, options)
        .export_stub()
        .unwrap_err();

    let ExportError::ReadStub { path, .. } = err else {
        panic!("expected a read error");
    };
    assert_eq!(path, missing);
}
