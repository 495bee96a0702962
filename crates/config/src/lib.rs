//! Configuration for the GraphQL IDE helper.
//!
//! The config file is optional. When present it is discovered by walking up from
//! the working directory (see [`find_config`]) and may be written as YAML, JSON
//! or TOML:
//!
//! `directiveNamespaces` names namespaces compiled into the directive registry;
//! the `graphql` binary provides `builtin`.
//!
//! ```yaml
//! schema: "graphql/**/*.graphql"
//! directiveNamespaces: [builtin]
//! outputDir: ide
//! orderBy:
//!   additional:
//!     - name: OrderByIntClause
//!       columnType: Int
//! ```

mod config;
mod error;
mod loader;

pub use config::{
    IdeHelperConfig, OrderByConfig, OrderByInputConfig, SchemaConfig, StubConfig,
    DEFAULT_DIRECTIVE_NAMESPACE, DEFAULT_OPENING_MARKER, DEFAULT_STUB_OUTPUT,
};
pub use error::{ConfigError, Result};
pub use loader::{find_config, load_config, load_config_from_str, CONFIG_FILES};
