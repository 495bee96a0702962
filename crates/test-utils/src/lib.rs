//! # GraphQL Test Utilities
//!
//! Shared test infrastructure for the IDE helper crates.

// Test utilities are less strict than production code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::needless_raw_string_hashes)]
//!
//! ## Modules
//!
//! - [`fixtures`] - Schema fixtures and directive types spread over the `app`
//!   and `vendor` namespaces
//! - [`workspace`] - Temporary directories holding config, schema and stub files
//! - [`assertions`] - Helpers for checking generated files

pub mod assertions;
pub mod fixtures;
pub mod workspace;

pub use fixtures::{fixture_registry, APP_NAMESPACE, BROKEN_NAMESPACE, VENDOR_NAMESPACE};
pub use workspace::TestWorkspace;
