//! Static stub export.

use crate::{ExportError, Result};
use std::path::PathBuf;

/// Where the stub content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubSource {
    /// Read from a file when the stage runs
    Path(PathBuf),
    /// Content compiled into the binary
    Bundled(&'static str),
}

impl StubSource {
    pub(crate) fn read(&self) -> Result<Vec<u8>> {
        match self {
            Self::Path(path) => std::fs::read(path).map_err(|source| ExportError::ReadStub {
                path: path.clone(),
                source,
            }),
            Self::Bundled(content) => Ok(content.as_bytes().to_vec()),
        }
    }
}

/// Replace the first `marker.len()` bytes of `stub` with the marker and banner.
///
/// The stub's own prologue is discarded whatever it contains, so the result
/// always starts with `marker` immediately followed by `banner`.
///
/// ```
/// use graphql_ide_helper::stub_with_banner;
///
/// let out = stub_with_banner(b"<?php\nclass A {}\n", "<?php\n", "# generated\n");
/// assert_eq!(out, b"<?php\n# generated\nclass A {}\n");
/// ```
#[must_use]
pub fn stub_with_banner(stub: &[u8], marker: &str, banner: &str) -> Vec<u8> {
    let rest = stub.get(marker.len()..).unwrap_or_default();

    let mut out = Vec::with_capacity(marker.len() + banner.len() + rest.len());
    out.extend_from_slice(marker.as_bytes());
    out.extend_from_slice(banner.as_bytes());
    out.extend_from_slice(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prologue_is_replaced_regardless_of_content() {
        let out = stub_with_banner(b"#!/usr/bin/env php\n", "<?php\n", "# b\n");
        assert!(out.starts_with(b"<?php\n# b\n"));
        // "#!/usr" is the same length as the marker
        assert_eq!(&out[b"<?php\n# b\n".len()..], b"/bin/env php\n");
    }

    #[test]
    fn test_short_stub() {
        assert_eq!(stub_with_banner(b"<?", "<?php\n", "# b\n"), b"<?php\n# b\n");
        assert_eq!(stub_with_banner(b"", "<?php\n", "# b\n"), b"<?php\n# b\n");
    }

    #[test]
    fn test_missing_stub_file() {
        let source = StubSource::Path(PathBuf::from("/nonexistent/stub.php"));
        let err = source.read().unwrap_err();
        assert!(matches!(err, ExportError::ReadStub { .. }));
        assert!(err.to_string().contains("/nonexistent/stub.php"));
    }
}
