//! YAML rendering and output-file writing.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::document::TravisConfig;
use crate::error::{MatrixGenError, Result};

/// Warning comment prepended to the generated file.
///
/// The exact text is part of the output contract; tooling downstream keys
/// off this line to detect hand edits.
pub const GENERATED_HEADER: &str =
    "# This file is auto-generated by tools/generate-travis-yaml.py.\n\n";

/// Where the configuration lands when no path is given.
pub const DEFAULT_OUTPUT_PATH: &str = ".travis.yml";

/// Render the configuration as block-style YAML with the header comment.
///
/// Output is deterministic: the same configuration always renders to the
/// same bytes.
pub fn render(config: &TravisConfig) -> Result<String> {
    let body = serde_yaml::to_string(config)?;
    Ok(format!("{GENERATED_HEADER}{body}"))
}

/// Render and write the configuration, replacing any existing file.
///
/// The write is not atomic; a failure partway can leave a truncated file
/// behind. The caller is expected to treat any error as fatal.
pub fn write_file(config: &TravisConfig, path: &Path) -> Result<()> {
    let text = render(config)?;
    fs::write(path, &text).map_err(|source| MatrixGenError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), bytes = text.len(), "wrote generated configuration");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_starts_with_header() {
        let text = render(&TravisConfig::generate()).expect("render failed");
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("# This file is auto-generated by tools/generate-travis-yaml.py.")
        );
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("language: generic"));
    }

    #[test]
    fn test_render_is_block_style() {
        let text = render(&TravisConfig::generate()).expect("render failed");
        // No flow collections: every job is a block mapping under include
        assert!(!text.contains("include: ["));
        assert!(!text.contains("- {"));
        assert!(text.contains("matrix:"));
        assert!(text.contains("include:"));
        assert!(text.contains("- compiler: gcc"));
    }

    #[test]
    fn test_render_key_order() {
        let text = render(&TravisConfig::generate()).expect("render failed");
        let positions: Vec<usize> = ["language:", "matrix:", "dist:", "sudo:", "before_install:", "script:"]
            .iter()
            .map(|key| text.find(key).unwrap_or_else(|| panic!("missing key {key}")))
            .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "top-level keys out of order");
    }

    #[test]
    fn test_render_omits_absent_fields() {
        let text = render(&TravisConfig::generate()).expect("render failed");
        assert!(text.contains("os: osx"));
        assert!(!text.contains("compiler: null"));
        assert!(!text.contains("env: null"));
        assert!(!text.contains("addons: null"));
    }

    #[test]
    fn test_render_deterministic() {
        let config = TravisConfig::generate();
        let first = render(&config).expect("render failed");
        let second = render(&config).expect("render failed");
        assert_eq!(first, second);
    }
}
