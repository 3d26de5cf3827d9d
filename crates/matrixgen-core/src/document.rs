//! Top-level generated document and its fixed global settings.

use serde::Serialize;
use tracing::debug;

use crate::matrix::{expand, MatrixEntry};
use crate::toolchain::{CLANG_VERSIONS, GCC_VERSIONS};

/// Steps run before the build on every job. The package install is gated on
/// Linux because the macOS image ships boost via the system toolchain.
pub const BEFORE_INSTALL: &[&str] = &[
    "if [ \"$TRAVIS_OS_NAME\" = \"linux\" ]; then sudo apt-get -y install libboost-dev; fi",
    "git submodule update --init --recursive",
];

/// Build and test steps. `$std` is the per-job standard selected via `env`;
/// it reaches cmake through the `STD` variable.
pub const SCRIPT: &[&str] = &[
    "mkdir build",
    "cd build",
    "STD=${std} cmake ..",
    "make",
    "ctest --output-on-failure",
];

/// `matrix` block wrapping the ordered job list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Matrix {
    pub include: Vec<MatrixEntry>,
}

/// The complete generated configuration.
///
/// Serde field order is the output key order, which downstream consumers of
/// the generated file rely on. Do not reorder fields here.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TravisConfig {
    pub language: String,
    pub matrix: Matrix,
    pub dist: String,
    pub sudo: String,
    pub before_install: Vec<String>,
    pub script: Vec<String>,
}

impl TravisConfig {
    /// Wrap an ordered job list with the fixed global settings.
    pub fn assemble(entries: Vec<MatrixEntry>) -> Self {
        Self {
            language: "generic".to_string(),
            matrix: Matrix { include: entries },
            dist: "trusty".to_string(),
            sudo: "required".to_string(),
            before_install: BEFORE_INSTALL.iter().map(|s| s.to_string()).collect(),
            script: SCRIPT.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build the full configuration from the static toolchain tables.
    ///
    /// Entry order is fixed: default gcc, default clang, osx, then every
    /// GCC version/standard pair, then every Clang version/standard pair.
    pub fn generate() -> Self {
        let mut entries = vec![
            MatrixEntry::default_compiler("gcc", "g++"),
            MatrixEntry::default_compiler("clang", "clang++"),
            MatrixEntry::osx(),
        ];
        entries.extend(expand(GCC_VERSIONS, MatrixEntry::gcc));
        entries.extend(expand(CLANG_VERSIONS, MatrixEntry::clang));

        debug!(jobs = entries.len(), "expanded build matrix");
        Self::assemble(entries)
    }

    /// Number of jobs in the matrix.
    pub fn job_count(&self) -> usize {
        self.matrix.include.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_job_count() {
        // 3 baseline + 16 gcc + 7 clang
        let config = TravisConfig::generate();
        assert_eq!(config.job_count(), 26);
    }

    #[test]
    fn test_generate_entry_ordering() {
        let config = TravisConfig::generate();
        let include = &config.matrix.include;

        assert_eq!(include[0].env.as_deref(), Some("CC=gcc CXX=g++"));
        assert_eq!(include[1].env.as_deref(), Some("CC=clang CXX=clang++"));
        assert_eq!(include[2].os, "osx");

        // gcc block occupies 3..19, clang block 19..26
        assert_eq!(include[3].env.as_deref(), Some("CC=gcc-5 CXX=g++-5 std=c++11"));
        assert_eq!(include[18].env.as_deref(), Some("CC=gcc-8 CXX=g++-8 std=c++2a"));
        assert_eq!(
            include[19].env.as_deref(),
            Some("CC=clang-4.0 CXX=clang++-4.0 std=c++11")
        );
        assert_eq!(
            include[25].env.as_deref(),
            Some("CC=clang-5.0 CXX=clang++-5.0 std=c++2a")
        );
    }

    #[test]
    fn test_fixed_global_settings() {
        let config = TravisConfig::generate();
        assert_eq!(config.language, "generic");
        assert_eq!(config.dist, "trusty");
        assert_eq!(config.sudo, "required");
        assert_eq!(config.before_install.len(), 2);
        assert_eq!(config.script.len(), 5);
        assert_eq!(config.script[4], "ctest --output-on-failure");
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(TravisConfig::generate(), TravisConfig::generate());
    }
}
