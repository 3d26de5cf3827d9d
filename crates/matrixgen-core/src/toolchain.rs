//! Compiler toolchain version tables.
//!
//! The tables below are the single source of truth for which compiler
//! versions and language standards the generated matrix covers. They are
//! static and trusted: nothing checks that a given compiler package
//! actually exists in the target distribution.

/// One compiler major version and the ordered language standards it is
/// tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionSpec {
    /// Compiler major version number.
    pub num: u32,

    /// Supported `-std=` values, in the order jobs are generated.
    pub stds: &'static [&'static str],
}

impl VersionSpec {
    /// Number of matrix entries this version expands to.
    pub fn job_count(&self) -> usize {
        self.stds.len()
    }
}

/// GCC versions covered by the matrix, in generation order.
pub const GCC_VERSIONS: &[VersionSpec] = &[
    VersionSpec { num: 5, stds: &["c++11", "c++14", "c++17"] },
    VersionSpec { num: 6, stds: &["c++11", "c++14", "c++17"] },
    VersionSpec { num: 7, stds: &["c++11", "c++14", "c++17"] },
    VersionSpec { num: 8, stds: &["c++11", "c++14", "c++17", "c++2a"] },
];

/// Clang versions covered by the matrix, in generation order.
pub const CLANG_VERSIONS: &[VersionSpec] = &[
    VersionSpec { num: 4, stds: &["c++11", "c++14", "c++17"] },
    VersionSpec { num: 5, stds: &["c++11", "c++14", "c++17", "c++2a"] },
];
