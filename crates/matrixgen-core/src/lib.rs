//! Matrixgen Core - Travis CI build-matrix generation
//!
//! Expands static compiler/version/standard tables into an ordered job
//! matrix, wraps it with the fixed global build settings, and serializes
//! the result as block-style YAML:
//!
//! - [`toolchain`]: the static version tables
//! - [`matrix`]: per-job entries and the expansion rules
//! - [`document`]: the top-level document and its assembly
//! - [`emit`]: rendering and file output

pub mod document;
pub mod emit;
pub mod error;
pub mod matrix;
pub mod telemetry;
pub mod toolchain;

// Re-export key types
pub use document::{Matrix, TravisConfig};
pub use emit::{render, write_file, DEFAULT_OUTPUT_PATH, GENERATED_HEADER};
pub use error::{MatrixGenError, Result};
pub use matrix::{expand, Addons, AptAddon, MatrixEntry};
pub use toolchain::{VersionSpec, CLANG_VERSIONS, GCC_VERSIONS};
