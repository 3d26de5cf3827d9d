//! Build matrix entries and per-compiler construction rules.

use serde::Serialize;

use crate::toolchain::VersionSpec;

/// `addons.apt` block: package sources and packages a job must install.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AptAddon {
    pub sources: Vec<String>,
    pub packages: Vec<String>,
}

/// Addon descriptor nested under a matrix entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Addons {
    pub apt: AptAddon,
}

/// One row of the build matrix: a concrete CI job configuration.
///
/// Optional fields are omitted from the serialized output entirely, so the
/// osx entry renders as a bare `os: osx` record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MatrixEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiler: Option<String>,

    pub os: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub addons: Option<Addons>,
}

impl MatrixEntry {
    /// Entry for a versioned GCC on Linux.
    ///
    /// The compiler package comes from the `ubuntu-toolchain-r-test` PPA.
    pub fn gcc(version: &VersionSpec, std: &str) -> Self {
        let num = version.num;
        Self {
            compiler: Some("gcc".to_string()),
            os: "linux".to_string(),
            env: Some(format!("CC=gcc-{num} CXX=g++-{num} std={std}")),
            addons: Some(Addons {
                apt: AptAddon {
                    sources: vec!["ubuntu-toolchain-r-test".to_string()],
                    packages: vec![format!("g++-{num}")],
                },
            }),
        }
    }

    /// Entry for a versioned Clang on Linux.
    ///
    /// Upstream LLVM apt repositories name both the source and the binaries
    /// with a `<major>.0` suffix.
    pub fn clang(version: &VersionSpec, std: &str) -> Self {
        let num = version.num;
        Self {
            compiler: Some("clang".to_string()),
            os: "linux".to_string(),
            env: Some(format!("CC=clang-{num}.0 CXX=clang++-{num}.0 std={std}")),
            addons: Some(Addons {
                apt: AptAddon {
                    sources: vec![format!("llvm-toolchain-trusty-{num}.0")],
                    packages: vec![format!("clang-{num}.0")],
                },
            }),
        }
    }

    /// Entry for the distribution's default compiler, no standard pinned.
    pub fn default_compiler(c_compiler: &str, cxx_compiler: &str) -> Self {
        Self {
            compiler: Some(c_compiler.to_string()),
            os: "linux".to_string(),
            env: Some(format!("CC={c_compiler} CXX={cxx_compiler}")),
            addons: None,
        }
    }

    /// Entry for the stock macOS image.
    pub fn osx() -> Self {
        Self {
            compiler: None,
            os: "osx".to_string(),
            env: None,
            addons: None,
        }
    }
}

/// Expand version specs into matrix entries, one per supported standard.
///
/// Table order is preserved: versions in input order, standards in the order
/// listed on each spec.
pub fn expand<F>(versions: &[VersionSpec], build: F) -> Vec<MatrixEntry>
where
    F: Fn(&VersionSpec, &str) -> MatrixEntry,
{
    versions
        .iter()
        .flat_map(|version| version.stds.iter().map(|std| build(version, std)))
        .collect()
}
