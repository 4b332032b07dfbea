//! Subcommand handlers.

use std::path::{Path, PathBuf};

pub mod drives;
pub mod evaluate;
pub mod versions;

/// Resolve the versions data directory.
///
/// Order: explicit `--data-dir` flag, then the `TISHIP_DATA_DIR`
/// environment variable, then (in debug builds) the checked-in fixture
/// tree, then a `versions/` directory relative to the working directory.
pub fn resolve_data_dir(flag: Option<&Path>) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }

    if let Some(env_dir) = std::env::var_os("TISHIP_DATA_DIR") {
        return PathBuf::from(env_dir);
    }

    if cfg!(debug_assertions) {
        let fixture =
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/versions");
        if fixture.is_dir() {
            return fixture;
        }
    }

    PathBuf::from("versions")
}
