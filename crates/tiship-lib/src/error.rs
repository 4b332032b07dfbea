use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the tiship library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the requested game version directory does not exist.
    #[error("version directory not found at {path}")]
    VersionNotFound { path: PathBuf },

    /// Raised when a catalog table file fails to parse.
    #[error("failed to parse {table} table at {path}: {source}")]
    TableParse {
        table: &'static str,
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Data-integrity defect: a drive identifier too short to carry a
    /// two-character multiplier suffix.
    #[error("malformed drive identifier '{data_name}': too short to strip a multiplier suffix")]
    MalformedDriveName { data_name: String },

    /// Data-integrity defect: a cooling mode outside Closed/Calc/Open.
    #[error("unsupported cooling mode '{cooling}' on drive '{data_name}'")]
    UnsupportedCooling { data_name: String, cooling: String },

    /// Configuration referenced a power plant absent from the catalog.
    #[error("unknown power plant: {name}")]
    UnknownPowerPlant { name: String },

    /// Configuration referenced a radiator absent from the catalog.
    #[error("unknown radiator: {name}")]
    UnknownRadiator { name: String },

    /// Configuration referenced a hull absent from the catalog.
    #[error("unknown ship hull: {name}")]
    UnknownHull { name: String },

    /// Configuration referenced an armor absent from the catalog.
    #[error("unknown ship armor: {name}")]
    UnknownArmor { name: String },

    /// Configuration referenced a utility module absent from the catalog.
    #[error("unknown utility module: {name}")]
    UnknownUtilityModule { name: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
