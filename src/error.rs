// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("catalog has no records")]
    EmptyCatalog,

    #[error("duplicate fastener id: {0}")]
    DuplicateId(String),

    #[error("invalid fastener id {0:?}: ids name output files and must be non-empty without '/', '\\' or '..'")]
    InvalidId(String),

    #[error("catalog id {0} has no helper kind; pass one of hex_bolt, socket_cap, hex_nut, flat_washer, blind_rivet instead")]
    NoHelperKind(String),

    #[error("unknown fastener id: {0}")]
    UnknownFastener(String),

    #[error("unknown fastener kind: {0} (expected one of hex_bolt, socket_cap, hex_nut, flat_washer, blind_rivet)")]
    UnknownKind(String),

    #[error("--{arg} does not apply to {kind}")]
    IrrelevantArgument { kind: &'static str, arg: &'static str },

    #[error("--{arg} must be a positive number (got {value})")]
    InvalidDimension { arg: &'static str, value: f64 },

    #[error("failed to read catalog {path}: {source}")]
    CatalogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
