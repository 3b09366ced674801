extern crate serde_json;

use std::{
    error::Error as StdError,
    fmt, io,
    path::{Path, PathBuf},
    result::Result as StdResult,
};

pub type BoxedError = Box<dyn StdError + Send + Sync>;
pub type Result<T> = StdResult<T, Error>;

/// Where a payload came from.
#[derive(Debug)]
pub enum Origin {
    Network(String),
    Cache(PathBuf),
}
impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(url) => write!(f, "response from {}", url),
            Self::Cache(path) => write!(f, "cache file {}", path.display()),
        }
    }
}

/// Shape violations found after the JSON itself decoded fine.
#[derive(Debug)]
pub enum Malformed {
    Json(serde_json::Error),
    MissingResult,
    DuplicateIndex(String),
    ContestMismatch { expected: u64, found: u64 },
    UnsupportedVersion(u32),
}
impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "{}", e),
            Self::MissingResult => write!(f, "no result field"),
            Self::DuplicateIndex(index) => write!(f, "problem {} listed twice", index),
            Self::ContestMismatch { expected, found } => {
                write!(f, "expected contest {} found contest {}", expected, found)
            }
            Self::UnsupportedVersion(v) => write!(f, "unsupported cache format version {}", v),
        }
    }
}

#[derive(Debug)]
pub enum CacheCause {
    Io(io::Error),
    Json(serde_json::Error),
}
impl fmt::Display for CacheCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{}", e),
            Self::Json(e) => write!(f, "invalid json: {}", e),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Network {
        contest_id: u64,
        url: String,
        status: Option<u16>,
        comment: Option<String>,
        source: Option<BoxedError>,
    },
    MalformedPayload {
        contest_id: u64,
        origin: Origin,
        cause: Malformed,
    },
    CacheRead {
        contest_id: u64,
        path: PathBuf,
        cause: CacheCause,
    },
    CacheWrite {
        path: PathBuf,
        cause: CacheCause,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network {
                contest_id,
                url,
                status,
                comment,
                ..
            } => {
                write!(f, "Failed to get contest {} from {}", contest_id, url)?;
                if let Some(s) = status {
                    write!(f, ": HTTP {}", s)?;
                }
                if let Some(c) = comment {
                    write!(f, " ({})", c)?;
                }
                Ok(())
            }
            Self::MalformedPayload {
                contest_id,
                origin,
                cause,
            } => write!(
                f,
                "Malformed data for contest {} in {}: {}",
                contest_id, origin, cause
            ),
            Self::CacheRead {
                contest_id,
                path,
                cause,
            } => write!(
                f,
                "Error reading cache of contest {} at {}: {}",
                contest_id,
                path.display(),
                cause
            ),
            Self::CacheWrite { path, cause } => {
                write!(f, "Error writing cache {}: {}", path.display(), cause)
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Network { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn StdError + 'static)),
            Self::MalformedPayload { cause, .. } => match cause {
                Malformed::Json(e) => Some(e),
                _ => None,
            },
            Self::CacheRead { cause, .. } | Self::CacheWrite { cause, .. } => match cause {
                CacheCause::Io(e) => Some(e),
                CacheCause::Json(e) => Some(e),
            },
        }
    }
}

impl Error {
    /// HTTP status of a failed request, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network { status, .. } => *status,
            _ => None,
        }
    }
}

pub(crate) fn malformed_network(contest_id: u64, url: &str, cause: Malformed) -> Error {
    Error::MalformedPayload {
        contest_id,
        origin: Origin::Network(url.to_owned()),
        cause,
    }
}
pub(crate) fn malformed_cache(contest_id: u64, path: &Path, cause: Malformed) -> Error {
    Error::MalformedPayload {
        contest_id,
        origin: Origin::Cache(path.to_path_buf()),
        cause,
    }
}
