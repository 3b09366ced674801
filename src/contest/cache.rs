extern crate serde;
extern crate serde_json;

use crate::{
    config::cache::{FILE_NAME, INDENT},
    error::{malformed_cache, CacheCause, Error, Malformed, Result},
    model::Contest,
    payload::{CacheFile, SaveContent},
};
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

/// `<target_dir>/<contest_id>/.contest_info.cf`
pub fn cache_path(target_dir: &Path, contest_id: u64) -> PathBuf {
    target_dir.join(contest_id.to_string()).join(FILE_NAME)
}

/// Loads a contest from its cache file.
///
/// Io failures and text that is not JSON are [`Error::CacheRead`]; JSON of the
/// wrong shape is [`Error::MalformedPayload`].
pub fn read_cache(path: &Path, contest_id: u64) -> Result<Contest> {
    let read_error = |cause| Error::CacheRead {
        contest_id,
        path: path.to_path_buf(),
        cause,
    };
    let file = File::open(path).map_err(|e| read_error(CacheCause::Io(e)))?;
    let value: Value = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_io() {
            read_error(CacheCause::Io(e.into()))
        } else {
            read_error(CacheCause::Json(e))
        }
    })?;
    let contest = serde_json::from_value::<CacheFile>(value)
        .map_err(|e| malformed_cache(contest_id, path, Malformed::Json(e)))?
        .into_contest()
        .map_err(|e| malformed_cache(contest_id, path, e))?;
    if contest.contest_id() != contest_id {
        return Err(malformed_cache(
            contest_id,
            path,
            Malformed::ContestMismatch {
                expected: contest_id,
                found: contest.contest_id(),
            },
        ));
    }
    Ok(contest)
}

/// Writes the flat dump of `contest` to `path`, indented by four spaces.
pub fn write_cache(path: &Path, contest: &Contest) -> Result<()> {
    let write_error = |cause| Error::CacheWrite {
        path: path.to_path_buf(),
        cause,
    };
    let mut wdr = BufWriter::new(File::create(path).map_err(|e| write_error(CacheCause::Io(e)))?);
    let mut ser = Serializer::with_formatter(&mut wdr, PrettyFormatter::with_indent(INDENT));
    SaveContent::from(contest)
        .serialize(&mut ser)
        .map_err(|e| write_error(CacheCause::Json(e)))?;
    wdr.write_all(b"\n")
        .and_then(|_| wdr.flush())
        .map_err(|e| write_error(CacheCause::Io(e)))
}
