use crate::{
    api::{fetch_contest, HttpGet},
    cache::{cache_path, read_cache},
    error::Result,
    model::Contest,
};
use log::{info, warn};
use std::path::Path;

/// Gets the metadata of `contest_id`, from the cache under `target_dir` when
/// one exists and `force_update` is off, from the api otherwise.
///
/// The flag returned is `true` when the contest was fetched and should be
/// persisted by the caller. The source is picked once; a failing cache read
/// does not fall back to the network.
pub fn acquire<H: HttpGet + ?Sized>(
    http: &H,
    contest_id: u64,
    target_dir: &Path,
    force_update: bool,
) -> Result<(Contest, bool)> {
    let path = cache_path(target_dir, contest_id);
    if path.exists() {
        if !force_update {
            info!("Loading contest {} from {}", contest_id, path.display());
            return read_cache(&path, contest_id).map(|c| (c, false));
        }
        warn!("Ignoring cache {} on update", path.display());
    }
    fetch_contest(http, contest_id).map(|c| (c, true))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        api::test::{standings_body, FakeHttp},
        cache::write_cache,
        error::{CacheCause, Error},
    };
    use std::fs;
    use tempfile::tempdir;

    fn cached(dir: &Path, contest_id: u64) -> Contest {
        let contest = fetch_contest(
            &FakeHttp::new(200, standings_body(contest_id, "CODING")),
            contest_id,
        )
        .unwrap();
        let path = cache_path(dir, contest_id);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        write_cache(&path, &contest).unwrap();
        contest
    }

    #[test]
    fn cache_hit_skips_network() {
        let dir = tempdir().unwrap();
        let expected = cached(dir.path(), 1850);
        let http = FakeHttp::new(200, standings_body(1850, "FINISHED"));
        let (contest, fetched) = acquire(&http, 1850, dir.path(), false).unwrap();
        assert_eq!(http.calls.get(), 0);
        assert!(!fetched);
        assert_eq!(contest, expected);
        assert!(!contest.finished());
    }

    #[test]
    fn update_always_fetches() {
        let dir = tempdir().unwrap();
        cached(dir.path(), 1850);
        let http = FakeHttp::new(200, standings_body(1850, "FINISHED"));
        let (contest, fetched) = acquire(&http, 1850, dir.path(), true).unwrap();
        assert_eq!(http.calls.get(), 1);
        assert!(fetched);
        assert!(contest.finished());

        let empty = tempdir().unwrap();
        let http = FakeHttp::new(200, standings_body(1850, "FINISHED"));
        acquire(&http, 1850, empty.path(), true).unwrap();
        assert_eq!(http.calls.get(), 1);
    }

    #[test]
    fn no_cache_fetches() {
        let dir = tempdir().unwrap();
        let http = FakeHttp::new(200, standings_body(77, "FINISHED"));
        let (contest, fetched) = acquire(&http, 77, dir.path(), false).unwrap();
        assert_eq!(http.calls.get(), 1);
        assert!(fetched);
        assert_eq!(contest.contest_id(), 77);
        assert!(!cache_path(dir.path(), 77).exists());
    }

    #[test]
    fn broken_cache_no_fallback() {
        let dir = tempdir().unwrap();
        let path = cache_path(dir.path(), 5);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ truncated").unwrap();
        let http = FakeHttp::new(200, standings_body(5, "FINISHED"));
        match acquire(&http, 5, dir.path(), false).unwrap_err() {
            Error::CacheRead {
                contest_id,
                cause: CacheCause::Json(_),
                ..
            } => assert_eq!(contest_id, 5),
            other => panic!("unexpected {}", other),
        }
        assert_eq!(http.calls.get(), 0);
    }

    #[test]
    fn http_error_status() {
        let dir = tempdir().unwrap();
        let http = FakeHttp::new(404, "");
        let err = acquire(&http, 5, dir.path(), false).unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
