//! The two shapes contest metadata arrives in.
//!
//! The api answers `contest.standings` with the nested [`StandingsResult`],
//! while the cache file holds the flat [`CacheFile`] dump. Both end in
//! [`Contest::new`] so the two sources can not disagree.
extern crate serde;

use crate::{
    config::cache::FORMAT_VERSION,
    error::Malformed,
    model::{Contest, ProblemRecord},
};
use serde::{Deserialize, Serialize};

const FINISHED: &str = "FINISHED";

#[derive(Debug, Deserialize)]
pub struct ApiContest {
    pub id: u64,
    pub name: String,
    pub phase: String,
}

/// `result` member of a `contest.standings` response.
#[derive(Debug, Deserialize)]
pub struct StandingsResult {
    pub contest: ApiContest,
    pub problems: Vec<ProblemRecord>,
}
impl StandingsResult {
    pub fn into_contest(self) -> Result<Contest, Malformed> {
        Contest::new(
            self.contest.id,
            self.contest.name,
            self.contest.phase == FINISHED,
            self.problems,
        )
    }
}

fn default_version() -> u32 {
    FORMAT_VERSION
}

/// Cache file as read back. Derived fields (`division`, problem `url`) are
/// ignored and recomputed.
#[derive(Debug, Deserialize)]
pub struct CacheFile {
    #[serde(default = "default_version")]
    pub version: u32,
    pub contest_id: u64,
    pub name: String,
    pub finished: bool,
    pub problems: Vec<ProblemRecord>,
}
impl CacheFile {
    pub fn into_contest(self) -> Result<Contest, Malformed> {
        if self.version > FORMAT_VERSION {
            return Err(Malformed::UnsupportedVersion(self.version));
        }
        Contest::new(self.contest_id, self.name, self.finished, self.problems)
    }
}

#[derive(Serialize)]
struct SaveProblem<'a> {
    name: &'a str,
    points: f64,
    rating: Option<u32>,
    index: &'a str,
    url: &'a str,
}

/// Cache file as written.
#[derive(Serialize)]
pub struct SaveContent<'a> {
    version: u32,
    contest_id: u64,
    name: &'a str,
    finished: bool,
    division: &'a [u32],
    problems: Vec<SaveProblem<'a>>,
}
impl<'a> From<&'a Contest> for SaveContent<'a> {
    fn from(contest: &'a Contest) -> Self {
        SaveContent {
            version: FORMAT_VERSION,
            contest_id: contest.contest_id(),
            name: contest.name(),
            finished: contest.finished(),
            division: contest.division(),
            problems: contest
                .problems()
                .iter()
                .map(|p| SaveProblem {
                    name: p.name(),
                    points: p.points(),
                    rating: p.rating(),
                    index: p.index(),
                    url: p.url(),
                })
                .collect(),
        }
    }
}
