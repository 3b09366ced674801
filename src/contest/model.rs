extern crate serde;

use crate::{
    config::api::{HOST, SCHEME},
    division::compute_division,
    error::Malformed,
};
use serde::Deserialize;
use std::{collections::HashSet, fmt};

/// Link to a problem statement. The only place problem urls are built.
pub fn problem_url(contest_id: u64, index: &str) -> String {
    format!("{}://{}/contest/{}/problem/{}", SCHEME, HOST, contest_id, index)
}

/// Problem fields shared by the api response and the cache file.
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemRecord {
    pub name: String,
    pub points: f64,
    #[serde(default)]
    pub rating: Option<u32>,
    pub index: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    name: String,
    points: f64,
    rating: Option<u32>,
    index: String,
    url: String,
}
impl Problem {
    fn new(contest_id: u64, record: ProblemRecord) -> Self {
        Problem {
            url: problem_url(contest_id, &record.index),
            name: record.name,
            points: record.points,
            rating: record.rating,
            index: record.index,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn points(&self) -> f64 {
        self.points
    }
    pub fn rating(&self) -> Option<u32> {
        self.rating
    }
    pub fn index(&self) -> &str {
        &self.index
    }
    pub fn url(&self) -> &str {
        &self.url
    }
}
impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.index, self.name)
    }
}

/// Metadata of one contest. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Contest {
    contest_id: u64,
    name: String,
    problems: Vec<Problem>,
    finished: bool,
    division: Vec<u32>,
}

impl Contest {
    /// Builds a contest, deriving problem urls and the division from the name.
    /// Problem order is kept; indices must be unique.
    pub fn new<I>(
        contest_id: u64,
        name: String,
        finished: bool,
        problems: I,
    ) -> Result<Self, Malformed>
    where
        I: IntoIterator<Item = ProblemRecord>,
    {
        let mut seen = HashSet::new();
        let problems = problems
            .into_iter()
            .map(|p| {
                if seen.insert(p.index.clone()) {
                    Ok(Problem::new(contest_id, p))
                } else {
                    Err(Malformed::DuplicateIndex(p.index))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Contest {
            division: compute_division(&name),
            contest_id,
            name,
            problems,
            finished,
        })
    }

    pub fn contest_id(&self) -> u64 {
        self.contest_id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }
    pub fn finished(&self) -> bool {
        self.finished
    }
    pub fn division(&self) -> &[u32] {
        &self.division
    }
    pub fn problem(&self, index: &str) -> Option<&Problem> {
        self.problems.iter().find(|p| p.index == index)
    }
}
impl fmt::Display for Contest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.contest_id, self.name)
    }
}
