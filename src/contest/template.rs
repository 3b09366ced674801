extern crate handlebars;
extern crate serde;

use crate::model::{Contest, Problem};
use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;
use std::{error::Error as StdError, fmt};

const NAME: &str = "solution";

#[derive(Debug)]
pub enum Error {
    Template(TemplateError),
    Render(String, RenderError),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Template(err) => write!(f, "Error parsing template: {}", err),
            Error::Render(index, err) => write!(f, "Error rendering problem {}: {}", index, err),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Template(err) => Some(err),
            Error::Render(_, err) => Some(err),
        }
    }
}

#[derive(Serialize)]
struct Param<'a> {
    contest_id: u64,
    contest_name: &'a str,
    division: &'a [u32],
    index: &'a str,
    name: &'a str,
    points: f64,
    rating: Option<u32>,
    url: &'a str,
}

/// Renders one solution file per problem from a handlebars template.
pub struct Renderer<'a> {
    engine: Handlebars<'a>,
}
impl<'a> Renderer<'a> {
    pub fn new(template: &str) -> Result<Self, Error> {
        let mut engine = Handlebars::new();
        engine.register_escape_fn(handlebars::no_escape);
        engine
            .register_template_string(NAME, template)
            .map_err(Error::Template)?;
        Ok(Renderer { engine })
    }
    pub fn render(&self, contest: &Contest, problem: &Problem) -> Result<String, Error> {
        self.engine
            .render(
                NAME,
                &Param {
                    contest_id: contest.contest_id(),
                    contest_name: contest.name(),
                    division: contest.division(),
                    index: problem.index(),
                    name: problem.name(),
                    points: problem.points(),
                    rating: problem.rating(),
                    url: problem.url(),
                },
            )
            .map_err(|e| Error::Render(problem.index().to_owned(), e))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::ProblemRecord;

    fn contest() -> Contest {
        Contest::new(
            1843,
            "Codeforces Round 881 (Div. 3)".to_string(),
            true,
            vec![
                ProblemRecord {
                    name: "Sasha & Array".to_string(),
                    points: 500.0,
                    rating: Some(800),
                    index: "A".to_string(),
                },
                ProblemRecord {
                    name: "Tree".to_string(),
                    points: 1000.0,
                    rating: None,
                    index: "B".to_string(),
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn renders_problem_fields() {
        let renderer =
            Renderer::new("// {{contest_name}} {{index}}: {{name}}\n// {{url}}\n").unwrap();
        let contest = contest();
        assert_eq!(
            renderer.render(&contest, &contest.problems()[0]).unwrap(),
            "// Codeforces Round 881 (Div. 3) A: Sasha & Array\n\
             // https://codeforces.com/contest/1843/problem/A\n"
        );
    }

    #[test]
    fn missing_rating() {
        let renderer =
            Renderer::new("{{#if rating}}rated {{rating}}{{else}}unrated{{/if}}").unwrap();
        let contest = contest();
        assert_eq!(
            renderer.render(&contest, &contest.problems()[0]).unwrap(),
            "rated 800"
        );
        assert_eq!(
            renderer.render(&contest, &contest.problems()[1]).unwrap(),
            "unrated"
        );
    }

    #[test]
    fn bad_template() {
        match Renderer::new("{{#if rating}}") {
            Err(Error::Template(_)) => {}
            _ => panic!("template should not parse"),
        }
    }
}
