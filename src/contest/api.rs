extern crate reqwest;
extern crate serde_json;

use crate::{
    config::api::{HOST, SCHEME, STANDINGS_COUNT, STANDINGS_FROM, USER_AGENT},
    error::{malformed_network, BoxedError, Error, Malformed, Result},
    model::Contest,
    payload::StandingsResult,
};
use log::{debug, info};
use reqwest::blocking::Client;
use serde_json::Value;

pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// One blocking GET. Anything that can answer it can stand in for the network.
pub trait HttpGet {
    fn get(&self, url: &str) -> std::result::Result<HttpResponse, BoxedError>;
}

impl HttpGet for Client {
    fn get(&self, url: &str) -> std::result::Result<HttpResponse, BoxedError> {
        let response = Client::get(self, url).send()?;
        let status = response.status().as_u16();
        let body = if status == 200 {
            response.text()?
        } else {
            response.text().unwrap_or_default()
        };
        Ok(HttpResponse { status, body })
    }
}

pub fn client() -> reqwest::Result<Client> {
    Client::builder().user_agent(USER_AGENT).build()
}

pub fn standings_url(contest_id: u64) -> String {
    format!(
        "{}://{}/api/contest.standings?contestId={}&from={}&count={}",
        SCHEME, HOST, contest_id, STANDINGS_FROM, STANDINGS_COUNT
    )
}

fn failure_comment(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("comment")?
        .as_str()
        .map(str::to_owned)
}

/// Fetches contest metadata through the standings endpoint.
pub fn fetch_contest<H: HttpGet + ?Sized>(http: &H, contest_id: u64) -> Result<Contest> {
    let url = standings_url(contest_id);
    info!("Fetching contest info from {}", url);
    let response = http.get(&url).map_err(|e| Error::Network {
        contest_id,
        url: url.clone(),
        status: None,
        comment: None,
        source: Some(e),
    })?;
    if response.status != 200 {
        return Err(Error::Network {
            contest_id,
            comment: failure_comment(&response.body),
            url,
            status: Some(response.status),
            source: None,
        });
    }
    let mut body: Value = serde_json::from_str(&response.body)
        .map_err(|e| malformed_network(contest_id, &url, Malformed::Json(e)))?;
    let result = body
        .get_mut("result")
        .map(Value::take)
        .ok_or_else(|| malformed_network(contest_id, &url, Malformed::MissingResult))?;
    let contest = serde_json::from_value::<StandingsResult>(result)
        .map_err(|e| malformed_network(contest_id, &url, Malformed::Json(e)))?
        .into_contest()
        .map_err(|e| malformed_network(contest_id, &url, e))?;
    if contest.contest_id() != contest_id {
        return Err(malformed_network(
            contest_id,
            &url,
            Malformed::ContestMismatch {
                expected: contest_id,
                found: contest.contest_id(),
            },
        ));
    }
    debug!(
        "Contest {} has {} problems",
        contest_id,
        contest.problems().len()
    );
    Ok(contest)
}
