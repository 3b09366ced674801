extern crate regex;

use regex::Regex;
use std::sync::OnceLock;

fn division_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"Div\.\s*([0-9])\s*(?:\+\s*Div\.\s*([0-9]))?").expect("division regex")
    })
}

/// Extracts the division numbers from a contest title.
///
/// `"Codeforces Round 123 (Div. 2)"` gives `[2]`, a combined round such as
/// `"(Div. 1 + Div. 2)"` gives `[1, 2]` and a title without `Div.` gives `[]`.
/// Only the first match counts.
pub fn compute_division(name: &str) -> Vec<u32> {
    division_regex()
        .captures(name)
        .map(|caps| {
            caps.iter()
                .skip(1)
                .flatten()
                .filter_map(|m| m.as_str().parse().ok())
                .collect()
        })
        .unwrap_or_default()
}
