use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// "a.C.:", "a. C.:", "aC:" etc.
static ERA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\ba\.?\s*C\.?:").unwrap());
// Marker right after the leading year: its colon also closes the year token.
static YEAR_ERA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*a\.?\s*C\.?:").unwrap());
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+):").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalEvent {
    pub is_before_era: bool,
    pub year: u32,
    pub description: String,
}

/// Classify one list item's text. Never fails: missing pieces fall back to
/// `year = 0`, `is_before_era = true` and whatever text is left.
pub fn parse_event(text: &str) -> HistoricalEvent {
    let mut is_before_era = YEAR_ERA_RE.is_match(text) || ERA_RE.is_match(text);
    let text = YEAR_ERA_RE.replace(text, "${1}:");
    let text = ERA_RE.replace_all(&text, "");

    let year = match YEAR_RE.captures(&text) {
        Some(caps) => caps[1].parse().unwrap_or(0),
        None => {
            // No leading "digits:" means the era cannot be told either.
            is_before_era = true;
            0
        }
    };

    let description = YEAR_RE.replace(&text, "").trim().to_string();

    HistoricalEvent {
        is_before_era,
        year,
        description,
    }
}
