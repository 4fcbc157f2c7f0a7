//! Routing free-text questions to the advisor
//!
//! A question is treated as a warehouse request when it contains something
//! that looks like a query id and mentions query ids, recommendations,
//! optimization or warehouses.
//!
//! # Examples
//!
//! ```
//! use snowwiz::intent::{route, Intent};
//!
//! let intent = route("What's the warehouse recommendation for query ID test_abc12345?");
//! assert_eq!(intent, Intent::Recommend(vec!["test_abc12345".to_string()]));
//!
//! assert_eq!(route("What did I write about gardening?"), Intent::Other);
//! ```

use regex::Regex;
use std::sync::OnceLock;

/// Words long enough to look like ids that never are
const COMMON_WORDS: &[&str] = &[
    "warehouse",
    "optimize",
    "recommendation",
    "question",
    "database",
];

const QUERY_ID_MENTIONS: &[&str] = &["query id", "query_id", "queryid"];
const ADVISOR_KEYWORDS: &[&str] = &["recommend", "optimize", "warehouse"];

const TEST_PREFIX: &str = "test_";

static QUERY_ID_RE: OnceLock<Regex> = OnceLock::new();

fn query_id_regex() -> &'static Regex {
    QUERY_ID_RE.get_or_init(|| {
        Regex::new(r"\b(?:test_)?([a-z0-9]{8,})\b").expect("query id regex is valid")
    })
}

/// What a question is asking for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Warehouse recommendations for these query ids
    Recommend(Vec<String>),
    /// Anything else
    Other,
}

/// Pull candidate query ids out of free text
///
/// Ids are eight or more lower-case alphanumerics, optionally prefixed with
/// `test_`; the prefix is kept when the text contains it.
///
/// # Examples
///
/// ```
/// use snowwiz::intent::extract_query_ids;
///
/// assert_eq!(
///     extract_query_ids("Check query IDs test_abc12345 and XYZ98765"),
///     vec!["test_abc12345", "xyz98765"]
/// );
/// ```
pub fn extract_query_ids(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();

    query_id_regex()
        .captures_iter(&lower)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|candidate| !COMMON_WORDS.contains(candidate))
        .map(|candidate| {
            let prefixed = format!("{}{}", TEST_PREFIX, candidate);
            if lower.contains(&prefixed) {
                prefixed
            } else {
                candidate.to_string()
            }
        })
        .collect()
}

/// Whether the text talks about query ids or warehouse sizing
pub fn mentions_advisor_topic(text: &str) -> bool {
    let lower = text.to_lowercase();
    QUERY_ID_MENTIONS
        .iter()
        .chain(ADVISOR_KEYWORDS)
        .any(|keyword| lower.contains(keyword))
}

/// Decide how to answer a question
pub fn route(text: &str) -> Intent {
    let ids = extract_query_ids(text);
    if !ids.is_empty() && mentions_advisor_topic(text) {
        log::debug!("Routing to advisor with ids {:?}", ids);
        Intent::Recommend(ids)
    } else {
        Intent::Other
    }
}
