//! The fixed Library of Congress topic vocabulary.
//!
//! `message.library_of_congress_topics` values are drawn from this list.
//! Membership is not enforced at assembly time; unknown topics are rejected
//! by the service at delivery. The vocabulary is exposed as a caller aid for
//! building topic pickers and pre-submission checks.

/// All supported topic codes, in the service's canonical order.
pub const TOPIC_CODES: &[&str] = &[
    "Agriculture and Food",
    "Animals",
    "Armed Forces and National Security",
    "Arts, Culture, Religion",
    "Civil Rights and Liberties, Minority Issues",
    "Commerce",
    "Congress",
    "Crime and Law Enforcement",
    "Economics and Public Finance",
    "Education",
    "Emergency Management",
    "Energy",
    "Environmental Protection",
    "Families",
    "Finance and Financial Sector",
    "Foreign Trade and International Finance",
    "Government Operations and Politics",
    "Health",
    "Housing and Community Development",
    "Immigration",
    "International Affairs",
    "Labor and Employment",
    "Law",
    "Native Americans",
    "Public Lands and Natural Resources",
    "Science, Technology, Communications",
    "Social Sciences and History",
    "Social Welfare",
    "Sports and Recreation",
    "Taxation",
    "Transportation and Public Works",
    "Water Resources Development",
];

/// True when `code` belongs to the topic vocabulary.
#[must_use]
pub fn is_topic_code(code: &str) -> bool {
    TOPIC_CODES.contains(&code)
}
