use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Number of recommendations requested per submission. The service
/// accepts other values, but the form does not expose one.
pub const TOP_K: u32 = 5;

/// Candidate profile sent to the recommendation service
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileRequest {
    pub skills: Vec<String>,
    pub sector: String,
    pub location: String,
    pub bio: String,
    pub top_k: u32,
}

impl ProfileRequest {
    /// Builds a request from raw form field values.
    ///
    /// The skills field is comma-separated; entries are trimmed and
    /// empty pieces dropped, preserving entry order. The remaining
    /// fields are trimmed and may be empty.
    pub fn from_fields(skills: &str, sector: &str, location: &str, bio: &str) -> Self {
        Self {
            skills: parse_skills(skills),
            sector: sector.trim().to_string(),
            location: location.trim().to_string(),
            bio: bio.trim().to_string(),
            top_k: TOP_K,
        }
    }
}

/// Splits a comma-separated skills field into clean entries
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Score attached to a recommendation. The wire value may be a JSON
/// number or a string; either way it is an opaque display value and is
/// rendered verbatim.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Score {
    Number(f64),
    Text(String),
}

impl Default for Score {
    fn default() -> Self {
        Score::Text(String::new())
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Score::Number(n) => write!(f, "{}", n),
            Score::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One recommended internship as returned by the service
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Recommendation {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub score: Score,
    #[serde(default)]
    pub apply_link: Option<String>,
}

impl Recommendation {
    /// Target for the Apply action. The service may omit the link or
    /// send it empty; both fall back to the placeholder anchor.
    pub fn apply_href(&self) -> &str {
        match self.apply_link.as_deref() {
            Some(link) if !link.trim().is_empty() => link,
            _ => "#",
        }
    }
}

/// Envelope returned by POST /recommend
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RecommendResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl RecommendResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
