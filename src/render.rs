/// Result-area rendering
///
/// Classifying an exchange outcome into cards is pure; views apply the
/// cards imperatively. This keeps the error/empty/list branches
/// testable without a live view.
use crate::client::FetchResult;
use crate::models::Recommendation;

/// Interim text shown while a submission is in flight
pub const LOADING_TEXT: &str = "Loading recommendations…";
/// Guidance shown when the service returns an empty result list
pub const NO_MATCHES_TEXT: &str = "No matches found. Try broader skills or remove location filter.";
/// Fallback when the service reports a failure without a message
pub const UNKNOWN_ERROR: &str = "Unknown";

/// One render instruction for the results area
#[derive(Debug, Clone, PartialEq)]
pub enum Card {
    Loading,
    /// Final display text, prefix included
    Error(String),
    NoMatches,
    Match(MatchCard),
}

/// Display-ready card for one recommendation
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCard {
    pub title: String,
    /// Score badge text, verbatim from the service
    pub badge: String,
    /// "company • location • duration"
    pub meta: String,
    pub description: String,
    /// "Why: …" line
    pub why: String,
    pub apply_link: String,
}

impl MatchCard {
    fn from_recommendation(rec: &Recommendation) -> Self {
        Self {
            title: rec.title.clone(),
            badge: rec.score.to_string(),
            meta: format!("{} • {} • {}", rec.company, rec.location, rec.duration),
            description: rec.description.clone(),
            why: format!("Why: {}", rec.explanation),
            apply_link: rec.apply_href().to_string(),
        }
    }
}

/// Maps one exchange outcome to the cards that replace the results area
pub fn cards(result: &FetchResult) -> Vec<Card> {
    match result {
        FetchResult::TransportFailure(message) => {
            vec![Card::Error(format!("Network error: {}", message))]
        }
        FetchResult::Success(envelope) if !envelope.is_ok() => {
            let message = envelope.message.as_deref().unwrap_or(UNKNOWN_ERROR);
            vec![Card::Error(format!("Error: {}", message))]
        }
        FetchResult::Success(envelope) if envelope.recommendations.is_empty() => {
            vec![Card::NoMatches]
        }
        FetchResult::Success(envelope) => envelope
            .recommendations
            .iter()
            .map(|rec| Card::Match(MatchCard::from_recommendation(rec)))
            .collect(),
    }
}

/// One-shot acknowledgment attached to a rendered match card.
///
/// Activating it disables the control and relabels it. Nothing is sent
/// to the service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackControl {
    acknowledged: bool,
}

impl FeedbackControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(&self) -> &'static str {
        if self.acknowledged {
            "Thanks"
        } else {
            "Useful"
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.acknowledged
    }

    /// Marks the recommendation as useful. Returns false once disabled;
    /// repeat activations are ignored.
    pub fn activate(&mut self) -> bool {
        if self.acknowledged {
            return false;
        }
        self.acknowledged = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecommendResponse;

    fn envelope(json: &str) -> FetchResult {
        FetchResult::Success(serde_json::from_str::<RecommendResponse>(json).unwrap())
    }

    #[test]
    fn test_error_status_renders_single_error_card() {
        let result = envelope(r#"{"status": "error", "message": "bad input"}"#);
        let cards = cards(&result);
        assert_eq!(cards.len(), 1);
        match &cards[0] {
            Card::Error(text) => assert!(text.contains("bad input")),
            other => panic!("expected error card, got {:?}", other),
        }
    }

    #[test]
    fn test_error_status_without_message_falls_back_to_unknown() {
        let result = envelope(r#"{"status": "error"}"#);
        let cards = cards(&result);
        assert_eq!(cards, vec![Card::Error("Error: Unknown".to_string())]);
    }

    #[test]
    fn test_empty_list_renders_single_no_matches_card() {
        let result = envelope(r#"{"status": "ok", "recommendations": []}"#);
        assert_eq!(cards(&result), vec![Card::NoMatches]);
    }

    #[test]
    fn test_match_card_lines() {
        let result = envelope(
            r#"{
                "status": "ok",
                "recommendations": [{
                    "title": "Intern A",
                    "score": 0.9,
                    "company": "Acme",
                    "location": "Remote",
                    "duration": "3mo",
                    "description": "d",
                    "explanation": "e",
                    "apply_link": "http://x"
                }]
            }"#,
        );

        let cards = cards(&result);
        assert_eq!(cards.len(), 1);
        let card = match &cards[0] {
            Card::Match(card) => card,
            other => panic!("expected match card, got {:?}", other),
        };
        assert_eq!(card.title, "Intern A");
        assert_eq!(card.badge, "0.9");
        assert_eq!(card.meta, "Acme • Remote • 3mo");
        assert_eq!(card.description, "d");
        assert_eq!(card.why, "Why: e");
        assert_eq!(card.apply_link, "http://x");
    }

    #[test]
    fn test_match_cards_keep_server_order() {
        let result = envelope(
            r#"{
                "status": "ok",
                "recommendations": [
                    {"title": "First", "score": 0.1},
                    {"title": "Second", "score": 0.9},
                    {"title": "Third", "score": 0.5}
                ]
            }"#,
        );

        let titles: Vec<String> = cards(&result)
            .into_iter()
            .map(|card| match card {
                Card::Match(card) => card.title,
                other => panic!("expected match card, got {:?}", other),
            })
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_missing_apply_link_defaults_to_anchor() {
        let result = envelope(r#"{"status": "ok", "recommendations": [{"title": "A", "score": 1}]}"#);
        match &cards(&result)[0] {
            Card::Match(card) => assert_eq!(card.apply_link, "#"),
            other => panic!("expected match card, got {:?}", other),
        }
    }

    #[test]
    fn test_transport_failure_renders_failure_message() {
        let result = FetchResult::TransportFailure("connection refused".to_string());
        let cards = cards(&result);
        assert_eq!(cards.len(), 1);
        match &cards[0] {
            Card::Error(text) => {
                assert!(text.starts_with("Network error: "));
                assert!(text.contains("connection refused"));
            }
            other => panic!("expected error card, got {:?}", other),
        }
    }

    #[test]
    fn test_feedback_control_is_one_shot() {
        let mut control = FeedbackControl::new();
        assert_eq!(control.label(), "Useful");
        assert!(control.is_enabled());

        assert!(control.activate());
        assert_eq!(control.label(), "Thanks");
        assert!(!control.is_enabled());

        // Second activation is a no-op
        assert!(!control.activate());
        assert_eq!(control.label(), "Thanks");
    }
}
