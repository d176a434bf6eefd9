use crate::render::Card;

/// Form input fields read by the submitter and reset by the clear action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Skills,
    Sector,
    Location,
    Bio,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Skills, Field::Sector, Field::Location, Field::Bio];

    /// Field identifier as the surrounding page names it
    pub fn name(&self) -> &'static str {
        match self {
            Field::Skills => "skills",
            Field::Sector => "sector",
            Field::Location => "location",
            Field::Bio => "bio",
        }
    }
}

/// Capability boundary between the form logic and its host.
///
/// The host owns four text inputs and one results area; the form logic
/// only reads fields, writes fields, and replaces the results area
/// wholesale. Overlapping submissions race on the results area and the
/// later render wins.
pub trait FormView {
    /// Current text of one input field
    fn input(&self, field: Field) -> String;

    /// Overwrites one input field
    fn set_input(&mut self, field: Field, value: &str);

    /// Replaces the entire results area with the given cards. An empty
    /// vector clears it.
    fn show(&mut self, cards: Vec<Card>);
}
