/// Terminal rendition of the form page: four text inputs and a results
/// area printed to stdout. Cards are numbered so the host loop can
/// address their feedback controls.
use colored::Colorize;

use crate::render::{Card, FeedbackControl, LOADING_TEXT, NO_MATCHES_TEXT};
use crate::view::{Field, FormView};

#[derive(Default)]
pub struct TermView {
    skills: String,
    sector: String,
    location: String,
    bio: String,
    /// Cards currently occupying the results area; match cards carry
    /// their feedback control
    results: Vec<(Card, Option<FeedbackControl>)>,
}

impl TermView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates the feedback control of the n-th displayed card
    /// (1-based). Returns the control's label afterwards, or None when
    /// that card has no control.
    pub fn mark_useful(&mut self, index: usize) -> Option<&'static str> {
        let (_, feedback) = self.results.get_mut(index.checked_sub(1)?)?;
        let control = feedback.as_mut()?;
        control.activate();
        Some(control.label())
    }

    pub fn print_fields(&self) {
        for field in Field::ALL {
            println!("  {:>8}: {}", field.name(), self.input(field));
        }
    }

    fn print_results(&self) {
        for (index, (card, feedback)) in self.results.iter().enumerate() {
            match card {
                Card::Loading => println!("  {}", LOADING_TEXT.italic()),
                Card::Error(text) => println!("  {}", text.red()),
                Card::NoMatches => println!("  {}", NO_MATCHES_TEXT.yellow()),
                Card::Match(card) => {
                    let label = feedback
                        .as_ref()
                        .map(FeedbackControl::label)
                        .unwrap_or("Useful");
                    println!(
                        "{:>2}. {} {}",
                        index + 1,
                        card.title.bold(),
                        format!("[{}]", card.badge).green()
                    );
                    println!("    {}", card.meta.dimmed());
                    println!("    {}", card.description);
                    println!("    {}", card.why.dimmed());
                    println!("    Apply: {}   [{}]", card.apply_link.underline(), label);
                }
            }
        }
    }
}

impl FormView for TermView {
    fn input(&self, field: Field) -> String {
        match field {
            Field::Skills => self.skills.clone(),
            Field::Sector => self.sector.clone(),
            Field::Location => self.location.clone(),
            Field::Bio => self.bio.clone(),
        }
    }

    fn set_input(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Skills => &mut self.skills,
            Field::Sector => &mut self.sector,
            Field::Location => &mut self.location,
            Field::Bio => &mut self.bio,
        };
        *slot = value.to_string();
    }

    fn show(&mut self, cards: Vec<Card>) {
        self.results = cards
            .into_iter()
            .map(|card| {
                let feedback = matches!(card, Card::Match(_)).then(FeedbackControl::new);
                (card, feedback)
            })
            .collect();
        self.print_results();
    }
}
