//! Render models for the results panel.
//!
//! Both functions here are pure: same response in, same view out. The
//! terminal layer turns the views into coloured text.

use std::time::Duration;

use medassist_common::diagnosis::{DiagnosisEntry, DiagnosisResponse};
use medassist_common::palette::RankColor;

pub const EMPTY_RESULTS_MESSAGE: &str = "No diagnoses determined.";

/// Entrance delay added per card position.
pub const CARD_STAGGER: Duration = Duration::from_millis(80);

/// One rendered diagnosis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub badge: String,
    pub name: String,
    pub code: String,
    pub explanation: String,
    pub color: RankColor,
    /// Entrance animation offset. Has no effect on content.
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedCard {
    /// Classification code followed by the list position, unique even when
    /// codes repeat.
    pub key: String,
    pub card: CardView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Empty { message: &'static str },
    Listed { header: String, cards: Vec<KeyedCard> },
}

impl ResultsView {
    pub fn cards(&self) -> &[KeyedCard] {
        match self {
            ResultsView::Empty { .. } => &[],
            ResultsView::Listed { cards, .. } => cards,
        }
    }
}

pub fn render_card(entry: &DiagnosisEntry, delay: Duration) -> CardView {
    CardView {
        badge: format!("#{}", entry.rank),
        name: entry.diagnosis.clone(),
        code: entry.icd10_code.clone(),
        explanation: entry.explanation.clone(),
        color: RankColor::for_rank(entry.rank),
        delay,
    }
}

/// Cards come out in the order of `response.diagnoses`, never by rank.
pub fn render_results(response: &DiagnosisResponse) -> ResultsView {
    if response.is_empty() {
        return ResultsView::Empty {
            message: EMPTY_RESULTS_MESSAGE,
        };
    }

    let cards = response
        .diagnoses
        .iter()
        .enumerate()
        .map(|(idx, entry)| KeyedCard {
            key: format!("{}{}", entry.icd10_code, idx),
            card: render_card(entry, stagger(idx)),
        })
        .collect();

    ResultsView::Listed {
        header: format!("Results: {} hypotheses", response.len()),
        cards,
    }
}

fn stagger(idx: usize) -> Duration {
    CARD_STAGGER.saturating_mul(u32::try_from(idx).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rank: i64, name: &str, code: &str) -> DiagnosisEntry {
        DiagnosisEntry {
            rank,
            diagnosis: name.into(),
            icd10_code: code.into(),
            explanation: format!("{name} explanation"),
        }
    }

    #[test]
    fn empty_response_renders_message_and_no_cards() {
        let view = render_results(&DiagnosisResponse { diagnoses: vec![] });
        assert_eq!(view, ResultsView::Empty { message: EMPTY_RESULTS_MESSAGE });
        assert!(view.cards().is_empty());
    }

    #[test]
    fn single_entry_renders_one_primary_card() {
        let response = DiagnosisResponse {
            diagnoses: vec![entry(1, "Hypertension", "I10")],
        };
        let ResultsView::Listed { header, cards } = render_results(&response) else {
            panic!("expected a listed view");
        };

        assert_eq!(header, "Results: 1 hypotheses");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].key, "I100");
        assert_eq!(cards[0].card.badge, "#1");
        assert_eq!(cards[0].card.color, RankColor::Primary);
        assert_eq!(cards[0].card.delay, Duration::ZERO);
    }

    #[test]
    fn out_of_palette_ranks_use_default_color() {
        for rank in [0, 99, -3] {
            let card = render_card(&entry(rank, "Other", "R69"), Duration::ZERO);
            assert_eq!(card.badge, format!("#{rank}"));
            assert_eq!(card.color, RankColor::default());
        }
    }

    #[test]
    fn order_follows_input_not_rank() {
        let response = DiagnosisResponse {
            diagnoses: vec![
                entry(3, "Angina", "I20"),
                entry(1, "Hypertension", "I10"),
                entry(1, "Heart failure", "I50"),
                entry(2, "Angina again", "I20"),
            ],
        };
        let view = render_results(&response);

        let names: Vec<&str> = view.cards().iter().map(|c| c.card.name.as_str()).collect();
        assert_eq!(names, ["Angina", "Hypertension", "Heart failure", "Angina again"]);

        let keys: Vec<&str> = view.cards().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["I200", "I101", "I502", "I203"]);

        let delays: Vec<u128> = view.cards().iter().map(|c| c.card.delay.as_millis()).collect();
        assert_eq!(delays, [0, 80, 160, 240]);
    }
}
