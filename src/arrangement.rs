use crate::cards::{format_cards, Card};
use crate::evaluator::{evaluate_five, evaluate_three, HandScore};
use std::fmt;

/// Comparison key for an arrangement: bottom first, then middle, then top.
///
/// Field order drives the derived lexicographic ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ArrangementKey {
    pub bottom: HandScore,
    pub middle: HandScore,
    pub top: HandScore,
}

impl ArrangementKey {
    /// The domination rule: `bottom >= middle >= top`.
    pub fn is_valid(&self) -> bool {
        is_valid_scores(&self.top, &self.middle, &self.bottom)
    }
}

/// A legal split of thirteen cards into a 3-card top and two 5-card hands.
///
/// Only the search builds these, so every value satisfies the domination rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrangement {
    top: [Card; 3],
    middle: [Card; 5],
    bottom: [Card; 5],
    key: ArrangementKey,
}

impl Arrangement {
    pub(crate) fn new(
        top: [Card; 3],
        middle: [Card; 5],
        bottom: [Card; 5],
        key: ArrangementKey,
    ) -> Self {
        debug_assert!(key.is_valid());
        Self { top, middle, bottom, key }
    }

    pub fn top(&self) -> &[Card; 3] {
        &self.top
    }

    pub fn middle(&self) -> &[Card; 5] {
        &self.middle
    }

    pub fn bottom(&self) -> &[Card; 5] {
        &self.bottom
    }

    pub fn key(&self) -> ArrangementKey {
        self.key
    }

    /// All thirteen cards, top then middle then bottom.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.top.iter().chain(self.middle.iter()).chain(self.bottom.iter()).copied()
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: [(&str, &[Card], HandScore); 3] = [
            ("top", &self.top[..], self.key.top),
            ("middle", &self.middle[..], self.key.middle),
            ("bottom", &self.bottom[..], self.key.bottom),
        ];
        for (i, (label, cards, score)) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{label:<7}{:<16}{}", format_cards(cards), score.category)?;
        }
        Ok(())
    }
}

/// Check the domination rule on a candidate (top, middle, bottom) triple.
///
/// Scores are compared in full, category then every tiebreak rank.
///
/// ```
/// use thirteen_rs::arrangement::is_valid;
/// use thirteen_rs::cards::parse_cards;
///
/// let top: [_; 3] = parse_cards("9S 8H 7D").unwrap().try_into().unwrap();
/// let middle: [_; 5] = parse_cards("QD QH QS JC JD").unwrap().try_into().unwrap();
/// let bottom: [_; 5] = parse_cards("AH AD AC KH KS").unwrap().try_into().unwrap();
/// assert!(is_valid(&top, &middle, &bottom));
/// assert!(!is_valid(&top, &bottom, &middle));
/// ```
pub fn is_valid(top: &[Card; 3], middle: &[Card; 5], bottom: &[Card; 5]) -> bool {
    is_valid_scores(&evaluate_three(top), &evaluate_five(middle), &evaluate_five(bottom))
}

/// [`is_valid`] on scores that are already computed.
pub fn is_valid_scores(top: &HandScore, middle: &HandScore, bottom: &HandScore) -> bool {
    bottom >= middle && middle >= top
}
