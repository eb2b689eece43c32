pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category from weakest to strongest.
///
/// Three-card groups share this scale but can only reach `HighCard`,
/// `Pair` and `ThreeOfAKind`. A trips top therefore outranks any two-pair
/// middle, and the arrangement is illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::Pair => "pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Longest tiebreak any category needs (flush and high card: all five ranks).
pub const MAX_TIEBREAK: usize = 5;

/// Category plus the ranks that order hands within it. Higher is better.
///
/// Ordering compares the category, then the tiebreak ranks pairwise.
/// When one tiebreak is a prefix of the other the scores are equal, which
/// is what lets a three-card top be compared with a five-card middle.
///
/// Scores of same-size groups always have same-length tiebreaks within a
/// category, so they form a total order. Mixing sizes is only meaningful
/// pairwise: `[A,K,Q]` equals both `[A,K,Q,4,2]` and `[A,K,Q,5,3]`, which
/// differ from each other. Do not sort 3-card and 5-card scores together.
#[derive(Debug, Clone, Copy)]
pub struct HandScore {
    pub category: Category,
    tiebreak: [Rank; MAX_TIEBREAK],
    len: u8,
}

impl HandScore {
    /// Build a score from a category and its tiebreak ranks, most significant first.
    /// Ranks beyond [`MAX_TIEBREAK`] are ignored.
    pub fn new<I>(category: Category, ranks: I) -> Self
    where
        I: IntoIterator<Item = Rank>,
    {
        let mut tiebreak = [Rank::Two; MAX_TIEBREAK];
        let mut len = 0u8;
        for (slot, rank) in tiebreak.iter_mut().zip(ranks) {
            *slot = rank;
            len += 1;
        }
        Self { category, tiebreak, len }
    }

    /// Tiebreak ranks, most significant first.
    pub fn tiebreak(&self) -> &[Rank] {
        &self.tiebreak[..self.len as usize]
    }

    /// Tiebreak as rank ordinals (0 = Two, 12 = Ace).
    pub fn tiebreak_ordinals(&self) -> Vec<u8> {
        self.tiebreak().iter().map(|r| r.ordinal()).collect()
    }

    /// The dominant rank: straight high card, set rank, pair rank or top card.
    pub fn primary(&self) -> Rank {
        self.tiebreak[0]
    }
}

impl Ord for HandScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category.cmp(&other.category).then_with(|| {
            self.tiebreak()
                .iter()
                .zip(other.tiebreak())
                .map(|(a, b)| a.cmp(b))
                .find(|o| *o != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl PartialOrd for HandScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandScore {}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.category)?;
        for (i, r) in self.tiebreak().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{r}")?;
        }
        f.write_str(")")
    }
}

/// Evaluate exactly five cards; detects category and encodes tie-breakers.
///
/// ```
/// use thirteen_rs::cards::parse_cards;
/// use thirteen_rs::evaluator::{evaluate_five, Category};
///
/// let cards: [_; 5] = parse_cards("AH AD AC KH KS").unwrap().try_into().unwrap();
/// let score = evaluate_five(&cards);
/// assert_eq!(score.category, Category::FullHouse);
/// ```
pub fn evaluate_five(cards: &[Card; 5]) -> HandScore {
    evaluate_group(cards)
}

/// Evaluate a three-card top hand. Only trips, pairs and high cards count;
/// three suited or consecutive cards are still a high card.
///
/// ```
/// use thirteen_rs::cards::parse_cards;
/// use thirteen_rs::evaluator::{evaluate_three, Category};
///
/// let cards: [_; 3] = parse_cards("AH AD 3C").unwrap().try_into().unwrap();
/// let score = evaluate_three(&cards);
/// assert_eq!(score.category, Category::Pair);
/// assert_eq!(score.tiebreak_ordinals(), vec![12, 1]);
/// ```
pub fn evaluate_three(cards: &[Card; 3]) -> HandScore {
    evaluate_group(cards)
}

fn evaluate_group(cards: &[Card]) -> HandScore {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    // Check categories in priority order (highest to lowest)
    for detector in DETECTORS.iter() {
        if detector.detect(&analysis) {
            return detector.build_score(&analysis);
        }
    }

    // Unreachable: HighCard detector always matches as fallback
    unreachable!("HighCard detector should always match")
}
