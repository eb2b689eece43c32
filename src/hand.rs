use crate::cards::{Card, CardParseError};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Number of cards in a thirteen-card hand.
pub const HAND_SIZE: usize = 13;

/// Reasons a hand is rejected before any search runs.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 13 cards, got {0}")]
    WrongCount(usize),
    #[error("invalid card token '{token}': {source}")]
    InvalidToken {
        token: String,
        #[source]
        source: CardParseError,
    },
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}

/// Thirteen pairwise-distinct cards.
///
/// The only way to build one is through validation, so the search can
/// rely on the cardinality and uniqueness invariants.
///
/// ```
/// use thirteen_rs::hand::Hand;
///
/// let hand: Hand = "AH AD AC KH KS QD QH QS JC JD 9S 8H 7D".parse().unwrap();
/// assert_eq!(hand.as_slice().len(), 13);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            cards.try_into().map_err(|v: Vec<Card>| HandError::WrongCount(v.len()))?;
        let mut seen = HashSet::with_capacity(HAND_SIZE);
        for card in cards {
            if !seen.insert(card) {
                return Err(HandError::DuplicateCard(card));
            }
        }
        Ok(Self(cards))
    }

    /// Join several text fields (e.g. two input lines) into one hand.
    /// Duplicates across fields are rejected like duplicates within one.
    ///
    /// ```
    /// use thirteen_rs::hand::Hand;
    ///
    /// let hand = Hand::from_parts(["AH AD AC KH KS QD", "QH QS JC JD 9S 8H 7D"]).unwrap();
    /// assert_eq!(hand.as_slice().len(), 13);
    /// ```
    pub fn from_parts<'a, I>(parts: I) -> Result<Self, HandError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let tokens: Vec<&str> = parts.into_iter().flat_map(str::split_whitespace).collect();
        Self::from_tokens(&tokens)
    }

    fn from_tokens(tokens: &[&str]) -> Result<Self, HandError> {
        if tokens.len() != HAND_SIZE {
            return Err(HandError::WrongCount(tokens.len()));
        }
        let cards = tokens
            .iter()
            .map(|t| {
                Card::from_str(t)
                    .map_err(|source| HandError::InvalidToken { token: t.to_string(), source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_new(cards)
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.0
    }

    pub fn as_array(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0.contains(&card)
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_parts([s])
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Parse and validate a whitespace-separated 13-card hand.
pub fn parse_hand(input: &str) -> Result<Hand, HandError> {
    input.parse()
}
