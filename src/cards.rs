use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Face value, 2..=14 (Ace high).
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Position in `2,3,...,K,A`, 0..=12.
    pub const fn ordinal(self) -> u8 {
        self as u8 - 2
    }

    /// Inverse of [`Rank::value`].
    pub const fn from_value(v: u8) -> Option<Rank> {
        if v < 2 || v > 14 {
            return None;
        }
        Some(Rank::ALL[(v - 2) as usize])
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t == "10" {
            return Ok(Rank::Ten);
        }
        let mut chars = t.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::try_from(c).map_err(|_| RankParseError::Invalid(s.to_string())),
            _ => Err(RankParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(RankParseError::Invalid(c.to_string())),
        }
    }
}

/// Four suits; order has no hand-strength meaning but is fixed for ordering: C < D < H < S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Token symbol, as typed by the user.
    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    /// Hearts and diamonds render red, clubs and spades black.
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "clubs" => Ok(Suit::Clubs),
            "diamonds" => Ok(Suit::Diamonds),
            "hearts" => Ok(Suit::Hearts),
            "spades" => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card: rank + suit.
///
/// ```
/// use thirteen_rs::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(card.to_string(), "AS");
/// assert_eq!(card.glyph(), "♠A");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Display form: suit glyph followed by the rank symbol.
    pub fn glyph(self) -> String {
        format_card(self)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Accepts `<rank><suit>` where rank is `2-9`, `T`, `10`, `J`, `Q`, `K`, `A`
    /// and suit is `H`, `D`, `S`, `C`. Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let chars: Vec<char> = t.chars().collect();
        if chars.len() != 2 && chars.len() != 3 {
            return Err(CardParseError::Invalid(s.to_string()));
        }

        // rank is everything but the last char; suit is last char
        let (rank_chars, suit_ch) = chars.split_at(chars.len() - 1);
        let rank_str: String = rank_chars.iter().collect();
        let rank = Rank::from_str(&rank_str)?;
        let suit = Suit::try_from(suit_ch[0])?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use thirteen_rs::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("AS, KD 10c").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

/// Render a card for display: suit glyph then rank symbol, e.g. `♥A`.
pub fn format_card(card: Card) -> String {
    format!("{}{}", card.suit().glyph(), card.rank())
}

/// Render a group of cards, space separated.
pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(|c| format_card(*c)).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_display_and_from_str() {
        assert_eq!(Rank::Ace.to_string(), "A");
        assert_eq!(Rank::from_str("T").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("10").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("q").unwrap(), Rank::Queen);
        assert!(Rank::from_str("1").is_err());
        assert!(Rank::from_str("11").is_err());
    }

    #[test]
    fn rank_ordinal_and_value() {
        assert_eq!(Rank::Two.ordinal(), 0);
        assert_eq!(Rank::Five.ordinal(), 3);
        assert_eq!(Rank::Ace.ordinal(), 12);
        assert_eq!(Rank::from_value(11), Some(Rank::Jack));
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn suit_display_and_from_str() {
        assert_eq!(Suit::Spades.to_string(), "S");
        assert_eq!(Suit::from_str("s").unwrap(), Suit::Spades);
        assert_eq!(Suit::from_str("Hearts").unwrap(), Suit::Hearts);
        assert!(Suit::from_str("x").is_err());
    }

    #[test]
    fn card_display_and_from_str() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(a.to_string(), "AS");
        assert_eq!(Card::from_str("AS").unwrap(), a);
        assert_eq!(Card::from_str("10d").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!(Card::from_str("ah").unwrap(), Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(Card::from_str("tc").unwrap(), Card::new(Rank::Ten, Suit::Clubs));
    }

    #[test]
    fn card_rejects_malformed_tokens() {
        assert!(matches!(Card::from_str("A"), Err(CardParseError::Invalid(_))));
        assert!(matches!(Card::from_str("AHS"), Err(CardParseError::Rank(_))));
        assert!(matches!(Card::from_str("10HH"), Err(CardParseError::Invalid(_))));
        assert!(matches!(Card::from_str("1H"), Err(CardParseError::Rank(_))));
        assert!(matches!(Card::from_str("XX"), Err(CardParseError::Rank(_))));
        assert!(matches!(Card::from_str("AX"), Err(CardParseError::Suit(_))));
        assert!(Card::from_str("♥A").is_err());
    }

    #[test]
    fn glyph_rendering() {
        assert_eq!(format_card(Card::new(Rank::Ace, Suit::Hearts)), "♥A");
        assert_eq!(Card::new(Rank::Ten, Suit::Clubs).glyph(), "♣T");
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Spades.is_red());
        let xs = [Card::new(Rank::King, Suit::Spades), Card::new(Rank::Two, Suit::Diamonds)];
        assert_eq!(format_cards(&xs), "♠K ♦2");
    }

    #[test]
    fn ordering_is_rank_then_suit() {
        let as_ = Card::new(Rank::Ace, Suit::Spades);
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert!(as_ > ah);
        assert!(ah > kd);
    }

    #[test]
    fn parse_many_cards() {
        let xs = parse_cards("AS, KD 10c").unwrap();
        assert_eq!(xs.len(), 3);
        assert_eq!(xs[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(xs[1], Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(xs[2], Card::new(Rank::Ten, Suit::Clubs));
    }
}
