use crate::cards::{Card, Rank, Suit};
use crate::hand::{Hand, HandError, HAND_SIZE};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A standard 52-card deck, used to deal random thirteen-card hands.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use thirteen_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Take `n` cards from the top of the deck.
    fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let at = self.cards.len().saturating_sub(n);
        self.cards.split_off(at)
    }

    /// Deal the next thirteen cards as a hand. Fails once fewer than
    /// thirteen cards remain.
    pub fn deal_hand(&mut self) -> Result<Hand, HandError> {
        if self.len() < HAND_SIZE {
            return Err(HandError::WrongCount(self.len()));
        }
        Hand::try_new(self.draw_n(HAND_SIZE))
    }
}

/// A reproducible random hand: a fresh deck shuffled with `seed`, top thirteen cards.
///
/// ```
/// use thirteen_rs::deck::seeded_hand;
///
/// assert_eq!(seeded_hand(7), seeded_hand(7));
/// ```
pub fn seeded_hand(seed: u64) -> Hand {
    let mut deck = Deck::standard();
    deck.shuffle_seeded(seed);
    // A full deck always holds four distinct hands.
    match deck.deal_hand() {
        Ok(hand) => hand,
        Err(e) => unreachable!("fresh deck cannot fail to deal: {e}"),
    }
}
