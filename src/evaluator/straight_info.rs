use crate::cards::Rank;

/// Information about whether a hand contains a straight and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    const NONE: StraightInfo = StraightInfo { is_straight: false, top_rank: None };

    /// Detect a straight from five ranks in any order.
    /// Handles both regular straights and the wheel (A-2-3-4-5).
    /// Any other group size is never a straight.
    pub fn detect(ranks: &[Rank]) -> Self {
        let Ok(ranks) = <[Rank; 5]>::try_from(ranks) else {
            return Self::NONE;
        };
        let mut sorted_ranks = ranks;
        sorted_ranks.sort_by(|a, b| b.cmp(a));

        let is_consecutive =
            (0..4).all(|i| sorted_ranks[i].value() == sorted_ranks[i + 1].value() + 1);

        if is_consecutive {
            return StraightInfo { is_straight: true, top_rank: Some(sorted_ranks[0]) };
        }

        if sorted_ranks == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
            return StraightInfo {
                is_straight: true,
                top_rank: Some(Rank::Five), // In wheel, Five is the top rank
            };
        }

        Self::NONE
    }
}
