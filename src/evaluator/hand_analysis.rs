use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, HandScore};

/// Pre-computed analysis of a 3- or 5-card group.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Ranks sorted descending.
    pub ranks: Vec<Rank>,
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    /// Analyze a group, computing all properties needed for evaluation.
    /// Flushes and straights are only recognised on five cards.
    pub fn new(cards: &[Card]) -> Self {
        let mut ranks: Vec<Rank> = cards.iter().map(|c| c.rank()).collect();
        ranks.sort_by(|a, b| b.cmp(a));

        let rank_groups = RankGroups::from_ranks(&ranks);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { ranks, rank_groups, suit_info, straight_info }
    }

    /// Build a score from a category and tiebreak ranks.
    pub fn build_score<I>(&self, category: Category, tiebreak: I) -> HandScore
    where
        I: IntoIterator<Item = Rank>,
    {
        HandScore::new(category, tiebreak)
    }
}
