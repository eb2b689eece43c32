use super::hand_analysis::HandAnalysis;
use crate::evaluator::{Category, HandScore};

/// Strategy pattern: each category detector knows how to detect and score its category.
///
/// Detectors read group-size-agnostic facts from [`HandAnalysis`], so the same
/// table scores both five-card hands and the three-card top.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    fn build_score(&self, analysis: &HandAnalysis) -> HandScore;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: Five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush && analysis.straight_info.is_straight
    }

    fn build_score(&self, analysis: &HandAnalysis) -> HandScore {
        analysis.build_score(Category::StraightFlush, analysis.straight_info.top_rank)
    }
}

/// Four of a Kind: quad rank, then the kicker
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.quad().is_some()
    }

    fn build_score(&self, analysis: &HandAnalysis) -> HandScore {
        let groups = &analysis.rank_groups;
        let tiebreak = groups.quad().into_iter().chain(groups.kickers());
        analysis.build_score(Category::FourOfAKind, tiebreak)
    }
}

/// Full House: trips rank, then pair rank
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_full_house()
    }

    fn build_score(&self, analysis: &HandAnalysis) -> HandScore {
        let groups = &analysis.rank_groups;
        let tiebreak = groups.trips().into_iter().chain(groups.pairs());
        analysis.build_score(Category::FullHouse, tiebreak)
    }
}

/// Flush: All five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush
    }

    fn build_score(&self, analysis: &HandAnalysis) -> HandScore {
        // All 5 cards are kickers in flush ranking
        analysis.build_score(Category::Flush, analysis.ranks.iter().copied())
    }
}

/// Straight: Five consecutive ranks (not all same suit)
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight
    }

    fn build_score(&self, analysis: &HandAnalysis) -> HandScore {
        analysis.build_score(Category::Straight, analysis.straight_info.top_rank)
    }
}

/// Three of a Kind: trips rank, then kickers (none on a three-card top)
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.trips().is_some() && !analysis.rank_groups.has_full_house()
    }

    fn build_score(&self, analysis: &HandAnalysis) -> HandScore {
        let groups = &analysis.rank_groups;
        let tiebreak = groups.trips().into_iter().chain(groups.kickers());
        analysis.build_score(Category::ThreeOfAKind, tiebreak)
    }
}

/// Two Pair: high pair, low pair, kicker
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 2
    }

    fn build_score(&self, analysis: &HandAnalysis) -> HandScore {
        let groups = &analysis.rank_groups;
        let tiebreak = groups.pairs().into_iter().chain(groups.kickers());
        analysis.build_score(Category::TwoPair, tiebreak)
    }
}

/// One Pair: pair rank, then kickers (one on top, three on five cards)
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 1
    }

    fn build_score(&self, analysis: &HandAnalysis) -> HandScore {
        let groups = &analysis.rank_groups;
        let tiebreak = groups.pairs().into_iter().chain(groups.kickers());
        analysis.build_score(Category::Pair, tiebreak)
    }
}

/// High Card: No matching ranks or sequences
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true // Always matches as fallback
    }

    fn build_score(&self, analysis: &HandAnalysis) -> HandScore {
        analysis.build_score(Category::HighCard, analysis.ranks.iter().copied())
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
