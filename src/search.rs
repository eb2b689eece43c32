//! Exhaustive search for the strongest legal arrangement of a hand.
//!
//! Every way of picking 3 top cards (C(13,3) = 286) is paired with every way
//! of picking 5 middle cards from the remaining 10 (C(10,5) = 252); the last
//! five cards form the bottom. Of these 72,072 triples the valid one with the
//! greatest [`ArrangementKey`] wins.

use crate::arrangement::{Arrangement, ArrangementKey};
use crate::cards::Card;
use crate::evaluator::combinations::{binomial, complement, Combinations};
use crate::evaluator::{evaluate_five, evaluate_three};
use crate::hand::{Hand, HandError, HAND_SIZE};

/// Number of (top, middle, bottom) triples examined for one hand.
pub const CANDIDATES: usize = binomial(HAND_SIZE, 3) * binomial(HAND_SIZE - 3, 5);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    #[error("no legal arrangement: every split breaks bottom >= middle >= top")]
    NoArrangement,
}

/// Failure of the text-in, arrangement-out entry point.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnalyzeError {
    #[error("invalid hand: {0}")]
    Input(#[from] HandError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// How the outer loop over top hands is executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    #[default]
    Sequential,
    /// Spread top-hand choices over the rayon pool. Without the `parallel`
    /// feature this runs sequentially.
    Parallel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub strategy: Strategy,
}

impl SearchOptions {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Outcome of one search, with counters for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchReport {
    pub best: Option<Arrangement>,
    /// Triples examined.
    pub candidates: usize,
    /// Triples satisfying the domination rule.
    pub valid: usize,
}

impl SearchReport {
    /// Combine two partial results. Ties keep `self`, so merging in
    /// enumeration order gives the same winner as a sequential scan.
    fn merge(self, other: Self) -> Self {
        let best = match (self.best, other.best) {
            (Some(a), Some(b)) if b.key() > a.key() => Some(b),
            (Some(a), _) => Some(a),
            (None, b) => b,
        };
        Self { best, candidates: self.candidates + other.candidates, valid: self.valid + other.valid }
    }
}

/// Arrangement search with configurable execution.
///
/// ```
/// use thirteen_rs::hand::Hand;
/// use thirteen_rs::search::{SearchOptions, Solver, CANDIDATES};
///
/// let hand: Hand = "AH AD AC KH KS QD QH QS JC JD 9S 8H 7D".parse().unwrap();
/// let report = Solver::new(SearchOptions::default()).search(&hand);
/// assert_eq!(report.candidates, CANDIDATES);
/// assert!(report.best.is_some());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    options: SearchOptions,
}

impl Solver {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    pub fn search(&self, hand: &Hand) -> SearchReport {
        let cards = hand.as_array();
        let report = match self.options.strategy {
            Strategy::Sequential => search_sequential(cards),
            Strategy::Parallel => search_parallel(cards),
        };
        log::debug!(
            "searched {} candidates ({} valid) with {:?} strategy",
            report.candidates,
            report.valid,
            self.options.strategy
        );
        report
    }

    pub fn find_best(&self, hand: &Hand) -> Option<Arrangement> {
        self.search(hand).best
    }

    pub fn solve(&self, hand: &Hand) -> Result<Arrangement, SearchError> {
        self.find_best(hand).ok_or(SearchError::NoArrangement)
    }
}

/// Best legal arrangement of `hand`, or `None` when no split is legal.
///
/// ```
/// use thirteen_rs::evaluator::Category;
/// use thirteen_rs::hand::Hand;
/// use thirteen_rs::search::find_best;
///
/// let hand: Hand = "AH AD AC KH KS QD QH QS JC JD 9S 8H 7D".parse().unwrap();
/// let best = find_best(&hand).unwrap();
/// assert_eq!(best.key().bottom.category, Category::FullHouse);
/// ```
pub fn find_best(hand: &Hand) -> Option<Arrangement> {
    Solver::default().find_best(hand)
}

/// Like [`find_best`], reporting the empty case as [`SearchError::NoArrangement`].
pub fn solve(hand: &Hand) -> Result<Arrangement, SearchError> {
    Solver::default().solve(hand)
}

/// Parse, validate and solve a whitespace-separated hand.
pub fn analyze(input: &str) -> Result<Arrangement, AnalyzeError> {
    let hand: Hand = input.parse()?;
    Ok(solve(&hand)?)
}

fn search_sequential(cards: &[Card; HAND_SIZE]) -> SearchReport {
    Combinations::<3>::new(HAND_SIZE)
        .map(|top| search_top(cards, top))
        .fold(SearchReport::default(), SearchReport::merge)
}

#[cfg(feature = "parallel")]
fn search_parallel(cards: &[Card; HAND_SIZE]) -> SearchReport {
    use rayon::prelude::*;

    let tops: Vec<[usize; 3]> = Combinations::<3>::new(HAND_SIZE).collect();
    tops.into_par_iter()
        .map(|top| search_top(cards, top))
        .reduce(SearchReport::default, SearchReport::merge)
}

#[cfg(not(feature = "parallel"))]
fn search_parallel(cards: &[Card; HAND_SIZE]) -> SearchReport {
    log::debug!("built without the `parallel` feature; searching sequentially");
    search_sequential(cards)
}

/// Best arrangement among those with the given top indices.
fn search_top(cards: &[Card; HAND_SIZE], top_idx: [usize; 3]) -> SearchReport {
    let top = top_idx.map(|i| cards[i]);
    let top_score = evaluate_three(&top);
    let rest: [usize; HAND_SIZE - 3] = complement::<3, { HAND_SIZE - 3 }>(&top_idx);

    let mut report = SearchReport::default();
    for middle_idx in Combinations::<5>::new(rest.len()) {
        report.candidates += 1;

        let middle = middle_idx.map(|i| cards[rest[i]]);
        let middle_score = evaluate_five(&middle);
        if middle_score < top_score {
            continue;
        }
        let bottom = complement::<5, 5>(&middle_idx).map(|i| cards[rest[i]]);
        let bottom_score = evaluate_five(&bottom);
        if bottom_score < middle_score {
            continue;
        }

        report.valid += 1;
        let key = ArrangementKey { bottom: bottom_score, middle: middle_score, top: top_score };
        if report.best.map_or(true, |b| key > b.key()) {
            log::trace!("new best for top {top:?}: {key:?}");
            report.best = Some(Arrangement::new(top, middle, bottom, key));
        }
    }
    report
}
