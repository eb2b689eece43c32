use crate::cards::Rank;

/// Ranks of a group bucketed by multiplicity, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)];
/// the top hand 7 7 A groups as [(Seven, 2), (Ace, 1)].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Count how often each rank occurs in `ranks`.
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 15];
        for rank in ranks {
            counts[rank.value() as usize] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|rank| match counts[rank.value() as usize] {
                0 => None,
                n => Some((rank, n)),
            })
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    fn with_count(&self, count: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, c)| *c == count).map(|(rank, _)| *rank)
    }

    /// Rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    /// Rank of a three-of-a-kind, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    /// Pair ranks, highest first.
    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2).collect()
    }

    /// Singleton ranks, highest first.
    pub fn kickers(&self) -> Vec<Rank> {
        self.with_count(1).collect()
    }

    pub fn has_full_house(&self) -> bool {
        self.trips().is_some() && self.with_count(2).next().is_some()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    #[test]
    fn test_quad() {
        let groups = RankGroups::from_ranks(&[Ace, Ace, King, Ace, Ace]);
        assert_eq!(groups.quad(), Some(Ace));
        assert_eq!(groups.trips(), None);
        assert_eq!(groups.kickers(), vec![King]);
    }

    #[test]
    fn test_full_house() {
        let groups = RankGroups::from_ranks(&[King, Ace, King, Ace, Ace]);
        assert!(groups.has_full_house());
        assert_eq!(groups.trips(), Some(Ace));
        assert_eq!(groups.pairs(), vec![King]);
    }

    #[test]
    fn test_trips_without_pair() {
        let groups = RankGroups::from_ranks(&[Ten, Five, Ten, Three, Ten]);
        assert_eq!(groups.trips(), Some(Ten));
        assert!(!groups.has_full_house());
        assert_eq!(groups.kickers(), vec![Five, Three]);
    }

    #[test]
    fn test_two_pair_orders_pairs_high_first() {
        let groups = RankGroups::from_ranks(&[King, Ten, Ace, King, Ace]);
        assert_eq!(groups.pairs(), vec![Ace, King]);
        assert_eq!(groups.kickers(), vec![Ten]);
    }

    #[test]
    fn test_three_card_groups() {
        let trips = RankGroups::from_ranks(&[Two, Two, Two]);
        assert_eq!(trips.trips(), Some(Two));
        assert!(trips.kickers().is_empty());

        let pair = RankGroups::from_ranks(&[Seven, Ace, Seven]);
        assert_eq!(pair.groups(), &[(Seven, 2), (Ace, 1)]);
    }

    #[test]
    fn test_sorting() {
        let groups = RankGroups::from_ranks(&[Five, Ace, Ten]);
        let ranks: Vec<Rank> = groups.groups().iter().map(|(r, _)| *r).collect();
        assert_eq!(ranks, vec![Ace, Ten, Five]);
    }
}
