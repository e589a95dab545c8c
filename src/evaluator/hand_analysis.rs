use crate::cards::{Card, Rank};
use crate::evaluator::{Category, Evaluation, HandValue};

/// Pre-computed facts about exactly five cards.
#[derive(Debug, Clone)]
pub(crate) struct HandAnalysis {
    /// Cards sorted by rank descending, then suit descending.
    pub sorted_cards: [Card; 5],
    /// (rank, count) sorted by count desc, then rank desc. AAKKQ -> [(A,2),(K,2),(Q,1)].
    pub groups: Vec<(Rank, u8)>,
    pub is_flush: bool,
    /// Top card of a straight; `Five` for the wheel.
    pub straight_high: Option<Rank>,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let mut counts = [0u8; 15];
        for c in &sorted_cards {
            counts[c.rank().value() as usize] += 1;
        }
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .rev()
            .filter_map(|&r| {
                let n = counts[r.value() as usize];
                (n > 0).then_some((r, n))
            })
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        let suit = sorted_cards[0].suit();
        let is_flush = sorted_cards.iter().all(|c| c.suit() == suit);
        let straight_high = straight_high(&groups);

        Self { sorted_cards, groups, is_flush, straight_high }
    }

    fn count_at(&self, i: usize) -> u8 {
        self.groups.get(i).map(|&(_, n)| n).unwrap_or(0)
    }

    pub fn category(&self) -> Category {
        let lead = self.count_at(0);
        let second = self.count_at(1);
        match (self.straight_high, self.is_flush) {
            (Some(_), true) => Category::StraightFlush,
            _ if lead >= 4 => Category::FourOfAKind,
            _ if lead == 3 && second >= 2 => Category::FullHouse,
            (_, true) => Category::Flush,
            (Some(_), false) => Category::Straight,
            _ if lead == 3 => Category::ThreeOfAKind,
            _ if lead == 2 && second == 2 => Category::TwoPair,
            _ if lead == 2 => Category::Pair,
            _ => Category::HighCard,
        }
    }

    /// Ranks that break ties inside the category, most significant first.
    ///
    /// Straights only compare on their top card; every other category
    /// compares group ranks in (count desc, rank desc) order, which covers
    /// quads+kicker, trips+pair, pairs+kickers and plain high cards alike.
    pub fn tiebreak(&self, category: Category) -> Vec<Rank> {
        match (category, self.straight_high) {
            (Category::StraightFlush | Category::Straight, Some(high)) => vec![high],
            _ => self.groups.iter().map(|&(r, _)| r).collect(),
        }
    }

    pub fn into_evaluation(self) -> Evaluation {
        let category = self.category();
        let value = HandValue::from_parts(category, &self.tiebreak(category));
        Evaluation { category, best_five: self.sorted_cards, value }
    }
}

fn straight_high(groups: &[(Rank, u8)]) -> Option<Rank> {
    if groups.len() != 5 {
        return None;
    }
    let mut vals: Vec<u8> = groups.iter().map(|&(r, _)| r.value()).collect();
    vals.sort_unstable_by(|a, b| b.cmp(a));
    if vals[0] - vals[4] == 4 {
        return Rank::from_value(vals[0]);
    }
    // A-2-3-4-5 plays the ace low
    if vals == [14, 5, 4, 3, 2] {
        return Some(Rank::Five);
    }
    None
}
