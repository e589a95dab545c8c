use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::str::FromStr;

/// Community cards on the turn, before the river is dealt.
pub const TURN_BOARD_LEN: usize = 4;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("duplicate cards on board")]
    DuplicateBoardCards,
    #[error("hole cards overlap with board")]
    Overlap,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("expected {expected} board cards, got {actual}")]
    BoardSize { expected: usize, actual: usize },
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's two private hole cards.
///
/// ```
/// use pot_odds::cards::{Card, Rank, Suit};
/// use pot_odds::hand::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub fn first(&self) -> Card {
        self.0
    }

    pub fn second(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }

    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards);
        }
        Ok(Self(a, b))
    }

    /// Pair two cards dealt from one deck, which are distinct by construction.
    pub(crate) fn dealt(a: Card, b: Card) -> Self {
        debug_assert_ne!(a, b);
        Self(a, b)
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        if slice.len() != 2 {
            return Err(HandError::HoleCount(slice.len()));
        }
        Self::try_new(slice[0], slice[1])
    }

    /// Hole cards followed by the board, ready for evaluation.
    pub fn with_board(&self, board: &Board) -> Vec<Card> {
        let mut cards = Vec::with_capacity(2 + board.len() + 1);
        cards.push(self.0);
        cards.push(self.1);
        cards.extend_from_slice(board.as_slice());
        cards
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Community cards on the board (flop, turn, river).
///
/// ```
/// use pot_odds::cards::{Card, Rank, Suit};
/// use pot_odds::hand::Board;
///
/// let board = Board::try_new(vec![
///     Card::new(Rank::Two, Suit::Clubs),
///     Card::new(Rank::Three, Suit::Clubs),
///     Card::new(Rank::Four, Suit::Clubs),
///     Card::new(Rank::Jack, Suit::Hearts),
/// ]).unwrap();
/// assert!(board.is_turn());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > 5 {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::DuplicateBoardCards);
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Four cards out, river still to come.
    pub fn is_turn(&self) -> bool {
        self.cards.len() == TURN_BOARD_LEN
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// Validate that a pair of hole cards and board form a valid Hold'em state.
/// Allows 0..=5 board cards. Ensures uniqueness across all cards.
pub fn validate_holdem(hole: &HoleCards, board: &Board) -> Result<(), HandError> {
    if board.len() > 5 {
        return Err(HandError::TooManyBoardCards(board.len()));
    }
    // board may have been built through `new`
    let set: HashSet<Card> = board.as_slice().iter().copied().collect();
    if set.len() != board.len() {
        return Err(HandError::DuplicateBoardCards);
    }
    if set.contains(&hole.first()) || set.contains(&hole.second()) {
        return Err(HandError::Overlap);
    }
    if hole.first() == hole.second() {
        return Err(HandError::DuplicateHoleCards);
    }
    Ok(())
}

/// Reject any card that appears in more than one place across `groups`.
///
/// ```
/// use pot_odds::cards::parse_cards;
/// use pot_odds::hand::{ensure_distinct, HandError};
///
/// let a = parse_cards("As Ah").unwrap();
/// let b = parse_cards("Kd As").unwrap();
/// assert!(matches!(ensure_distinct(&[&a, &b]), Err(HandError::DuplicateCard(_))));
/// ```
pub fn ensure_distinct(groups: &[&[Card]]) -> Result<(), HandError> {
    let mut seen = HashSet::new();
    for card in groups.iter().flat_map(|g| g.iter().copied()) {
        if !seen.insert(card) {
            return Err(HandError::DuplicateCard(card));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    #[test]
    fn board_len_and_turn_flag() {
        let b = Board::new(vec![Card::new(Rank::Ace, Suit::Spades)]);
        assert_eq!(b.len(), 1);
        assert!(!b.is_empty());
        assert!(!b.is_turn());
    }

    #[test]
    fn hole_cards_must_be_distinct() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert!(matches!(HoleCards::try_new(a, a), Err(HandError::DuplicateHoleCards)));
        assert!(matches!(HoleCards::from_slice(&[a]), Err(HandError::HoleCount(1))));
    }

    #[test]
    fn board_try_new_checks_limits_and_dupes() {
        let cards = vec![
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Three, Suit::Clubs),
            Card::new(Rank::Four, Suit::Clubs),
            Card::new(Rank::Five, Suit::Clubs),
            Card::new(Rank::Six, Suit::Clubs),
            Card::new(Rank::Seven, Suit::Clubs),
        ];
        assert!(matches!(Board::try_new(cards), Err(HandError::TooManyBoardCards(6))));

        let cards = vec![Card::new(Rank::Two, Suit::Clubs), Card::new(Rank::Two, Suit::Clubs)];
        assert!(matches!(Board::try_new(cards), Err(HandError::DuplicateBoardCards)));
    }

    #[test]
    fn validate_holdem_catches_overlap() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        let k = Card::new(Rank::King, Suit::Spades);
        let hole = HoleCards::try_new(a, k).unwrap();
        let board = Board::new(vec![
            a,
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Three, Suit::Clubs),
        ]);
        assert!(matches!(validate_holdem(&hole, &board), Err(HandError::Overlap)));
    }

    #[test]
    fn with_board_concatenates() {
        let hole: HoleCards = "As Kd".parse().unwrap();
        let board: Board = "2c 3c 4c 5h".parse().unwrap();
        let cards = hole.with_board(&board);
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0], hole.first());
        assert_eq!(cards[5], Card::new(Rank::Five, Suit::Hearts));
    }

    #[test]
    fn ensure_distinct_accepts_disjoint_groups() {
        let a = parse_cards("As Ah").unwrap();
        let b = parse_cards("Ks Kh 2d 2c").unwrap();
        let c = parse_cards("Qs Qh").unwrap();
        assert!(ensure_distinct(&[&a, &b, &c]).is_ok());
    }

    #[test]
    fn parsing_interfaces_work() {
        let hole: HoleCards = "As Kd".parse().unwrap();
        assert_eq!(hole.first(), Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(hole.second(), Card::new(Rank::King, Suit::Diamonds));

        let board: Board = "2c, 3c 4c".parse().unwrap();
        assert_eq!(board.len(), 3);
        assert!(matches!("As".parse::<HoleCards>(), Err(HandError::HoleCount(1))));
        assert!(matches!("Zz Kd".parse::<HoleCards>(), Err(HandError::CardParse(_))));
    }
}
