pub(crate) mod combinations;
pub(crate) mod hand_analysis;

use crate::cards::{Card, Rank};
use crate::hand::{validate_holdem, Board, HandError, HoleCards};
use combinations::FiveOf;
use core::cmp::Ordering;
use hand_analysis::HandAnalysis;
use std::fmt;

pub use combinations::choose_five;

/// Compact, comparable hand strength. Higher is better, equal is a chop.
///
/// Layout (most significant first):
/// `[ category | r0 (4 bits) | r1 | r2 | r3 | r4 ]`, so each category owns
/// a block of `CATEGORY_BASE` values and no tiebreak can reach the next block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u32);

const RANK_STRIDE: u32 = 4;
const CATEGORY_SHIFT: u32 = RANK_STRIDE * 5;

impl HandValue {
    /// Score for inputs with fewer than five cards; below every real hand.
    pub const MIN: HandValue = HandValue(0);

    /// Distance between consecutive category bases.
    pub const CATEGORY_BASE: u32 = 1 << CATEGORY_SHIFT;

    /// Return the packed comparable value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Pack a category and up to five tiebreak ranks (most significant first).
    /// Missing trailing ranks pack as zero.
    pub fn from_parts(category: Category, tiebreak: &[Rank]) -> Self {
        debug_assert!(tiebreak.len() <= 5);
        let mut v = (category.ordinal() as u32) << CATEGORY_SHIFT;
        for (i, r) in tiebreak.iter().take(5).enumerate() {
            let offset = CATEGORY_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= (r.value() as u32) << offset;
        }
        HandValue(v)
    }

    /// Decode the category; `None` for [`HandValue::MIN`].
    pub fn category(self) -> Option<Category> {
        if self == Self::MIN {
            return None;
        }
        Category::from_ordinal((self.0 >> CATEGORY_SHIFT) as u8)
    }

    /// Human-readable hand name, e.g. "Two Pair".
    pub fn describe(self) -> &'static str {
        self.category().map(Category::name).unwrap_or("No Hand")
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.describe())
    }
}

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(n: u8) -> Option<Category> {
        Self::ALL.get(n as usize).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Detailed evaluation result. `value` drives ordering.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub best_five: [Card; 5],
    value: HandValue,
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

impl Evaluation {
    pub const fn value(&self) -> HandValue {
        self.value
    }
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("not enough cards to evaluate")]
    NotEnoughCards,
}

/// Evaluate exactly five cards; detects category and encodes tie-breakers.
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    HandAnalysis::new(cards).into_evaluation()
}

/// Best five-card hand among all 5-subsets of `cards`.
/// Returns `None` with fewer than five cards.
pub fn best_five(cards: &[Card]) -> Option<Evaluation> {
    FiveOf::new(cards.len())
        .map(|[a, b, c, d, e]| evaluate_five(&[cards[a], cards[b], cards[c], cards[d], cards[e]]))
        .max()
}

/// Score any set of cards by its best five-card subset. Input order does not matter.
///
/// Fewer than five cards is not an error: the result is [`HandValue::MIN`],
/// so callers may score a hand before enough community cards are out.
///
/// ```
/// use pot_odds::cards::parse_cards;
/// use pot_odds::evaluator::{evaluate, Category, HandValue};
///
/// let trips = evaluate(&parse_cards("Js Jh 2s 7h 9d Jc").unwrap());
/// assert_eq!(trips.category(), Some(Category::ThreeOfAKind));
/// assert_eq!(evaluate(&parse_cards("As Ah").unwrap()), HandValue::MIN);
/// ```
pub fn evaluate(cards: &[Card]) -> HandValue {
    best_five(cards).map(|e| e.value()).unwrap_or(HandValue::MIN)
}

/// Evaluate a Hold'em hand given hole cards and a board of 3..=5 cards.
/// Validates the inputs and returns the best five-card evaluation.
///
/// ```
/// use pot_odds::cards::{Card, Rank, Suit};
/// use pot_odds::evaluator::{evaluate_holdem, Category};
/// use pot_odds::hand::{Board, HoleCards};
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Ace, Suit::Hearts),
/// ).unwrap();
/// let board = Board::try_new(vec![
///     Card::new(Rank::Queen, Suit::Clubs),
///     Card::new(Rank::Jack, Suit::Diamonds),
///     Card::new(Rank::Nine, Suit::Hearts),
///     Card::new(Rank::Three, Suit::Spades),
/// ]).unwrap();
/// let eval = evaluate_holdem(&hole, &board).unwrap();
/// assert_eq!(eval.category, Category::Pair);
/// ```
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<Evaluation, EvalError> {
    validate_holdem(hole, board)?;
    best_five(&hole.with_board(board)).ok_or(EvalError::NotEnoughCards)
}

/// Compare two Hold'em hands on a shared board.
pub fn compare_holdem(a: &HoleCards, b: &HoleCards, board: &Board) -> Result<Ordering, EvalError> {
    let va = evaluate_holdem(a, board)?;
    let vb = evaluate_holdem(b, board)?;
    Ok(va.cmp(&vb))
}
