//! River outs for a player who is drawing against a known opponent hand.
//!
//! An out is an unseen card that, dealt on the river, leaves the player
//! strictly ahead. A river that produces a chop is not an out.

use crate::cards::{pretty_list, Card};
use crate::deck::Deck;
use crate::evaluator::{evaluate, HandValue};
use crate::hand::{ensure_distinct, Board, HandError, HoleCards, TURN_BOARD_LEN};

/// Cards left in the deck once both hands and a turn board are known (52 - 8).
pub const UNSEEN_ON_TURN: usize = 44;

/// The river cards that put the player ahead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outs {
    cards: Vec<Card>,
}

impl Outs {
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

/// Both final scores for one possible river card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiverOutcome {
    pub river: Card,
    pub player: HandValue,
    pub opponent: HandValue,
}

impl RiverOutcome {
    pub fn is_out(&self) -> bool {
        self.player > self.opponent
    }
}

fn check_turn_spot(
    player: &HoleCards,
    opponent: &HoleCards,
    board: &Board,
) -> Result<(), HandError> {
    if board.len() != TURN_BOARD_LEN {
        return Err(HandError::BoardSize { expected: TURN_BOARD_LEN, actual: board.len() });
    }
    ensure_distinct(&[&player.as_array(), &opponent.as_array(), board.as_slice()])
}

/// Score both hands for every unseen river card, in deck order.
pub fn river_outcomes(
    player: &HoleCards,
    opponent: &HoleCards,
    board: &Board,
) -> Result<Vec<RiverOutcome>, HandError> {
    check_turn_spot(player, opponent, board)?;
    Ok(outcomes_unchecked(player, opponent, board))
}

/// Find the river outs for `player` against `opponent` on a four-card board.
///
/// Fails when the board is not exactly four cards or a card appears twice
/// across the three inputs.
///
/// ```
/// use pot_odds::hand::{Board, HoleCards};
/// use pot_odds::outs::calculate_outs;
///
/// let player: HoleCards = "As Ah".parse().unwrap();
/// let opponent: HoleCards = "Qs Qh".parse().unwrap();
/// let board: Board = "Ks Kh 2d 2c".parse().unwrap();
/// let outs = calculate_outs(&player, &opponent, &board).unwrap();
/// assert_eq!(outs.count(), 42);
/// ```
pub fn calculate_outs(
    player: &HoleCards,
    opponent: &HoleCards,
    board: &Board,
) -> Result<Outs, HandError> {
    check_turn_spot(player, opponent, board)?;
    Ok(outs_unchecked(player, opponent, board))
}

fn outcomes_unchecked(
    player: &HoleCards,
    opponent: &HoleCards,
    board: &Board,
) -> Vec<RiverOutcome> {
    let mut player_cards = player.with_board(board);
    let mut opponent_cards = opponent.with_board(board);
    let mut used = player_cards.clone();
    used.extend_from_slice(&opponent.as_array());

    Deck::remaining(&used)
        .into_iter()
        .map(|river| {
            player_cards.push(river);
            opponent_cards.push(river);
            let outcome = RiverOutcome {
                river,
                player: evaluate(&player_cards),
                opponent: evaluate(&opponent_cards),
            };
            player_cards.pop();
            opponent_cards.pop();
            outcome
        })
        .collect()
}

/// Outs without input validation; callers guarantee a distinct turn deal.
pub(crate) fn outs_unchecked(player: &HoleCards, opponent: &HoleCards, board: &Board) -> Outs {
    let mut cards = Vec::new();
    for o in outcomes_unchecked(player, opponent, board) {
        if o.is_out() {
            log::trace!("river {} -> {} vs {}: out", o.river.pretty(), o.player, o.opponent);
            cards.push(o.river);
        }
    }
    log::debug!("{} outs on board {}", cards.len(), pretty_list(board.as_slice()));
    Outs { cards }
}
