//! pot-odds: a Texas Hold'em pot-odds trainer
//!
//! - Best-of-N hand evaluation packed into a single comparable integer
//! - River outs for a trailing hand against a known opponent hand
//! - Rejection-sampled "behind but drawing" puzzles with pot/bet stakes
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: outs on the turn
//! ```
//! use pot_odds::hand::{Board, HoleCards};
//! use pot_odds::outs::{calculate_outs, UNSEEN_ON_TURN};
//! use pot_odds::odds::{judge, Decision, PotOdds};
//!
//! let player: HoleCards = "Ah Kh".parse().unwrap();
//! let opponent: HoleCards = "Qs Qc".parse().unwrap();
//! let board: Board = "2h 7h Qd 9c".parse().unwrap();
//!
//! let outs = calculate_outs(&player, &opponent, &board).unwrap();
//! let odds = PotOdds::try_new(100, 50).unwrap();
//! let verdict = judge(&odds, outs.count(), UNSEEN_ON_TURN, Decision::Call);
//! println!("{} outs, correct play: {}", outs.count(), verdict.correct);
//! ```
//!
//! ## TUI
//! Run the interactive puzzle with:
//! ```sh
//! cargo run --bin pot-odds
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod odds;
pub mod outs;
pub mod puzzle;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
