//! Pot-odds puzzles: a turn spot where the player is behind but drawing live.

use crate::cards::{pretty_list, Card};
use crate::deck::Deck;
use crate::evaluator::{evaluate, HandValue};
use crate::hand::{Board, HoleCards, TURN_BOARD_LEN};
use crate::odds::{judge, Decision, OddsError, PotOdds, Verdict};
use crate::outs::{outs_unchecked, Outs, UNSEEN_ON_TURN};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Knobs for puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Deals to try before giving up on the "behind with outs" property.
    pub max_attempts: u32,
    /// Pot and bet are multiples of this amount.
    pub stake_step: u64,
    /// Pot and bet are drawn from `1..=stake_max_steps` steps.
    pub stake_max_steps: u64,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self { max_attempts: 1000, stake_step: 10, stake_max_steps: 70 }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("max attempts must be at least 1")]
    ZeroAttempts,
    #[error("stake step must be at least 1")]
    ZeroStakeStep,
    #[error("stake steps must be at least 1")]
    ZeroStakeSteps,
    #[error("stakes up to {step} x {steps} do not fit in a pot")]
    StakeOverflow { step: u64, steps: u64 },
}

impl PuzzleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.stake_step == 0 {
            return Err(ConfigError::ZeroStakeStep);
        }
        if self.stake_max_steps == 0 {
            return Err(ConfigError::ZeroStakeSteps);
        }
        // pot plus two bets must stay representable
        let fits = self
            .stake_step
            .checked_mul(self.stake_max_steps)
            .and_then(|max| max.checked_mul(3))
            .is_some();
        if !fits {
            return Err(ConfigError::StakeOverflow {
                step: self.stake_step,
                steps: self.stake_max_steps,
            });
        }
        Ok(())
    }

    /// Largest pot or bet this configuration can produce.
    pub fn max_stake(&self) -> u64 {
        self.stake_step.max(1).saturating_mul(self.stake_max_steps.max(1))
    }
}

/// A generated puzzle, plain data for a front-end to render.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub player: HoleCards,
    pub opponent: HoleCards,
    pub board: Board,
    pub pot: u64,
    pub bet: u64,
    pub outs: Outs,
    /// Best hands on the turn, before the river.
    pub player_value: HandValue,
    pub opponent_value: HandValue,
    /// Deals tried; 0 when no attempt was allowed.
    pub attempts: u32,
    /// True when the opponent is ahead and the player has at least one out.
    /// A fallback deal may not satisfy this.
    pub constrained: bool,
}

impl Puzzle {
    pub fn pot_odds(&self) -> Result<PotOdds, OddsError> {
        PotOdds::try_new(self.pot, self.bet)
    }

    /// Compare a submitted decision with the correct one for this spot.
    pub fn judge(&self, user: Decision) -> Result<Verdict, OddsError> {
        Ok(judge(&self.pot_odds()?, self.outs.count(), UNSEEN_ON_TURN, user))
    }

    /// The puzzle as a single question.
    pub fn prompt(&self) -> String {
        format!(
            "In Texas Hold'em, if I have {}, opponent has {}, and board is {}, and pot is ${} \
             with opponent going all in for ${}, what are the pot odds, what are the odds \
             against (outs)?",
            pretty_list(&self.player.as_array()),
            pretty_list(&self.opponent.as_array()),
            pretty_list(self.board.as_slice()),
            self.pot,
            self.bet
        )
    }
}

#[derive(Debug, Clone)]
struct Deal {
    player: HoleCards,
    opponent: HoleCards,
    board: Board,
}

impl Deal {
    /// Player, board, then opponent, off the top of `cards` (at least eight).
    fn from_cards(cards: &[Card]) -> Self {
        Self {
            player: HoleCards::dealt(cards[0], cards[1]),
            board: Board::new(cards[2..2 + TURN_BOARD_LEN].to_vec()),
            opponent: HoleCards::dealt(cards[6], cards[7]),
        }
    }

    fn values(&self) -> (HandValue, HandValue) {
        (
            evaluate(&self.player.with_board(&self.board)),
            evaluate(&self.opponent.with_board(&self.board)),
        )
    }
}

/// Rejection-sampling puzzle generator. Each call to [`PuzzleGenerator::generate`]
/// is independent; the only state carried between calls is the RNG.
///
/// ```
/// use pot_odds::puzzle::{PuzzleConfig, PuzzleGenerator};
///
/// let mut generator = PuzzleGenerator::seeded(PuzzleConfig::default(), 7);
/// let puzzle = generator.generate();
/// assert!(puzzle.constrained);
/// assert!(puzzle.opponent_value > puzzle.player_value);
/// assert!(puzzle.outs.count() > 0);
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator<R = ChaCha8Rng> {
    config: PuzzleConfig,
    rng: R,
}

impl PuzzleGenerator<ChaCha8Rng> {
    /// Generator seeded from the thread-local OS-backed RNG.
    pub fn new(config: PuzzleConfig) -> Self {
        Self::seeded(config, rand::random())
    }

    /// Reproducible generator.
    pub fn seeded(config: PuzzleConfig, seed: u64) -> Self {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> PuzzleGenerator<R> {
    pub fn with_rng(config: PuzzleConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PuzzleConfig) {
        self.config = config;
    }

    fn deal(&mut self) -> Deal {
        let mut deck = Deck::standard();
        deck.shuffle_with(&mut self.rng);
        Deal::from_cards(deck.as_slice())
    }

    fn stake(&mut self) -> u64 {
        let steps = self.config.stake_max_steps.max(1);
        self.rng.random_range(1..=steps).saturating_mul(self.config.stake_step.max(1))
    }

    /// Deal until the opponent leads on the turn and the player has outs.
    ///
    /// After `max_attempts` rejected deals the last deal is returned as-is
    /// with `constrained == false`; generation itself never fails.
    pub fn generate(&mut self) -> Puzzle {
        let mut last = None;
        for attempt in 1..=self.config.max_attempts {
            let deal = self.deal();
            let (player_value, opponent_value) = deal.values();
            if opponent_value > player_value {
                let outs = outs_unchecked(&deal.player, &deal.opponent, &deal.board);
                if !outs.is_empty() {
                    log::info!("accepted deal on attempt {attempt}");
                    return self.finish(deal, outs, attempt);
                }
            }
            if attempt % 100 == 0 {
                log::debug!(
                    "attempt {attempt}: player {} vs opponent {}",
                    player_value.describe(),
                    opponent_value.describe()
                );
            }
            last = Some(deal);
        }
        log::warn!(
            "no drawing spot in {} attempts; using an unconstrained deal",
            self.config.max_attempts
        );
        let deal = match last {
            Some(deal) => deal,
            None => self.deal(),
        };
        let outs = outs_unchecked(&deal.player, &deal.opponent, &deal.board);
        self.finish(deal, outs, self.config.max_attempts)
    }

    fn finish(&mut self, deal: Deal, outs: Outs, attempts: u32) -> Puzzle {
        let (player_value, opponent_value) = deal.values();
        let constrained = opponent_value > player_value && !outs.is_empty();
        let pot = self.stake();
        let bet = self.stake();
        let puzzle = Puzzle {
            player: deal.player,
            opponent: deal.opponent,
            board: deal.board,
            pot,
            bet,
            outs,
            player_value,
            opponent_value,
            attempts,
            constrained,
        };
        log::info!("{}", puzzle.prompt());
        puzzle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::ensure_distinct;
    use crate::outs::calculate_outs;

    #[test]
    fn default_config_is_valid() {
        let cfg = PuzzleConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.max_stake(), 700);
    }

    #[test]
    fn validate_rejects_zeroes() {
        let cfg = PuzzleConfig { max_attempts: 0, ..PuzzleConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroAttempts));
        let cfg = PuzzleConfig { stake_step: 0, ..PuzzleConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroStakeStep));
        let cfg = PuzzleConfig { stake_max_steps: 0, ..PuzzleConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroStakeSteps));
    }

    #[test]
    fn validate_rejects_stakes_that_overflow() {
        let cfg = PuzzleConfig { stake_step: u64::MAX / 2, ..PuzzleConfig::default() };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::StakeOverflow { step: u64::MAX / 2, steps: 70 })
        );
        // step * steps fits but the pot after a call does not
        let cfg = PuzzleConfig {
            stake_step: u64::MAX / 2,
            stake_max_steps: 1,
            ..PuzzleConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::StakeOverflow { .. })));
        let cfg = PuzzleConfig {
            stake_step: u64::MAX / 3,
            stake_max_steps: 1,
            ..PuzzleConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn unvalidated_huge_stakes_do_not_panic() {
        let cfg = PuzzleConfig { max_attempts: 10, stake_step: u64::MAX / 2, stake_max_steps: 70 };
        let mut generator = PuzzleGenerator::seeded(cfg, 13);
        let p = generator.generate();
        assert!(p.bet >= 1);
        assert!(matches!(p.judge(Decision::Call), Ok(_) | Err(OddsError::Overflow)));
    }

    #[test]
    fn dealt_cards_are_distinct() {
        let mut generator = PuzzleGenerator::seeded(PuzzleConfig::default(), 11);
        for _ in 0..20 {
            let deal = generator.deal();
            assert_eq!(deal.board.len(), TURN_BOARD_LEN);
            assert!(ensure_distinct(&[
                &deal.player.as_array(),
                &deal.opponent.as_array(),
                deal.board.as_slice()
            ])
            .is_ok());
        }
    }

    #[test]
    fn generated_outs_match_checked_calculation() {
        let mut generator = PuzzleGenerator::seeded(PuzzleConfig::default(), 3);
        let p = generator.generate();
        let checked = calculate_outs(&p.player, &p.opponent, &p.board).unwrap();
        assert_eq!(p.outs, checked);
    }

    #[test]
    fn zero_attempts_falls_back_to_fresh_deal() {
        let cfg = PuzzleConfig { max_attempts: 0, ..PuzzleConfig::default() };
        let mut generator = PuzzleGenerator::seeded(cfg, 5);
        let p = generator.generate();
        assert_eq!(p.attempts, 0);
        assert_eq!(p.board.len(), TURN_BOARD_LEN);
        assert_eq!(p.constrained, p.opponent_value > p.player_value && !p.outs.is_empty());
    }

    #[test]
    fn prompt_lists_everything() {
        let mut generator = PuzzleGenerator::seeded(PuzzleConfig::default(), 9);
        let p = generator.generate();
        let text = p.prompt();
        assert!(text.starts_with("In Texas Hold'em, if I have "));
        assert!(text.contains(&format!("pot is ${}", p.pot)));
        assert!(text.contains(&format!("all in for ${}", p.bet)));
        assert!(text.contains(&p.board.as_slice()[0].pretty()));
    }
}
