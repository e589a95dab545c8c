use std::fmt;
use std::str::FromStr;

/// The player's answer to an all-in bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Call,
    Fold,
}

impl Decision {
    pub const fn label(self) -> &'static str {
        match self {
            Decision::Call => "Call",
            Decision::Fold => "Fold",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecisionParseError {
    #[error("unknown decision '{0}', expected call or fold")]
    Unknown(String),
}

impl FromStr for Decision {
    type Err = DecisionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(Decision::Call),
            "fold" | "f" => Ok(Decision::Fold),
            _ => Err(DecisionParseError::Unknown(s.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OddsError {
    #[error("opponent bet must be greater than zero")]
    ZeroBet,
    #[error("pot after the call does not fit in a u64")]
    Overflow,
}

/// Price of calling an all-in `bet` into a `pot`.
///
/// ```
/// use pot_odds::odds::PotOdds;
///
/// let odds = PotOdds::try_new(100, 50).unwrap();
/// assert_eq!(odds.percentage(), 25.0);
/// assert_eq!(odds.ratio(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PotOdds {
    pot: u64,
    bet: u64,
}

impl PotOdds {
    pub fn try_new(pot: u64, bet: u64) -> Result<Self, OddsError> {
        if bet == 0 {
            return Err(OddsError::ZeroBet);
        }
        bet.checked_mul(2).and_then(|b| pot.checked_add(b)).ok_or(OddsError::Overflow)?;
        Ok(Self { pot, bet })
    }

    pub fn pot(&self) -> u64 {
        self.pot
    }

    pub fn bet(&self) -> u64 {
        self.bet
    }

    /// Pot the caller would be playing for: pot, the bet, and the call.
    pub fn pot_after_call(&self) -> u64 {
        self.pot + 2 * self.bet
    }

    /// Share of the final pot the caller puts in, as a percentage.
    pub fn percentage(&self) -> f64 {
        self.bet as f64 / self.pot_after_call() as f64 * 100.0
    }

    /// Money already in the middle per unit called, i.e. the `x` in `x:1`.
    pub fn ratio(&self) -> f64 {
        (self.pot + self.bet) as f64 / self.bet as f64
    }
}

/// Chance of hitting one of `outs` among `unseen` cards, as a percentage.
pub fn odds_against_percentage(outs: usize, unseen: usize) -> f64 {
    if unseen == 0 {
        return 0.0;
    }
    outs as f64 / unseen as f64 * 100.0
}

/// Round to one decimal place, the precision both percentages are shown at.
pub fn round_tenth(pct: f64) -> f64 {
    (pct * 10.0).round() / 10.0
}

/// Calling is right only when the odds against beat the pot odds as displayed.
/// A tie at one decimal is a fold.
pub fn correct_decision(pot_odds_pct: f64, odds_against_pct: f64) -> Decision {
    if round_tenth(odds_against_pct) > round_tenth(pot_odds_pct) {
        Decision::Call
    } else {
        Decision::Fold
    }
}

/// Result of comparing a submitted decision with the mathematically correct one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub user: Decision,
    pub correct: Decision,
    pub pot_odds: f64,
    pub pot_odds_ratio: f64,
    pub odds_against: f64,
    pub outs: usize,
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        self.user == self.correct
    }

    pub fn reasoning(&self) -> String {
        match self.correct {
            Decision::Call => format!(
                "Your odds against ({:.1}%) are higher than the pot odds ({:.1}%), \
                 so calling is profitable.",
                self.odds_against, self.pot_odds
            ),
            Decision::Fold => format!(
                "Your odds against ({:.1}%) need to be higher than the pot odds ({:.1}%) \
                 to call profitably.",
                self.odds_against, self.pot_odds
            ),
        }
    }
}

/// Judge `user` against a pot, a bet and the number of outs among `unseen` cards.
///
/// ```
/// use pot_odds::odds::{judge, Decision, PotOdds};
///
/// let v = judge(&PotOdds::try_new(100, 50).unwrap(), 9, 44, Decision::Call);
/// assert_eq!(v.correct, Decision::Fold);
/// assert!(!v.is_correct());
/// ```
pub fn judge(odds: &PotOdds, outs: usize, unseen: usize, user: Decision) -> Verdict {
    let pot_odds = odds.percentage();
    let odds_against = odds_against_percentage(outs, unseen);
    let correct = correct_decision(pot_odds, odds_against);
    log::info!(
        "pot odds {:.1}% ({:.2}:1), odds against {:.1}% ({} outs): correct {}, user {}",
        pot_odds,
        odds.ratio(),
        odds_against,
        outs,
        correct,
        user
    );
    Verdict { user, correct, pot_odds, pot_odds_ratio: odds.ratio(), odds_against, outs }
}
