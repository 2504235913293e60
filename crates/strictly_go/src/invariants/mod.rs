//! First-class invariants for Go game histories.
//!
//! Invariants are logical properties of a [`Game`](super::Game) that must
//! hold after every checked commit. They are testable independently and can
//! be verified on demand through [`Game::verify`](super::Game::verify).

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violation: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Several invariants checked as one unit, each reported on failure.
///
/// Tuples of two or three [`Invariant`]s over the same state implement this.
pub trait InvariantSet<S> {
    /// Evaluates every member.
    ///
    /// Members are not short-circuited, so the error lists each failing
    /// invariant in tuple order.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! invariant_tuple {
    ($($member:ident),+) => {
        impl<S, $($member),+> InvariantSet<S> for ($($member,)+)
        where
            $($member: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<InvariantViolation> = [
                    $(($member::holds(state), $member::description()),)+
                ]
                .into_iter()
                .filter(|(held, _)| !held)
                .map(|(_, description)| InvariantViolation::new(description))
                .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

invariant_tuple!(A, B);
invariant_tuple!(A, B, C);

pub mod history_length;
pub mod positional_superko;
pub mod replay_consistent;

pub use history_length::HistoryLengthInvariant;
pub use positional_superko::PositionalSuperkoInvariant;
pub use replay_consistent::ReplayConsistentInvariant;

/// All Go history invariants as a composable set.
///
/// Games loaded with legality checking bypassed may legitimately violate
/// [`PositionalSuperkoInvariant`].
pub type GoInvariants = (
    HistoryLengthInvariant,
    ReplayConsistentInvariant,
    PositionalSuperkoInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, Move};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new(9, 7.5);
        assert!(GoInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Game::new(9, 7.5);
        for mv in [Move::at(2, 2), Move::at(6, 6), Move::Pass, Move::at(4, 4)] {
            game.play_move(mv).unwrap();
        }
        assert!(GoInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::new(5, 0.0);
        type TwoInvariants = (HistoryLengthInvariant, ReplayConsistentInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }

    struct Even;
    struct Small;
    struct Positive;

    impl Invariant<i32> for Even {
        fn holds(n: &i32) -> bool {
            n % 2 == 0
        }
        fn description() -> &'static str {
            "even"
        }
    }

    impl Invariant<i32> for Small {
        fn holds(n: &i32) -> bool {
            *n < 10
        }
        fn description() -> &'static str {
            "small"
        }
    }

    impl Invariant<i32> for Positive {
        fn holds(n: &i32) -> bool {
            *n > 0
        }
        fn description() -> &'static str {
            "positive"
        }
    }

    #[test]
    fn test_every_failing_member_is_reported_in_order() {
        type Checks = (Even, Small, Positive);
        assert!(Checks::check_all(&4_i32).is_ok());

        let described = |n: i32| {
            Checks::check_all(&n)
                .unwrap_err()
                .into_iter()
                .map(|v| v.description)
                .collect::<Vec<_>>()
        };
        assert_eq!(described(-3), vec!["even", "positive"]);
        assert_eq!(described(11), vec!["even", "small"]);
        assert_eq!(<(Small, Positive)>::check_all(&0_i32).unwrap_err().len(), 1);
    }

    #[test]
    fn test_violation_display() {
        let v = InvariantViolation::new("Snapshot count is move count plus one");
        assert_eq!(
            v.to_string(),
            "Invariant violation: Snapshot count is move count plus one"
        );
    }
}
