//! Chain environment
use super::{BuildEnv, BuildEnvError, EnvStructure, Pomdp, PomdpEnv, Successor};
use crate::spaces::{IndexSpace, PadSpace, Space};
use crate::Prng;
use rand::distributions::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chain Environment
///
/// Consists of n states in a line with 2 actions.
/// * Action 0 moves back to the start for 2 reward.
/// * Action 1 moves forward for 0 reward in all states but the last.
///     In the last state, taking action 1 is a self-transition with 10 reward.
/// * Every action has a 0.2 chance of "slipping" and taking the opposite action.
///
/// Described in "Bayesian Q-learning" by Dearden, Friedman and Russel (1998)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chain {
    pub size: usize,
    pub discount_factor: f64,
}

impl Chain {
    pub const fn new(size: usize, discount_factor: f64) -> Self {
        Self {
            size,
            discount_factor,
        }
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self {
            size: 5,
            discount_factor: 0.95,
        }
    }
}

impl BuildEnv for Chain {
    type Environment = PomdpEnv<Self>;

    fn build_env(&self, rng: &mut Prng) -> Result<Self::Environment, BuildEnvError> {
        if self.size == 0 {
            return Err(BuildEnvError::InvalidConfiguration(
                "chain size must be positive".into(),
            ));
        }
        Ok(PomdpEnv::new(*self, rng.gen()))
    }
}

impl EnvStructure for Chain {
    type ObservationSpace = IndexSpace;
    type ActionSpace = MoveSpace;

    fn observation_space(&self) -> Self::ObservationSpace {
        IndexSpace::new(self.size)
    }

    fn action_space(&self) -> Self::ActionSpace {
        MoveSpace
    }

    fn reward_range(&self) -> (f64, f64) {
        (0.0, 10.0)
    }

    fn discount_factor(&self) -> f64 {
        self.discount_factor
    }
}

impl Pomdp for Chain {
    type State = usize;

    fn initial_state(&self, _rng: &mut Prng) -> Self::State {
        0
    }

    fn observe(&self, state: &Self::State, _rng: &mut Prng) -> usize {
        *state
    }

    fn step(
        &self,
        state: Self::State,
        action: &Move,
        rng: &mut Prng,
    ) -> (Successor<Self::State>, f64) {
        let mut action = *action;
        if rng.gen::<f64>() < 0.2 {
            action = action.swap();
        }
        let (state, reward) = match action {
            Move::Left => (0, 2.0),
            Move::Right => {
                if state + 1 >= self.size {
                    (state, 10.0)
                } else {
                    (state + 1, 0.0)
                }
            }
        };
        (Successor::Continue(state), reward)
    }

    fn render(&self, state: &Self::State) -> Option<String> {
        let cells: String = (0..self.size)
            .map(|i| if i == *state { 'x' } else { '.' })
            .collect();
        Some(cells)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Left,
    Right,
}

impl Move {
    const fn swap(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// The space of [`Move`] actions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveSpace;

impl fmt::Display for MoveSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MoveSpace")
    }
}

impl Space for MoveSpace {
    type Element = Move;

    fn contains(&self, _value: &Self::Element) -> bool {
        true
    }
}

/// Pads with [`Move::Left`].
impl PadSpace for MoveSpace {
    fn pad_element(&self) -> Self::Element {
        Move::Left
    }
}

impl Distribution<Move> for MoveSpace {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        if rng.gen() {
            Move::Right
        } else {
            Move::Left
        }
    }
}
