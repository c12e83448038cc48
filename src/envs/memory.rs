use super::{BuildEnv, BuildEnvError, EnvStructure, Pomdp, PomdpEnv, Successor};
use crate::spaces::IndexSpace;
use crate::Prng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Memory Game Environment
///
/// * The environment consists of (N + M) states.
/// * An episode starts in a state [0, N) uniformly at random.
/// * Step i (in [0, M)) transitions to state N + i with 0 reward regardless of the action.
/// * On step M, the agent chooses 1 of N actions
///     and if the action index matches the index of the inital state
///     then the agent earns +1 reward, otherwise it earns -1 reward.
///     This step is terminal.
/// * Every episode has length M + 1.
///
/// An agent that sees the last `M + 1` observations can always solve the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoryGame {
    /// The number of actions; `N`.
    pub num_actions: usize,
    /// Length of remembered history required to solve the environment; `M`.
    pub history_len: usize,
}

impl Default for MemoryGame {
    fn default() -> Self {
        Self {
            num_actions: 2,
            history_len: 1,
        }
    }
}

impl MemoryGame {
    /// Create a new MemoryGame instance
    ///
    /// # Args
    /// * `num_actions` - Number of possible actions (N).
    /// * `history_len` - Length of remembered history required to solve the environment (M).
    pub const fn new(num_actions: usize, history_len: usize) -> Self {
        Self {
            num_actions,
            history_len,
        }
    }
}

impl BuildEnv for MemoryGame {
    type Environment = PomdpEnv<Self>;

    fn build_env(&self, rng: &mut Prng) -> Result<Self::Environment, BuildEnvError> {
        if self.num_actions == 0 {
            return Err(BuildEnvError::InvalidConfiguration(
                "memory game requires at least one action".into(),
            ));
        }
        Ok(PomdpEnv::new(*self, rng.gen()))
    }
}

impl EnvStructure for MemoryGame {
    type ObservationSpace = IndexSpace;
    type ActionSpace = IndexSpace;

    fn observation_space(&self) -> Self::ObservationSpace {
        IndexSpace::new(self.num_actions + self.history_len)
    }

    fn action_space(&self) -> Self::ActionSpace {
        IndexSpace::new(self.num_actions)
    }

    fn reward_range(&self) -> (f64, f64) {
        (-1.0, 1.0)
    }

    fn discount_factor(&self) -> f64 {
        1.0
    }
}

impl Pomdp for MemoryGame {
    /// (current_state, initial_state)
    type State = (usize, usize);

    fn initial_state(&self, rng: &mut Prng) -> Self::State {
        let state = rng.gen_range(0..self.num_actions);
        (state, state)
    }

    fn observe(&self, state: &Self::State, _rng: &mut Prng) -> usize {
        state.0
    }

    fn step(
        &self,
        state: Self::State,
        action: &usize,
        _rng: &mut Prng,
    ) -> (Successor<Self::State>, f64) {
        let (current_state, initial_state) = state;
        let steps_taken = (current_state + 1).saturating_sub(self.num_actions);
        if steps_taken >= self.history_len {
            let reward = if *action == initial_state { 1.0 } else { -1.0 };
            (Successor::Terminate(state), reward)
        } else {
            let new_state = self.num_actions + steps_taken;
            (Successor::Continue((new_state, initial_state)), 0.0)
        }
    }

    fn render(&self, state: &Self::State) -> Option<String> {
        let (current_state, initial_state) = *state;
        if current_state < self.num_actions {
            Some(format!("remember {}", initial_state))
        } else {
            Some(format!("wait {}", current_state - self.num_actions))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{testing, Environment};
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn run_default() {
        testing::run_env(&mut PomdpEnv::new(MemoryGame::default(), 0), 1000, 1);
    }

    #[test]
    fn episode_length() {
        let mut env = PomdpEnv::new(MemoryGame::new(3, 4), 0);
        env.reset().unwrap();
        for _ in 0..4 {
            assert!(env.step(&0).unwrap().is_mid());
        }
        assert!(env.step(&0).unwrap().is_last());
    }

    #[test]
    fn no_history_terminates_immediately() {
        let mut env = PomdpEnv::new(MemoryGame::new(2, 0), 0);
        let initial = env.reset().unwrap().observation;
        let last = env.step(&initial).unwrap();
        assert!(last.is_last());
        assert_eq!(last.reward, 1.0);
    }

    #[test]
    fn remembered_action_rewarded() {
        let mut env = PomdpEnv::new(MemoryGame::new(3, 2), 0);
        let initial = env.reset().unwrap().observation;
        env.step(&0).unwrap();
        env.step(&0).unwrap();
        let last = env.step(&initial).unwrap();
        assert!(last.is_last());
        assert_eq!(last.reward, 1.0);
        assert_eq!(last.discount, 0.0);
    }

    #[test]
    fn build_without_actions_fails() {
        let mut rng = Prng::seed_from_u64(0);
        assert!(MemoryGame::new(0, 1).build_env(&mut rng).is_err());
    }
}
