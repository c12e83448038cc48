//! Reinforcement learning environments
mod builder;
mod chain;
mod memory;
mod stateful;
#[cfg(test)]
pub mod testing;
mod time_step;
mod wrappers;

pub use builder::{BuildEnv, BuildEnvError};
pub use chain::{Chain, Move, MoveSpace};
pub use memory::MemoryGame;
pub use stateful::PomdpEnv;
pub use time_step::{StepType, TimeStep, TimeStepSpace};
pub use wrappers::{FillPolicy, History, HistoryWrapper, Wrap, Wrapped};

use crate::spaces::Space;
use crate::Prng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use thiserror::Error;

/// Observation type of an environment.
pub type Observation<E> = <<E as EnvStructure>::ObservationSpace as Space>::Element;

/// Action type of an environment.
pub type Action<E> = <<E as EnvStructure>::ActionSpace as Space>::Element;

/// The external structure of a reinforcement learning environment.
pub trait EnvStructure {
    type ObservationSpace: Space;
    type ActionSpace: Space;

    /// Space containing all possible observations.
    ///
    /// This is not required to be tight:
    /// the space may contain elements that can never be produced as a state observation.
    fn observation_space(&self) -> Self::ObservationSpace;

    /// The space of all possible actions.
    ///
    /// Every element in this space must be a valid action.
    fn action_space(&self) -> Self::ActionSpace;

    /// A lower and upper bound on possible reward values.
    ///
    /// These bounds are not required to be tight but ideally will be as tight as possible.
    fn reward_range(&self) -> (f64, f64);

    /// A discount factor applied to future rewards.
    ///
    /// A value between `0` and `1`, inclusive.
    fn discount_factor(&self) -> f64;

    /// Space containing all possible time steps.
    fn time_step_space(&self) -> TimeStepSpace<Self::ObservationSpace> {
        let (min_reward, max_reward) = self.reward_range();
        TimeStepSpace::new(self.observation_space(), min_reward, max_reward)
    }
}

impl<E: EnvStructure + ?Sized> EnvStructure for Box<E> {
    type ObservationSpace = E::ObservationSpace;
    type ActionSpace = E::ActionSpace;

    fn observation_space(&self) -> Self::ObservationSpace {
        E::observation_space(self)
    }
    fn action_space(&self) -> Self::ActionSpace {
        E::action_space(self)
    }
    fn reward_range(&self) -> (f64, f64) {
        E::reward_range(self)
    }
    fn discount_factor(&self) -> f64 {
        E::discount_factor(self)
    }
    fn time_step_space(&self) -> TimeStepSpace<Self::ObservationSpace> {
        E::time_step_space(self)
    }
}

/// A reinforcement learning environment with internal state.
///
/// An episode starts with [`Environment::reset`], which produces a [`StepType::First`] time step.
/// Each call to [`Environment::step`] produces a [`StepType::Mid`] or [`StepType::Last`] step.
/// Calling `step` after a `Last` step (or before any reset) ignores the action and resets the
/// environment instead, returning the `First` step of a new episode.
pub trait Environment: EnvStructure {
    /// Reset the environment to an initial state and start a new episode.
    fn reset(&mut self) -> Result<TimeStep<Observation<Self>>, EnvError>;

    /// Take a step in the environment.
    fn step(&mut self, action: &Action<Self>) -> Result<TimeStep<Observation<Self>>, EnvError>;

    /// The most recent time step produced by `reset` or `step`.
    ///
    /// Is `None` if the environment has never been reset.
    fn current_time_step(&self) -> Option<&TimeStep<Observation<Self>>>;

    /// Render the current environment state.
    fn render(&self, mode: RenderMode) -> Result<Rendered, EnvError> {
        let _ = mode;
        Err(EnvError::Unsupported { operation: "render" })
    }

    /// Seed the environment's internal randomness.
    fn seed(&mut self, seed: u64) -> Result<(), EnvError> {
        let _ = seed;
        Err(EnvError::Unsupported { operation: "seed" })
    }

    /// Release any resources held by the environment.
    fn close(&mut self) -> Result<(), EnvError> {
        Ok(())
    }

    /// Number of parallel environments if batched.
    fn batch_size(&self) -> Option<usize> {
        None
    }

    /// Whether the environment is batched.
    fn batched(&self) -> bool {
        false
    }
}

impl<E: Environment + ?Sized> Environment for Box<E> {
    fn reset(&mut self) -> Result<TimeStep<Observation<Self>>, EnvError> {
        E::reset(self)
    }
    fn step(&mut self, action: &Action<Self>) -> Result<TimeStep<Observation<Self>>, EnvError> {
        E::step(self, action)
    }
    fn current_time_step(&self) -> Option<&TimeStep<Observation<Self>>> {
        E::current_time_step(self)
    }
    fn render(&self, mode: RenderMode) -> Result<Rendered, EnvError> {
        E::render(self, mode)
    }
    fn seed(&mut self, seed: u64) -> Result<(), EnvError> {
        E::seed(self, seed)
    }
    fn close(&mut self) -> Result<(), EnvError> {
        E::close(self)
    }
    fn batch_size(&self) -> Option<usize> {
        E::batch_size(self)
    }
    fn batched(&self) -> bool {
        E::batched(self)
    }
}

/// A partially observable Markov decision process.
///
/// Defines the environment dynamics and structure. It does not internally manage state.
/// Use [`PomdpEnv`] to create an [`Environment`] out of a `Pomdp`.
pub trait Pomdp: EnvStructure {
    type State;

    /// Sample a new initial state.
    fn initial_state(&self, rng: &mut Prng) -> Self::State;

    /// Sample an observation for a state.
    fn observe(&self, state: &Self::State, rng: &mut Prng) -> Observation<Self>;

    /// Sample a state transition.
    ///
    /// # Returns
    /// * `successor`: The resulting state, marked with whether the episode continues.
    /// * `reward`: The reward value for this transition.
    fn step(
        &self,
        state: Self::State,
        action: &Action<Self>,
        rng: &mut Prng,
    ) -> (Successor<Self::State>, f64);

    /// Describe a state as text. Returns `None` if text rendering is not supported.
    fn render(&self, state: &Self::State) -> Option<String> {
        let _ = state;
        None
    }
}

/// The successor state of a transition and whether the episode continues.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Successor<S> {
    /// The episode continues from the given state.
    Continue(S),
    /// The episode ends in the given terminal state.
    ///
    /// All trajectories from terminal states yield 0 reward on each step.
    Terminate(S),
    /// The episode is interrupted at the given non-terminal state.
    Interrupt(S),
}

impl<S> Successor<S> {
    /// Whether this successor ends the episode.
    pub const fn episode_done(&self) -> bool {
        !matches!(self, Self::Continue(_))
    }

    /// Unwrap into the contained state.
    #[allow(clippy::missing_const_for_fn)] // false positive; cannot drop in const fn
    pub fn into_inner(self) -> S {
        match self {
            Self::Continue(s) | Self::Terminate(s) | Self::Interrupt(s) => s,
        }
    }
}

/// Environment rendering mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderMode {
    /// Display the rendering to the user.
    Human,
    /// Return a text description.
    Text,
}

/// Result of rendering an environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Rendered {
    /// The rendering was displayed; nothing is returned.
    Shown,
    /// Text description of the environment state.
    Text(String),
}

/// Error from an environment operation.
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("{operation} is not supported by this environment")]
    Unsupported { operation: &'static str },
    #[error("environment must be reset before {operation}")]
    NotReset { operation: &'static str },
    #[error("action is not in the action space")]
    InvalidAction,
    #[error("environment is closed")]
    Closed,
    #[error(transparent)]
    Other(#[from] Box<dyn Error + Send + Sync>),
}
