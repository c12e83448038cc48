//! Environment time steps
use crate::spaces::{IntervalSpace, Space};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a time step within an episode.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepType {
    /// The first step of an episode, produced by a reset.
    First,
    /// An intermediate step.
    Mid,
    /// The final step of an episode.
    Last,
}

/// The result of one interaction with an environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeStep<O> {
    pub step_type: StepType,
    /// Reward for the transition into this step. Always `0` on the first step.
    pub reward: f64,
    /// Discount applied to the value of future steps.
    ///
    /// `0` on a terminal step; `1` otherwise, including steps that interrupt an episode.
    pub discount: f64,
    pub observation: O,
}

impl<O> TimeStep<O> {
    /// The first step of an episode.
    pub const fn first(observation: O) -> Self {
        Self {
            step_type: StepType::First,
            reward: 0.0,
            discount: 1.0,
            observation,
        }
    }

    /// An intermediate step.
    pub const fn mid(observation: O, reward: f64) -> Self {
        Self {
            step_type: StepType::Mid,
            reward,
            discount: 1.0,
            observation,
        }
    }

    /// A final step in a terminal state.
    pub const fn terminate(observation: O, reward: f64) -> Self {
        Self {
            step_type: StepType::Last,
            reward,
            discount: 0.0,
            observation,
        }
    }

    /// A final step that interrupts the episode in a non-terminal state.
    pub const fn interrupt(observation: O, reward: f64) -> Self {
        Self {
            step_type: StepType::Last,
            reward,
            discount: 1.0,
            observation,
        }
    }

    pub const fn is_first(&self) -> bool {
        matches!(self.step_type, StepType::First)
    }

    pub const fn is_mid(&self) -> bool {
        matches!(self.step_type, StepType::Mid)
    }

    pub const fn is_last(&self) -> bool {
        matches!(self.step_type, StepType::Last)
    }

    /// Replace the observation, keeping the remaining fields.
    #[inline]
    pub fn map_observation<U, F>(self, f: F) -> TimeStep<U>
    where
        F: FnOnce(O) -> U,
    {
        TimeStep {
            step_type: self.step_type,
            reward: self.reward,
            discount: self.discount,
            observation: f(self.observation),
        }
    }
}

/// Space of [`TimeStep`] values for an environment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeStepSpace<OS> {
    pub observation: OS,
    pub reward: IntervalSpace<f64>,
    pub discount: IntervalSpace<f64>,
}

impl<OS> TimeStepSpace<OS> {
    pub fn new(observation: OS, min_reward: f64, max_reward: f64) -> Self {
        Self {
            observation,
            reward: IntervalSpace::new(min_reward, max_reward),
            discount: IntervalSpace::new(0.0, 1.0),
        }
    }
}

impl<OS: fmt::Display> fmt::Display for TimeStepSpace<OS> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "TimeStepSpace(observation: {}, reward: {}, discount: {})",
            self.observation, self.reward, self.discount
        )
    }
}

impl<OS: Space> Space for TimeStepSpace<OS> {
    type Element = TimeStep<OS::Element>;

    fn contains(&self, value: &Self::Element) -> bool {
        let first_ok = !value.is_first() || (value.reward == 0.0 && value.discount == 1.0);
        first_ok
            && self.reward.contains(&value.reward)
            && self.discount.contains(&value.discount)
            && self.observation.contains(&value.observation)
    }
}
