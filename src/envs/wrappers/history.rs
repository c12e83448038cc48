//! Observation history wrapper.
use super::super::{
    Action, BuildEnv, BuildEnvError, EnvError, EnvStructure, Environment, Observation, RenderMode,
    Rendered, TimeStep,
};
use super::Wrapped;
use crate::spaces::{HistoryObservation, HistoryObservationSpace, PadSpace};
use crate::utils::ring::RingBuffer;
use crate::Prng;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the history is filled at the start of an episode, before enough steps have occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillPolicy {
    /// Fill with the padding element of the observation space.
    Pad,
    /// Repeat the first observation of the episode.
    RepeatFirst,
}

impl Default for FillPolicy {
    fn default() -> Self {
        Self::Pad
    }
}

/// Configuration of a [`HistoryWrapper`].
///
/// Wrapping an environment configuration with `History` builds a [`HistoryWrapper`]:
/// ```
/// use histenv::envs::{MemoryGame, Wrap};
/// use histenv::{BuildEnv, History, Prng};
/// use rand::SeedableRng;
///
/// let config = MemoryGame::default().wrap(History::new(2, true));
/// let env = config.build_env(&mut Prng::seed_from_u64(0)).unwrap();
/// assert_eq!(env.history_length(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct History {
    /// Number of observations in each augmented observation, including the current one.
    ///
    /// Must be positive.
    pub history_length: usize,
    /// Whether to include an equally long window of the most recent actions.
    pub include_actions: bool,
    /// How to fill the history at the start of each episode.
    pub fill: FillPolicy,
}

impl History {
    pub const fn new(history_length: usize, include_actions: bool) -> Self {
        Self {
            history_length,
            include_actions,
            fill: FillPolicy::Pad,
        }
    }

    /// Set the fill policy.
    pub const fn with_fill(self, fill: FillPolicy) -> Self {
        Self { fill, ..self }
    }

    fn validate(&self) -> Result<(), BuildEnvError> {
        if self.history_length == 0 {
            return Err(BuildEnvError::InvalidConfiguration(
                "history_length must be positive".into(),
            ));
        }
        Ok(())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(3, false)
    }
}

impl<EC> BuildEnv for Wrapped<EC, History>
where
    EC: BuildEnv,
    HistoryWrapper<EC::Environment>: Environment,
{
    type Environment = HistoryWrapper<EC::Environment>;

    fn build_env(&self, rng: &mut Prng) -> Result<Self::Environment, BuildEnvError> {
        self.wrapper.validate()?;
        HistoryWrapper::with_config(self.inner.build_env(rng)?, self.wrapper)
    }
}

type Augmented<E> = HistoryObservation<Observation<E>, Action<E>>;

/// Environment wrapper that augments observations with the recent history.
///
/// Each observation is a [`HistoryObservation`] holding the last `history_length`
/// observations of the inner environment, ending with the current one, and optionally the
/// actions that produced them. At the start of an episode the missing history is filled
/// according to the [`FillPolicy`]; missing actions are always padding.
///
/// All other operations are forwarded to the inner environment unchanged,
/// as are any errors it returns.
pub struct HistoryWrapper<E: Environment> {
    inner: E,
    config: History,
    observation_space: HistoryObservationSpace<E::ObservationSpace, E::ActionSpace>,
    observations: RingBuffer<Observation<E>>,
    actions: Option<RingBuffer<Action<E>>>,
    current: Option<TimeStep<Augmented<E>>>,
}

impl<E: Environment> HistoryWrapper<E> {
    /// Wrap an environment.
    ///
    /// # Errors
    /// [`BuildEnvError::InvalidConfiguration`] if `history_length` is zero.
    pub fn new(
        env: E,
        history_length: usize,
        include_actions: bool,
    ) -> Result<Self, BuildEnvError> {
        Self::with_config(env, History::new(history_length, include_actions))
    }

    /// Wrap an environment using a [`History`] configuration.
    ///
    /// # Errors
    /// [`BuildEnvError::InvalidConfiguration`] if `config.history_length` is zero.
    pub fn with_config(env: E, config: History) -> Result<Self, BuildEnvError> {
        config.validate()?;
        let observation_space = HistoryObservationSpace::new(
            env.observation_space(),
            env.action_space(),
            config.history_length,
            config.include_actions,
        );
        let actions = if config.include_actions {
            Some(RingBuffer::with_capacity(config.history_length))
        } else {
            None
        };
        Ok(Self {
            inner: env,
            config,
            observation_space,
            observations: RingBuffer::with_capacity(config.history_length),
            actions,
            current: None,
        })
    }

    pub const fn inner(&self) -> &E {
        &self.inner
    }

    /// Mutable access to the inner environment.
    ///
    /// Stepping or resetting the inner environment directly is not reflected in the history.
    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.inner
    }

    #[allow(clippy::missing_const_for_fn)] // false positive; cannot drop in const fn
    pub fn into_inner(self) -> E {
        self.inner
    }

    pub const fn history_length(&self) -> usize {
        self.config.history_length
    }

    pub const fn include_actions(&self) -> bool {
        self.config.include_actions
    }

    pub const fn fill_policy(&self) -> FillPolicy {
        self.config.fill
    }

    /// Number of observations currently stored in the history.
    pub fn stored_len(&self) -> usize {
        self.observations.len()
    }
}

impl<E> HistoryWrapper<E>
where
    E: Environment,
    E::ObservationSpace: PadSpace,
    E::ActionSpace: PadSpace,
    Observation<E>: Clone,
    Action<E>: Clone,
{
    /// Refill the history for the first step of a new episode.
    fn start_episode(&mut self, time_step: TimeStep<Observation<E>>) -> TimeStep<Augmented<E>> {
        let fill = match self.config.fill {
            FillPolicy::Pad => self.observation_space.observations.inner_space.pad_element(),
            FillPolicy::RepeatFirst => time_step.observation.clone(),
        };
        self.observations.fill(fill);
        if let (Some(actions), Some(space)) = (&mut self.actions, &self.observation_space.actions)
        {
            actions.fill(space.inner_space.pad_element());
        }
        self.record(time_step, None)
    }

    /// Push a step into the history and produce the augmented step.
    fn record(
        &mut self,
        time_step: TimeStep<Observation<E>>,
        action: Option<&Action<E>>,
    ) -> TimeStep<Augmented<E>> {
        let TimeStep {
            step_type,
            reward,
            discount,
            observation,
        } = time_step;
        self.observations.push(observation);
        if let (Some(actions), Some(action)) = (&mut self.actions, action) {
            actions.push(action.clone());
        }

        // Reuse the vectors of the previously cached step
        let mut observation = match self.current.take() {
            Some(previous) => previous.observation,
            None => HistoryObservation {
                observations: Vec::with_capacity(self.observations.capacity()),
                actions: None,
            },
        };
        observation.observations.clear();
        observation.observations.extend(self.observations.iter().cloned());
        observation.actions = match (&self.actions, observation.actions.take()) {
            (Some(buffer), Some(mut actions)) => {
                actions.clear();
                actions.extend(buffer.iter().cloned());
                Some(actions)
            }
            (Some(buffer), None) => Some(buffer.to_vec()),
            (None, _) => None,
        };

        let current = TimeStep {
            step_type,
            reward,
            discount,
            observation,
        };
        let augmented = current.clone();
        self.current = Some(current);
        augmented
    }
}

impl<E> fmt::Debug for HistoryWrapper<E>
where
    E: Environment + fmt::Debug,
    E::ObservationSpace: fmt::Debug,
    E::ActionSpace: fmt::Debug,
    Observation<E>: fmt::Debug,
    Action<E>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HistoryWrapper")
            .field("inner", &self.inner)
            .field("config", &self.config)
            .field("observation_space", &self.observation_space)
            .field("observations", &self.observations)
            .field("actions", &self.actions)
            .field("current", &self.current)
            .finish()
    }
}

impl<E> EnvStructure for HistoryWrapper<E>
where
    E: Environment,
    E::ObservationSpace: Clone,
    E::ActionSpace: Clone,
{
    type ObservationSpace = HistoryObservationSpace<E::ObservationSpace, E::ActionSpace>;
    type ActionSpace = E::ActionSpace;

    /// Computed once on construction.
    fn observation_space(&self) -> Self::ObservationSpace {
        self.observation_space.clone()
    }
    fn action_space(&self) -> Self::ActionSpace {
        self.inner.action_space()
    }
    fn reward_range(&self) -> (f64, f64) {
        self.inner.reward_range()
    }
    fn discount_factor(&self) -> f64 {
        self.inner.discount_factor()
    }
}

impl<E> Environment for HistoryWrapper<E>
where
    E: Environment,
    E::ObservationSpace: PadSpace + Clone,
    E::ActionSpace: PadSpace + Clone,
    Observation<E>: Clone,
    Action<E>: Clone,
{
    fn reset(&mut self) -> Result<TimeStep<Observation<Self>>, EnvError> {
        let time_step = self.inner.reset()?;
        debug!(
            "reset history; length = {}, fill = {:?}",
            self.config.history_length, self.config.fill
        );
        Ok(self.start_episode(time_step))
    }

    fn step(&mut self, action: &Action<Self>) -> Result<TimeStep<Observation<Self>>, EnvError> {
        if self.current.as_ref().map_or(true, TimeStep::is_last) {
            debug!("step at episode boundary; ignoring action and resetting");
            return self.reset();
        }
        let time_step = self.inner.step(action)?;
        trace!("history step: {:?}", time_step.step_type);
        if time_step.is_first() {
            // The inner environment was reset outside of this wrapper
            return Ok(self.start_episode(time_step));
        }
        Ok(self.record(time_step, Some(action)))
    }

    fn current_time_step(&self) -> Option<&TimeStep<Observation<Self>>> {
        self.current.as_ref()
    }

    fn render(&self, mode: RenderMode) -> Result<Rendered, EnvError> {
        self.inner.render(mode)
    }

    fn seed(&mut self, seed: u64) -> Result<(), EnvError> {
        self.inner.seed(seed)
    }

    fn close(&mut self) -> Result<(), EnvError> {
        self.inner.close()
    }

    fn batch_size(&self) -> Option<usize> {
        self.inner.batch_size()
    }

    fn batched(&self) -> bool {
        self.inner.batched()
    }
}
