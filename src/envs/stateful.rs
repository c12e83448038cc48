//! Converting a [`Pomdp`] into an [`Environment`]
use super::{
    Action, EnvError, EnvStructure, Environment, Observation, Pomdp, RenderMode, Rendered,
    Successor, TimeStep,
};
use crate::spaces::Space;
use crate::Prng;
use rand::SeedableRng;
use std::fmt;

/// Wraps a [`Pomdp`] as an [`Environment`] with internal state.
pub struct PomdpEnv<E: Pomdp> {
    pub env: E,
    state: Option<E::State>,
    current: Option<TimeStep<Observation<E>>>,
    rng: Prng,
    closed: bool,
}

impl<E: Pomdp> PomdpEnv<E> {
    pub fn new(env: E, seed: u64) -> Self {
        Self {
            env,
            state: None,
            current: None,
            rng: Prng::seed_from_u64(seed),
            closed: false,
        }
    }

    /// Whether [`Environment::close`] has been called.
    pub const fn is_closed(&self) -> bool {
        self.closed
    }
}

impl<E> fmt::Debug for PomdpEnv<E>
where
    E: Pomdp + fmt::Debug,
    E::State: fmt::Debug,
    Observation<E>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PomdpEnv")
            .field("env", &self.env)
            .field("state", &self.state)
            .field("current", &self.current)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

impl<E> Clone for PomdpEnv<E>
where
    E: Pomdp + Clone,
    E::State: Clone,
    Observation<E>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            env: self.env.clone(),
            state: self.state.clone(),
            current: self.current.clone(),
            rng: self.rng.clone(),
            closed: self.closed,
        }
    }
}

impl<E: Pomdp> EnvStructure for PomdpEnv<E> {
    type ObservationSpace = E::ObservationSpace;
    type ActionSpace = E::ActionSpace;

    fn observation_space(&self) -> Self::ObservationSpace {
        self.env.observation_space()
    }
    fn action_space(&self) -> Self::ActionSpace {
        self.env.action_space()
    }
    fn reward_range(&self) -> (f64, f64) {
        self.env.reward_range()
    }
    fn discount_factor(&self) -> f64 {
        self.env.discount_factor()
    }
}

impl<E> Environment for PomdpEnv<E>
where
    E: Pomdp,
    Observation<E>: Clone,
{
    fn reset(&mut self) -> Result<TimeStep<Observation<Self>>, EnvError> {
        if self.closed {
            return Err(EnvError::Closed);
        }
        let state = self.env.initial_state(&mut self.rng);
        let time_step = TimeStep::first(self.env.observe(&state, &mut self.rng));
        self.state = Some(state);
        self.current = Some(time_step.clone());
        Ok(time_step)
    }

    fn step(&mut self, action: &Action<Self>) -> Result<TimeStep<Observation<Self>>, EnvError> {
        if self.closed {
            return Err(EnvError::Closed);
        }
        // Start a new episode instead; the action is ignored.
        if self.current.as_ref().map_or(true, TimeStep::is_last) {
            return self.reset();
        }
        let state = match self.state.take() {
            Some(state) => state,
            None => return self.reset(),
        };
        if !self.env.action_space().contains(action) {
            self.state = Some(state);
            return Err(EnvError::InvalidAction);
        }

        let (successor, reward) = self.env.step(state, action, &mut self.rng);
        let time_step = match &successor {
            Successor::Continue(s) => TimeStep::mid(self.env.observe(s, &mut self.rng), reward),
            Successor::Terminate(s) => {
                TimeStep::terminate(self.env.observe(s, &mut self.rng), reward)
            }
            Successor::Interrupt(s) => {
                TimeStep::interrupt(self.env.observe(s, &mut self.rng), reward)
            }
        };
        self.state = Some(successor.into_inner());
        self.current = Some(time_step.clone());
        Ok(time_step)
    }

    fn current_time_step(&self) -> Option<&TimeStep<Observation<Self>>> {
        self.current.as_ref()
    }

    fn render(&self, mode: RenderMode) -> Result<Rendered, EnvError> {
        let state = self
            .state
            .as_ref()
            .ok_or(EnvError::NotReset { operation: "render" })?;
        let text = self
            .env
            .render(state)
            .ok_or(EnvError::Unsupported { operation: "render" })?;
        match mode {
            RenderMode::Human => {
                println!("{}", text);
                Ok(Rendered::Shown)
            }
            RenderMode::Text => Ok(Rendered::Text(text)),
        }
    }

    fn seed(&mut self, seed: u64) -> Result<(), EnvError> {
        self.rng = Prng::seed_from_u64(seed);
        Ok(())
    }

    fn close(&mut self) -> Result<(), EnvError> {
        self.closed = true;
        Ok(())
    }
}
