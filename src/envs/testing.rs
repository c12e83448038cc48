//! Environment testing utilities
use super::{EnvError, EnvStructure, Environment, Observation, RenderMode, Rendered, TimeStep};
use crate::spaces::{IndexSpace, IntervalSpace, SampleSpace, Space};
use crate::Prng;
use rand::distributions::Distribution;
use rand::SeedableRng;
use std::fmt::Debug;

/// Run an environment with uniform random actions and check that invariants are satisfied.
pub fn run_env<E>(env: &mut E, num_steps: u64, seed: u64)
where
    E: Environment,
    E::ActionSpace: SampleSpace,
    Observation<E>: Debug + PartialEq,
{
    let action_space = env.action_space();
    let time_step_space = env.time_step_space();
    let discount_factor = env.discount_factor();
    assert!(discount_factor >= 0.0);
    assert!(discount_factor <= 1.0);

    let mut rng = Prng::seed_from_u64(seed);
    let mut time_step = env.reset().unwrap();
    assert!(time_step.is_first());
    for _ in 0..num_steps {
        assert!(time_step_space.contains(&time_step));
        assert_eq!(env.current_time_step(), Some(&time_step));

        let action = action_space.sample(&mut rng);
        let episode_done = time_step.is_last();
        time_step = env.step(&action).unwrap();
        assert_eq!(time_step.is_first(), episode_done);
    }
}

/// Deterministic environment for testing wrappers.
///
/// The observation is one more than the number of steps taken in the current episode.
/// Every step earns 1 reward and an episode ends after `episode_len` steps.
/// Records the operations forwarded to it.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterEnv {
    pub episode_len: u64,
    /// Number of resets, including implicit ones.
    pub resets: u64,
    /// Actions received by steps that were not implicit resets.
    pub actions: Vec<usize>,
    pub seeds: Vec<u64>,
    pub closed: bool,
    count: u64,
    current: Option<TimeStep<f64>>,
    fail_on_step: Option<u64>,
    reset_on_step: bool,
    batch_size: Option<usize>,
}

impl CounterEnv {
    pub const fn new(episode_len: u64) -> Self {
        Self {
            episode_len,
            resets: 0,
            actions: Vec::new(),
            seeds: Vec::new(),
            closed: false,
            count: 0,
            current: None,
            fail_on_step: None,
            reset_on_step: false,
            batch_size: None,
        }
    }

    /// Fail on the given step number (starting from 1) of each episode.
    pub fn fail_on_step(mut self, step: u64) -> Self {
        self.fail_on_step = Some(step);
        self
    }

    /// Report a batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Make the next step reset instead, as if reset outside of any wrapper.
    pub fn force_reset_on_step(&mut self) {
        self.reset_on_step = true;
    }

    /// Total number of forwarded steps that were not implicit resets.
    pub fn steps_taken(&self) -> usize {
        self.actions.len()
    }
}

impl EnvStructure for CounterEnv {
    type ObservationSpace = IntervalSpace<f64>;
    type ActionSpace = IndexSpace;

    fn observation_space(&self) -> Self::ObservationSpace {
        IntervalSpace::new(0.0, f64::INFINITY)
    }

    fn action_space(&self) -> Self::ActionSpace {
        IndexSpace::new(4)
    }

    fn reward_range(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn discount_factor(&self) -> f64 {
        1.0
    }
}

impl Environment for CounterEnv {
    fn reset(&mut self) -> Result<TimeStep<f64>, EnvError> {
        self.resets += 1;
        self.count = 0;
        let time_step = TimeStep::first(1.0);
        self.current = Some(time_step.clone());
        Ok(time_step)
    }

    fn step(&mut self, action: &usize) -> Result<TimeStep<f64>, EnvError> {
        if self.reset_on_step || self.current.as_ref().map_or(true, TimeStep::is_last) {
            self.reset_on_step = false;
            return self.reset();
        }
        if self.fail_on_step == Some(self.count + 1) {
            return Err(EnvError::Other("step failed".into()));
        }
        self.actions.push(*action);
        self.count += 1;
        let observation = (self.count + 1) as f64;
        let time_step = if self.count >= self.episode_len {
            TimeStep::terminate(observation, 1.0)
        } else {
            TimeStep::mid(observation, 1.0)
        };
        self.current = Some(time_step.clone());
        Ok(time_step)
    }

    fn current_time_step(&self) -> Option<&TimeStep<f64>> {
        self.current.as_ref()
    }

    fn render(&self, _mode: RenderMode) -> Result<Rendered, EnvError> {
        Ok(Rendered::Text(format!("count {}", self.count)))
    }

    fn seed(&mut self, seed: u64) -> Result<(), EnvError> {
        self.seeds.push(seed);
        Ok(())
    }

    fn close(&mut self) -> Result<(), EnvError> {
        self.closed = true;
        Ok(())
    }

    fn batch_size(&self) -> Option<usize> {
        self.batch_size
    }

    fn batched(&self) -> bool {
        self.batch_size.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_counter() {
        run_env(&mut CounterEnv::new(5), 100, 0);
    }

    #[test]
    fn counter_observations() {
        let mut env = CounterEnv::new(2);
        assert_eq!(env.reset().unwrap().observation, 1.0);
        assert_eq!(env.step(&0).unwrap(), TimeStep::mid(2.0, 1.0));
        assert_eq!(env.step(&0).unwrap(), TimeStep::terminate(3.0, 1.0));
        assert!(env.step(&0).unwrap().is_first());
        assert_eq!(env.resets, 2);
    }
}
