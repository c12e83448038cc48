use super::Environment;
use crate::Prng;
use thiserror::Error;

/// Build an [`Environment`].
///
/// Configuration types implement this to construct the environment they describe.
pub trait BuildEnv {
    type Environment: Environment;

    /// Build an environment instance.
    ///
    /// # Args
    /// * `rng` - Random number generator used for seeding the environment's internal randomness.
    fn build_env(&self, rng: &mut Prng) -> Result<Self::Environment, BuildEnvError>;
}

/// Error building an environment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildEnvError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
