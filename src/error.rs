//! Error type
use crate::envs::{BuildEnvError, EnvError};
use thiserror::Error;

/// Error from the histenv crate.
#[derive(Error, Debug)]
pub enum RLError {
    #[error("error building environment")]
    BuildEnv(#[from] BuildEnvError),
    #[error("environment error")]
    Env(#[from] EnvError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_build_env_error() {
        let err: RLError = BuildEnvError::InvalidConfiguration("bad".into()).into();
        assert!(matches!(err, RLError::BuildEnv(_)));
    }

    #[test]
    fn from_env_error() {
        let err: RLError = EnvError::Closed.into();
        assert!(matches!(err, RLError::Env(EnvError::Closed)));
    }
}
