//! Reinforcement learning environments with observation and action history.
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::missing_const_for_fn)] // has some false positives
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::use_self)] // also triggered by macro expansions
pub mod envs;
mod error;
pub mod spaces;
pub mod utils;

pub use envs::{
    BuildEnv, BuildEnvError, EnvError, EnvStructure, Environment, FillPolicy, History,
    HistoryWrapper, StepType, TimeStep,
};
pub use error::RLError;

/// Pseudo-random number generator type used by this crate.
pub type Prng = rand_chacha::ChaCha8Rng;
