use clap::{ArgEnum, Parser};
use histenv::envs::{Action, Chain, MemoryGame, Observation, RenderMode, Rendered, Wrap};
use histenv::spaces::SampleSpace;
use histenv::{BuildEnv, EnvStructure, Environment, FillPolicy, History, Prng, RLError};
use log::info;
use rand::distributions::Distribution;
use rand::SeedableRng;
use std::fmt::Debug;

#[derive(ArgEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvType {
    Chain,
    MemoryGame,
}

#[derive(ArgEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillType {
    Pad,
    RepeatFirst,
}

impl From<FillType> for FillPolicy {
    fn from(fill: FillType) -> Self {
        match fill {
            FillType::Pad => Self::Pad,
            FillType::RepeatFirst => Self::RepeatFirst,
        }
    }
}

/// Run a random agent in an environment with observation history.
#[derive(Parser, Debug)]
#[clap(version, author, about)]
pub struct Options {
    /// Environment type
    #[clap(arg_enum)]
    environment: EnvType,

    /// Number of observations in the history window
    #[clap(long, default_value_t = 3)]
    history_length: usize,

    /// Include the action history in observations
    #[clap(long)]
    include_actions: bool,

    /// How the history is filled at the start of an episode
    #[clap(long, arg_enum, default_value = "pad")]
    fill: FillType,

    /// Random seed
    #[clap(long, default_value_t = 1)]
    seed: u64,

    /// Number of steps to run
    #[clap(long, default_value_t = 20)]
    steps: u64,

    /// Render the wrapped environment after each step
    #[clap(long)]
    render: bool,
}

fn run<EC>(env_config: &EC, opts: &Options) -> Result<(), RLError>
where
    EC: BuildEnv,
    <EC::Environment as EnvStructure>::ActionSpace: SampleSpace,
    Observation<EC::Environment>: Debug,
    Action<EC::Environment>: Debug,
{
    let mut rng = Prng::seed_from_u64(opts.seed);
    let mut env = env_config.build_env(&mut rng)?;
    let action_space = env.action_space();

    let time_step = env.reset()?;
    println!("{:?}", time_step);
    for _ in 0..opts.steps {
        let action = action_space.sample(&mut rng);
        let time_step = env.step(&action)?;
        println!("action: {:?}\n{:?}", action, time_step);
        if opts.render {
            if let Rendered::Text(text) = env.render(RenderMode::Text)? {
                println!("{}", text);
            }
        }
    }
    env.close()?;
    Ok(())
}

fn main() -> Result<(), RLError> {
    env_logger::init();
    let opts = Options::parse();
    info!("{:?}", opts);

    let history =
        History::new(opts.history_length, opts.include_actions).with_fill(opts.fill.into());
    match opts.environment {
        EnvType::Chain => run(&Chain::default().wrap(history), &opts),
        EnvType::MemoryGame => run(&MemoryGame::default().wrap(history), &opts),
    }
}
