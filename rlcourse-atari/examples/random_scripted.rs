use anyhow::Result;
use clap::Parser;
use rlcourse_atari::{
    util::{
        test::{ScriptedEnv, ScriptedEnvConfig, Transition},
        RandomPolicy,
    },
    DeepMind, DeepMindConfig,
};
use rlcourse_core::{DefaultEvaluator, Evaluator as _, EvaluatorConfig};

/// Runs a random policy on a scripted game through the DeepMind preprocessing.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of evaluation episodes
    #[arg(long, default_value_t = 5)]
    n_episodes: usize,

    /// Maximum number of no-ops after reset
    #[arg(long, default_value_t = 30)]
    noop_max: usize,

    /// Number of repeats of an action
    #[arg(long, default_value_t = 4)]
    skip: usize,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: i64,

    /// Render a single episode
    #[arg(long, default_value_t = false)]
    render: bool,
}

/// A game of three lives with a point scored every 10 frames.
fn env_config() -> ScriptedEnvConfig {
    let episode = (0..300u32)
        .map(|t| {
            let lives = 3 - (t / 100) as usize;
            let reward = if t % 10 == 9 { 1.0 } else { 0.0 };
            Transition::new((t % 256) as u8, reward, lives, t == 299)
        })
        .collect();
    ScriptedEnvConfig::new(&["NOOP", "FIRE", "UP", "DOWN"])
        .initial_lives(3)
        .episode(episode)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let env_config = DeepMindConfig::new(env_config())
        .noop_max(args.noop_max)
        .skip(args.skip);
    let config = EvaluatorConfig::default()
        .n_episodes(args.n_episodes)
        .render(args.render);
    let mut evaluator =
        DefaultEvaluator::<DeepMind<ScriptedEnv>>::new(&env_config, args.seed, config)?;
    let mut policy = RandomPolicy::for_env(evaluator.env(), args.seed as u64)?;

    let record = evaluator.evaluate(&mut policy)?;
    println!("Episode return: {}", record.get_scalar("Episode return")?);
    let returns = record.get_array1("Episode returns")?;
    println!("Episode returns: {:?}", returns);

    Ok(())
}
