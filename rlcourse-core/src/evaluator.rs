//! Evaluate [`Policy`].
use crate::{record::Record, Env, Policy};
use anyhow::Result;
use log::{trace, warn};
use std::thread::sleep;
mod config;
mod default_evaluator;
pub use config::EvaluatorConfig;
pub use default_evaluator::DefaultEvaluator;

/// Evaluate [`Policy`].
pub trait Evaluator<E: Env> {
    /// Evaluate [`Policy`].
    fn evaluate<P>(&mut self, policy: &mut P) -> Result<Record>
    where
        P: Policy<E>;
}

/// Runs a single episode and returns the cumulative reward.
///
/// The policy is queried once for the reset observation and once after every
/// step, including the last one. The episode ends when the environment
/// reports done, or once `config.max_steps` steps have been taken if a
/// ceiling is given.
pub(crate) fn run_episode<E, P>(
    env: &mut E,
    policy: &mut P,
    config: &EvaluatorConfig,
) -> Result<f32>
where
    E: Env,
    P: Policy<E>,
{
    let obs = env.reset()?;
    let mut act = policy.compute_action(&obs);
    let mut ep_reward = 0f32;
    let mut n_steps = 0usize;

    loop {
        if let Some(max_steps) = config.max_steps {
            if n_steps >= max_steps {
                warn!("Episode cut at the step ceiling ({} steps)", max_steps);
                break;
            }
        }

        let step = env.step(&act)?;
        n_steps += 1;
        ep_reward += step.reward;
        act = policy.compute_action(&step.obs);

        if config.render {
            env.render()?;
            sleep(config.render_wait());
        }

        if step.is_done() {
            trace!("Episode done in {} steps, return = {}", n_steps, ep_reward);
            break;
        }
    }

    Ok(ep_reward)
}
