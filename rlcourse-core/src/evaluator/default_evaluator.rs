//! Default implementation of the [`Evaluator`] trait.
use super::{run_episode, Evaluator, EvaluatorConfig};
use crate::{
    error::RlcError,
    record::{Record, RecordValue},
    Env, Policy,
};
use anyhow::Result;
use log::info;

/// Runs a fixed number of episodes and reports the mean return.
///
/// The returned [`Record`] holds the mean under `"Episode return"` and the
/// return of each episode under `"Episode returns"`.
///
/// ```ignore
/// let config = EvaluatorConfig::default().n_episodes(10);
/// let mut evaluator = DefaultEvaluator::new(&env_config, 42, config)?;
/// let record = evaluator.evaluate(&mut policy)?;
/// println!("Average return: {}", record.get_scalar("Episode return")?);
/// ```
pub struct DefaultEvaluator<E: Env> {
    config: EvaluatorConfig,
    env: E,
}

impl<E: Env> Evaluator<E> for DefaultEvaluator<E> {
    fn evaluate<P>(&mut self, policy: &mut P) -> Result<Record>
    where
        P: Policy<E>,
    {
        let n_episodes = self.config.effective_n_episodes();
        if n_episodes == 0 {
            return Err(RlcError::NoEpisodes.into());
        }

        let mut returns = Vec::with_capacity(n_episodes);
        for ix in 0..n_episodes {
            let r = run_episode(&mut self.env, policy, &self.config)?;
            info!("Episode {}, return = {}", ix, r);
            returns.push(r);
        }

        if self.config.render {
            self.env.close()?;
        }

        let mean = returns.iter().sum::<f32>() / n_episodes as f32;
        let mut record = Record::from_scalar("Episode return", mean);
        record.insert("Episode returns", RecordValue::Array1(returns));
        Ok(record)
    }
}

impl<E: Env> DefaultEvaluator<E> {
    /// Constructs a [`DefaultEvaluator`], building the environment from its configuration.
    pub fn new(env_config: &E::Config, seed: i64, config: EvaluatorConfig) -> Result<Self> {
        Ok(Self {
            config,
            env: E::build(env_config, seed)?,
        })
    }

    /// Constructs a [`DefaultEvaluator`] over an existing environment.
    pub fn from_env(env: E, config: EvaluatorConfig) -> Self {
        Self { config, env }
    }

    /// Returns a reference to the environment.
    pub fn env(&self) -> &E {
        &self.env
    }
}
