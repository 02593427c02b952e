//! This module is used for tests.
use crate::{Act, Env, Obs, Policy, Step};
use anyhow::Result;

/// Dummy observation, the number of steps taken in the current episode.
#[derive(Clone, Debug, PartialEq)]
pub struct DummyObs(pub usize);

impl Obs for DummyObs {}

/// Dummy action.
#[derive(Clone, Debug)]
pub struct DummyAct;

impl Act for DummyAct {}

/// Configuration of [`DummyEnv`].
#[derive(Clone, Debug)]
pub struct DummyEnvConfig {
    /// Return of each episode, cycled over successive resets.
    pub episode_returns: Vec<f32>,

    /// Number of steps of an episode. `None` never ends an episode.
    pub episode_len: Option<usize>,
}

/// An environment paying a fixed return per episode at its last step.
pub struct DummyEnv {
    config: DummyEnvConfig,
    n_resets: usize,
    t: usize,
    pub n_renders: usize,
    pub closed: bool,
}

impl Env for DummyEnv {
    type Config = DummyEnvConfig;
    type Obs = DummyObs;
    type Act = DummyAct;
    type Info = ();

    fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            n_resets: 0,
            t: 0,
            n_renders: 0,
            closed: false,
        })
    }

    fn reset(&mut self) -> Result<DummyObs> {
        self.n_resets += 1;
        self.t = 0;
        Ok(DummyObs(0))
    }

    fn step(&mut self, a: &DummyAct) -> Result<Step<Self>> {
        self.t += 1;
        let is_done = self.config.episode_len.map_or(false, |n| self.t >= n);
        let reward = match self.config.episode_len {
            Some(_) if is_done => {
                let ix = (self.n_resets - 1) % self.config.episode_returns.len();
                self.config.episode_returns[ix]
            }
            Some(_) => 0.0,
            None => 1.0,
        };
        Ok(Step::new(DummyObs(self.t), a.clone(), reward, is_done, ()))
    }

    fn render(&mut self) -> Result<()> {
        self.n_renders += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}

/// Dummy policy counting the observations it has seen.
#[derive(Default)]
pub struct DummyPolicy {
    pub n_calls: usize,
}

impl Policy<DummyEnv> for DummyPolicy {
    fn compute_action(&mut self, _obs: &DummyObs) -> DummyAct {
        self.n_calls += 1;
        DummyAct
    }
}
