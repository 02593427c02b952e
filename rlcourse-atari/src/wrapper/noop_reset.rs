//! Random number of no-op actions on reset.
use crate::{
    capability::{expect_meaning, forward_capabilities},
    ActionMeanings,
};
use anyhow::Result;
use fastrand::Rng;
use log::{debug, trace};
use rlcourse_core::{error::RlcError, Env, Step};
use serde::{Deserialize, Serialize};

/// Configuration of [`NoOpReset`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NoOpResetConfig<C> {
    pub inner: C,

    /// The maximum number of no-op actions after reset.
    pub noop_max: usize,
}

impl<C: Default> Default for NoOpResetConfig<C> {
    fn default() -> Self {
        Self {
            inner: C::default(),
            noop_max: 30,
        }
    }
}

impl<C> NoOpResetConfig<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            noop_max: 30,
        }
    }

    /// Sets the maximum number of no-op actions.
    pub fn noop_max(mut self, v: usize) -> Self {
        self.noop_max = v;
        self
    }
}

/// Samples initial states by taking a random number of no-ops on reset.
///
/// The no-op action is action 0, whose meaning must be `NOOP`.
pub struct NoOpReset<E> {
    env: E,
    noop_max: usize,
    rng: Rng,
    last_noops: usize,
}

impl<E> NoOpReset<E>
where
    E: Env + ActionMeanings,
    E::Act: From<u8>,
{
    /// Wraps `env`. The number of no-ops is drawn from a generator seeded with `seed`.
    pub fn new(env: E, noop_max: usize, seed: u64) -> Result<Self> {
        if noop_max == 0 {
            return Err(RlcError::NonPositiveParameter("noop_max").into());
        }
        expect_meaning(&env.action_meanings(), 0, "NOOP")?;

        Ok(Self {
            env,
            noop_max,
            rng: Rng::with_seed(seed),
            last_noops: 0,
        })
    }
}

impl<E> NoOpReset<E> {
    pub fn noop_max(&self) -> usize {
        self.noop_max
    }

    /// The number of no-ops taken at the last reset.
    pub fn last_noops(&self) -> usize {
        self.last_noops
    }

    pub fn inner(&self) -> &E {
        &self.env
    }

    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.env
    }

    pub fn into_inner(self) -> E {
        self.env
    }
}

forward_capabilities!(NoOpReset);

impl<E> Env for NoOpReset<E>
where
    E: Env + ActionMeanings,
    E::Act: From<u8>,
{
    type Config = NoOpResetConfig<E::Config>;
    type Obs = E::Obs;
    type Act = E::Act;
    type Info = E::Info;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let env = E::build(&config.inner, seed)?;
        Self::new(env, config.noop_max, seed as u64)
    }

    fn step(&mut self, a: &Self::Act) -> Result<Step<Self>> {
        Ok(self.env.step(a)?.rewrap())
    }

    /// Does no-op action for a number of steps in `[1, noop_max]`.
    fn reset(&mut self) -> Result<Self::Obs> {
        let mut obs = self.env.reset()?;
        let noops = self.rng.usize(1..=self.noop_max);
        debug!("NoOpReset: {} no-ops", noops);

        let noop = E::Act::from(0u8);
        for _ in 0..noops {
            obs = self.env.step(&noop)?.obs;
        }
        trace!("NoOpReset::reset() done");
        self.last_noops = noops;
        Ok(obs)
    }

    fn render(&mut self) -> Result<()> {
        self.env.render()
    }

    fn close(&mut self) -> Result<()> {
        self.env.close()
    }
}
