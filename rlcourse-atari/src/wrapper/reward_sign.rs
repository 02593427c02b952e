//! Reward clipping to its sign.
use crate::capability::forward_capabilities;
use anyhow::Result;
use rlcourse_core::{Env, Step};
use serde::{Deserialize, Serialize};

/// Configuration of [`RewardSign`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RewardSignConfig<C> {
    pub inner: C,
}

/// Replaces the reward with its sign, one of `-1`, `0` and `+1`.
pub struct RewardSign<E> {
    env: E,
}

/// Sign of a reward. Zero, negative zero and NaN map to `0`.
pub fn sign(r: f32) -> f32 {
    if r > 0.0 {
        1.0
    } else if r < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl<E> RewardSign<E> {
    pub fn new(env: E) -> Self {
        Self { env }
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

forward_capabilities!(RewardSign);

impl<E: Env> Env for RewardSign<E> {
    type Config = RewardSignConfig<E::Config>;
    type Obs = E::Obs;
    type Act = E::Act;
    type Info = E::Info;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        Ok(Self::new(E::build(&config.inner, seed)?))
    }

    fn step(&mut self, a: &Self::Act) -> Result<Step<Self>> {
        let mut step = self.env.step(a)?;
        step.reward = sign(step.reward);
        Ok(step.rewrap())
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        self.env.reset()
    }

    fn render(&mut self) -> Result<()> {
        self.env.render()
    }

    fn close(&mut self) -> Result<()> {
        self.env.close()
    }
}
