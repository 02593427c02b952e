//! Composition of the wrappers into the DeepMind preprocessing.
//!
//! The order of the wrappers matters: lives are tracked on raw frames before
//! frames are skipped, and rewards are clipped after they are summed over the
//! skipped frames.
use crate::{
    ActionMeanings, EpisodicLife, FireReset, LifeCount, MaxAndSkip, MaxPool, NoOpReset, RewardSign,
};
use anyhow::Result;
use log::{info, trace};
use rlcourse_core::{Env, Step};
use serde::{Deserialize, Serialize};

/// Configuration of [`FireGate`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FireGateConfig<C> {
    pub inner: C,
}

/// [`FireReset`] if the environment has a `FIRE` action, the environment as
/// it is otherwise.
pub enum FireGate<E> {
    Fire(FireReset<E>),
    Pass(E),
}

impl<E> FireGate<E>
where
    E: Env + ActionMeanings,
    E::Act: From<u8>,
{
    pub fn new(env: E) -> Result<Self> {
        if env.action_meanings().iter().any(|m| m == "FIRE") {
            Ok(Self::Fire(FireReset::new(env)?))
        } else {
            Ok(Self::Pass(env))
        }
    }
}

impl<E> FireGate<E> {
    /// `true` if the reset takes the fire actions.
    pub fn is_fire(&self) -> bool {
        matches!(self, Self::Fire(_))
    }

    pub fn inner(&self) -> &E {
        match self {
            Self::Fire(env) => env.inner(),
            Self::Pass(env) => env,
        }
    }

    pub fn inner_mut(&mut self) -> &mut E {
        match self {
            Self::Fire(env) => env.inner_mut(),
            Self::Pass(env) => env,
        }
    }
}

impl<E: LifeCount> LifeCount for FireGate<E> {
    fn life_count(&self) -> usize {
        self.inner().life_count()
    }
}

impl<E: ActionMeanings> ActionMeanings for FireGate<E> {
    fn action_meanings(&self) -> Vec<String> {
        self.inner().action_meanings()
    }
}

impl<E> Env for FireGate<E>
where
    E: Env + ActionMeanings,
    E::Act: From<u8>,
{
    type Config = FireGateConfig<E::Config>;
    type Obs = E::Obs;
    type Act = E::Act;
    type Info = E::Info;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        Self::new(E::build(&config.inner, seed)?)
    }

    fn step(&mut self, a: &Self::Act) -> Result<Step<Self>> {
        let step: Step<Self> = match self {
            Self::Fire(env) => env.step(a)?.rewrap(),
            Self::Pass(env) => env.step(a)?.rewrap(),
        };
        Ok(step)
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        match self {
            Self::Fire(env) => env.reset(),
            Self::Pass(env) => env.reset(),
        }
    }

    fn render(&mut self) -> Result<()> {
        self.inner_mut().render()
    }

    fn close(&mut self) -> Result<()> {
        self.inner_mut().close()
    }
}

/// Configuration of [`DeepMind`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DeepMindConfig<C> {
    /// Configuration of the base environment.
    pub base: C,

    /// The maximum number of no-op actions after reset.
    pub noop_max: usize,

    /// The number of times an action is repeated.
    pub skip: usize,
}

impl<C: Default> Default for DeepMindConfig<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C> DeepMindConfig<C> {
    pub fn new(base: C) -> Self {
        Self {
            base,
            noop_max: 30,
            skip: 4,
        }
    }

    /// Sets the maximum number of no-op actions.
    pub fn noop_max(mut self, v: usize) -> Self {
        self.noop_max = v;
        self
    }

    /// Sets the number of repeats.
    pub fn skip(mut self, v: usize) -> Self {
        self.skip = v;
        self
    }
}

/// The chain of wrappers composed by [`DeepMind`], innermost last.
pub type DeepMindChain<E> = RewardSign<FireGate<MaxAndSkip<NoOpReset<EpisodicLife<E>>>>>;

/// A base environment wrapped with the DeepMind Atari preprocessing.
///
/// Wrapping order, from the inside:
/// [`EpisodicLife`], [`NoOpReset`], [`MaxAndSkip`], [`FireReset`] (only if the
/// base environment has a `FIRE` action), and [`RewardSign`].
pub struct DeepMind<E>
where
    E: Env + LifeCount + ActionMeanings,
    E::Act: From<u8>,
{
    env: DeepMindChain<E>,
}

impl<E> DeepMind<E>
where
    E: Env + LifeCount + ActionMeanings,
    E::Act: From<u8>,
    E::Obs: MaxPool,
{
    /// Wraps `env`. `seed` seeds the number of no-ops taken on reset.
    pub fn new(env: E, noop_max: usize, skip: usize, seed: u64) -> Result<Self> {
        let env = EpisodicLife::new(env);
        let env = NoOpReset::new(env, noop_max, seed)?;
        let env = MaxAndSkip::new(env, skip)?;
        let env = FireGate::new(env)?;
        info!(
            "DeepMind preprocessing: noop_max = {}, skip = {}, fire reset = {}",
            noop_max,
            skip,
            env.is_fire()
        );
        let env = RewardSign::new(env);
        Ok(Self { env })
    }
}

impl<E> DeepMind<E>
where
    E: Env + LifeCount + ActionMeanings,
    E::Act: From<u8>,
{
    /// `true` if [`FireReset`] is part of the chain.
    pub fn has_fire_reset(&self) -> bool {
        self.env.inner().is_fire()
    }

    /// Returns the chain of wrappers.
    pub fn chain(&self) -> &DeepMindChain<E> {
        &self.env
    }

    /// Returns the innermost wrapper.
    pub fn episodic_life(&self) -> &EpisodicLife<E> {
        self.env.inner().inner().inner().inner()
    }

    /// Returns the base environment.
    pub fn base(&self) -> &E {
        self.episodic_life().inner()
    }
}

impl<E> LifeCount for DeepMind<E>
where
    E: Env + LifeCount + ActionMeanings,
    E::Act: From<u8>,
{
    fn life_count(&self) -> usize {
        self.base().life_count()
    }
}

impl<E> ActionMeanings for DeepMind<E>
where
    E: Env + LifeCount + ActionMeanings,
    E::Act: From<u8>,
{
    fn action_meanings(&self) -> Vec<String> {
        self.base().action_meanings()
    }
}

impl<E> Env for DeepMind<E>
where
    E: Env + LifeCount + ActionMeanings,
    E::Act: From<u8>,
    E::Obs: MaxPool,
{
    type Config = DeepMindConfig<E::Config>;
    type Obs = E::Obs;
    type Act = E::Act;
    type Info = E::Info;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let env = E::build(&config.base, seed)?;
        Self::new(env, config.noop_max, config.skip, seed as u64)
    }

    fn step(&mut self, a: &Self::Act) -> Result<Step<Self>> {
        trace!("DeepMind::step()");
        Ok(self.env.step(a)?.rewrap())
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        trace!("DeepMind::reset()");
        self.env.reset()
    }

    fn render(&mut self) -> Result<()> {
        self.env.render()
    }

    fn close(&mut self) -> Result<()> {
        self.env.close()
    }
}

/// Wraps `env` with the DeepMind preprocessing, `noop_max = 30` and `skip = 4`.
pub fn wrap_deepmind<E>(env: E, seed: u64) -> Result<DeepMind<E>>
where
    E: Env + LifeCount + ActionMeanings,
    E::Act: From<u8>,
    E::Obs: MaxPool,
{
    DeepMind::new(env, 30, 4, seed)
}
