//! Loss of a life as the end of an episode.
use crate::{capability::forward_capabilities, LifeCount};
use anyhow::Result;
use log::trace;
use rlcourse_core::{Env, Step};
use serde::{Deserialize, Serialize};

/// Configuration of [`EpisodicLife`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct EpisodicLifeConfig<C> {
    pub inner: C,
}

/// Makes end-of-life the end of an episode, but resets the inner environment
/// only on true game over.
///
/// This is done by DeepMind for DQN since it helps value estimation. All
/// states of the game remain reachable, because the inner environment keeps
/// running across lost lives.
pub struct EpisodicLife<E> {
    env: E,

    // Lives observed after the last step or reset
    lives: usize,

    // If the inner environment reported done at the last step
    was_real_done: bool,

    // If the last reset invoked the reset of the inner environment
    was_real_reset: bool,
}

impl<E> EpisodicLife<E>
where
    E: Env + LifeCount,
    E::Act: From<u8>,
{
    pub fn new(env: E) -> Self {
        Self {
            env,
            lives: 0,
            was_real_done: true,
            was_real_reset: false,
        }
    }
}

impl<E> EpisodicLife<E> {
    /// Lives recorded at the last step or reset.
    pub fn lives(&self) -> usize {
        self.lives
    }

    /// `true` if the inner environment itself reported done at the last step.
    pub fn was_real_done(&self) -> bool {
        self.was_real_done
    }

    /// `true` if the last reset was a reset of the inner environment,
    /// `false` if it was a no-op step past a lost life.
    pub fn was_real_reset(&self) -> bool {
        self.was_real_reset
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

forward_capabilities!(EpisodicLife);

impl<E> Env for EpisodicLife<E>
where
    E: Env + LifeCount,
    E::Act: From<u8>,
{
    type Config = EpisodicLifeConfig<E::Config>;
    type Obs = E::Obs;
    type Act = E::Act;
    type Info = E::Info;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        Ok(Self::new(E::build(&config.inner, seed)?))
    }

    fn step(&mut self, a: &Self::Act) -> Result<Step<Self>> {
        let mut step = self.env.step(a)?;
        self.was_real_done = step.is_done;

        // Lives can stay at zero for a few frames in some games (e.g., Qbert),
        // so a life loss counts only while lives remain, and the true game
        // over is left to the inner environment.
        let lives = self.env.life_count();
        if lives < self.lives && lives > 0 {
            trace!("EpisodicLife: life lost ({} -> {})", self.lives, lives);
            step.is_done = true;
        }
        self.lives = lives;

        Ok(step.rewrap())
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        let obs = if self.was_real_done {
            trace!("EpisodicLife::reset(): real reset");
            self.was_real_reset = true;
            self.env.reset()?
        } else {
            // No-op step to advance from the lost-life state
            trace!("EpisodicLife::reset(): no-op step");
            self.was_real_reset = false;
            self.env.step(&E::Act::from(0u8))?.obs
        };
        self.lives = self.env.life_count();
        Ok(obs)
    }

    fn render(&mut self) -> Result<()> {
        self.env.render()
    }

    fn close(&mut self) -> Result<()> {
        self.env.close()
    }
}
