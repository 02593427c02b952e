//! Frame skipping with max-pooling over the last two frames.
use crate::{capability::forward_capabilities, MaxPool};
use anyhow::Result;
use log::trace;
use rlcourse_core::{error::RlcError, Env, Step};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Configuration of [`MaxAndSkip`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MaxAndSkipConfig<C> {
    pub inner: C,

    /// The number of times an action is repeated.
    pub skip: usize,
}

impl<C: Default> Default for MaxAndSkipConfig<C> {
    fn default() -> Self {
        Self {
            inner: C::default(),
            skip: 4,
        }
    }
}

impl<C> MaxAndSkipConfig<C> {
    pub fn new(inner: C) -> Self {
        Self { inner, skip: 4 }
    }

    /// Sets the number of repeats.
    pub fn skip(mut self, v: usize) -> Self {
        self.skip = v;
        self
    }
}

/// Repeats an action `skip` times and returns the max-pooled last two frames
/// with the summed reward.
pub struct MaxAndSkip<E: Env> {
    env: E,
    skip: usize,

    // Raw observations of the current step call, at most the last two
    obs_buffer: VecDeque<E::Obs>,
}

impl<E: Env> MaxAndSkip<E> {
    pub fn new(env: E, skip: usize) -> Result<Self> {
        if skip == 0 {
            return Err(RlcError::NonPositiveParameter("skip").into());
        }
        Ok(Self {
            env,
            skip,
            obs_buffer: VecDeque::with_capacity(2),
        })
    }

    pub fn skip(&self) -> usize {
        self.skip
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

    fn push_obs(&mut self, obs: E::Obs) {
        if self.obs_buffer.len() == 2 {
            self.obs_buffer.pop_front();
        }
        self.obs_buffer.push_back(obs);
    }
}

forward_capabilities!(MaxAndSkip: Env);

impl<E> Env for MaxAndSkip<E>
where
    E: Env,
    E::Obs: MaxPool,
{
    type Config = MaxAndSkipConfig<E::Config>;
    type Obs = E::Obs;
    type Act = E::Act;
    type Info = E::Info;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        Self::new(E::build(&config.inner, seed)?, config.skip)
    }

    fn step(&mut self, a: &Self::Act) -> Result<Step<Self>> {
        self.obs_buffer.clear();

        let mut step = self.env.step(a)?;
        let mut total_reward = step.reward;
        let mut n_steps = 1;
        self.push_obs(step.obs.clone());

        while n_steps < self.skip && !step.is_done {
            step = self.env.step(a)?;
            total_reward += step.reward;
            n_steps += 1;
            self.push_obs(step.obs.clone());
        }
        trace!("MaxAndSkip: {} steps, reward = {}", n_steps, total_reward);

        if self.obs_buffer.len() == 2 {
            step.obs = self.obs_buffer[0].max_pool(&self.obs_buffer[1]);
        }
        step.reward = total_reward;

        Ok(step.rewrap())
    }

    /// Clears the frame buffer and returns the first observation of the inner
    /// environment as it is.
    fn reset(&mut self) -> Result<Self::Obs> {
        self.obs_buffer.clear();
        self.env.reset()
    }

    fn render(&mut self) -> Result<()> {
        self.env.render()
    }

    fn close(&mut self) -> Result<()> {
        self.env.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::{ScriptedEnv, ScriptedEnvConfig, Transition};
    use crate::{AtariAct, Frame};
    use ndarray::array;

    fn base(episode: Vec<Transition>) -> ScriptedEnv {
        let config = ScriptedEnvConfig::new(&["NOOP", "UP"]).episode(episode);
        ScriptedEnv::build(&config, 0).unwrap()
    }

    #[test]
    fn test_max_of_last_two_frames() -> Result<()> {
        let f1 = Frame::from(array![[1u8, 2]].into_dyn());
        let f2 = Frame::from(array![[3u8, 0]].into_dyn());
        let mut env = MaxAndSkip::new(
            base(vec![
                Transition::with_frame(f1, 1.0, 1, false),
                Transition::with_frame(f2, 2.0, 1, false),
            ]),
            2,
        )?;
        env.reset()?;
        let step = env.step(&AtariAct::new(1))?;

        assert_eq!(step.obs, Frame::from(array![[3u8, 2]].into_dyn()));
        assert_eq!(step.reward, 3.0);
        assert!(!step.is_done);
        Ok(())
    }

    #[test]
    fn test_repeats_action_skip_times() -> Result<()> {
        let episode = (1..=8)
            .map(|i| Transition::new(i, i as f32, 1, false))
            .collect();
        let mut env = MaxAndSkip::new(base(episode), 4)?;
        env.reset()?;
        let step = env.step(&AtariAct::new(1))?;

        assert_eq!(env.inner().actions(), &[1, 1, 1, 1]);
        assert_eq!(step.reward, 1.0 + 2.0 + 3.0 + 4.0);
        // Frames are increasing, so the pooled frame is the last one.
        assert_eq!(step.obs, Transition::new(4, 0.0, 1, false).frame);
        Ok(())
    }

    #[test]
    fn test_stops_early_on_done() -> Result<()> {
        let episode = vec![
            Transition::new(5, 1.0, 1, false),
            Transition::new(2, -3.0, 1, true),
            Transition::new(9, 100.0, 1, false),
        ];
        let mut env = MaxAndSkip::new(base(episode), 4)?;
        env.reset()?;
        let step = env.step(&AtariAct::new(1))?;

        assert_eq!(env.inner().actions().len(), 2);
        assert_eq!(step.reward, -2.0);
        assert!(step.is_done);
        assert_eq!(step.obs, Transition::new(5, 0.0, 1, false).frame);
        Ok(())
    }

    #[test]
    fn test_single_substep_returns_its_frame() -> Result<()> {
        let episode = vec![
            Transition::new(9, 0.0, 1, false),
            Transition::new(1, 0.0, 1, true),
        ];
        let mut env = MaxAndSkip::new(base(episode), 4)?;
        env.reset()?;
        env.step(&AtariAct::new(1))?;
        let step = env.step(&AtariAct::new(1))?;

        // The frame of the previous call does not take part in pooling.
        assert_eq!(step.obs, Transition::new(1, 0.0, 1, true).frame);
        Ok(())
    }

    #[test]
    fn test_reset_returns_raw_observation() -> Result<()> {
        let episode = || vec![Transition::new(1, 0.0, 1, false)];
        let mut env = MaxAndSkip::new(base(episode()), 4)?;
        assert_eq!(env.reset()?, ScriptedEnv::reset_frame());
        assert!(MaxAndSkip::new(base(episode()), 0).is_err());
        Ok(())
    }

    #[test]
    fn test_forwards_capabilities() -> Result<()> {
        use crate::{ActionMeanings, LifeCount};

        let config = ScriptedEnvConfig::new(&["NOOP", "UP"])
            .initial_lives(3)
            .episode(vec![Transition::new(1, 0.0, 3, false)]);
        let env = MaxAndSkip::new(ScriptedEnv::build(&config, 0)?, 4)?;

        assert_eq!(env.life_count(), 3);
        assert_eq!(env.action_meanings(), vec!["NOOP", "UP"]);
        Ok(())
    }

    #[test]
    fn test_nested_config_yaml() -> Result<()> {
        use crate::{EpisodicLifeConfig, NoOpResetConfig};

        type Config = MaxAndSkipConfig<NoOpResetConfig<EpisodicLifeConfig<String>>>;

        let life = EpisodicLifeConfig {
            inner: "breakout".to_string(),
        };
        let noops = NoOpResetConfig::new(life).noop_max(7);
        let config = MaxAndSkipConfig::new(noops).skip(2);
        let yaml = serde_yaml::to_string(&config)?;
        let config_: Config = serde_yaml::from_str(&yaml)?;

        assert_eq!(config, config_);
        assert_eq!(config_.inner.noop_max, 7);
        assert_eq!(config_.inner.inner.inner, "breakout");

        let default = Config::default();
        assert_eq!((default.skip, default.inner.noop_max), (4, 30));
        Ok(())
    }
}
