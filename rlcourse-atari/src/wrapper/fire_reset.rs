//! Fixed action sequence on reset.
use crate::{
    capability::{expect_meaning, forward_capabilities},
    ActionMeanings,
};
use anyhow::Result;
use log::{debug, trace};
use rlcourse_core::{error::RlcError, Env, Step};
use serde::{Deserialize, Serialize};

/// Configuration of [`FireReset`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FireResetConfig<C> {
    pub inner: C,
}

/// Takes actions 1 (`FIRE`) and 2 on reset, for games that stay frozen until
/// the player fires.
///
/// Rewards and termination reported by these two steps are discarded.
pub struct FireReset<E> {
    env: E,
}

impl<E> FireReset<E>
where
    E: Env + ActionMeanings,
    E::Act: From<u8>,
{
    /// Wraps `env`, which must have `FIRE` at index 1 and at least 3 actions.
    pub fn new(env: E) -> Result<Self> {
        let meanings = env.action_meanings();
        expect_meaning(&meanings, 1, "FIRE")?;
        if meanings.len() < 3 {
            return Err(RlcError::TooFewActions {
                required: 3,
                found: meanings.len(),
            }
            .into());
        }
        Ok(Self { env })
    }
}

impl<E> FireReset<E> {
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

forward_capabilities!(FireReset);

impl<E> Env for FireReset<E>
where
    E: Env + ActionMeanings,
    E::Act: From<u8>,
{
    type Config = FireResetConfig<E::Config>;
    type Obs = E::Obs;
    type Act = E::Act;
    type Info = E::Info;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        Self::new(E::build(&config.inner, seed)?)
    }

    fn step(&mut self, a: &Self::Act) -> Result<Step<Self>> {
        Ok(self.env.step(a)?.rewrap())
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        trace!("FireReset::reset()");
        self.env.reset()?;
        let step1 = self.env.step(&E::Act::from(1u8))?;
        let step2 = self.env.step(&E::Act::from(2u8))?;
        if step1.is_done || step2.is_done {
            debug!("FireReset: episode ended during the reset actions");
        }
        Ok(step2.obs)
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
    use crate::AtariAct;

    fn base(meanings: &[&str], episode: Vec<Transition>) -> ScriptedEnv {
        let config = ScriptedEnvConfig::new(meanings).episode(episode);
        ScriptedEnv::build(&config, 0).unwrap()
    }

    #[test]
    fn test_reset_fires() -> Result<()> {
        let episode = vec![
            Transition::new(1, 1.0, 1, false),
            Transition::new(2, 1.0, 1, false),
            Transition::new(3, 1.0, 1, false),
        ];
        let mut env = FireReset::new(base(&["NOOP", "FIRE", "UP"], episode))?;
        let obs = env.reset()?;

        assert_eq!(obs, Transition::new(2, 0.0, 1, false).frame);
        assert_eq!(env.inner().n_resets(), 1);
        assert_eq!(env.inner().actions(), &[1, 2]);

        let step = env.step(&AtariAct::new(0))?;
        assert_eq!(step.obs, Transition::new(3, 0.0, 1, false).frame);
        Ok(())
    }

    #[test]
    fn test_termination_during_reset_is_ignored() -> Result<()> {
        let episode = vec![
            Transition::new(1, 7.0, 1, true),
            Transition::new(2, 0.0, 1, true),
        ];
        let mut env = FireReset::new(base(&["NOOP", "FIRE", "UP"], episode))?;
        let obs = env.reset()?;
        assert_eq!(obs, Transition::new(2, 0.0, 1, false).frame);
        Ok(())
    }

    #[test]
    fn test_construction_errors() {
        let episode = || vec![Transition::new(1, 0.0, 1, false)];

        let err = FireReset::new(base(&["NOOP", "UP", "FIRE"], episode()))
            .err()
            .unwrap();
        assert!(matches!(
            err.downcast_ref::<RlcError>(),
            Some(RlcError::ActionMeaningMismatch { index: 1, .. })
        ));

        let err = FireReset::new(base(&["NOOP", "FIRE"], episode()))
            .err()
            .unwrap();
        assert_eq!(
            err.downcast_ref::<RlcError>(),
            Some(&RlcError::TooFewActions {
                required: 3,
                found: 2
            })
        );
    }
}
