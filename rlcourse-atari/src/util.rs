//! Utilities.
use crate::{ActionMeanings, AtariAct};
use anyhow::Result;
use fastrand::Rng;
use rlcourse_core::{error::RlcError, Env, Policy};

/// A policy taking uniformly random actions.
pub struct RandomPolicy {
    n_acts: u8,
    rng: Rng,
}

impl RandomPolicy {
    /// Constructs a random policy over `n_acts` actions.
    pub fn new(n_acts: u8, seed: u64) -> Result<Self> {
        if n_acts == 0 {
            return Err(RlcError::NonPositiveParameter("n_acts").into());
        }
        Ok(Self {
            n_acts,
            rng: Rng::with_seed(seed),
        })
    }

    /// Constructs a random policy over the action set of `env`.
    pub fn for_env<E: ActionMeanings>(env: &E, seed: u64) -> Result<Self> {
        let found = env.action_meanings().len();
        let n_acts = u8::try_from(found).map_err(|_| RlcError::TooManyActions {
            max: u8::MAX as usize,
            found,
        })?;
        Self::new(n_acts, seed)
    }
}

impl<E> Policy<E> for RandomPolicy
where
    E: Env<Act = AtariAct>,
{
    fn compute_action(&mut self, _obs: &E::Obs) -> AtariAct {
        self.rng.u8(..self.n_acts).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ActionTable(usize);

    impl ActionMeanings for ActionTable {
        fn action_meanings(&self) -> Vec<String> {
            vec!["NOOP".to_string(); self.0]
        }
    }

    #[test]
    fn test_for_env_action_count() -> Result<()> {
        assert_eq!(RandomPolicy::for_env(&ActionTable(18), 0)?.n_acts, 18);
        assert_eq!(RandomPolicy::for_env(&ActionTable(255), 0)?.n_acts, 255);
        Ok(())
    }

    #[test]
    fn test_for_env_too_many_actions() {
        let err = RandomPolicy::for_env(&ActionTable(256), 0).err().unwrap();
        assert_eq!(
            err.downcast_ref::<RlcError>(),
            Some(&RlcError::TooManyActions {
                max: 255,
                found: 256
            })
        );
    }

    #[test]
    fn test_no_actions() {
        let err = RandomPolicy::for_env(&ActionTable(0), 0).err().unwrap();
        assert_eq!(
            err.downcast_ref::<RlcError>(),
            Some(&RlcError::NonPositiveParameter("n_acts"))
        );
        assert!(RandomPolicy::new(0, 0).is_err());
    }
}
