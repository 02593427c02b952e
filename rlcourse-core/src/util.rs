//! Utilities for interaction of agents and environments.
use crate::{
    error::RlcError,
    evaluator::{run_episode, EvaluatorConfig},
    Env, Policy,
};
use anyhow::Result;
use serde_yaml::{Mapping, Value};

/// Runs episodes with a policy and returns the mean episode return.
///
/// If `render` is `true`, only one episode is run; the environment is
/// rendered at every step, followed by a short wait, and closed afterwards.
/// Episodes run until the environment reports done.
pub fn evaluate_agent<E, P>(
    policy: &mut P,
    env: &mut E,
    num_episodes: usize,
    render: bool,
) -> Result<f32>
where
    E: Env,
    P: Policy<E>,
{
    let config = EvaluatorConfig::default()
        .n_episodes(num_episodes)
        .render(render);
    let n_episodes = config.effective_n_episodes();
    if n_episodes == 0 {
        return Err(RlcError::NoEpisodes.into());
    }

    let mut r_total = 0f32;
    for _ in 0..n_episodes {
        r_total += run_episode(env, policy, &config)?;
    }

    if render {
        env.close()?;
    }

    Ok(r_total / n_episodes as f32)
}

/// Formats a mapping as block-style YAML, omitting entries with null values.
pub fn pretty_format(result: &Mapping) -> Result<String> {
    let out: Mapping = result
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    let s = serde_yaml::to_string(&Value::Mapping(out))?;
    Ok(s.trim_start_matches("---\n").to_string())
}

/// Prints a mapping as YAML, omitting entries with null values.
pub fn pretty_print(result: &Mapping) -> Result<()> {
    println!("{}", pretty_format(result)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy::{DummyEnv, DummyEnvConfig, DummyPolicy};

    fn env(episode_len: usize) -> DummyEnv {
        let config = DummyEnvConfig {
            episode_returns: vec![1.0, 2.0, 3.0],
            episode_len: Some(episode_len),
        };
        DummyEnv::build(&config, 0).unwrap()
    }

    #[test]
    fn test_evaluate_agent_mean() -> Result<()> {
        let mut env = env(3);
        let mut policy = DummyPolicy::default();
        let r = evaluate_agent(&mut policy, &mut env, 3, false)?;
        assert_eq!(r, 2.0);
        assert!(!env.closed);
        // The agent also sees the observation of the terminal step.
        assert_eq!(policy.n_calls, 3 * (3 + 1));
        Ok(())
    }

    #[test]
    fn test_evaluate_agent_render() -> Result<()> {
        let mut env = env(2);
        let r = evaluate_agent(&mut DummyPolicy::default(), &mut env, 3, true)?;
        assert_eq!(r, 1.0);
        assert_eq!(env.n_renders, 2);
        assert!(env.closed);
        Ok(())
    }

    #[test]
    fn test_pretty_format_drops_nulls() -> Result<()> {
        let m: Mapping = serde_yaml::from_str("a: 1\nb: ~\nc: text")?;
        let s = pretty_format(&m)?;

        assert!(s.contains("a: 1"));
        assert!(s.contains("c: text"));
        assert!(!s.contains("b:"));
        assert!(!s.starts_with("---"));
        Ok(())
    }
}
