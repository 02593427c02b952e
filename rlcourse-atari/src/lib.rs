//! Atari preprocessing wrappers as in DeepMind's DQN.
//!
//! This crate reproduces the preprocessing of
//! [`atari_wrappers.py`](https://github.com/openai/baselines/blob/master/baselines/common/atari_wrappers.py)
//! as a chain of environment wrappers:
//!
//! * [`EpisodicLife`] makes the loss of a life the end of an episode, while
//!   the underlying game is reset only on true game over.
//! * [`NoOpReset`] takes a random number of no-op actions after reset.
//! * [`MaxAndSkip`] repeats an action for several frames, returning the
//!   summed reward and the max-pooled last two frames.
//! * [`FireReset`] presses `FIRE` after reset, for games that wait for it.
//! * [`RewardSign`] clips rewards to their sign.
//!
//! [`wrap_deepmind`] composes them in this order around a base environment.
//! The base environment provides its number of lives ([`LifeCount`]) and
//! the names of its actions ([`ActionMeanings`]).
//!
//! ```no_run
//! use anyhow::Result;
//! use rlcourse_atari::{
//!     util::{test::{ScriptedEnv, ScriptedEnvConfig, Transition}, RandomPolicy},
//!     wrap_deepmind,
//! };
//! use rlcourse_core::{util::evaluate_agent, Env as _};
//!
//! fn main() -> Result<()> {
//!     let config = ScriptedEnvConfig::new(&["NOOP", "FIRE", "UP", "DOWN"])
//!         .episode(vec![Transition::new(0, 1.0, 1, false), Transition::new(1, 1.0, 1, true)]);
//!     let mut env = wrap_deepmind(ScriptedEnv::build(&config, 0)?, 42)?;
//!     let mut policy = RandomPolicy::new(4, 42)?;
//!     let r = evaluate_agent(&mut policy, &mut env, 5, false)?;
//!     println!("Mean return: {}", r);
//!     Ok(())
//! }
//! ```
mod act;
mod capability;
mod obs;
mod pipeline;
pub mod util;
mod wrapper;
pub use act::{AtariAct, AtariAction};
pub use capability::{ActionMeanings, LifeCount};
pub use obs::{Frame, MaxPool};
pub use pipeline::{
    wrap_deepmind, DeepMind, DeepMindChain, DeepMindConfig, FireGate, FireGateConfig,
};
pub use wrapper::{
    EpisodicLife, EpisodicLifeConfig, FireReset, FireResetConfig, MaxAndSkip, MaxAndSkipConfig,
    NoOpReset, NoOpResetConfig, RewardSign, RewardSignConfig,
};
