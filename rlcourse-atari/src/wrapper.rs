//! Environment wrappers of the DeepMind Atari preprocessing.
//!
//! Each wrapper owns an inner environment and implements [`Env`] itself with
//! the same observation, action and information types.
//!
//! [`Env`]: rlcourse_core::Env
mod episodic_life;
mod fire_reset;
mod max_and_skip;
mod noop_reset;
mod reward_sign;
pub use episodic_life::{EpisodicLife, EpisodicLifeConfig};
pub use fire_reset::{FireReset, FireResetConfig};
pub use max_and_skip::{MaxAndSkip, MaxAndSkipConfig};
pub use noop_reset::{NoOpReset, NoOpResetConfig};
pub use reward_sign::{RewardSign, RewardSignConfig};
