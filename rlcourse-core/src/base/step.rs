//! Environment step.
use super::Env;

/// Additional information to `Obs` and `Act`.
pub trait Info {}

impl Info for () {}

/// Represents an action, observation and reward tuple `(a_t, o_t+1, r_t)`
/// with some additional information.
///
/// An environment emits [`Step`] object at every interaction steps.
pub struct Step<E: Env> {
    /// Action.
    pub act: E::Act,

    /// Observation.
    pub obs: E::Obs,

    /// Reward.
    pub reward: f32,

    /// Flag denoting if episode is done.
    pub is_done: bool,

    /// Information defined by user.
    pub info: E::Info,
}

impl<E: Env> Step<E> {
    /// Constructs a [`Step`] object.
    pub fn new(obs: E::Obs, act: E::Act, reward: f32, is_done: bool, info: E::Info) -> Self {
        Step {
            act,
            obs,
            reward,
            is_done,
            info,
        }
    }

    #[inline]
    /// Terminated or truncated.
    pub fn is_done(&self) -> bool {
        self.is_done
    }

    /// Re-tags the step as a step of `F`.
    ///
    /// Used by wrappers, which share observation, action and information
    /// types with the environment they wrap.
    pub fn rewrap<F>(self) -> Step<F>
    where
        F: Env<Obs = E::Obs, Act = E::Act, Info = E::Info>,
    {
        Step {
            act: self.act,
            obs: self.obs,
            reward: self.reward,
            is_done: self.is_done,
            info: self.info,
        }
    }
}
