//! Environment.
use super::{Act, Info, Obs, Step};
use anyhow::Result;

/// Represents an environment, typically an MDP.
///
/// A wrapper owns exactly one inner environment and implements this trait
/// itself, which makes a chain of wrappers indistinguishable from a plain
/// environment for the caller.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Information in the [`Step`] object.
    type Info: Info;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Performes an environment step.
    ///
    /// Errors of the underlying simulator are propagated as they are.
    fn step(&mut self, a: &Self::Act) -> Result<Step<Self>>
    where
        Self: Sized;

    /// Resets the environment and returns the initial observation.
    fn reset(&mut self) -> Result<Self::Obs>;

    /// Renders the current state. Does nothing in the default implementation.
    fn render(&mut self) -> Result<()> {
        Ok(())
    }

    /// Releases resources held by the environment, e.g., a window.
    /// Does nothing in the default implementation.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
