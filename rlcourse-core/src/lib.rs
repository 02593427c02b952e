#![warn(missing_docs)]
//! Primitives shared by the RL course utilities.
//!
//! The crate defines the step/reset contract of an environment ([`Env`]),
//! the action-selection contract of an agent ([`Policy`]), the [`Step`] value
//! emitted at every interaction, and an evaluation loop running a policy over
//! an environment for a number of episodes ([`DefaultEvaluator`],
//! [`util::evaluate_agent`]).
//!
//! Environment wrappers implement [`Env`] themselves while owning an inner
//! environment, so a chain of wrappers is interchangeable with the
//! environment it decorates.
pub mod config;
pub mod error;
pub mod record;
pub mod util;

mod base;
pub use base::{Act, Env, Info, Obs, Policy, Step};

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator, EvaluatorConfig};

#[cfg(test)]
mod dummy;
