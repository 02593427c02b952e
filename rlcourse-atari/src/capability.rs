//! Capabilities of the base environment consulted by wrappers.
//!
//! Wrappers forward both capabilities of the environment they wrap, so the
//! values seen at any stage of a chain are those of the base environment.
use anyhow::Result;
use rlcourse_core::error::RlcError;

/// Access to the remaining lives of games with multiple lives.
pub trait LifeCount {
    /// Returns the current number of lives.
    fn life_count(&self) -> usize;
}

/// Access to the names of the discrete actions of an environment.
pub trait ActionMeanings {
    /// Returns the meaning of each action, in action-index order.
    fn action_meanings(&self) -> Vec<String>;
}

/// Fails unless `meanings[index] == expected`.
pub(crate) fn expect_meaning(meanings: &[String], index: usize, expected: &str) -> Result<()> {
    match meanings.get(index) {
        Some(m) if m == expected => Ok(()),
        found => Err(RlcError::ActionMeaningMismatch {
            index,
            expected: expected.to_string(),
            found: found.cloned(),
        }
        .into()),
    }
}

/// Implements [`LifeCount`] and [`ActionMeanings`] for a wrapper holding its
/// inner environment in the field `env`.
///
/// `forward_capabilities!(Wrapper: Bound)` is for wrappers whose type
/// parameter carries a bound on the struct itself.
macro_rules! forward_capabilities {
    ($wrapper:ident) => {
        impl<E: $crate::LifeCount> $crate::LifeCount for $wrapper<E> {
            fn life_count(&self) -> usize {
                self.env.life_count()
            }
        }

        impl<E: $crate::ActionMeanings> $crate::ActionMeanings for $wrapper<E> {
            fn action_meanings(&self) -> Vec<String> {
                self.env.action_meanings()
            }
        }
    };
    ($wrapper:ident: $bound:ident) => {
        impl<E: $bound + $crate::LifeCount> $crate::LifeCount for $wrapper<E> {
            fn life_count(&self) -> usize {
                self.env.life_count()
            }
        }

        impl<E: $bound + $crate::ActionMeanings> $crate::ActionMeanings for $wrapper<E> {
            fn action_meanings(&self) -> Vec<String> {
                self.env.action_meanings()
            }
        }
    };
}
pub(crate) use forward_capabilities;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_meaning() {
        let meanings = vec!["NOOP".to_string(), "FIRE".to_string()];
        assert!(expect_meaning(&meanings, 0, "NOOP").is_ok());

        let err = expect_meaning(&meanings, 0, "FIRE").unwrap_err();
        assert_eq!(
            err.downcast_ref::<RlcError>(),
            Some(&RlcError::ActionMeaningMismatch {
                index: 0,
                expected: "FIRE".to_string(),
                found: Some("NOOP".to_string()),
            })
        );

        let err = expect_meaning(&meanings, 2, "UP").unwrap_err();
        assert!(err.to_string().contains("found None"));
    }
}
