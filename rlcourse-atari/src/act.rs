//! Actions of Atari-like environments.
use num_traits::FromPrimitive;
use rlcourse_core::Act;
use strum::IntoEnumIterator;

/// The full action set of the Arcade Learning Environment.
///
/// The display name of each variant is the action meaning reported by ALE,
/// e.g., `NOOP` or `FIRE`.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    num_derive::FromPrimitive,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[repr(u8)]
pub enum AtariAction {
    #[strum(serialize = "NOOP")]
    Noop = 0,
    #[strum(serialize = "FIRE")]
    Fire = 1,
    #[strum(serialize = "UP")]
    Up = 2,
    #[strum(serialize = "RIGHT")]
    Right = 3,
    #[strum(serialize = "LEFT")]
    Left = 4,
    #[strum(serialize = "DOWN")]
    Down = 5,
    #[strum(serialize = "UPRIGHT")]
    UpRight = 6,
    #[strum(serialize = "UPLEFT")]
    UpLeft = 7,
    #[strum(serialize = "DOWNRIGHT")]
    DownRight = 8,
    #[strum(serialize = "DOWNLEFT")]
    DownLeft = 9,
    #[strum(serialize = "UPFIRE")]
    UpFire = 10,
    #[strum(serialize = "RIGHTFIRE")]
    RightFire = 11,
    #[strum(serialize = "LEFTFIRE")]
    LeftFire = 12,
    #[strum(serialize = "DOWNFIRE")]
    DownFire = 13,
    #[strum(serialize = "UPRIGHTFIRE")]
    UpRightFire = 14,
    #[strum(serialize = "UPLEFTFIRE")]
    UpLeftFire = 15,
    #[strum(serialize = "DOWNRIGHTFIRE")]
    DownRightFire = 16,
    #[strum(serialize = "DOWNLEFTFIRE")]
    DownLeftFire = 17,
}

impl AtariAction {
    /// Returns all 18 actions in index order.
    pub fn full_action_set() -> Vec<AtariAction> {
        AtariAction::iter().collect()
    }

    /// Returns the action-meaning table of the given action set.
    pub fn meanings(actions: &[AtariAction]) -> Vec<String> {
        actions.iter().map(|a| a.to_string()).collect()
    }
}

/// A discrete action, an index into the action set of the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtariAct {
    pub act: u8,
}

impl AtariAct {
    pub fn new(act: u8) -> Self {
        Self { act }
    }

    /// Interprets the index as an action of the full ALE action set.
    pub fn action(&self) -> Option<AtariAction> {
        AtariAction::from_u8(self.act)
    }
}

impl Act for AtariAct {}

impl From<u8> for AtariAct {
    fn from(act: u8) -> Self {
        Self { act }
    }
}

impl From<AtariAction> for AtariAct {
    fn from(action: AtariAction) -> Self {
        Self { act: action as u8 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_meanings() {
        let meanings = AtariAction::meanings(&AtariAction::full_action_set());
        assert_eq!(meanings.len(), 18);
        assert_eq!(meanings[0], "NOOP");
        assert_eq!(meanings[1], "FIRE");
        assert_eq!(meanings[17], "DOWNLEFTFIRE");
    }

    #[test]
    fn test_act_conversion() {
        assert_eq!(AtariAct::from(AtariAction::UpFire).act, 10);
        assert_eq!(AtariAct::new(1).action(), Some(AtariAction::Fire));
        assert_eq!(AtariAct::new(18).action(), None);
        assert_eq!(
            AtariAction::from_str("UPLEFT").unwrap(),
            AtariAction::UpLeft
        );
    }
}
