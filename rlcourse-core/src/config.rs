//! Merging of user-defined configurations into default configurations.
//!
//! Configurations are plain YAML mappings. A merged configuration carries
//! `checked: true`, so merging it again is a no-op.
use crate::error::RlcError;
use anyhow::Result;
use serde_yaml::{Mapping, Value};

const CHECKED: &str = "checked";

fn key_name(k: &Value) -> String {
    match k.as_str() {
        Some(s) => s.to_string(),
        None => format!("{:?}", k),
    }
}

/// Merges the user-defined config `new` with the default config `old`.
///
/// Entries of `new` overwrite those of `old`. `old` itself is left untouched.
pub fn merge_config(new: Option<&Mapping>, old: &Mapping) -> Mapping {
    let mut config = old.clone();
    if let Some(new) = new {
        for (k, v) in new.iter() {
            config.insert(k.clone(), v.clone());
        }
    }
    config
}

/// Validates the keys of `user` against `default` and merges them.
///
/// A configuration already marked `checked: true` is returned as it is.
pub fn check_and_merge_config(user: &Mapping, default: &Mapping) -> Result<Mapping> {
    let checked = user
        .get(&Value::from(CHECKED))
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if checked {
        return Ok(user.clone());
    }

    for k in user.iter().map(|(k, _)| k) {
        if !default.contains_key(k) {
            return Err(RlcError::UnknownConfigKey {
                key: key_name(k),
                allowed: default.iter().map(|(k, _)| key_name(k)).collect(),
            }
            .into());
        }
    }

    let mut config = merge_config(Some(user), default);
    config.insert(Value::from(CHECKED), Value::Bool(true));
    Ok(config)
}
