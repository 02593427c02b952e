//! Key-value records of evaluation results.
//!
//! ```rust
//! use rlcourse_core::record::{Record, RecordValue};
//!
//! let mut record = Record::from_scalar("Episode return", 2.0);
//! record.insert("Episode returns", RecordValue::Array1(vec![1.0, 2.0, 3.0]));
//! assert_eq!(record.get_scalar("Episode return").unwrap(), 2.0);
//! ```
mod base;
pub use base::{Record, RecordValue};
