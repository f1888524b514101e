//! shortkit-util - structural utilities for JSON-like values.
//!
//! Values are [`serde_json::Value`] trees. Every value is classified into a
//! [`Kind`] (scalar, sequence or mapping) and the recursive operations
//! dispatch on that classification.
//!
//! # Overview
//!
//! - [`deep_merge`] - recursively merges mapping sources into a target in place
//! - [`clone`] - fully independent deep copy
//! - [`json_kind`] - kind classification and type predicates
//! - [`json_object`], [`arrays`], [`strings`], [`numbers`], [`dates`],
//!   [`functional`] - small data helpers
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use shortkit_util::{clone, deep_merge};
//!
//! let mut config = json!({"server": {"port": 80}});
//! deep_merge(&mut config, &[json!({"server": {"host": "localhost"}})]);
//! assert_eq!(config, json!({"server": {"port": 80, "host": "localhost"}}));
//!
//! let copy = clone(&config);
//! assert_eq!(copy, config);
//! ```

pub mod arrays;
pub mod dates;
pub mod functional;
pub mod json_clone;
pub mod json_kind;
pub mod json_merge;
pub mod json_object;
pub mod numbers;
pub mod strings;

pub use arrays::ArrayError;
pub use json_clone::clone;
pub use json_kind::{kind, Kind};
pub use json_merge::deep_merge;
