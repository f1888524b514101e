//! shortkit - small convenience utilities under one namespace.
//!
//! Every operation is re-exported flat from [`shortkit_timing`] and
//! [`shortkit_util`]:
//!
//! - timing: [`debounce`], [`throttle`], [`TimerQueue`], [`RateLimit`]
//! - structure: [`deep_merge`], [`clone`], [`kind`]
//! - type checks, object, array, string, number, date and composition helpers
//!
//! ```
//! use serde_json::json;
//!
//! let mut settings = json!({"theme": {"dark": false}, "plugins": ["a"]});
//! shortkit::deep_merge(&mut settings, &[json!({"theme": {"accent": "teal"}, "plugins": []})]);
//! assert_eq!(settings, json!({"theme": {"dark": false, "accent": "teal"}, "plugins": []}));
//! assert!(shortkit::is_object(&settings["theme"]));
//! assert_eq!(shortkit::kebab_case("fontSize"), "font-size");
//! ```

pub use shortkit_timing::{
    debounce, throttle, Clock, ConfigError, Debounced, ManualClock, RateLimit, RateLimited,
    RateMode, Scheduler, SystemClock, Task, Throttled, TimerId, TimerQueue,
};

pub use shortkit_util::arrays::{chunk, flatten, remove_at, remove_value, shuffle, unique};
pub use shortkit_util::dates::{add_days, diff_days, now_millis};
pub use shortkit_util::functional::{compose, pipe};
pub use shortkit_util::json_kind::{
    is_array, is_boolean, is_defined, is_null, is_num, is_object, is_string, is_undefined,
};
pub use shortkit_util::json_object::{
    entries, extend, has_own, is_empty, is_empty_object, keys, values,
};
pub use shortkit_util::numbers::{average, clamp, is_even, is_odd, rand_int, round, sum};
pub use shortkit_util::strings::{camel_case, capitalize, kebab_case, slugify, truncate};
pub use shortkit_util::{clone, deep_merge, kind, ArrayError, Kind};
