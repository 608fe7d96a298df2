//! Observation log and the statistics derived from it.
//!
//! ## Submodules
//!
//! - [`value`]: Parsing raw input into observations and formatting them back
//! - [`log`]: The chronological [`ValueLog`] for a session
//! - [`stats`]: Mean, tiers, row classes and alerts ([`Stats`], [`Thresholds`])
//!
//! ## Data Flow
//!
//! ```text
//! raw text ("1.50")
//!        │
//!        ▼
//! value::parse_observation()
//!        │
//!        ▼
//! ValueLog::append()
//!        │
//!        └──▶ Stats::compute() (full recompute over the log)
//! ```

pub mod log;
pub mod stats;
pub mod value;

pub use log::ValueLog;
pub use stats::{evaluate_alert, mean, Alert, RowClass, Stats, Thresholds, Tier};
pub use value::{format_mean, format_value, parse_observation};
