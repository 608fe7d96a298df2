//! # risewatch
//!
//! A terminal app for logging successive round outcomes ("rise times") and
//! watching their running mean, a trend chart, simple rule-based alerts and
//! a colour-coded history, with CSV export.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       Application                         │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌────────┐ │
//! │  │ events  │───▶│   app    │───▶│   ui    │───▶│Terminal│ │
//! │  │ (keys)  │    │ (session)│    │(render) │    │        │ │
//! │  └─────────┘    └────┬─────┘    └─────────┘    └────────┘ │
//! │                      │                                    │
//! │                      ▼                                    │
//! │                 ┌──────────┐    ┌──────────┐              │
//! │                 │   data   │───▶│  export  │──▶ CSV/JSON  │
//! │                 │(log+stats)    └──────────┘              │
//! │                 └──────────┘                              │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`data`]**: The [`ValueLog`] of observations and the pure statistics
//!   over it ([`Stats`], [`Tier`], [`RowClass`], [`Alert`])
//! - **[`app`]**: Session state owned by the [`App`] and mutated by handlers
//! - **[`events`]**: Keyboard and mouse handling
//! - **[`ui`]**: Rendering with ratatui
//! - **[`export`]**: CSV export and JSON summaries
//! - **[`config`]**: Layered [`Settings`]
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Interactive session
//! risewatch
//!
//! # Print stats for some values without opening the TUI
//! risewatch --values 1.2,3.4,1.1 --summary
//! ```
//!
//! ### As a library
//!
//! ```
//! use risewatch::{Alert, Stats, Thresholds, Tier, ValueLog};
//!
//! let mut log = ValueLog::new();
//! for raw in ["1.0", "1.2", "1.9"] {
//!     log.append_input(raw).unwrap();
//! }
//!
//! let stats = Stats::compute(&log, &Thresholds::default()).unwrap();
//! assert_eq!(stats.tier, Tier::Low);
//! assert!(matches!(stats.alert, Some(Alert::ConsecutiveLow { .. })));
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod export;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use config::Settings;
pub use data::{Alert, RowClass, Stats, Thresholds, Tier, ValueLog};
pub use error::{Error, Result};
