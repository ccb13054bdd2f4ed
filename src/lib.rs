//! Strictly Referee - scripted Santorini matches
//!
//! This library loads a match script (a god assignment plus a list of
//! actions), plays it through the [`strictly_santorini`] engine and reports
//! what the engine accepted or refused at every step.
//!
//! # Architecture
//!
//! - **Config**: TOML match scripts ([`ScriptConfig`])
//! - **Referee**: submits the scripted actions and builds a [`MatchReport`]
//!
//! # Example
//!
//! ```
//! use strictly_referee::{Referee, ScriptConfig};
//!
//! let script = ScriptConfig::parse(
//!     r#"
//!     god_a = "Apollo"
//!     god_b = "Pan"
//!
//!     [[actions]]
//!     action = "placeWorker"
//!     x = 0
//!     y = 0
//!     "#,
//! )
//! .unwrap();
//!
//! let report = Referee::new(&script).run();
//! assert_eq!(report.rejections(), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod referee;

pub use config::{ScriptConfig, ScriptError};
pub use referee::{MatchReport, Referee, StepOutcome, StepRecord, render_text};
