//! # VERNIER Core
//!
//! Layout engine for windowed page indicators: a strip of N dots where
//! only a fixed-size window around the selection is rendered at full
//! size, edge dots shrink toward the window border, and a single strip
//! offset keeps the selection centered.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      LAYOUT PIPELINE                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  total + selection + config                                  │
//! │        ↓                                                     │
//! │  Escalation ──standard──▶ all dots, scale 1, offset 0        │
//! │        ↓ windowed                                            │
//! │  Region Classifier → Windowing Engine + Offset Calculator    │
//! │        ↓                                                     │
//! │  RenderPlan: (scale, in_window) per dot + shared offset      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The rendering layer (out of scope here) applies the scales and the
//! offset as transforms and animates selection changes.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod offset;
pub mod plan;
pub mod region;
pub mod window;

pub use config::IndicatorConfig;
pub use error::{ConfigError, ConfigResult};
pub use plan::{DotRender, LayoutMode, RenderPlan};
pub use region::Region;
