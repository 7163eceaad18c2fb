//! # VERNIER Input
//!
//! Press/click recognition for interactive elements.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                   PRESS STATE MACHINE                   │
//! ├─────────────────────────────────────────────────────────┤
//! │  Idle ──touch_down──▶ Pressing                          │
//! │  Pressing ──touch_up(inside, steady)──▶ click ──▶ Idle  │
//! │  Pressing ──touch_up(outside) / cancel──▶ Idle          │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The machine runs on the host UI event thread; gesture sequences are
//! fully ordered and never overlap per element.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod geometry;
pub mod press;

pub use geometry::{Point, Rect};
pub use press::{PressConfig, PressPhase, PressRecognizer, PressResponse};
