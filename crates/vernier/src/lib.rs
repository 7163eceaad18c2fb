//! # VERNIER
//!
//! Windowed page indicator engine: pure layout math for a strip of
//! page dots, plus the press recognition and offset animation an
//! interactive indicator needs.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  vernier_core   pure engine: region → scale + offset     │
//! │  vernier_input  press/click state machine                │
//! │  vernier        strip controller: selection, animation,  │
//! │                 direction — the rendering boundary       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! A rendering layer drives [`IndicatorStrip`] with selection changes
//! and frame ticks, and draws whatever [`RenderPlan`] it gets back.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod strip;

pub use animation::{Animation, Easing};
pub use strip::{Direction, IndicatorStrip};

pub use vernier_core::{
    ConfigError, ConfigResult, DotRender, IndicatorConfig, LayoutMode, Region, RenderPlan,
};
pub use vernier_input::{Point, PressConfig, PressPhase, PressRecognizer, PressResponse, Rect};
