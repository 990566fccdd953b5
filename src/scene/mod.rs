//! Scene composition
//!
//! The built-in showcase scenes, composed programmatically. The same scenes
//! ship as RON files under `scenes/`; the builders are the source of truth.

mod showcase;

pub use showcase::Showcase;
