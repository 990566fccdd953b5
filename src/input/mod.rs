//! Input tracking
//!
//! The showcases are ambient decorations, so the only input is the cursor
//! position the particles background keeps an eye on.

mod pointer;

pub use pointer::PointerTracker;
