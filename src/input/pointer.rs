//! Ambient pointer tracking
//!
//! Records the cursor position over the viewport. No animator consumes it
//! yet; the particles background declares the hook so pointer parallax can
//! be wired in without touching the scene model.

/// Tracks the cursor position in window coordinates
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: Option<(f64, f64)>,
    window_size: (u32, u32),
}

impl PointerTracker {
    /// Create a tracker for a window of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: None,
            window_size: (width, height),
        }
    }

    /// Record a cursor move in window coordinates
    pub fn record(&mut self, x: f64, y: f64) {
        self.position = Some((x, y));
    }

    /// Update the window size the coordinates are normalized against
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Whether the cursor has entered the window yet
    pub fn has_position(&self) -> bool {
        self.position.is_some()
    }

    /// Cursor position normalized to [-1, 1] on both axes, Y up
    ///
    /// `None` until the first cursor event arrives.
    pub fn normalized(&self) -> Option<(f32, f32)> {
        let (x, y) = self.position?;
        let (w, h) = self.window_size;
        if w == 0 || h == 0 {
            return None;
        }
        Some((
            (x / w as f64 * 2.0 - 1.0) as f32,
            -(y / h as f64 * 2.0 - 1.0) as f32,
        ))
    }
}
