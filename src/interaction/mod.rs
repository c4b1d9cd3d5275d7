pub mod brush;
pub mod zoom;

pub use brush::{BrushState, PixelInterval};
pub use zoom::ZoomTransform;

use serde::{Deserialize, Serialize};

/// Originator tag threaded through every synchronization call.
///
/// Replaces ambient "current event" inspection: a handler receiving the tag of
/// its own replay target stores the derived state and skips domain logic, so
/// brush and zoom can update each other without feedback loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateSource {
    /// Direct user gesture on this control.
    Gesture,
    /// Replay issued by the brush handler onto the zoom control.
    BrushSync,
    /// Replay issued by the zoom handler onto the brush control.
    ZoomSync,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    BrushDragging,
    Panning,
}

/// Pointer/gesture lifecycle state exposed to host applications.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    cursor_x: f64,
    cursor_y: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            cursor_x: 0.0,
            cursor_y: 0.0,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn cursor(self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    pub fn on_brush_start(&mut self) {
        self.mode = InteractionMode::BrushDragging;
    }

    pub fn on_pan_start(&mut self) {
        self.mode = InteractionMode::Panning;
    }

    pub fn on_gesture_end(&mut self) {
        self.mode = InteractionMode::Idle;
    }
}
