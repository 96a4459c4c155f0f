//! Blinking banner text.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

/// Ticks an alert stays up after [`Alert::animate`].
pub const MAX_TICK: u32 = 120;

/// Ticks between blink toggles.
pub const ANIMATE_TICK: u32 = 20;

/// A short message that blinks for [`MAX_TICK`] frames, then hides.
#[derive(Debug, Clone, Default)]
pub struct Alert {
    text: String,
    current_tick: u32,
    is_visible: bool,
    shown: bool,
}

impl Alert {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the blink cycle with `text`.
    pub fn animate(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.is_visible = true;
        self.current_tick = 0;
        self.shown = true;
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        if self.is_visible && self.current_tick < MAX_TICK {
            if self.current_tick % ANIMATE_TICK == 0 {
                self.shown = !self.shown;
            }
            self.current_tick += 1;
        } else {
            self.is_visible = false;
            self.shown = false;
        }
    }

    /// Text to draw this frame, if the blink phase is on.
    #[must_use]
    pub fn visible_text(&self) -> Option<&str> {
        (self.is_visible && self.shown).then_some(self.text.as_str())
    }

    /// Whether the blink cycle is still running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_visible
    }
}
