//! Logo multi-click gesture.
//!
//! A single click on the logo scrolls to the top of the page; three quick
//! clicks open the admin viewer instead. The decision is made by a small
//! state machine that never reads a clock: every click re-arms a timer and
//! hands back a [`TimerTicket`], and the platform reports the timer firing via
//! [`LogoGesture::timer_elapsed`]. Only the ticket of the most recent click
//! can trigger anything, which is how re-arming cancels earlier timers even
//! if the platform fails to clear them.
//!
//! ```text
//! click ──▶ count += 1 ──▶ count == required? ──yes──▶ OpenAdmin, count = 0
//!                                │ no
//!                                ▼
//!                        arm timer (window_ms)
//!                                │ fires, still latest
//!                                ▼
//!                       ScrollToTop, count = 0
//! ```

/// Default number of clicks that opens the admin viewer.
pub const DEFAULT_REQUIRED_CLICKS: u32 = 3;

/// Default click-to-click window.
pub const DEFAULT_WINDOW_MS: u32 = 1000;

/// Timer request produced by a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTicket {
    generation: u64,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Threshold reached: navigate now. No timer is armed.
    OpenAdmin,
    /// Below threshold: (re)start the timer described by the ticket.
    Armed(TimerTicket),
}

/// Action taken when the window closes without reaching the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowClosed {
    ScrollToTop,
}

#[derive(Debug, Clone)]
pub struct LogoGesture {
    clicks: u32,
    required: u32,
    window_ms: u32,
    generation: u64,
}

impl Default for LogoGesture {
    fn default() -> Self {
        Self::new(DEFAULT_REQUIRED_CLICKS, DEFAULT_WINDOW_MS)
    }
}

impl LogoGesture {
    pub fn new(required: u32, window_ms: u32) -> Self {
        Self {
            clicks: 0,
            required: required.max(1),
            window_ms,
            generation: 0,
        }
    }

    /// Clicks counted in the current window.
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn click(&mut self) -> ClickOutcome {
        self.clicks += 1;
        // Every click supersedes the previously armed timer.
        self.generation += 1;

        if self.clicks == self.required {
            self.clicks = 0;
            return ClickOutcome::OpenAdmin;
        }

        ClickOutcome::Armed(TimerTicket {
            generation: self.generation,
            delay_ms: self.window_ms,
        })
    }

    /// The timer for `ticket` fired. Returns the single-click action if the
    /// ticket is still the latest and the window holds unresolved clicks.
    pub fn timer_elapsed(&mut self, ticket: TimerTicket) -> Option<WindowClosed> {
        if ticket.generation != self.generation || self.clicks == 0 {
            return None;
        }
        self.clicks = 0;
        Some(WindowClosed::ScrollToTop)
    }
}
