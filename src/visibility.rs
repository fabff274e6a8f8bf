//! One-shot reveal animations.
//!
//! A section starts [`Visibility::Hidden`] and flips to
//! [`Visibility::Visible`] the first time the platform reports it on screen
//! past `behavior.reveal_threshold`. There is no way back: scrolling away
//! leaves it visible. The flip only swaps CSS classes; the keyframes live in the
//! stylesheet and play when the re-rendered element is inserted.
//!
//! How intersection is observed is platform business, hidden behind
//! [`VisibilityObserver`]. The browser runtime implements it with
//! `IntersectionObserver`.

/// Fraction of a section that must be on screen before it reveals.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Monotonic `Hidden → Visible` latch. The threshold is applied by the
/// [`VisibilityObserver`], so the latch only records the crossing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reveal {
    state: Visibility,
}

impl Reveal {
    /// Record a crossing. Returns `true` if this call changed the state.
    pub fn mark_visible(&mut self) -> bool {
        let changed = self.state == Visibility::Hidden;
        self.state = Visibility::Visible;
        changed
    }

    pub fn is_visible(&self) -> bool {
        self.state == Visibility::Visible
    }

    pub fn state(&self) -> Visibility {
        self.state
    }
}

/// Entrance styles. Each maps to a `reveal-*` class pair in the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Fade in while moving up.
    Rise,
    /// Fade in while sliding from the left.
    Slide,
    /// Fade in while scaling up slightly.
    Zoom,
    /// Grow horizontally (heading underline).
    Grow,
    /// Opacity only.
    Fade,
}

impl Motion {
    fn class(self) -> &'static str {
        match self {
            Motion::Rise => "reveal reveal-rise",
            Motion::Slide => "reveal reveal-slide",
            Motion::Zoom => "reveal reveal-zoom",
            Motion::Grow => "reveal reveal-grow",
            Motion::Fade => "reveal reveal-fade",
        }
    }
}

/// Class list for an element animated with `motion`.
pub fn reveal_class(motion: Motion, visible: bool) -> String {
    if visible {
        format!("{} is-visible", motion.class())
    } else {
        motion.class().to_string()
    }
}

/// Animation delay for the `index`-th item of a staggered list.
pub fn stagger_delay_ms(index: usize, offset: usize, step_ms: u32) -> u32 {
    u32::try_from(index + offset)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

/// `style` attribute value carrying a stagger delay.
pub fn stagger_style(index: usize, offset: usize, step_ms: u32) -> String {
    format!(
        "animation-delay: {}ms",
        stagger_delay_ms(index, offset, step_ms)
    )
}

/// Capability: report once when an element first becomes visible.
pub trait VisibilityObserver {
    /// Invoke `on_visible` the first time `element_id` intersects the
    /// viewport past the observer's threshold. Never invoked more than once.
    fn observe_once(&self, element_id: &str, on_visible: Box<dyn FnOnce()>);

    /// Stop observing everything (page unmount).
    fn disconnect(&self);
}
