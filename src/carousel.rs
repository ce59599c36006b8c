//! Carousel state machines.
//!
//! Every rotating element on the site (image slider, room showcase, stats
//! highlight, testimonials, the per-card room sliders, the feature marquee)
//! is driven by one of two controllers defined here:
//!
//! - [`Carousel`]: a discrete index over a fixed, non-empty item sequence.
//!   `advance` and `retreat` wrap with modulo arithmetic, so the index is
//!   always valid.
//! - [`Track`]: a continuous pixel offset over a strip whose item set is
//!   rendered twice back-to-back. When the offset passes one full set width
//!   it is pulled back by exactly that width with the transition disabled,
//!   which makes the loop invisible.
//!
//! [`Autoplay`] is the timer policy shared by both: it turns elapsed time
//! into a number of ticks and decides whether manual navigation restarts the
//! countdown.
//!
//! The generator renders every carousel in the state of a freshly built
//! controller, and `static/carousel.js` runs the same state machines in the
//! browser.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    Empty,
    #[error("index {index} is out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
    #[error("track step and set width must be positive (step {step}, set width {set_width})")]
    InvalidTrack { step: f64, set_width: f64 },
    #[error("autoplay interval must be non-zero")]
    ZeroInterval,
}

/// Direction of the most recent navigation.
///
/// Only used to pick an animation variant (slide in from the left or the
/// right); it has no effect on the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

/// Discrete carousel over a fixed sequence of items.
///
/// The sequence is immutable for the lifetime of the carousel and is never
/// empty, so `current` is always a valid index into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<T> {
    items: Vec<T>,
    current: usize,
    direction: Direction,
}

#[allow(clippy::len_without_is_empty)]
impl<T> Carousel<T> {
    /// Build a carousel positioned on the first item.
    ///
    /// An empty sequence is a configuration error and is rejected.
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            items,
            current: 0,
            direction: Direction::Forward,
        })
    }

    /// Move to the next item, wrapping from the last to the first.
    pub fn advance(&mut self) -> usize {
        self.current = (self.current + 1) % self.items.len();
        self.direction = Direction::Forward;
        self.current
    }

    /// Move to the previous item, wrapping from the first to the last.
    pub fn retreat(&mut self) -> usize {
        let len = self.items.len();
        self.current = (self.current + len - 1) % len;
        self.direction = Direction::Backward;
        self.current
    }

    /// Jump straight to `index`.
    ///
    /// Out-of-range indices are rejected and leave the carousel untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.items.len() {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        if index != self.current {
            self.direction = if index > self.current {
                Direction::Forward
            } else {
                Direction::Backward
            };
        }
        self.current = index;
        Ok(())
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> &T {
        &self.items[self.current]
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// One flag per item; exactly one is `true`, at the current index.
    pub fn indicators(&self) -> Vec<bool> {
        (0..self.items.len()).map(|i| i == self.current).collect()
    }
}

/// Result of moving a [`Track`] forward by one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMove {
    pub position: f64,
    /// The offset is at or past the end of the first item set. The caller
    /// should [`Track::wrap`] once the move has finished animating.
    pub wrap_pending: bool,
}

/// A seamless reset performed by [`Track::wrap`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wrap {
    pub before: f64,
    pub after: f64,
}

/// Continuous-position carousel.
///
/// The rendered strip holds the item set followed by a copy of it, so an
/// offset of `p` and `p - set_width` look identical. Wrapping is a two-phase
/// change: [`wrap`](Track::wrap) disables the transition and applies the
/// reset, then [`settle`](Track::settle) re-enables it once the snap has
/// been painted (about 50ms later in the browser).
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    position: f64,
    step: f64,
    set_width: f64,
    transition_enabled: bool,
}

impl Track {
    /// A track that moves `step` per advance over a strip whose item set is
    /// `set_width` wide.
    pub fn new(step: f64, set_width: f64) -> Result<Self, CarouselError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(set_width) || !valid(step) {
            return Err(CarouselError::InvalidTrack { step, set_width });
        }
        Ok(Self {
            position: 0.0,
            step,
            set_width,
            transition_enabled: true,
        })
    }

    /// A track that moves one whole slide per step.
    pub fn slides(count: usize, slide_width: f64) -> Result<Self, CarouselError> {
        if count == 0 {
            return Err(CarouselError::Empty);
        }
        Self::new(slide_width, count as f64 * slide_width)
    }

    /// Move forward by one step with the transition animating.
    ///
    /// If the previous wrap was never settled, the transition is re-enabled
    /// first: it stays disabled for exactly one update.
    pub fn advance(&mut self) -> TrackMove {
        self.transition_enabled = true;
        self.position += self.step;
        TrackMove {
            position: self.position,
            wrap_pending: self.position >= self.set_width,
        }
    }

    /// Pull the offset back by one set width with the transition disabled.
    ///
    /// Returns `None` (and changes nothing) while the offset is still inside
    /// the first item set.
    pub fn wrap(&mut self) -> Option<Wrap> {
        if self.position < self.set_width {
            return None;
        }
        let before = self.position;
        self.transition_enabled = false;
        self.position = before - self.set_width;
        Some(Wrap {
            before,
            after: self.position,
        })
    }

    /// Re-enable the transition after a wrap.
    pub fn settle(&mut self) {
        self.transition_enabled = true;
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    pub fn set_width(&self) -> f64 {
        self.set_width
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Index of the slide currently in view, for indicator dots.
    ///
    /// The copy of the first slide at the end of the strip reports index 0,
    /// so dots stay correct before and after a wrap.
    pub fn slide_index(&self, slide_width: f64, count: usize) -> usize {
        if count == 0 || slide_width <= 0.0 {
            return 0;
        }
        ((self.position / slide_width).round() as usize) % count
    }
}

/// What a manual arrow or dot click does to the automatic timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManualNavigation {
    /// The timer keeps its rhythm; a tick may follow a click immediately.
    Coexist,
    /// The countdown restarts from zero after every manual move.
    #[default]
    ResetTimer,
}

impl ManualNavigation {
    pub fn from_reset_flag(reset: bool) -> Self {
        if reset {
            ManualNavigation::ResetTimer
        } else {
            ManualNavigation::Coexist
        }
    }
}

/// Deterministic autoplay clock.
///
/// Feeds on elapsed time rather than a wall clock, so the same policy can
/// drive the live [`Ticker`](crate::ticker::Ticker) preview and unit tests.
#[derive(Debug, Clone, PartialEq)]
pub struct Autoplay {
    interval: Duration,
    elapsed: Duration,
    manual: ManualNavigation,
}

impl Autoplay {
    pub fn new(interval: Duration, manual: ManualNavigation) -> Result<Self, CarouselError> {
        if interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        Ok(Self {
            interval,
            elapsed: Duration::ZERO,
            manual,
        })
    }

    /// Let `dt` pass and return how many ticks fired.
    ///
    /// Saturates instead of overflowing: elapsed time stops at
    /// [`Duration::MAX`] and the count at `u32::MAX`.
    pub fn elapse(&mut self, dt: Duration) -> u32 {
        const NANOS_PER_SEC: u128 = 1_000_000_000;
        let elapsed = self.elapsed.saturating_add(dt).as_nanos();
        let interval = self.interval.as_nanos();
        let rest = elapsed % interval;
        self.elapsed = Duration::new(
            (rest / NANOS_PER_SEC) as u64,
            (rest % NANOS_PER_SEC) as u32,
        );
        u32::try_from(elapsed / interval).unwrap_or(u32::MAX)
    }

    pub fn on_manual_navigation(&mut self) {
        if self.manual == ManualNavigation::ResetTimer {
            self.elapsed = Duration::ZERO;
        }
    }

    /// Time left before the next tick.
    pub fn until_next(&self) -> Duration {
        self.interval - self.elapsed
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn manual(&self) -> ManualNavigation {
        self.manual
    }
}
