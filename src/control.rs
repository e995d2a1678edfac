//! Discrete user events that drive the parameter controller
//!
//! The host decides which buttons and keys produce which [`ControlEvent`]:
//! the demo binds the shoulder buttons to algorithm selection
//! and the arrow keys (with hold-repeat) to the deadzone value.

use std::time::Duration;

use bevy::prelude::Reflect;
use serde::{Deserialize, Serialize};

use crate::settings::DeadzoneSettings;

/// A discrete request to change the [`DeadzoneSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum ControlEvent {
    /// Raise the deadzone by one step of its bounds.
    IncreaseDeadzone,

    /// Lower the deadzone by one step of its bounds.
    DecreaseDeadzone,

    /// Select the previous algorithm, staying on the first one.
    PreviousAlgorithm,

    /// Select the next algorithm, staying on the last one.
    NextAlgorithm,
}

impl DeadzoneSettings {
    /// Returns the settings that result from handling `event`.
    ///
    /// ```rust
    /// use thumbstick_deadzones::prelude::*;
    ///
    /// let settings = DeadzoneSettings::default()
    ///     .handle(ControlEvent::NextAlgorithm)
    ///     .handle(ControlEvent::NextAlgorithm)
    ///     .handle(ControlEvent::DecreaseDeadzone);
    ///
    /// assert_eq!(settings.algorithm(), DeadzoneAlgorithm::Radial);
    /// assert!((settings.deadzone() - 0.19).abs() <= 0.00001);
    /// ```
    #[inline]
    pub fn handle(self, event: ControlEvent) -> Self {
        match event {
            ControlEvent::IncreaseDeadzone => self.step_deadzone(1),
            ControlEvent::DecreaseDeadzone => self.step_deadzone(-1),
            ControlEvent::PreviousAlgorithm => self.select_algorithm(-1),
            ControlEvent::NextAlgorithm => self.select_algorithm(1),
        }
    }
}

/// Repeats the event of a held key.
///
/// A press fires once immediately.
/// Once the key has been held for longer than the delay,
/// it fires again on every tick until released.
///
/// ```rust
/// use std::time::Duration;
/// use thumbstick_deadzones::prelude::*;
///
/// let mut repeat = HoldRepeat::default();
/// let frame = Duration::from_millis(100);
///
/// assert!(repeat.press());
/// assert!(!repeat.tick(frame));
/// assert!(!repeat.tick(frame));
/// assert!(!repeat.tick(frame));
/// assert!(repeat.tick(frame));
/// assert!(repeat.tick(frame));
///
/// repeat.release();
/// assert!(!repeat.tick(frame));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub struct HoldRepeat {
    /// How long the key must be held before it starts repeating.
    pub(crate) delay: Duration,

    /// How long the key has been held, if it is held.
    pub(crate) held: Option<Duration>,
}

impl HoldRepeat {
    /// The hold time the demo waits for before repeating.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

    /// Creates a [`HoldRepeat`] that starts repeating after `delay`.
    #[must_use]
    #[inline]
    pub fn new(delay: Duration) -> Self {
        Self { delay, held: None }
    }

    /// Returns the hold time before repeating starts.
    #[must_use]
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Is the key currently held?
    #[must_use]
    #[inline]
    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }

    /// Registers a key press, returning `true` if the event should fire.
    ///
    /// Pressing an already held key does nothing.
    pub fn press(&mut self) -> bool {
        if self.held.is_some() {
            return false;
        }

        self.held = Some(Duration::ZERO);
        true
    }

    /// Advances the hold timer by `delta`, returning `true` if the event should fire this tick.
    pub fn tick(&mut self, delta: Duration) -> bool {
        match self.held.as_mut() {
            Some(held) => {
                *held = held.saturating_add(delta);
                *held > self.delay
            }
            None => false,
        }
    }

    /// Registers a key release.
    #[inline]
    pub fn release(&mut self) {
        self.held = None;
    }
}

impl Default for HoldRepeat {
    /// Creates a [`HoldRepeat`] with a delay of [`HoldRepeat::DEFAULT_DELAY`].
    #[inline]
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}
