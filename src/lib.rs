//! Core of the Nitro Timer countdown widget.
//!
//! The countdown state machine and its display rules live here. The alarm,
//! the tick handle and the browser adapters are in their own modules so the
//! state machine can be driven and tested without a browser.

use log::debug;
use serde::Serialize;
use std::fmt;
use wasm_bindgen::prelude::*;

pub mod alarm;
pub mod state;
pub mod ticker;
pub mod utils;
pub mod web;

/// Default timer parameters
pub mod defaults {
    /// 4:30
    pub const DURATION_SECS: f64 = 270.0;
    pub const TICK_INTERVAL_MS: u32 = 100;
    /// Simulated seconds consumed by one tick. Also the zero-crossing
    /// threshold, so it must always be derived from the interval.
    pub const TICK_STEP_SECS: f64 = TICK_INTERVAL_MS as f64 / 1000.0;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    /// Reached zero by counting down. Behaves like `Idle` otherwise.
    Expired,
}

/// What a single tick did to the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown was not running.
    Ignored,
    Advanced,
    /// This tick was the zero-crossing; the alarm is due.
    Expired,
}

/// Clamp a duration to `>= 0`, coercing NaN and infinities to 0.
fn clamp_secs(secs: f64) -> f64 {
    if secs.is_finite() {
        secs.max(0.0)
    } else {
        0.0
    }
}

/// Countdown state machine: the configured duration, the time left and the
/// current phase.
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    initial_secs: f64,
    remaining_secs: f64,
    phase: Phase,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(defaults::DURATION_SECS)
    }
}

impl Countdown {
    pub fn new(duration_secs: f64) -> Self {
        let duration = clamp_secs(duration_secs);
        Self {
            initial_secs: duration,
            remaining_secs: duration,
            phase: Phase::Idle,
        }
    }

    pub fn initial_secs(&self) -> f64 {
        self.initial_secs
    }

    pub fn remaining_secs(&self) -> f64 {
        self.remaining_secs
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Start/pause toggle.
    ///
    /// With no time left the countdown is reloaded from the configured
    /// duration and started; otherwise running pauses and idle resumes.
    /// A zero duration still starts and expires on the next tick.
    pub fn start(&mut self) {
        if self.remaining_secs <= 0.0 {
            self.remaining_secs = self.initial_secs;
            self.phase = Phase::Running;
        } else {
            self.phase = match self.phase {
                Phase::Running => Phase::Idle,
                Phase::Idle | Phase::Expired => Phase::Running,
            };
        }
        debug!(
            "start/pause: phase={:?}, remaining={:.1}s",
            self.phase, self.remaining_secs
        );
    }

    /// Stop and reload the configured duration.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.remaining_secs = self.initial_secs;
        debug!("reset to {:.1}s", self.initial_secs);
    }

    /// Stop any run and configure a new duration.
    pub fn set_preset(&mut self, seconds: f64) {
        let duration = clamp_secs(seconds);
        self.phase = Phase::Idle;
        self.initial_secs = duration;
        self.remaining_secs = duration;
        debug!("duration set to {:.1}s", duration);
    }

    /// Whole minutes of the configured duration, as shown in the minute field.
    pub fn minutes_field(&self) -> u32 {
        (self.initial_secs / 60.0).floor() as u32
    }

    /// Whole seconds past the whole minute, as shown in the second field.
    pub fn seconds_field(&self) -> u32 {
        (self.initial_secs % 60.0).floor() as u32
    }

    /// Manual minute entry, keeping the seconds shown in the second field.
    pub fn set_minutes(&mut self, minutes: u32) {
        self.set_preset(f64::from(minutes) * 60.0 + f64::from(self.seconds_field()));
    }

    /// Manual second entry, keeping the current minutes.
    pub fn set_seconds(&mut self, seconds: u32) {
        self.set_preset(f64::from(self.minutes_field()) * 60.0 + f64::from(seconds));
    }

    /// Advance by one tick.
    ///
    /// A step that would reach or cross zero lands exactly on zero instead,
    /// so float drift can never push the countdown negative.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Ignored;
        }
        if self.remaining_secs <= defaults::TICK_STEP_SECS {
            self.remaining_secs = 0.0;
            self.phase = Phase::Expired;
            debug!("countdown expired");
            return TickOutcome::Expired;
        }
        self.remaining_secs -= defaults::TICK_STEP_SECS;
        TickOutcome::Advanced
    }

    /// Fraction of the configured duration still left, for the progress ring.
    pub fn progress(&self) -> f64 {
        progress_fraction(self.remaining_secs, self.initial_secs)
    }

    pub fn display(&self) -> TimeDisplay {
        format_countdown(self.remaining_secs)
    }
}

/// `remaining / initial`, or 0 when no duration is configured.
pub fn progress_fraction(remaining_secs: f64, initial_secs: f64) -> f64 {
    if initial_secs > 0.0 {
        remaining_secs / initial_secs
    } else {
        0.0
    }
}

/// Minutes and seconds as shown on the timer face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDisplay {
    pub minutes: u64,
    pub seconds: u32,
}

impl fmt::Display for TimeDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Format a remaining time, rounding partial seconds up.
///
/// 3.95 s shows as `00:04`, so the last second stays on screen until the
/// countdown actually hits zero. A ceiling of 60 rolls into the next minute.
pub fn format_countdown(seconds: f64) -> TimeDisplay {
    let total = clamp_secs(seconds);
    let minutes = (total / 60.0).floor() as u64;
    let secs = (total % 60.0).ceil() as u32;
    if secs == 60 {
        TimeDisplay {
            minutes: minutes + 1,
            seconds: 0,
        }
    } else {
        TimeDisplay {
            minutes,
            seconds: secs,
        }
    }
}

/// Everything the timer face renders, derived from the two durations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountdownView {
    pub minutes: String,
    pub seconds: String,
    pub label: String,
    pub progress: f64,
}

impl CountdownView {
    pub fn new(remaining_secs: f64, initial_secs: f64) -> Self {
        let display = format_countdown(remaining_secs);
        Self {
            minutes: format!("{:02}", display.minutes),
            seconds: format!("{:02}", display.seconds),
            label: display.to_string(),
            progress: progress_fraction(remaining_secs, initial_secs),
        }
    }
}

impl From<&Countdown> for CountdownView {
    fn from(countdown: &Countdown) -> Self {
        Self::new(countdown.remaining_secs, countdown.initial_secs)
    }
}

/// `MM:SS` label for a remaining time, for host pages embedding the widget.
#[wasm_bindgen(js_name = formatCountdown)]
pub fn format_countdown_label(seconds: f64) -> String {
    format_countdown(seconds).to_string()
}

/// Serialized `CountdownView` (`{ minutes, seconds, label, progress }`).
#[wasm_bindgen(js_name = countdownView)]
pub fn countdown_view(remaining_secs: f64, initial_secs: f64) -> JsValue {
    let view = CountdownView::new(remaining_secs, initial_secs);
    serde_wasm_bindgen::to_value(&view).unwrap_or(JsValue::NULL)
}
