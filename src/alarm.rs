//! Alarm fired at the zero-crossing: a vibration pulse and a three-tone beep.
//!
//! The device outputs are reached through the [`Vibrator`] and
//! [`AudioOutput`] traits; browser implementations live in [`crate::web`].

use futures::future::LocalBoxFuture;
use log::{debug, info, warn};
use std::fmt;

/// Alternating vibrate/pause durations in milliseconds.
pub const VIBRATION_PATTERN_MS: [u32; 5] = [300, 100, 300, 100, 500];

/// Tone envelope: starting gain, and the floor it decays to by the tone's end.
pub const TONE_START_GAIN: f32 = 0.3;
pub const TONE_END_GAIN: f32 = 0.01;

/// One beep of the alarm sequence, relative to the moment it is scheduled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub offset_secs: f64,
    pub duration_secs: f64,
}

/// Played as square waves.
pub const ALARM_SEQUENCE: [Tone; 3] = [
    Tone {
        frequency_hz: 880.0,
        offset_secs: 0.0,
        duration_secs: 0.2,
    },
    Tone {
        frequency_hz: 880.0,
        offset_secs: 0.3,
        duration_secs: 0.2,
    },
    Tone {
        frequency_hz: 1100.0,
        offset_secs: 0.6,
        duration_secs: 0.5,
    },
];

/// A tone pinned to absolute times on the output clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledTone {
    pub frequency_hz: f32,
    pub start_secs: f64,
    pub stop_secs: f64,
    pub start_gain: f32,
    pub end_gain: f32,
}

impl Tone {
    pub fn at(&self, now: f64) -> ScheduledTone {
        let start_secs = now + self.offset_secs;
        ScheduledTone {
            frequency_hz: self.frequency_hz,
            start_secs,
            stop_secs: start_secs + self.duration_secs,
            start_gain: TONE_START_GAIN,
            end_gain: TONE_END_GAIN,
        }
    }
}

/// User toggles for the two alarm outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmSettings {
    pub sound_enabled: bool,
    pub vibrate_enabled: bool,
}

impl Default for AlarmSettings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            vibrate_enabled: true,
        }
    }
}

/// Platform failures while sounding the alarm. Never surfaced to the user.
#[derive(Debug)]
pub enum AlarmError {
    AudioUnavailable(String),
    ResumeFailed(String),
    ToneFailed { frequency_hz: f32, reason: String },
}

impl fmt::Display for AlarmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlarmError::AudioUnavailable(reason) => {
                write!(f, "Audio output unavailable: {}", reason)
            }
            AlarmError::ResumeFailed(reason) => {
                write!(f, "Audio output could not be resumed: {}", reason)
            }
            AlarmError::ToneFailed {
                frequency_hz,
                reason,
            } => write!(f, "Failed to schedule {} Hz tone: {}", frequency_hz, reason),
        }
    }
}

impl std::error::Error for AlarmError {}

/// Haptic output.
pub trait Vibrator {
    /// Request the on/off pattern. Returns `false` when the host has no
    /// vibration support or refused the request.
    fn vibrate(&self, pattern_ms: &[u32]) -> bool;
}

/// Audio output with its own clock.
pub trait AudioOutput {
    /// Acquire the output on first use and resume it if it is suspended.
    /// Tones scheduled before this completes may be dropped.
    fn resume(&self) -> LocalBoxFuture<'_, Result<(), AlarmError>>;

    /// Current time of the output clock, in seconds.
    fn current_time(&self) -> Result<f64, AlarmError>;

    fn play_tone(&self, tone: &ScheduledTone) -> Result<(), AlarmError>;
}

/// Which outputs actually fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlarmReport {
    pub vibrated: bool,
    pub sounded: bool,
}

pub struct Alarm<V, A> {
    vibrator: V,
    audio: A,
}

impl<V: Vibrator, A: AudioOutput> Alarm<V, A> {
    pub fn new(vibrator: V, audio: A) -> Self {
        Self { vibrator, audio }
    }

    /// Acquire and unlock the audio output ahead of time. Meant to run from
    /// a user gesture so autoplay policy does not hold the alarm back later.
    pub async fn prepare(&self) {
        if let Err(e) = self.audio.resume().await {
            warn!("Audio warm-up failed: {}", e);
        }
    }

    /// Fire the enabled outputs. Missing capabilities and platform failures
    /// are logged and skipped.
    pub async fn trigger(&self, settings: AlarmSettings) -> AlarmReport {
        let mut report = AlarmReport::default();

        if settings.vibrate_enabled {
            report.vibrated = self.vibrator.vibrate(&VIBRATION_PATTERN_MS);
            if !report.vibrated {
                debug!("Vibration not available, skipping");
            }
        }

        if settings.sound_enabled {
            match self.play_sequence().await {
                Ok(()) => report.sounded = true,
                Err(e) => warn!("Alarm sound skipped: {}", e),
            }
        }

        info!(
            "Alarm triggered (vibrated: {}, sounded: {})",
            report.vibrated, report.sounded
        );
        report
    }

    async fn play_sequence(&self) -> Result<(), AlarmError> {
        self.audio.resume().await?;
        let now = self.audio.current_time()?;
        for tone in &ALARM_SEQUENCE {
            self.audio.play_tone(&tone.at(now))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Log {
        patterns: Vec<Vec<u32>>,
        resumes: usize,
        tones: Vec<ScheduledTone>,
    }

    struct FakeVibrator {
        supported: bool,
        log: Rc<RefCell<Log>>,
    }

    impl Vibrator for FakeVibrator {
        fn vibrate(&self, pattern_ms: &[u32]) -> bool {
            if self.supported {
                self.log.borrow_mut().patterns.push(pattern_ms.to_vec());
            }
            self.supported
        }
    }

    struct FakeAudio {
        now: f64,
        fail_resume: bool,
        log: Rc<RefCell<Log>>,
    }

    impl AudioOutput for FakeAudio {
        fn resume(&self) -> LocalBoxFuture<'_, Result<(), AlarmError>> {
            self.log.borrow_mut().resumes += 1;
            let result = if self.fail_resume {
                Err(AlarmError::ResumeFailed("not allowed".into()))
            } else {
                Ok(())
            };
            Box::pin(futures::future::ready(result))
        }

        fn current_time(&self) -> Result<f64, AlarmError> {
            Ok(self.now)
        }

        fn play_tone(&self, tone: &ScheduledTone) -> Result<(), AlarmError> {
            self.log.borrow_mut().tones.push(*tone);
            Ok(())
        }
    }

    fn alarm(
        vibration_supported: bool,
        fail_resume: bool,
    ) -> (Alarm<FakeVibrator, FakeAudio>, Rc<RefCell<Log>>) {
        let log = Rc::new(RefCell::new(Log::default()));
        let alarm = Alarm::new(
            FakeVibrator {
                supported: vibration_supported,
                log: log.clone(),
            },
            FakeAudio {
                now: 12.5,
                fail_resume,
                log: log.clone(),
            },
        );
        (alarm, log)
    }

    fn settings(sound_enabled: bool, vibrate_enabled: bool) -> AlarmSettings {
        AlarmSettings {
            sound_enabled,
            vibrate_enabled,
        }
    }

    #[test]
    fn fires_vibration_pattern_and_three_tones() {
        let (alarm, log) = alarm(true, false);
        let report = block_on(alarm.trigger(AlarmSettings::default()));
        assert_eq!(
            report,
            AlarmReport {
                vibrated: true,
                sounded: true
            }
        );

        let log = log.borrow();
        assert_eq!(log.patterns, vec![vec![300, 100, 300, 100, 500]]);
        assert_eq!(log.resumes, 1);

        let freqs: Vec<f32> = log.tones.iter().map(|t| t.frequency_hz).collect();
        assert_eq!(freqs, vec![880.0, 880.0, 1100.0]);
        for (tone, expected) in log.tones.iter().zip([12.5, 12.8, 13.1]) {
            assert!((tone.start_secs - expected).abs() < 1e-9);
        }
        assert!((log.tones[2].stop_secs - 13.6).abs() < 1e-9);
        assert!(log
            .tones
            .iter()
            .all(|t| t.start_gain == 0.3 && t.end_gain == 0.01));
    }

    #[test]
    fn sound_disabled_only_vibrates() {
        let (alarm, log) = alarm(true, false);
        let report = block_on(alarm.trigger(settings(false, true)));
        assert!(report.vibrated);
        assert!(!report.sounded);
        assert_eq!(log.borrow().resumes, 0);
        assert!(log.borrow().tones.is_empty());
    }

    #[test]
    fn both_disabled_fires_nothing() {
        let (alarm, log) = alarm(true, false);
        let report = block_on(alarm.trigger(settings(false, false)));
        assert_eq!(report, AlarmReport::default());
        let log = log.borrow();
        assert!(log.patterns.is_empty());
        assert_eq!(log.resumes, 0);
        assert!(log.tones.is_empty());
    }

    #[test]
    fn missing_vibration_is_skipped_silently() {
        let (alarm, log) = alarm(false, false);
        let report = block_on(alarm.trigger(AlarmSettings::default()));
        assert!(!report.vibrated);
        assert!(report.sounded);
        assert_eq!(log.borrow().tones.len(), 3);
    }

    #[test]
    fn failed_resume_schedules_no_tones() {
        let (alarm, log) = alarm(true, true);
        let report = block_on(alarm.trigger(AlarmSettings::default()));
        assert!(report.vibrated);
        assert!(!report.sounded);
        assert!(log.borrow().tones.is_empty());
    }

    #[test]
    fn prepare_resumes_without_playing() {
        let (alarm, log) = alarm(true, true);
        block_on(alarm.prepare());
        let log = log.borrow();
        assert_eq!(log.resumes, 1);
        assert!(log.tones.is_empty());
        assert!(log.patterns.is_empty());
    }

    #[test]
    fn error_messages_name_the_failure() {
        let err = AlarmError::ToneFailed {
            frequency_hz: 880.0,
            reason: "closed".into(),
        };
        assert_eq!(err.to_string(), "Failed to schedule 880 Hz tone: closed");
    }
}
