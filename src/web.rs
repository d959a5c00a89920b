//! Browser implementations of the tick source and the alarm outputs.

use crate::alarm::{AlarmError, AudioOutput, ScheduledTone, Vibrator};
use crate::ticker::TickSource;
use futures::future::LocalBoxFuture;
use gloo_timers::callback::Interval;
use log::debug;
use once_cell::unsync::OnceCell;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AudioContext, AudioContextState, OscillatorType};

/// `setInterval`-backed ticks. Dropping the [`Interval`] clears it.
pub struct IntervalSource;

impl TickSource for IntervalSource {
    type Handle = Interval;

    fn every<F>(&self, interval_ms: u32, on_tick: F) -> Interval
    where
        F: FnMut() + 'static,
    {
        Interval::new(interval_ms, on_tick)
    }
}

/// `navigator.vibrate`, probed first since some browsers do not define it.
pub struct NavigatorVibrator;

impl Vibrator for NavigatorVibrator {
    fn vibrate(&self, pattern_ms: &[u32]) -> bool {
        let navigator = gloo_utils::window().navigator();
        let supported =
            js_sys::Reflect::has(&navigator, &JsValue::from_str("vibrate")).unwrap_or(false);
        if !supported {
            return false;
        }
        let pattern: js_sys::Array = pattern_ms.iter().map(|&ms| JsValue::from(ms)).collect();
        navigator.vibrate_with_pattern(&pattern)
    }
}

/// Web Audio output. The `AudioContext` is created on first use and kept
/// for the rest of the page session.
#[derive(Default)]
pub struct WebAudio {
    context: OnceCell<AudioContext>,
}

impl WebAudio {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&self) -> Result<&AudioContext, AlarmError> {
        self.context.get_or_try_init(|| {
            debug!("Creating audio context");
            AudioContext::new().map_err(|e| AlarmError::AudioUnavailable(format!("{:?}", e)))
        })
    }
}

impl AudioOutput for WebAudio {
    fn resume(&self) -> LocalBoxFuture<'_, Result<(), AlarmError>> {
        Box::pin(async move {
            let ctx = self.context()?;
            if ctx.state() == AudioContextState::Suspended {
                debug!("Resuming suspended audio context");
                let promise = ctx
                    .resume()
                    .map_err(|e| AlarmError::ResumeFailed(format!("{:?}", e)))?;
                JsFuture::from(promise)
                    .await
                    .map_err(|e| AlarmError::ResumeFailed(format!("{:?}", e)))?;
            }
            Ok(())
        })
    }

    fn current_time(&self) -> Result<f64, AlarmError> {
        Ok(self.context()?.current_time())
    }

    fn play_tone(&self, tone: &ScheduledTone) -> Result<(), AlarmError> {
        let ctx = self.context()?;
        let tone_err = |e: JsValue| AlarmError::ToneFailed {
            frequency_hz: tone.frequency_hz,
            reason: format!("{:?}", e),
        };

        let oscillator = ctx.create_oscillator().map_err(tone_err)?;
        let gain = ctx.create_gain().map_err(tone_err)?;

        oscillator.set_type(OscillatorType::Square);
        oscillator
            .frequency()
            .set_value_at_time(tone.frequency_hz, tone.start_secs)
            .map_err(tone_err)?;

        // Percussive decay: exponential ramp from the start gain to the floor.
        let envelope = gain.gain();
        envelope
            .set_value_at_time(tone.start_gain, tone.start_secs)
            .map_err(tone_err)?;
        envelope
            .exponential_ramp_to_value_at_time(tone.end_gain, tone.stop_secs)
            .map_err(tone_err)?;

        oscillator.connect_with_audio_node(&gain).map_err(tone_err)?;
        gain.connect_with_audio_node(&ctx.destination())
            .map_err(tone_err)?;

        oscillator.start_with_when(tone.start_secs).map_err(tone_err)?;
        oscillator.stop_with_when(tone.stop_secs).map_err(tone_err)?;
        Ok(())
    }
}
