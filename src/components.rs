//! Pure Yew view functions for the timer face and its controls.
//!
//! Nothing here owns state: each function renders from the values and
//! callbacks it is given.

use crate::config::{APP_TITLE, HELP_SECTIONS, PRESETS, RING_CIRCUMFERENCE, RING_RADIUS};
use nitro_timer::alarm::AlarmSettings;
use nitro_timer::CountdownView;
use yew::prelude::*;

/// Material Symbols icon by name.
fn icon(name: &'static str) -> Html {
    html! { <span class="material-symbols-outlined">{ name }</span> }
}

/// Thin bar across the top, shrinking with the remaining time.
pub fn render_progress_bar(progress: f64) -> Html {
    html! {
        <div class="progress-track">
            <div class="progress-fill" style={format!("width: {:.2}%", progress * 100.0)}></div>
        </div>
    }
}

/// Sound and vibration toggles, title and help button.
pub fn render_header(
    settings: AlarmSettings,
    on_toggle_sound: Callback<()>,
    on_toggle_vibrate: Callback<()>,
    on_help: Callback<MouseEvent>,
) -> Html {
    html! {
        <div class="header">
            <div class="toggles">
                <button
                    class={classes!("toggle", settings.sound_enabled.then_some("active"))}
                    aria-label="Sound"
                    aria-pressed={settings.sound_enabled.to_string()}
                    onclick={on_toggle_sound.reform(|_: MouseEvent| ())}
                >
                    { icon(if settings.sound_enabled { "volume_up" } else { "volume_off" }) }
                </button>
                <button
                    class={classes!("toggle", settings.vibrate_enabled.then_some("active"))}
                    aria-label="Vibration"
                    aria-pressed={settings.vibrate_enabled.to_string()}
                    onclick={on_toggle_vibrate.reform(|_: MouseEvent| ())}
                >
                    { icon(if settings.vibrate_enabled { "vibration" } else { "vibration_lock" }) }
                </button>
            </div>
            <div class="title-group">
                <div class="title">{ APP_TITLE }</div>
                <button class="help-button" aria-label="Help" onclick={on_help}>
                    { icon("help") }
                </button>
            </div>
        </div>
    }
}

/// Progress ring with the digits inside. The whole ring is a start/pause button.
pub fn render_ring(view: &CountdownView, running: bool, on_start_pause: Callback<()>) -> Html {
    let dash_offset = RING_CIRCUMFERENCE - RING_CIRCUMFERENCE * view.progress;

    html! {
        <div
            class="ring"
            role="button"
            aria-label={if running { "Pause timer" } else { "Start timer" }}
            onclick={on_start_pause.reform(|_: MouseEvent| ())}
        >
            <svg class="ring-svg" viewBox="0 0 100 100">
                <circle class="ring-track" cx="50" cy="50" r={RING_RADIUS.to_string()}
                    fill="transparent" stroke="currentColor" stroke-width="9"></circle>
                <circle
                    class={classes!("ring-progress", running.then_some("glow"))}
                    cx="50" cy="50" r={RING_RADIUS.to_string()}
                    fill="transparent" stroke="currentColor" stroke-width="9"
                    stroke-dasharray={RING_CIRCUMFERENCE.to_string()}
                    stroke-dashoffset={format!("{:.2}", dash_offset)}
                    stroke-linecap="round"
                ></circle>
            </svg>
            <div class="face">
                <span class={classes!("digits", running.then_some("glow"))}>
                    { view.label.clone() }
                </span>
                <div class="units">
                    <p>{ "Minutes" }</p>
                    <p>{ "Seconds" }</p>
                </div>
            </div>
        </div>
    }
}

pub fn render_presets(on_preset: Callback<f64>) -> Html {
    html! {
        <div class="presets">
            { for PRESETS.iter().map(|&(seconds, label)| html! {
                <button class="preset" onclick={on_preset.reform(move |_: MouseEvent| seconds)}>
                    { label }
                </button>
            }) }
        </div>
    }
}

/// Minute and second inputs showing the configured duration.
pub fn render_custom_time(
    minutes: u32,
    seconds: u32,
    on_minutes_input: Callback<InputEvent>,
    on_seconds_input: Callback<InputEvent>,
) -> Html {
    html! {
        <div class="custom-time">
            <h3>{ "Set Custom Time" }</h3>
            <div class="custom-time-fields">
                <label>
                    <input
                        type="number"
                        min="0"
                        value={minutes.to_string()}
                        oninput={on_minutes_input}
                    />
                    <span>{ "min" }</span>
                </label>
                <span class="separator">{ ":" }</span>
                <label>
                    <input
                        type="number"
                        min="0"
                        value={seconds.to_string()}
                        oninput={on_seconds_input}
                    />
                    <span>{ "sec" }</span>
                </label>
            </div>
        </div>
    }
}

pub fn render_actions(running: bool, on_start_pause: Callback<()>, on_reset: Callback<()>) -> Html {
    html! {
        <div class="actions">
            <button
                class={classes!("start-button", running.then_some("running"))}
                onclick={on_start_pause.reform(|_: MouseEvent| ())}
            >
                { icon(if running { "pause" } else { "play_arrow" }) }
                { if running { "Pause" } else { "Start" } }
            </button>
            <button class="reset-button" aria-label="Reset" onclick={on_reset.reform(|_: MouseEvent| ())}>
                { icon("refresh") }
            </button>
        </div>
    }
}

/// Full-screen usage instructions.
pub fn render_help(on_close: Callback<MouseEvent>) -> Html {
    html! {
        <div class="help-overlay">
            <div class="help-header">
                <h2>{ "Instructions" }</h2>
                <button class="help-close" aria-label="Close" onclick={on_close.clone()}>
                    { icon("close") }
                </button>
            </div>
            <div class="help-sections">
                { for HELP_SECTIONS.iter().map(|&(heading, body)| html! {
                    <div class="help-section">
                        <h3>{ heading }</h3>
                        <p>{ body }</p>
                    </div>
                }) }
            </div>
            <button class="help-dismiss" onclick={on_close}>{ "Got it" }</button>
        </div>
    }
}
