//! Main module for the Nitro Timer widget using Yew.
//! Wires the countdown hook into the view components.

use nitro_timer::CountdownView;
use yew::prelude::*;

mod components;
mod config;
mod hooks;

use components::{
    render_actions, render_custom_time, render_header, render_help, render_presets,
    render_progress_bar, render_ring,
};
use hooks::use_countdown;

/// Single-screen timer: progress, controls, presets and manual entry.
#[function_component]
pub fn App() -> Html {
    let timer = use_countdown();
    // The help overlay is view-only and never touches the timer.
    let show_help = use_state(|| false);

    let countdown = &timer.model.countdown;
    let view = CountdownView::from(countdown);
    let running = countdown.is_running();

    let open_help = {
        let show_help = show_help.clone();
        Callback::from(move |_: MouseEvent| show_help.set(true))
    };
    let close_help = {
        let show_help = show_help.clone();
        Callback::from(move |_: MouseEvent| show_help.set(false))
    };

    html! {
        <div class="timer">
            if *show_help {
                { render_help(close_help) }
            }
            { render_progress_bar(view.progress) }
            { render_header(
                timer.model.settings,
                timer.on_toggle_sound.clone(),
                timer.on_toggle_vibrate.clone(),
                open_help,
            ) }
            { render_ring(&view, running, timer.on_start_pause.clone()) }
            { render_presets(timer.on_preset.clone()) }
            { render_custom_time(
                countdown.minutes_field(),
                countdown.seconds_field(),
                timer.on_minutes_input.clone(),
                timer.on_seconds_input.clone(),
            ) }
            { render_actions(running, timer.on_start_pause.clone(), timer.on_reset.clone()) }
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the app.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
