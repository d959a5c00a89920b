use nitro_timer::alarm::Alarm;
use nitro_timer::defaults::TICK_INTERVAL_MS;
use nitro_timer::state::{TimerAction, TimerModel};
use nitro_timer::ticker::Ticker;
use nitro_timer::utils::{parse_minutes_field, parse_seconds_field};
use nitro_timer::web::{IntervalSource, NavigatorVibrator, WebAudio};
use web_sys::HtmlInputElement;
use yew::prelude::*;

type BrowserAlarm = Alarm<NavigatorVibrator, WebAudio>;

/// Current timer state plus the commands the view can issue.
#[derive(Clone)]
pub struct CountdownHandle {
    /// Snapshot of the state for this render.
    pub model: TimerModel,
    /// Start/pause toggle. Also unlocks audio, since it runs inside a click.
    pub on_start_pause: Callback<()>,
    pub on_reset: Callback<()>,
    /// Select a preset duration in seconds.
    pub on_preset: Callback<f64>,
    /// `oninput` of the minute field.
    pub on_minutes_input: Callback<InputEvent>,
    /// `oninput` of the second field.
    pub on_seconds_input: Callback<InputEvent>,
    pub on_toggle_sound: Callback<()>,
    pub on_toggle_vibrate: Callback<()>,
}

/// Countdown state wired to the browser: a single interval while running,
/// and the alarm on every zero-crossing.
#[hook]
pub fn use_countdown() -> CountdownHandle {
    let model = use_reducer(TimerModel::default);
    let ticker = use_mut_ref(|| Ticker::new(IntervalSource));
    // One alarm, and so one audio context, per mounted widget.
    let alarm = use_memo((), |_| BrowserAlarm::new(NavigatorVibrator, WebAudio::new()));

    // Interval lifetime follows the running flag; teardown also covers unmount.
    {
        let ticker = ticker.clone();
        let dispatcher = model.dispatcher();
        use_effect_with(model.countdown.is_running(), move |&running| {
            if running {
                ticker
                    .borrow_mut()
                    .restart(TICK_INTERVAL_MS, move || dispatcher.dispatch(TimerAction::Tick));
            } else {
                ticker.borrow_mut().stop();
            }
            move || ticker.borrow_mut().stop()
        });
    }

    {
        let alarm = alarm.clone();
        let settings = model.settings;
        use_effect_with(model.expirations, move |&expirations| {
            if expirations > 0 {
                wasm_bindgen_futures::spawn_local(async move {
                    alarm.trigger(settings).await;
                });
            }
            || ()
        });
    }

    let on_start_pause = {
        let model = model.clone();
        let alarm = alarm.clone();
        Callback::from(move |_: ()| {
            if !model.countdown.is_running() && model.settings.sound_enabled {
                let alarm = alarm.clone();
                wasm_bindgen_futures::spawn_local(async move { alarm.prepare().await });
            }
            model.dispatch(TimerAction::StartPause);
        })
    };

    let dispatch = |action: TimerAction| {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(action.clone()))
    };

    let on_preset = {
        let dispatcher = model.dispatcher();
        Callback::from(move |seconds: f64| dispatcher.dispatch(TimerAction::SetPreset(seconds)))
    };

    let on_minutes_input = {
        let dispatcher = model.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(TimerAction::SetMinutes(parse_minutes_field(&input.value())));
        })
    };

    let on_seconds_input = {
        let dispatcher = model.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(TimerAction::SetSeconds(parse_seconds_field(&input.value())));
        })
    };

    CountdownHandle {
        model: (*model).clone(),
        on_start_pause,
        on_reset: dispatch(TimerAction::Reset),
        on_preset,
        on_minutes_input,
        on_seconds_input,
        on_toggle_sound: dispatch(TimerAction::ToggleSound),
        on_toggle_vibrate: dispatch(TimerAction::ToggleVibrate),
    }
}
