//! Widget state and the reducer the view dispatches into.

use crate::alarm::AlarmSettings;
use crate::{Countdown, TickOutcome};
use std::rc::Rc;
use yew::Reducible;

/// Everything the widget renders from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimerModel {
    pub countdown: Countdown,
    pub settings: AlarmSettings,
    /// Bumped on every zero-crossing; the view fires the alarm when it changes.
    pub expirations: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TimerAction {
    StartPause,
    Reset,
    SetPreset(f64),
    SetMinutes(u32),
    SetSeconds(u32),
    Tick,
    ToggleSound,
    ToggleVibrate,
}

impl Reducible for TimerModel {
    type Action = TimerAction;

    fn reduce(self: Rc<Self>, action: TimerAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TimerAction::StartPause => next.countdown.start(),
            TimerAction::Reset => next.countdown.reset(),
            TimerAction::SetPreset(seconds) => next.countdown.set_preset(seconds),
            TimerAction::SetMinutes(minutes) => next.countdown.set_minutes(minutes),
            TimerAction::SetSeconds(seconds) => next.countdown.set_seconds(seconds),
            TimerAction::Tick => match next.countdown.tick() {
                // A stray tick after a pause must not re-render.
                TickOutcome::Ignored => return self,
                TickOutcome::Advanced => {}
                TickOutcome::Expired => next.expirations = next.expirations.wrapping_add(1),
            },
            TimerAction::ToggleSound => {
                next.settings.sound_enabled = !next.settings.sound_enabled;
            }
            TimerAction::ToggleVibrate => {
                next.settings.vibrate_enabled = !next.settings.vibrate_enabled;
            }
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Phase;

    fn apply(model: Rc<TimerModel>, actions: &[TimerAction]) -> Rc<TimerModel> {
        actions
            .iter()
            .cloned()
            .fold(model, |model, action| model.reduce(action))
    }

    #[test]
    fn defaults_are_four_thirty_with_both_outputs_on() {
        let model = TimerModel::default();
        assert_eq!(model.countdown.initial_secs(), 270.0);
        assert!(model.settings.sound_enabled);
        assert!(model.settings.vibrate_enabled);
        assert_eq!(model.expirations, 0);
    }

    #[test]
    fn zero_crossing_bumps_expirations_once() {
        let model = apply(
            Rc::new(TimerModel::default()),
            &[TimerAction::SetPreset(0.2), TimerAction::StartPause],
        );
        let model = apply(model, &[TimerAction::Tick, TimerAction::Tick]);
        assert_eq!(model.expirations, 1);
        assert_eq!(model.countdown.phase(), Phase::Expired);

        let model = apply(model, &[TimerAction::Tick, TimerAction::Tick]);
        assert_eq!(model.expirations, 1);
    }

    #[test]
    fn zero_duration_start_alarms_on_next_tick() {
        let model = apply(
            Rc::new(TimerModel::default()),
            &[TimerAction::SetPreset(0.0), TimerAction::StartPause],
        );
        assert!(model.countdown.is_running());

        let model = apply(model, &[TimerAction::Tick]);
        assert_eq!(model.expirations, 1);
        assert_eq!(model.countdown.phase(), Phase::Expired);
    }

    #[test]
    fn ignored_tick_returns_same_state() {
        let model = Rc::new(TimerModel::default());
        let after = model.clone().reduce(TimerAction::Tick);
        assert!(Rc::ptr_eq(&model, &after));
    }

    #[test]
    fn preset_while_running_stops() {
        let model = apply(
            Rc::new(TimerModel::default()),
            &[TimerAction::StartPause, TimerAction::Tick, TimerAction::SetPreset(40.0)],
        );
        assert!(!model.countdown.is_running());
        assert_eq!(model.countdown.initial_secs(), 40.0);
        assert_eq!(model.countdown.remaining_secs(), 40.0);
    }

    #[test]
    fn manual_fields_route_through_preset() {
        let model = apply(
            Rc::new(TimerModel::default()),
            &[
                TimerAction::StartPause,
                TimerAction::SetMinutes(1),
                TimerAction::SetSeconds(15),
            ],
        );
        assert!(!model.countdown.is_running());
        assert_eq!(model.countdown.initial_secs(), 75.0);
    }

    #[test]
    fn toggles_flip_independently() {
        let model = apply(Rc::new(TimerModel::default()), &[TimerAction::ToggleSound]);
        assert!(!model.settings.sound_enabled);
        assert!(model.settings.vibrate_enabled);

        let model = apply(model, &[TimerAction::ToggleVibrate, TimerAction::ToggleSound]);
        assert!(model.settings.sound_enabled);
        assert!(!model.settings.vibrate_enabled);
    }

    #[test]
    fn reset_after_pause_reloads_duration() {
        let model = apply(
            Rc::new(TimerModel::default()),
            &[
                TimerAction::StartPause,
                TimerAction::Tick,
                TimerAction::StartPause,
                TimerAction::Reset,
            ],
        );
        assert_eq!(model.countdown.phase(), Phase::Idle);
        assert_eq!(model.countdown.remaining_secs(), 270.0);
    }
}
