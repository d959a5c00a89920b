//! Application-level configuration constants.

pub const APP_TITLE: &str = "Nitro Timer";

// One-tap durations: (seconds, button label)
pub const PRESETS: [(f64, &str); 3] = [(30.0, "30s"), (40.0, "40s"), (120.0, "2m")];

// Progress ring geometry (r = 44 in a 100x100 viewBox)
pub const RING_RADIUS: f64 = 44.0;
pub const RING_CIRCUMFERENCE: f64 = 276.46;

// Help overlay: (heading, body)
pub const HELP_SECTIONS: [(&str, &str); 4] = [
    (
        "Main control",
        "Tap the ring or the Start button to start or pause the countdown.",
    ),
    (
        "Quick access",
        "Use the 30s, 40s or 2m buttons to set a common duration instantly.",
    ),
    (
        "Custom time",
        "Type minutes and seconds in the Set Custom Time field at the bottom.",
    ),
    (
        "Alerts",
        "When the countdown reaches zero the timer beeps and vibrates, if the device supports it.",
    ),
];
