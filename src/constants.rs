use ratatui::style::Color;

use crate::domain::ResetTag;

pub const TINTS: TintSettings = TintSettings {
    blue: Color::Rgb(59, 130, 246),
    green: Color::Rgb(34, 197, 94),
    neutral: Color::Rgb(209, 213, 219),
};

pub const MARKS: MarkSettings = MarkSettings {
    checked: "[✓]",
    unchecked: "[ ]",
    reset_icon: "↺",
};

pub const UI_SETTINGS: UiSettings = UiSettings {
    poll_ms: 50,
    item_gap: 3,
    button_gap: 1,
    header_rows: 2,
};

pub const RESET_BUTTONS: [ResetButton; 3] = [
    ResetButton {
        tag: ResetTag::All,
        label: "Reset All",
        key: 'a',
    },
    ResetButton {
        tag: ResetTag::Green,
        label: "Reset Green",
        key: 'g',
    },
    ResetButton {
        tag: ResetTag::Blue,
        label: "Reset Blue",
        key: 'b',
    },
];

pub const APP_NAME: &str = "tickoff";

pub struct TintSettings {
    pub blue: Color,
    pub green: Color,
    pub neutral: Color,
}

pub struct MarkSettings {
    pub checked: &'static str,
    pub unchecked: &'static str,
    pub reset_icon: &'static str,
}

pub struct UiSettings {
    pub poll_ms: u64,
    pub item_gap: u16,
    pub button_gap: u16,
    /// Rows above the first category: the reset buttons plus a spacer.
    pub header_rows: u16,
}

pub struct ResetButton {
    pub tag: ResetTag,
    pub label: &'static str,
    pub key: char,
}
