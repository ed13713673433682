use ratatui::style::{Color, Modifier, Style};

use crate::{
    constants::{MARKS, TINTS},
    domain::{Accent, ResetTag, StyleTag},
};

pub(super) fn tint(style: StyleTag) -> Color {
    match style {
        StyleTag::Blue => TINTS.blue,
        StyleTag::Green => TINTS.green,
    }
}

pub(super) fn accent_color(accent: Accent) -> Color {
    match accent {
        // Terminal default foreground stands in for black.
        Accent::Black => Color::Reset,
        Accent::Red => Color::Red,
        Accent::Blue => TINTS.blue,
        Accent::Gray => Color::Gray,
    }
}

pub(super) fn mark(checked: bool) -> &'static str {
    if checked {
        MARKS.checked
    } else {
        MARKS.unchecked
    }
}

pub(super) fn label_style(focused: bool) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

pub(super) fn button_style(tag: ResetTag) -> Style {
    let bg = match tag {
        ResetTag::All => TINTS.neutral,
        ResetTag::Green => TINTS.green,
        ResetTag::Blue => TINTS.blue,
    };
    Style::default().fg(text_color_for_bg(bg)).bg(bg)
}

pub(super) fn text_color_for_bg(bg_color: Color) -> Color {
    if let Color::Rgb(r, g, b) = bg_color {
        let brightness = (299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000;
        if brightness > 128 {
            Color::Black
        } else {
            Color::White
        }
    } else {
        Color::White
    }
}
