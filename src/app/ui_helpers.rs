use ratatui::text::Span;

pub fn wrap_prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

pub fn wrap_next_index(current: usize, len: usize) -> usize {
    if len == 0 || current + 1 >= len {
        0
    } else {
        current + 1
    }
}

pub fn clamp_slot(slot: usize, len: usize) -> usize {
    slot.min(len.saturating_sub(1))
}

/// Terminal columns taken by `text`, measured the way ratatui lays out spans.
pub fn text_width(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}
