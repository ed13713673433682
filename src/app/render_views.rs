use itertools::Itertools;
use ratatui::prelude::{Line, Span};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    constants::{APP_NAME, RESET_BUTTONS},
    display,
    domain::Checklist,
};

use super::{
    App, Cursor,
    screen_layout::{ScreenLayout, button_text},
    view_style,
};

impl App {
    pub(super) fn draw_frame(&mut self, f: &mut Frame) {
        let size = f.size();
        let snapshot = self.store.snapshot();
        let counts = snapshot.counts();

        let frame_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(
                Line::from(Span::styled(
                    APP_NAME,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Left),
            )
            .title(
                Line::from(Span::styled(
                    format!(
                        "{}/{} checked  blue {}  green {}",
                        counts.checked, counts.total, counts.blue_checked, counts.green_checked
                    ),
                    Style::default().fg(Color::White),
                ))
                .alignment(Alignment::Right),
            )
            .border_style(Style::default().fg(Color::DarkGray));
        let area = frame_block.inner(size);
        f.render_widget(frame_block, size);

        self.layout = ScreenLayout::compute(area, &snapshot);
        self.clamp_cursor_to_layout();
        self.render_buttons(f);
        self.render_categories(f, &snapshot);
        self.render_hint(f);
    }

    fn render_buttons(&self, f: &mut Frame) {
        for button in &self.layout.buttons {
            let span = Span::styled(
                button_text(button.label),
                view_style::button_style(button.tag),
            );
            f.render_widget(Paragraph::new(Line::from(span)), button.rect);
        }
    }

    fn render_categories(&self, f: &mut Frame, snapshot: &Checklist) {
        for placed in &self.layout.categories {
            let Some(category) = snapshot.category(placed.index) else {
                continue;
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Line::from(Span::styled(
                    category.name.as_str(),
                    Style::default()
                        .fg(view_style::accent_color(category.accent))
                        .add_modifier(Modifier::BOLD),
                )))
                .border_style(Style::default().fg(Color::DarkGray));
            f.render_widget(block, placed.block);

            for cell in &placed.cells {
                let Some(item) = snapshot.item(placed.index, &cell.item_id) else {
                    continue;
                };
                let focused = self.cursor
                    == Cursor {
                        category: placed.index,
                        slot: cell.slot,
                    };
                let tint = view_style::tint(item.style());

                let line = Line::from(vec![
                    Span::styled(view_style::mark(item.checked), Style::default().fg(tint)),
                    Span::raw(" "),
                    Span::styled(
                        display::format_display(&item.value),
                        view_style::label_style(focused),
                    ),
                ]);
                f.render_widget(Paragraph::new(line), cell.rect);
            }
        }
    }

    fn render_hint(&self, f: &mut Frame) {
        let Some(rect) = self.layout.hint else {
            return;
        };

        let keys = RESET_BUTTONS.iter().map(|button| button.key).join("/");
        let mut spans = vec![Span::styled(
            format!("arrows move  space toggle  {} reset  q quit", keys),
            Style::default().fg(Color::DarkGray),
        )];
        if self.layout.truncated {
            spans.push(Span::styled(
                "  (enlarge terminal to see everything)",
                Style::default().fg(Color::Yellow),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}
