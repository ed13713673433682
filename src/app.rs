use std::{io, time::Duration};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

use crate::{
    constants::UI_SETTINGS,
    domain::{Checklist, ItemId},
    error::AppError,
    store::Store,
};

mod event_handlers;
mod render_views;
mod screen_layout;
mod ui_helpers;
mod view_style;

use screen_layout::{ItemCell, ScreenLayout};

/// Keyboard focus: a category and a position in its display order.
/// Only cells of the last drawn layout can hold focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Cursor {
    category: usize,
    slot: usize,
}

struct App {
    store: Store,
    cursor: Cursor,
    layout: ScreenLayout,
    drawn_version: Option<u64>,
    render_needed: bool,
}

impl App {
    fn new(checklist: Checklist) -> Self {
        Self {
            store: Store::new(checklist),
            cursor: Cursor::default(),
            layout: ScreenLayout::default(),
            drawn_version: None,
            render_needed: true,
        }
    }

    fn needs_redraw(&self) -> bool {
        self.render_needed || self.drawn_version != Some(self.store.version())
    }

    fn mark_drawn(&mut self) {
        self.drawn_version = Some(self.store.version());
        self.render_needed = false;
    }

    fn focused_cell(&self) -> Option<&ItemCell> {
        self.layout
            .category(self.cursor.category)?
            .cells
            .iter()
            .find(|cell| cell.slot == self.cursor.slot)
    }

    fn focused_item_id(&self) -> Option<ItemId> {
        self.focused_cell().map(|cell| cell.item_id.clone())
    }

    /// Moves focus onto a drawn cell after the layout changed under it.
    fn clamp_cursor_to_layout(&mut self) {
        if self.focused_cell().is_some() {
            return;
        }
        let Some(placed) = self
            .layout
            .category(self.cursor.category)
            .or_else(|| self.layout.categories.first())
        else {
            return;
        };

        let slot = placed
            .cells
            .iter()
            .map(|cell| cell.slot)
            .take_while(|slot| *slot <= self.cursor.slot)
            .last()
            .or_else(|| placed.cells.first().map(|cell| cell.slot))
            .unwrap_or(0);
        let cursor = Cursor {
            category: placed.index,
            slot,
        };
        self.cursor = cursor;
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let poll_rate = Duration::from_millis(UI_SETTINGS.poll_ms);

        loop {
            if self.needs_redraw() {
                terminal.draw(|f| self.draw_frame(f))?;
                self.mark_drawn();
            }

            if !event::poll(poll_rate)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        break;
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized");
                    self.render_needed = true;
                }
                _ => {}
            }
        }

        Ok(())
    }
}

pub fn run_ui(checklist: Checklist) -> Result<(), AppError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(checklist);
    tracing::info!("checklist ui started");
    let result = app.event_loop(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    let counts = app.store.snapshot().counts();
    tracing::info!(
        checked = counts.checked,
        total = counts.total,
        "checklist ui stopped"
    );
    result
}
