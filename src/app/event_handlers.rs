use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::constants::RESET_BUTTONS;

use super::{App, Cursor, screen_layout::Action, ui_helpers};

impl App {
    /// Returns `true` when the user asked to quit.
    pub(super) fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Left | KeyCode::Char('h') => self.move_slot(false),
            KeyCode::Right | KeyCode::Char('l') => self.move_slot(true),
            KeyCode::Up | KeyCode::Char('k') => self.move_category(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_category(true),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(item_id) = self.focused_item_id() {
                    self.dispatch(Action::Toggle {
                        category_index: self.cursor.category,
                        item_id,
                    });
                }
            }
            KeyCode::Char(c) => {
                let c = c.to_ascii_lowercase();
                if let Some(tag) = RESET_BUTTONS
                    .iter()
                    .find(|button| button.key == c)
                    .map(|button| button.tag)
                {
                    self.dispatch(Action::Reset(tag));
                }
            }
            _ => {}
        }
        false
    }

    pub(super) fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some((category, cell)) = self.layout.cell_at(mouse.column, mouse.row) {
            let slot = cell.slot;
            self.cursor = Cursor { category, slot };
            self.render_needed = true;
        }

        if let Some(action) = self.layout.hit(mouse.column, mouse.row) {
            self.dispatch(action);
        }
    }

    pub(super) fn dispatch(&mut self, action: Action) {
        match action {
            Action::Toggle {
                category_index,
                item_id,
            } => {
                self.store.toggle(category_index, &item_id);
            }
            Action::Reset(tag) => {
                self.store.reset(Some(tag));
            }
        }
    }

    /// Position of the focused cell among the drawn cells of its category.
    fn focused_position(&self) -> usize {
        self.layout
            .category(self.cursor.category)
            .and_then(|placed| {
                placed
                    .cells
                    .iter()
                    .position(|cell| cell.slot == self.cursor.slot)
            })
            .unwrap_or(0)
    }

    fn move_slot(&mut self, forward: bool) {
        let Some(placed) = self.layout.category(self.cursor.category) else {
            return;
        };
        let position = self.focused_position();
        let len = placed.cells.len();
        let next = if forward {
            ui_helpers::wrap_next_index(position, len)
        } else {
            ui_helpers::wrap_prev_index(position, len)
        };
        if let Some(cell) = placed.cells.get(next) {
            self.cursor.slot = cell.slot;
            self.render_needed = true;
        }
    }

    fn move_category(&mut self, forward: bool) {
        let drawn = &self.layout.categories;
        if drawn.is_empty() {
            return;
        }
        let current = drawn
            .iter()
            .position(|placed| placed.index == self.cursor.category)
            .unwrap_or(0);
        let next = if forward {
            ui_helpers::wrap_next_index(current, drawn.len())
        } else {
            ui_helpers::wrap_prev_index(current, drawn.len())
        };

        let target = &drawn[next];
        let position = ui_helpers::clamp_slot(self.focused_position(), target.cells.len());
        let cursor = Cursor {
            category: target.index,
            slot: target.cells.get(position).map_or(0, |cell| cell.slot),
        };
        self.cursor = cursor;
        self.render_needed = true;
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::{Terminal, backend::TestBackend};

    use crate::{catalog, domain::ItemId};

    use super::super::{App, Cursor};

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn is_checked(app: &App, category: usize, id: &str) -> bool {
        app.store
            .snapshot()
            .item(category, &ItemId::new(id))
            .unwrap()
            .checked
    }

    fn drawn_app(width: u16, height: u16) -> App {
        let mut app = App::new(catalog::build().unwrap());
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.draw_frame(f)).unwrap();
        app.mark_drawn();
        app
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[test]
    fn test_space_toggles_focused_item() {
        let mut app = drawn_app(80, 40);

        assert!(!press(&mut app, KeyCode::Char(' ')));
        assert!(is_checked(&app, 0, "adidas-50"));

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert!(is_checked(&app, 0, "adidas-40"));

        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Char(' '));
        assert!(!is_checked(&app, 0, "adidas-50"));
    }

    #[test]
    fn test_cursor_wraps_and_clamps() {
        let mut app = drawn_app(80, 40);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, Cursor { category: 0, slot: 10 });

        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, Cursor { category: 4, slot: 2 });

        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, Cursor { category: 0, slot: 2 });
    }

    #[test]
    fn test_keys_cannot_toggle_undrawn_items() {
        let mut app = drawn_app(30, 9);
        assert!(app.layout.categories.is_empty());

        for _ in 0..3 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char(' '));

        assert_eq!(app.store.version(), 0);
        assert!(!is_checked(&app, 3, "elitshin-40-0"));
    }

    #[test]
    fn test_navigation_stays_on_drawn_categories() {
        let mut app = drawn_app(80, 14);
        assert!(app.layout.truncated);
        let last = app.layout.categories.last().unwrap().index;
        assert!(last < 4);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor.category, last);

        press(&mut app, KeyCode::Char(' '));
        let focused = app.focused_item_id().unwrap();
        assert!(app.store.snapshot().item(last, &focused).unwrap().checked);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, Cursor { category: 0, slot: 0 });
    }

    #[test]
    fn test_reset_keys_follow_style_tags() {
        let mut app = App::new(catalog::build().unwrap());
        app.store.toggle(0, &ItemId::new("adidas-50"));
        app.store.toggle(2, &ItemId::new("pepsi-70"));

        press(&mut app, KeyCode::Char('b'));
        assert!(is_checked(&app, 0, "adidas-50"));
        assert!(!is_checked(&app, 2, "pepsi-70"));

        press(&mut app, KeyCode::Char('g'));
        assert!(!is_checked(&app, 0, "adidas-50"));

        app.store.toggle(1, &ItemId::new("busy-delete"));
        press(&mut app, KeyCode::Char('A'));
        assert_eq!(app.store.snapshot().counts().checked, 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(catalog::build().unwrap());
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(press(&mut app, KeyCode::Esc));
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_click_toggles_and_focuses() {
        let mut app = App::new(catalog::build().unwrap());
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| app.draw_frame(f)).unwrap();

        let cell = app.layout.categories[1].cells[0].clone();
        click(&mut app, cell.rect.x + 1, cell.rect.y);

        assert!(is_checked(&app, 1, "busy-40"));
        assert_eq!(app.cursor, Cursor { category: 1, slot: 0 });
        assert!(app.needs_redraw());
    }

    #[test]
    fn test_click_reset_button() {
        let mut app = App::new(catalog::build().unwrap());
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| app.draw_frame(f)).unwrap();
        app.mark_drawn();

        app.store.toggle(4, &ItemId::new("pepsi-big-100"));
        let reset_all = app.layout.buttons[0].rect;
        click(&mut app, reset_all.x, reset_all.y);

        assert!(!is_checked(&app, 4, "pepsi-big-100"));
        assert_eq!(app.store.version(), 2);
    }

    #[test]
    fn test_click_outside_controls_is_ignored() {
        let mut app = App::new(catalog::build().unwrap());
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| app.draw_frame(f)).unwrap();
        app.mark_drawn();

        click(&mut app, 0, 0);
        assert_eq!(app.store.version(), 0);
        assert!(!app.needs_redraw());
    }
}
