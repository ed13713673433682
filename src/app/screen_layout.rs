//! Where every control lands on screen, and which action a click on it fires.
//!
//! The layout is a pure function of the terminal area and the current snapshot.
//! Each hit region carries the action it dispatches, bound to the category index
//! and item id that were on screen when it was computed.

use ratatui::layout::Rect;

use crate::{
    constants::{MARKS, RESET_BUTTONS, UI_SETTINGS},
    display,
    domain::{Checklist, ItemId, ResetTag},
};

use super::ui_helpers::text_width;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum Action {
    Toggle {
        category_index: usize,
        item_id: ItemId,
    },
    Reset(ResetTag),
}

#[derive(Clone, Debug)]
pub(super) struct ButtonSlot {
    pub rect: Rect,
    pub tag: ResetTag,
    pub label: &'static str,
}

#[derive(Clone, Debug)]
pub(super) struct ItemCell {
    pub rect: Rect,
    /// Position in display order.
    pub slot: usize,
    pub item_id: ItemId,
}

#[derive(Clone, Debug)]
pub(super) struct CategoryLayout {
    pub index: usize,
    pub block: Rect,
    pub cells: Vec<ItemCell>,
}

#[derive(Clone, Debug, Default)]
pub(super) struct ScreenLayout {
    pub buttons: Vec<ButtonSlot>,
    pub categories: Vec<CategoryLayout>,
    pub hint: Option<Rect>,
    /// Some controls did not fit and were left out.
    pub truncated: bool,
}

pub(super) fn button_text(label: &str) -> String {
    format!(" {} {} ", MARKS.reset_icon, label)
}

fn cell_width(label: &str) -> u16 {
    text_width(MARKS.unchecked) + 1 + text_width(label)
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

impl ScreenLayout {
    pub fn compute(area: Rect, checklist: &Checklist) -> Self {
        let mut layout = ScreenLayout::default();
        if area.width == 0 || area.height == 0 {
            return layout;
        }

        let right = area.right();
        let mut x = area.x;
        for button in &RESET_BUTTONS {
            let width = text_width(&button_text(button.label));
            if x.saturating_add(width) > right {
                layout.truncated = true;
                break;
            }
            layout.buttons.push(ButtonSlot {
                rect: Rect::new(x, area.y, width, 1),
                tag: button.tag,
                label: button.label,
            });
            x = x.saturating_add(width + UI_SETTINGS.button_gap);
        }

        let bottom = area.bottom().saturating_sub(1);
        if area.height > 1 {
            layout.hint = Some(Rect::new(area.x, bottom, area.width, 1));
        }

        let inner_width = area.width.saturating_sub(2);
        let mut y = area.y.saturating_add(UI_SETTINGS.header_rows);

        for (index, category) in checklist.categories().iter().enumerate() {
            let mut placed = Vec::with_capacity(category.items.len());
            let (mut col, mut row) = (0u16, 0u16);

            for (slot, item) in display::sort_for_display(&category.items)
                .into_iter()
                .enumerate()
            {
                let width = cell_width(&display::format_display(&item.value));
                if width > inner_width {
                    layout.truncated = true;
                    continue;
                }
                if col > 0 && col.saturating_add(width) > inner_width {
                    col = 0;
                    row += 1;
                }
                placed.push((col, row, width, slot, item.id.clone()));
                col = col.saturating_add(width + UI_SETTINGS.item_gap);
            }

            let height = row + 3;
            if y.saturating_add(height) > bottom {
                layout.truncated = true;
                break;
            }

            let block = Rect::new(area.x, y, area.width, height);
            let cells = placed
                .into_iter()
                .map(|(cx, cy, width, slot, item_id)| ItemCell {
                    rect: Rect::new(block.x + 1 + cx, block.y + 1 + cy, width, 1),
                    slot,
                    item_id,
                })
                .collect();
            layout.categories.push(CategoryLayout {
                index,
                block,
                cells,
            });
            y += height;
        }

        if layout.truncated {
            tracing::debug!(
                width = area.width,
                height = area.height,
                "layout truncated"
            );
        }

        layout
    }

    /// The drawn block for category `index`, if it fit on screen.
    pub fn category(&self, index: usize) -> Option<&CategoryLayout> {
        self.categories
            .iter()
            .find(|placed| placed.index == index)
    }

    pub fn cell_at(&self, column: u16, row: u16) -> Option<(usize, &ItemCell)> {
        self.categories.iter().find_map(|category| {
            category
                .cells
                .iter()
                .find(|cell| contains(cell.rect, column, row))
                .map(|cell| (category.index, cell))
        })
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<Action> {
        if let Some(button) = self
            .buttons
            .iter()
            .find(|button| contains(button.rect, column, row))
        {
            return Some(Action::Reset(button.tag));
        }

        self.cell_at(column, row)
            .map(|(category_index, cell)| Action::Toggle {
                category_index,
                item_id: cell.item_id.clone(),
            })
    }
}
