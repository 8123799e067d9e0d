//! Generic list table, driven by the entity's field descriptors.
//!
//! Pure rendering of the controller's items in server order: a header row
//! from the descriptor labels plus an ID column, one row per record. No
//! sorting, filtering or pagination. Row identity is the record id; the
//! selection is a terminal affordance standing in for the per-row Edit and
//! Delete buttons of a pointer UI.

use std::marker::PhantomData;

use crate::model::Entity;
use crate::renderer::FrameBuffer;
use crate::state::KeyboardEvent;
use crate::theme::Theme;
use crate::types::{Attr, BorderStyle, Rect};

/// Width of the ID column, selection marker included.
const ID_COLUMN: u16 = 6;

/// A row action requested from the table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableAction<E: Entity> {
    /// Begin editing this record.
    Edit(E),
    /// Delete the record with this id.
    Delete(u64),
}

/// The table panel for one record kind.
pub struct Table<E: Entity> {
    selected: usize,
    scroll: usize,
    _entity: PhantomData<E>,
}

impl<E: Entity> Table<E> {
    pub fn new() -> Self {
        Self {
            selected: 0,
            scroll: 0,
            _entity: PhantomData,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    #[cfg(test)]
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Select a row directly (from a mouse click).
    pub fn select(&mut self, index: usize, len: usize) {
        if index < len {
            self.selected = index;
        }
    }

    /// Keep the selection valid when the list shrinks.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.scroll = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Which row a click at `y` lands on, header and scroll accounted for.
    pub fn row_at(&self, inner: Rect, y: u16) -> Option<usize> {
        if y <= inner.y || y >= inner.bottom() {
            return None;
        }
        Some((y - inner.y - 1) as usize + self.scroll)
    }

    /// Handle a key while the table has focus.
    pub fn handle_key(&mut self, event: &KeyboardEvent, items: &[E]) -> Option<TableAction<E>> {
        self.clamp(items.len());
        if items.is_empty() {
            return None;
        }
        match event.key.as_str() {
            "ArrowUp" => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            "ArrowDown" => {
                self.selected = (self.selected + 1).min(items.len() - 1);
                None
            }
            "Home" => {
                self.selected = 0;
                None
            }
            "End" => {
                self.selected = items.len() - 1;
                None
            }
            "Enter" | "e" => Some(TableAction::Edit(items[self.selected].clone())),
            "Delete" | "d" => Some(TableAction::Delete(items[self.selected].id())),
            _ => None,
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Column x-offsets and widths inside `inner`: ID first, then one
    /// column per field, the last one absorbing the remainder.
    fn columns(inner: Rect) -> Vec<(u16, u16)> {
        let fields = E::fields().len() as u16;
        let mut columns = vec![(inner.x, ID_COLUMN.min(inner.width))];
        if inner.width <= ID_COLUMN || fields == 0 {
            return columns;
        }
        let rest = inner.width - ID_COLUMN;
        let each = (rest / fields).max(1);
        for i in 0..fields {
            let x = inner.x + ID_COLUMN + i * each;
            let width = if i == fields - 1 {
                rest - each * (fields - 1)
            } else {
                each
            };
            columns.push((x, width));
        }
        columns
    }

    /// Draw the panel. Scrolls to keep the selected row in view.
    pub fn render(
        &mut self,
        buf: &mut FrameBuffer,
        rect: Rect,
        theme: &Theme,
        items: &[E],
        focused: bool,
    ) {
        let border = if focused {
            theme.border_focus.resolve()
        } else {
            theme.border.resolve()
        };
        let bg = theme.background.resolve();
        buf.draw_border(rect, BorderStyle::Single, border, bg);

        let inner = rect.inner();
        if inner.width == 0 || inner.height < 2 {
            return;
        }
        let clip = Some(&inner);

        self.clamp(items.len());
        let visible = (inner.height - 1) as usize;
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + visible {
            self.scroll = self.selected + 1 - visible;
        }

        let columns = Self::columns(inner);

        // Header: ID then the field labels
        buf.draw_text(
            columns[0].0 + 2,
            inner.y,
            "ID",
            theme.primary.resolve(),
            bg,
            Attr::BOLD,
            clip,
        );
        for (spec, (x, width)) in E::fields().iter().zip(columns.iter().skip(1)) {
            let label: String = spec.label.chars().take(*width as usize).collect();
            buf.draw_text(
                *x,
                inner.y,
                &label,
                theme.primary.resolve(),
                bg,
                Attr::BOLD,
                clip,
            );
        }

        if items.is_empty() {
            buf.draw_text(
                inner.x + 2,
                inner.y + 1,
                "(sin registros)",
                theme.text_muted.resolve(),
                bg,
                Attr::NONE,
                clip,
            );
            return;
        }

        for (row, item) in items.iter().enumerate().skip(self.scroll).take(visible) {
            let y = inner.y + 1 + (row - self.scroll) as u16;
            let is_selected = row == self.selected;
            let attrs = if is_selected && focused {
                Attr::INVERSE
            } else {
                Attr::NONE
            };
            let fg = theme.text.resolve();

            if is_selected {
                buf.fill_rect(Rect::new(inner.x, y, inner.width, 1), bg);
                buf.draw_text(
                    inner.x,
                    y,
                    "▸",
                    theme.accent.resolve(),
                    bg,
                    Attr::NONE,
                    clip,
                );
            }

            buf.draw_text(
                columns[0].0 + 2,
                y,
                &item.id().to_string(),
                fg,
                bg,
                attrs,
                clip,
            );
            for (i, (x, width)) in columns.iter().skip(1).enumerate() {
                let text: String = item
                    .field_text(i)
                    .chars()
                    .take((*width).saturating_sub(1) as usize)
                    .collect();
                buf.draw_text(*x, y, &text, fg, bg, attrs, clip);
            }
        }
    }
}

impl<E: Entity> Default for Table<E> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
