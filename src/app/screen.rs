//! One CRUD screen: a form panel, a table panel and a focus ring.
//!
//! The screen wires the widgets to the controller: table actions become
//! `start_edit`/`delete` calls, form submits become `create`/`update`
//! calls, and after every change the form is re-bound to the controller's
//! editing slot so the slots always mirror it.

use crate::controller::Controller;
use crate::layout::ScreenLayout;
use crate::model::Entity;
use crate::renderer::FrameBuffer;
use crate::state::{FocusRing, FocusTarget, KeyboardEvent};
use crate::theme::Theme;
use crate::ui::{Form, Submit, Table, TableAction};

/// List-plus-form screen for one record kind.
pub struct CrudScreen<E: Entity> {
    controller: Controller<E>,
    form: Form<E>,
    table: Table<E>,
    focus: FocusRing,
}

impl<E: Entity> CrudScreen<E> {
    /// Build the screen and fetch the initial list.
    pub fn new(controller: Controller<E>) -> Self {
        let mut screen = Self {
            controller,
            form: Form::new(),
            table: Table::new(),
            focus: FocusRing::new(E::fields().len()),
        };
        screen.controller.refresh();
        screen
    }

    pub fn controller(&self) -> &Controller<E> {
        &self.controller
    }

    #[cfg(test)]
    pub fn controller_mut(&mut self) -> &mut Controller<E> {
        &mut self.controller
    }

    #[cfg(test)]
    pub fn form(&self) -> &Form<E> {
        &self.form
    }

    #[cfg(test)]
    pub fn focus(&self) -> &FocusRing {
        &self.focus
    }

    /// Re-bind the form whenever the identity of the editing record changed.
    fn sync_form(&mut self) {
        let editing = self.controller.editing();
        if editing.map(E::id) != self.form.bound() {
            self.form.bind(editing);
        }
    }

    /// Drain finished backend calls. Returns true if a redraw is needed.
    pub fn tick(&mut self) -> bool {
        let changed = self.controller.drain();
        if changed {
            self.table.clamp(self.controller.items().len());
        }
        self.sync_form();
        changed
    }

    /// Handle a key press. Returns true if a redraw is needed.
    pub fn handle_key(&mut self, event: &KeyboardEvent) -> bool {
        match event.key.as_str() {
            "Tab" => {
                self.focus.next();
                return true;
            }
            "BackTab" => {
                self.focus.previous();
                return true;
            }
            _ => {}
        }

        match self.focus.current() {
            FocusTarget::Field(slot) => match event.key.as_str() {
                "Enter" => {
                    match self.form.submit() {
                        Some(Submit::Create(draft)) => self.controller.create(draft),
                        Some(Submit::Update(draft)) => self.controller.update(draft),
                        None => {}
                    }
                    true
                }
                "Escape" => {
                    if self.form.is_editing() {
                        self.controller.cancel_edit();
                        self.sync_form();
                    }
                    true
                }
                _ => self.form.handle_slot_key(slot, event),
            },
            FocusTarget::Table => {
                let action = self.table.handle_key(event, self.controller.items());
                match action {
                    Some(TableAction::Edit(record)) => {
                        self.controller.start_edit(record);
                        self.sync_form();
                        // Jump to the form so typing lands in the record
                        self.focus.focus_field(0);
                        true
                    }
                    Some(TableAction::Delete(id)) => {
                        self.controller.delete(id);
                        true
                    }
                    None => true,
                }
            }
        }
    }

    /// Handle a mouse click. Returns true if a redraw is needed.
    pub fn click(&mut self, x: u16, y: u16, layout: &ScreenLayout) -> bool {
        if layout.form.contains(x, y) {
            if let Some(field) = Form::<E>::field_at(layout.form.inner(), y) {
                self.focus.focus_field(field);
                return true;
            }
            return false;
        }
        if layout.table.contains(x, y) {
            self.focus.focus_table();
            if let Some(row) = self.table.row_at(layout.table.inner(), y) {
                self.table.select(row, self.controller.items().len());
            }
            return true;
        }
        false
    }

    /// Draw both panels into the frame buffer.
    pub fn render(&mut self, buf: &mut FrameBuffer, layout: &ScreenLayout, theme: &Theme) {
        let focused_field = match self.focus.current() {
            FocusTarget::Field(i) => Some(i),
            FocusTarget::Table => None,
        };
        self.form.render(buf, layout.form, theme, focused_field);
        self.table.render(
            buf,
            layout.table,
            theme,
            self.controller.items(),
            self.focus.is_table(),
        );
    }
}

// =============================================================================
// Tests
// =============================================================================
