//! Generic create/edit form, driven by the entity's field descriptors.
//!
//! One text slot per field. Binding the form to a record unconditionally
//! resets every slot to that record's values (or clears them when unbound),
//! overwriting any in-progress keystrokes. That full overwrite is the
//! documented behavior of the reset, not an accident: the bound record is
//! the single source of truth for the slots.
//!
//! Submit assembles a draft from the slots and hands it to the create or
//! update path, chosen by whether a record is bound. A create clears the
//! slots immediately, before the request resolves. Assembly failures refuse
//! the submit locally and surface as a one-line notice; server errors never
//! reach the form.

use std::marker::PhantomData;

use crate::model::{Entity, FieldKind};
use crate::renderer::FrameBuffer;
use crate::state::KeyboardEvent;
use crate::theme::Theme;
use crate::types::{Attr, BorderStyle, Rect};

use super::line_edit::LineEdit;

/// What a submit resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum Submit<E: Entity> {
    Create(E::Draft),
    Update(E::Draft),
}

/// The form panel for one record kind.
pub struct Form<E: Entity> {
    slots: Vec<LineEdit>,
    /// Id of the bound record; `None` means the form creates.
    bound: Option<u64>,
    notice: Option<String>,
    _entity: PhantomData<E>,
}

impl<E: Entity> Form<E> {
    pub fn new() -> Self {
        Self {
            slots: vec![LineEdit::new(); E::fields().len()],
            bound: None,
            notice: None,
            _entity: PhantomData,
        }
    }

    /// Id of the record the form is bound to, if editing.
    pub fn bound(&self) -> Option<u64> {
        self.bound
    }

    pub fn is_editing(&self) -> bool {
        self.bound.is_some()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[cfg(test)]
    pub fn slot_text(&self, index: usize) -> &str {
        self.slots[index].text()
    }

    pub fn slot_mut(&mut self, index: usize) -> &mut LineEdit {
        &mut self.slots[index]
    }

    /// Bind to a record (edit mode) or to none (create mode).
    ///
    /// Every slot is reset from the record, or cleared when unbound; unsaved
    /// keystrokes are overwritten.
    pub fn bind(&mut self, record: Option<&E>) {
        self.bound = record.map(E::id);
        self.notice = None;
        match record {
            Some(record) => {
                for (i, slot) in self.slots.iter_mut().enumerate() {
                    slot.set_text(&record.field_text(i));
                }
            }
            None => {
                for slot in &mut self.slots {
                    slot.clear();
                }
            }
        }
    }

    /// Route an editing key to one slot.
    ///
    /// Integer slots accept digits only. Returns true if consumed.
    pub fn handle_slot_key(&mut self, slot: usize, event: &KeyboardEvent) -> bool {
        let Some(edit) = self.slots.get_mut(slot) else {
            return false;
        };
        if let Some(ch) = event.printable() {
            if E::fields()[slot].kind == FieldKind::Integer && !ch.is_ascii_digit() {
                return true;
            }
        }
        edit.handle_key(event)
    }

    /// Assemble the slots into a draft and pick the create or update path.
    ///
    /// On assembly failure the notice is set, nothing is cleared and `None`
    /// is returned; no request should be issued. A create clears the slots
    /// right away, not gated on the request outcome.
    pub fn submit(&mut self) -> Option<Submit<E>> {
        let texts: Vec<String> = self.slots.iter().map(|s| s.text().to_string()).collect();
        match E::assemble(&texts) {
            Ok(draft) => {
                self.notice = None;
                if self.bound.is_some() {
                    Some(Submit::Update(draft))
                } else {
                    for slot in &mut self.slots {
                        slot.clear();
                    }
                    Some(Submit::Create(draft))
                }
            }
            Err(err) => {
                self.notice = Some(err.to_string());
                None
            }
        }
    }

    // =========================================================================
    // Layout and rendering
    // =========================================================================

    /// Row of the input line for a field, inside the panel's inner rect.
    fn input_row(inner: Rect, field: usize) -> u16 {
        inner.y + 2 + (field as u16) * 3 + 1
    }

    /// Which field a click at `y` lands on, if any.
    pub fn field_at(inner: Rect, y: u16) -> Option<usize> {
        let fields = E::fields().len() as u16;
        for i in 0..fields {
            let label_row = inner.y + 2 + i * 3;
            if y == label_row || y == label_row + 1 {
                return Some(i as usize);
            }
        }
        None
    }

    /// Draw the panel. `focus` is the focused slot, if the form has focus.
    pub fn render(&self, buf: &mut FrameBuffer, rect: Rect, theme: &Theme, focus: Option<usize>) {
        let border = if focus.is_some() {
            theme.border_focus.resolve()
        } else {
            theme.border.resolve()
        };
        let bg = theme.background.resolve();
        buf.draw_border(rect, BorderStyle::Single, border, bg);

        let inner = rect.inner();
        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let clip = Some(&inner);

        let title = if self.is_editing() {
            format!("Editar {}", E::TITLE)
        } else {
            format!("Crear {}", E::TITLE)
        };
        buf.draw_text(
            inner.x,
            inner.y,
            &title,
            theme.primary.resolve(),
            bg,
            Attr::BOLD,
            clip,
        );

        for (i, spec) in E::fields().iter().enumerate() {
            let label_row = inner.y + 2 + (i as u16) * 3;
            if label_row + 1 >= inner.bottom() {
                break;
            }
            buf.draw_text(
                inner.x,
                label_row,
                spec.label,
                theme.text_muted.resolve(),
                bg,
                Attr::NONE,
                clip,
            );

            let input_row = Self::input_row(inner, i);
            let surface = theme.surface.resolve();
            buf.fill_rect(Rect::new(inner.x, input_row, inner.width, 1), surface);

            let slot = &self.slots[i];
            let width = inner.width as usize;
            // Keep the cursor in view when the text outgrows the panel
            let window = slot.cursor().saturating_sub(width.saturating_sub(1));
            let visible: String = slot.text().chars().skip(window).take(width).collect();
            buf.draw_text(
                inner.x,
                input_row,
                &visible,
                theme.text.resolve(),
                surface,
                Attr::NONE,
                clip,
            );

            if focus == Some(i) {
                let cursor_x = inner.x + (slot.cursor() - window) as u16;
                if let Some(cell) = buf.get(cursor_x, input_row) {
                    let cell = *cell;
                    buf.set_cell(
                        cursor_x,
                        input_row,
                        cell.char,
                        cell.fg,
                        cell.bg,
                        cell.attrs | Attr::INVERSE,
                        clip,
                    );
                }
            }
        }

        if let Some(notice) = &self.notice {
            if inner.height >= 2 {
                buf.draw_text(
                    inner.x,
                    inner.bottom() - 2,
                    notice,
                    theme.error.resolve(),
                    bg,
                    Attr::NONE,
                    clip,
                );
            }
        }

        let hint = if self.is_editing() {
            "Enter actualizar · Esc cancelar"
        } else {
            "Enter crear"
        };
        buf.draw_text(
            inner.x,
            inner.bottom() - 1,
            hint,
            theme.text_muted.resolve(),
            bg,
            Attr::NONE,
            clip,
        );
    }
}

impl<E: Entity> Default for Form<E> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Escuela, EscuelaDraft, Estudiante};

    fn escuela() -> Escuela {
        Escuela {
            id: 3,
            nombre: "ETS".to_string(),
            creditos: 12,
            num_estudiantes: 150,
        }
    }

    #[test]
    fn test_bind_populates_every_slot() {
        let mut form: Form<Escuela> = Form::new();
        form.bind(Some(&escuela()));

        assert_eq!(form.bound(), Some(3));
        assert_eq!(form.slot_text(0), "ETS");
        assert_eq!(form.slot_text(1), "12");
        assert_eq!(form.slot_text(2), "150");
    }

    #[test]
    fn test_bind_none_clears_every_slot() {
        let mut form: Form<Escuela> = Form::new();
        form.bind(Some(&escuela()));
        form.bind(None);

        assert_eq!(form.bound(), None);
        for i in 0..3 {
            assert_eq!(form.slot_text(i), "");
        }
    }

    #[test]
    fn test_bind_overwrites_in_progress_keystrokes() {
        let mut form: Form<Escuela> = Form::new();
        form.slot_mut(0).set_text("medio escrit");
        form.bind(Some(&escuela()));
        assert_eq!(form.slot_text(0), "ETS");
    }

    #[test]
    fn test_submit_unbound_creates_and_clears() {
        let mut form: Form<Escuela> = Form::new();
        form.slot_mut(0).set_text("Nueva");
        form.slot_mut(1).set_text("8");
        form.slot_mut(2).set_text("40");

        let submit = form.submit().unwrap();
        assert_eq!(
            submit,
            Submit::Create(EscuelaDraft {
                nombre: "Nueva".to_string(),
                creditos: 8,
                num_estudiantes: 40,
            })
        );
        // Cleared immediately, not gated on the request outcome
        assert_eq!(form.slot_text(0), "");
        assert_eq!(form.slot_text(1), "");
    }

    #[test]
    fn test_submit_bound_updates_and_leaves_slots() {
        // The worked example: créditos edited from 12 to 15
        let mut form: Form<Escuela> = Form::new();
        form.bind(Some(&escuela()));
        form.slot_mut(1).set_text("15");

        let submit = form.submit().unwrap();
        assert_eq!(
            submit,
            Submit::Update(EscuelaDraft {
                nombre: "ETS".to_string(),
                creditos: 15,
                num_estudiantes: 150,
            })
        );
        // Slots stay as submitted; they clear on the later unbind
        assert_eq!(form.slot_text(1), "15");
        form.bind(None);
        assert_eq!(form.slot_text(1), "");
    }

    #[test]
    fn test_submit_refuses_bad_slots_with_a_notice() {
        let mut form: Form<Escuela> = Form::new();
        form.slot_mut(0).set_text("Nueva");
        form.slot_mut(1).set_text("");
        form.slot_mut(2).set_text("40");

        assert!(form.submit().is_none());
        assert_eq!(form.notice(), Some("Créditos es obligatorio"));
        // Nothing was cleared
        assert_eq!(form.slot_text(0), "Nueva");

        // A good submit clears the notice
        form.slot_mut(1).set_text("8");
        assert!(form.submit().is_some());
        assert_eq!(form.notice(), None);
    }

    #[test]
    fn test_integer_slots_accept_digits_only() {
        let mut form: Form<Escuela> = Form::new();
        assert!(form.handle_slot_key(1, &KeyboardEvent::new("1")));
        assert!(form.handle_slot_key(1, &KeyboardEvent::new("x")));
        assert!(form.handle_slot_key(1, &KeyboardEvent::new("5")));
        assert_eq!(form.slot_text(1), "15");

        // Text slots take anything printable
        assert!(form.handle_slot_key(0, &KeyboardEvent::new("ñ")));
        assert_eq!(form.slot_text(0), "ñ");
    }

    #[test]
    fn test_render_shows_labels_values_and_hint() {
        let mut form: Form<Escuela> = Form::new();
        form.bind(Some(&escuela()));

        let mut buf = FrameBuffer::new(38, 20);
        let theme = Theme::default();
        form.render(&mut buf, Rect::new(0, 0, 38, 20), &theme, Some(0));

        assert!(buf.row_text(1).contains("Editar Escuela"));
        assert!(buf.row_text(3).contains("Nombre"));
        assert!(buf.row_text(4).contains("ETS"));
        assert!(buf.row_text(18).contains("Esc cancelar"));
    }

    #[test]
    fn test_field_at_maps_clicks_to_slots() {
        let inner = Rect::new(1, 1, 36, 18);
        assert_eq!(Form::<Estudiante>::field_at(inner, 3), Some(0));
        assert_eq!(Form::<Estudiante>::field_at(inner, 4), Some(0));
        assert_eq!(Form::<Estudiante>::field_at(inner, 6), Some(1));
        assert_eq!(Form::<Estudiante>::field_at(inner, 5), None);
        assert_eq!(Form::<Estudiante>::field_at(inner, 0), None);
    }
}
