//! Record types and field descriptors.
//!
//! Both record kinds (Escuela, Estudiante) implement the [`Entity`] trait,
//! which carries the wire resource name and a static field descriptor table.
//! The generic form and table widgets are driven entirely by that table, so
//! there is exactly one form implementation and one table implementation for
//! the whole application.
//!
//! Persisted records carry a backend-assigned `id`; drafts submitted for
//! create/update are separate types that serialize without one.

use thiserror::Error;

mod escuela;
mod estudiante;

pub use escuela::{Escuela, EscuelaDraft};
pub use estudiante::{Estudiante, EstudianteDraft};

// =============================================================================
// Field descriptors
// =============================================================================

/// What kind of input a field accepts.
///
/// Mirrors the input element types of the backend's reference frontend:
/// free text, unsigned integers, and email addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Email,
}

/// Static description of one editable field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Human label, used for form labels and table headers.
    pub label: &'static str,
    pub kind: FieldKind,
}

// =============================================================================
// Draft assembly errors
// =============================================================================

/// Why a draft could not be assembled from the form slots.
///
/// These are the client-side gates: an offending submit is refused locally
/// and no request is issued. Messages are user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} es obligatorio")]
    Empty(&'static str),
    #[error("{0} debe ser un número")]
    NotANumber(&'static str),
    #[error("{0} no es un email válido")]
    InvalidEmail(&'static str),
}

// =============================================================================
// Entity
// =============================================================================

/// A record kind managed by the application.
///
/// One implementation per backend resource. Everything the generic widgets
/// and the REST client need to know about a record kind lives here.
pub trait Entity: Clone + Send + serde::de::DeserializeOwned + 'static {
    /// The record's field values without its identifier, as submitted for
    /// create and update.
    type Draft: serde::Serialize + Clone + PartialEq + std::fmt::Debug + Send + 'static;

    /// Collection name under `/api` (e.g. "escuelas").
    const RESOURCE: &'static str;
    /// Singular display name for form titles.
    const TITLE: &'static str;
    /// Plural display name for screen tabs and table titles.
    const TITLE_PLURAL: &'static str;

    /// Editable fields, in form and table order. The id is not listed.
    fn fields() -> &'static [FieldSpec];

    /// Backend-assigned identifier.
    fn id(&self) -> u64;

    /// Text projection of one field, used to seed the form slots.
    fn field_text(&self, field: usize) -> String;

    /// Assemble a draft from one text slot per field.
    ///
    /// Slots are taken in `fields()` order. Integer fields are coerced from
    /// their text, all fields must be non-empty.
    fn assemble(slots: &[String]) -> Result<Self::Draft, DraftError>;
}

// =============================================================================
// Slot coercion helpers
// =============================================================================

fn slot<'a>(slots: &'a [String], index: usize) -> &'a str {
    slots.get(index).map(String::as_str).unwrap_or("")
}

/// A required text field: must not be blank.
pub(crate) fn required(
    slots: &[String],
    index: usize,
    field: &'static str,
) -> Result<String, DraftError> {
    let text = slot(slots, index);
    if text.trim().is_empty() {
        Err(DraftError::Empty(field))
    } else {
        Ok(text.to_string())
    }
}

/// A required unsigned integer field, coerced from its text slot.
pub(crate) fn required_u32(
    slots: &[String],
    index: usize,
    field: &'static str,
) -> Result<u32, DraftError> {
    let text = required(slots, index, field)?;
    text.trim()
        .parse()
        .map_err(|_| DraftError::NotANumber(field))
}

/// A required email field. Format checking is shallow on purpose: the
/// backend's reference frontend relied on browser-level validation only.
pub(crate) fn required_email(
    slots: &[String],
    index: usize,
    field: &'static str,
) -> Result<String, DraftError> {
    let text = required(slots, index, field)?;
    if text.contains('@') {
        Ok(text)
    } else {
        Err(DraftError::InvalidEmail(field))
    }
}

// =============================================================================
// Tests
// =============================================================================
