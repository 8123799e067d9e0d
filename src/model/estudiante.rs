//! The Estudiante record: a student identified by a business code.

use serde::{Deserialize, Serialize};

use super::{required, required_email, DraftError, Entity, FieldKind, FieldSpec};

/// A student as persisted by the backend.
///
/// `codigo` is intended to be unique per business rule; the client does not
/// enforce that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estudiante {
    pub id: u64,
    pub codigo: String,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
}

/// Field values of an [`Estudiante`] without its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstudianteDraft {
    pub codigo: String,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        label: "Código",
        kind: FieldKind::Text,
    },
    FieldSpec {
        label: "Nombre",
        kind: FieldKind::Text,
    },
    FieldSpec {
        label: "Apellido",
        kind: FieldKind::Text,
    },
    FieldSpec {
        label: "Email",
        kind: FieldKind::Email,
    },
];

impl Entity for Estudiante {
    type Draft = EstudianteDraft;

    const RESOURCE: &'static str = "estudiantes";
    const TITLE: &'static str = "Estudiante";
    const TITLE_PLURAL: &'static str = "Estudiantes";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn field_text(&self, field: usize) -> String {
        match field {
            0 => self.codigo.clone(),
            1 => self.nombre.clone(),
            2 => self.apellido.clone(),
            3 => self.email.clone(),
            _ => String::new(),
        }
    }

    fn assemble(slots: &[String]) -> Result<EstudianteDraft, DraftError> {
        Ok(EstudianteDraft {
            codigo: required(slots, 0, "Código")?,
            nombre: required(slots, 1, "Nombre")?,
            apellido: required(slots, 2, "Apellido")?,
            email: required_email(slots, 3, "Email")?,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Estudiante {
        Estudiante {
            id: 7,
            codigo: "A-0412".to_string(),
            nombre: "Ana".to_string(),
            apellido: "Mora".to_string(),
            email: "ana@uni.edu".to_string(),
        }
    }

    #[test]
    fn test_round_trip_json() {
        let json = serde_json::to_string(&sample()).unwrap();
        let back: Estudiante = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_draft_serializes_without_id() {
        let draft = EstudianteDraft {
            codigo: "A-0412".to_string(),
            nombre: "Ana".to_string(),
            apellido: "Mora".to_string(),
            email: "ana@uni.edu".to_string(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["codigo"], "A-0412");
    }

    #[test]
    fn test_assemble_requires_valid_email() {
        let mut slots = vec![
            "A-0412".to_string(),
            "Ana".to_string(),
            "Mora".to_string(),
            "ana@uni.edu".to_string(),
        ];
        assert!(Estudiante::assemble(&slots).is_ok());

        slots[3] = "ana.uni.edu".to_string();
        assert_eq!(
            Estudiante::assemble(&slots),
            Err(DraftError::InvalidEmail("Email"))
        );
    }

    #[test]
    fn test_assemble_requires_every_field() {
        let slots = vec![
            "A-0412".to_string(),
            "Ana".to_string(),
            "".to_string(),
            "ana@uni.edu".to_string(),
        ];
        assert_eq!(
            Estudiante::assemble(&slots),
            Err(DraftError::Empty("Apellido"))
        );
    }
}
