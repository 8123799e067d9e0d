//! The Escuela record: a school with credit and enrollment counts.

use serde::{Deserialize, Serialize};

use super::{required, required_u32, DraftError, Entity, FieldKind, FieldSpec};

/// A school as persisted by the backend.
///
/// Counts are conceptually non-negative but otherwise unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Escuela {
    pub id: u64,
    pub nombre: String,
    pub creditos: u32,
    pub num_estudiantes: u32,
}

/// Field values of an [`Escuela`] without its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EscuelaDraft {
    pub nombre: String,
    pub creditos: u32,
    pub num_estudiantes: u32,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        label: "Nombre",
        kind: FieldKind::Text,
    },
    FieldSpec {
        label: "Créditos",
        kind: FieldKind::Integer,
    },
    FieldSpec {
        label: "Número de estudiantes",
        kind: FieldKind::Integer,
    },
];

impl Entity for Escuela {
    type Draft = EscuelaDraft;

    const RESOURCE: &'static str = "escuelas";
    const TITLE: &'static str = "Escuela";
    const TITLE_PLURAL: &'static str = "Escuelas";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn field_text(&self, field: usize) -> String {
        match field {
            0 => self.nombre.clone(),
            1 => self.creditos.to_string(),
            2 => self.num_estudiantes.to_string(),
            _ => String::new(),
        }
    }

    fn assemble(slots: &[String]) -> Result<EscuelaDraft, DraftError> {
        Ok(EscuelaDraft {
            nombre: required(slots, 0, "Nombre")?,
            creditos: required_u32(slots, 1, "Créditos")?,
            num_estudiantes: required_u32(slots, 2, "Número de estudiantes")?,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
