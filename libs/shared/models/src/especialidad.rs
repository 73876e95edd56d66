use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Especialidad {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
}

/// Body for `POST /especialidades` and `PUT /especialidades/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EspecialidadPayload {
    pub nombre: String,
    pub descripcion: Option<String>,
}

impl EspecialidadPayload {
    /// Builds the payload from raw form input: both fields trimmed, an empty
    /// description sent as null.
    pub fn from_form(nombre: &str, descripcion: &str) -> Self {
        let descripcion = descripcion.trim();

        Self {
            nombre: nombre.trim().to_string(),
            descripcion: if descripcion.is_empty() {
                None
            } else {
                Some(descripcion.to_string())
            },
        }
    }
}
