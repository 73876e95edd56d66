use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medico {
    pub id: i64,
    pub matricula: String,
    pub nombre: String,
    pub apellido: String,
    /// Present in the list endpoint, not guaranteed elsewhere.
    #[serde(default)]
    pub nombre_completo: Option<String>,
}

impl Medico {
    pub fn display_name(&self) -> String {
        self.nombre_completo
            .clone()
            .unwrap_or_else(|| format!("{} {}", self.nombre, self.apellido))
    }
}
