use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paciente {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub dni: String,
}

impl Paciente {
    pub fn display_name(&self) -> String {
        format!("{} {} ({})", self.apellido, self.nombre, self.dni)
    }
}
