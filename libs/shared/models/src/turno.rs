use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Body for `POST /turnos`. The backend re-validates availability, overlap
/// and referential rules; this tier only forwards the chosen slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NuevoTurno {
    pub id_paciente: i64,
    pub id_medico: i64,
    pub id_especialidad: i64,
    pub fecha_hora: NaiveDateTime,
    pub duracion_minutos: i32,
    pub motivo: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Turno {
    pub id: i64,
    pub fecha_hora: NaiveDateTime,
    pub duracion_minutos: i32,
}
