use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

/// Per-doctor availability for the next N days, as returned by
/// `GET /turnos/calendario/{id_medico}`. Keyed by date; the BTreeMap keeps
/// iteration in ascending chronological order.
pub type Calendario = BTreeMap<NaiveDate, DiaCalendario>;

/// One day inside the calendar. The endpoint has two historical shapes: a
/// bare array of slots, and a detailed record that can also mark the day as
/// blocked with a reason.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DiaCalendario {
    Detalle {
        #[serde(default)]
        horarios: Vec<NaiveDateTime>,
        #[serde(default)]
        bloqueado: bool,
        #[serde(default)]
        motivo_bloqueo: Option<String>,
    },
    Horarios(Vec<NaiveDateTime>),
}

impl DiaCalendario {
    pub fn horarios(&self) -> &[NaiveDateTime] {
        match self {
            DiaCalendario::Detalle { horarios, .. } => horarios,
            DiaCalendario::Horarios(horarios) => horarios,
        }
    }

    pub fn bloqueado(&self) -> bool {
        match self {
            DiaCalendario::Detalle { bloqueado, .. } => *bloqueado,
            DiaCalendario::Horarios(_) => false,
        }
    }

    pub fn motivo_bloqueo(&self) -> Option<&str> {
        match self {
            DiaCalendario::Detalle { motivo_bloqueo, .. } => motivo_bloqueo.as_deref(),
            DiaCalendario::Horarios(_) => None,
        }
    }
}
