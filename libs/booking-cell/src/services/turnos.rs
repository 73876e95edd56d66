use reqwest::Method;
use serde_json::json;
use tracing::debug;

use shared_api::{ApiError, TurneroClient};
use shared_config::AppConfig;
use shared_models::{Calendario, Especialidad, Medico, NuevoTurno, Paciente, Turno};

/// API operations behind the booking wizard. Every step of the wizard maps
/// to one call here.
pub struct TurnoService {
    client: TurneroClient,
}

impl TurnoService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: TurneroClient::new(config),
        }
    }

    /// Availability for one doctor over the next `dias` days, as a map from
    /// date to that day's slots or block marker.
    pub async fn calendario_disponibilidad(
        &self,
        medico_id: i64,
        dias: u32,
        duracion: i32,
    ) -> Result<Calendario, ApiError> {
        debug!("Fetching calendario for medico {}", medico_id);
        let path = format!(
            "/turnos/calendario/{}?dias={}&duracion={}",
            medico_id, dias, duracion
        );
        self.client.request(Method::GET, &path, None).await
    }

    pub async fn listar_especialidades(&self) -> Result<Vec<Especialidad>, ApiError> {
        debug!("Fetching especialidades");
        self.client.request(Method::GET, "/especialidades", None).await
    }

    pub async fn obtener_especialidad(&self, id: i64) -> Result<Especialidad, ApiError> {
        let path = format!("/especialidades/{}", id);
        self.client.request(Method::GET, &path, None).await
    }

    pub async fn medicos_por_especialidad(
        &self,
        especialidad_id: i64,
    ) -> Result<Vec<Medico>, ApiError> {
        debug!("Fetching medicos for especialidad {}", especialidad_id);
        let path = format!("/medicos/especialidad/{}", especialidad_id);
        self.client.request(Method::GET, &path, None).await
    }

    pub async fn obtener_medico(&self, id: i64) -> Result<Medico, ApiError> {
        let path = format!("/medicos/{}", id);
        self.client.request(Method::GET, &path, None).await
    }

    pub async fn listar_pacientes(&self) -> Result<Vec<Paciente>, ApiError> {
        debug!("Fetching pacientes");
        self.client.request(Method::GET, "/pacientes", None).await
    }

    pub async fn crear_turno(&self, turno: &NuevoTurno) -> Result<Turno, ApiError> {
        debug!(
            "Booking turno for paciente {} with medico {}",
            turno.id_paciente, turno.id_medico
        );
        self.client
            .request(Method::POST, "/turnos", Some(json!(turno)))
            .await
    }
}
