use reqwest::Method;
use serde_json::json;
use tracing::debug;

use shared_api::{ApiError, TurneroClient};
use shared_config::AppConfig;
use shared_models::{Especialidad, EspecialidadPayload};

/// Outcome of the save dispatch, so the caller can word its notification.
pub enum GuardarResultado {
    Creada(Especialidad),
    Actualizada(Especialidad),
}

pub struct EspecialidadService {
    client: TurneroClient,
}

impl EspecialidadService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: TurneroClient::new(config),
        }
    }

    pub async fn listar(&self) -> Result<Vec<Especialidad>, ApiError> {
        debug!("Fetching especialidades");

        self.client.request(Method::GET, "/especialidades", None).await
    }

    pub async fn obtener(&self, id: i64) -> Result<Especialidad, ApiError> {
        debug!("Fetching especialidad {}", id);

        let path = format!("/especialidades/{}", id);
        self.client.request(Method::GET, &path, None).await
    }

    pub async fn crear(&self, payload: &EspecialidadPayload) -> Result<Especialidad, ApiError> {
        debug!("Creating especialidad: {}", payload.nombre);

        self.client
            .request(Method::POST, "/especialidades", Some(json!(payload)))
            .await
    }

    pub async fn actualizar(
        &self,
        id: i64,
        payload: &EspecialidadPayload,
    ) -> Result<Especialidad, ApiError> {
        debug!("Updating especialidad {}", id);

        let path = format!("/especialidades/{}", id);
        self.client
            .request(Method::PUT, &path, Some(json!(payload)))
            .await
    }

    pub async fn eliminar(&self, id: i64) -> Result<(), ApiError> {
        debug!("Deleting especialidad {}", id);

        let path = format!("/especialidades/{}", id);
        self.client.request_empty(Method::DELETE, &path, None).await
    }

    /// Create-or-update dispatch for the modal form. An id means the form
    /// was opened in edit mode over that record; no id means create.
    pub async fn guardar(
        &self,
        id: Option<i64>,
        payload: &EspecialidadPayload,
    ) -> Result<GuardarResultado, ApiError> {
        match id {
            Some(id) => Ok(GuardarResultado::Actualizada(
                self.actualizar(id, payload).await?,
            )),
            None => Ok(GuardarResultado::Creada(self.crear(payload).await?)),
        }
    }
}
