use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Form;
use chrono::NaiveDateTime;
use maud::{html, Markup};
use serde::Deserialize;

use shared_api::ApiError;
use shared_config::AppConfig;
use shared_models::{Especialidad, Medico, NuevoTurno, Paciente};
use shared_ui::{page, toast, toast_oob, ToastKind};

use crate::services::turnos::TurnoService;
use crate::views::{self, SeleccionTurno};
use crate::{CALENDARIO_DIAS, TURNO_DURACION_MINUTOS};

#[derive(Debug, Deserialize)]
pub struct MedicosQuery {
    pub especialidad_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CalendarioQuery {
    pub medico_id: i64,
    pub especialidad_id: i64,
    /// Slot the user clicked, if any. Present means re-render with that slot
    /// marked and the next-step button enabled.
    pub seleccionado: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmarQuery {
    pub medico_id: i64,
    pub especialidad_id: i64,
    pub fecha_hora: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmarForm {
    pub paciente_id: i64,
    pub medico_id: i64,
    pub especialidad_id: i64,
    pub fecha_hora: NaiveDateTime,
    #[serde(default)]
    pub motivo: String,
}

#[axum::debug_handler]
pub async fn turnos_page(State(state): State<Arc<AppConfig>>) -> Markup {
    let service = TurnoService::new(&state);

    let (contenido, flash) = match service.listar_especialidades().await {
        Ok(especialidades) => (views::pagina(&especialidades), None),
        Err(err) => {
            tracing::error!("Failed to load especialidades: {}", err);
            let flash = toast("Error al cargar especialidades", ToastKind::Error);
            (views::pagina(&[]), Some(flash))
        }
    };

    page("Turnos", contenido, flash)
}

#[axum::debug_handler]
pub async fn medicos_fragment(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<MedicosQuery>,
) -> Markup {
    let service = TurnoService::new(&state);

    // Changing the especialidad invalidates everything picked after it.
    let reinicio = views::pasos_reiniciados_oob();

    match service.medicos_por_especialidad(query.especialidad_id).await {
        Ok(medicos) => html! {
            (views::medicos_lista(&medicos, query.especialidad_id))
            (reinicio)
        },
        Err(err) => {
            tracing::error!(
                "Failed to load medicos for especialidad {}: {}",
                query.especialidad_id,
                err
            );
            html! {
                (views::paso_error("Error al cargar médicos"))
                (toast_oob("Error al cargar médicos", ToastKind::Error))
                (reinicio)
            }
        }
    }
}

#[axum::debug_handler]
pub async fn calendario_fragment(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<CalendarioQuery>,
) -> Markup {
    let service = TurnoService::new(&state);

    match service
        .calendario_disponibilidad(query.medico_id, CALENDARIO_DIAS, TURNO_DURACION_MINUTOS)
        .await
    {
        Ok(calendario) => {
            let seleccion = query.seleccionado.map(|fecha_hora| SeleccionTurno {
                medico_id: query.medico_id,
                especialidad_id: query.especialidad_id,
                fecha_hora,
            });
            let cuerpo = views::calendario(
                &calendario,
                query.medico_id,
                query.especialidad_id,
                query.seleccionado,
            );
            html! {
                (cuerpo)
                (views::btn_paso_siguiente(seleccion.as_ref(), true))
                (views::confirmacion_reiniciada_oob())
            }
        }
        Err(err) => {
            tracing::error!(
                "Failed to load calendario for medico {}: {}",
                query.medico_id,
                err
            );
            html! {
                (views::paso_error("Error al cargar horarios"))
                (toast_oob("Error al cargar horarios disponibles", ToastKind::Error))
                (views::btn_paso_siguiente(None, true))
                (views::confirmacion_reiniciada_oob())
            }
        }
    }
}

#[axum::debug_handler]
pub async fn confirmar_fragment(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<ConfirmarQuery>,
) -> Markup {
    let service = TurnoService::new(&state);

    match datos_confirmacion(&service, query.medico_id, query.especialidad_id).await {
        Ok((medico, especialidad, pacientes)) => {
            views::confirmacion(&medico, &especialidad, query.fecha_hora, &pacientes, None, "")
        }
        Err(err) => {
            tracing::error!("Failed to load confirmation data: {}", err);
            html! {
                (views::paso_error("Error al cargar los datos del turno"))
                (toast_oob("Error al cargar los datos del turno", ToastKind::Error))
            }
        }
    }
}

#[axum::debug_handler]
pub async fn confirmar_turno(
    State(state): State<Arc<AppConfig>>,
    Form(form): Form<ConfirmarForm>,
) -> Markup {
    let service = TurnoService::new(&state);

    let motivo = form.motivo.trim();
    let nuevo = NuevoTurno {
        id_paciente: form.paciente_id,
        id_medico: form.medico_id,
        id_especialidad: form.especialidad_id,
        fecha_hora: form.fecha_hora,
        duracion_minutos: TURNO_DURACION_MINUTOS,
        motivo: (!motivo.is_empty()).then(|| motivo.to_string()),
    };

    match service.crear_turno(&nuevo).await {
        Ok(turno) => html! {
            (views::reserva_confirmada(&turno))
            (toast_oob("Turno reservado correctamente", ToastKind::Success))
            (views::btn_paso_siguiente(None, true))
        },
        Err(err) => {
            tracing::error!("Failed to book turno: {}", err);
            let mensaje = err.message_or("Error al reservar el turno");
            // Put the form back with everything the user picked so they can
            // retry or adjust.
            let cuerpo =
                match datos_confirmacion(&service, form.medico_id, form.especialidad_id).await {
                    Ok((medico, especialidad, pacientes)) => views::confirmacion(
                        &medico,
                        &especialidad,
                        form.fecha_hora,
                        &pacientes,
                        Some(form.paciente_id),
                        motivo,
                    ),
                    Err(err) => {
                        tracing::error!("Failed to re-render confirmation form: {}", err);
                        views::paso_error("Error al cargar los datos del turno")
                    }
                };
            html! {
                (cuerpo)
                (toast_oob(&mensaje, ToastKind::Error))
            }
        }
    }
}

async fn datos_confirmacion(
    service: &TurnoService,
    medico_id: i64,
    especialidad_id: i64,
) -> Result<(Medico, Especialidad, Vec<Paciente>), ApiError> {
    let medico = service.obtener_medico(medico_id).await?;
    let especialidad = service.obtener_especialidad(especialidad_id).await?;
    let pacientes = service.listar_pacientes().await?;
    Ok((medico, especialidad, pacientes))
}
