use chrono::{Locale, NaiveDateTime};
use maud::{html, Markup};

use shared_models::{Calendario, Especialidad, Medico, Paciente, Turno};

const FORMATO_ISO: &str = "%Y-%m-%dT%H:%M:%S";
const FORMATO_FECHA_LARGA: &str = "%A, %-d de %B de %Y";

const PLACEHOLDER_MEDICOS: &str = "Seleccione primero una especialidad";
const PLACEHOLDER_CALENDARIO: &str = "Seleccione un médico para ver su disponibilidad";
const PLACEHOLDER_CONFIRMACION: &str = "Seleccione un horario para continuar";

/// Slot the user clicked, threaded through the calendar re-render so the
/// next-step button knows where to go.
pub struct SeleccionTurno {
    pub medico_id: i64,
    pub especialidad_id: i64,
    pub fecha_hora: NaiveDateTime,
}

/// Body of the booking wizard. Steps 2 to 4 start as placeholders and get
/// filled in by fragment swaps as the user advances.
pub fn pagina(especialidades: &[Especialidad]) -> Markup {
    html! {
        div class="page-header" {
            h2 { "Reservar Turno" }
        }
        div class="wizard" {
            section class="wizard-step" {
                h3 { "1. Especialidad" }
                select id="select-especialidad" name="especialidad_id"
                    hx-get="/turnos/_medicos" hx-target="#medicos-container" hx-trigger="change" {
                    option value="" disabled selected { "Seleccione una especialidad" }
                    @for especialidad in especialidades {
                        option value=(especialidad.id) { (especialidad.nombre) }
                    }
                }
            }
            section class="wizard-step" {
                h3 { "2. Médico" }
                div id="medicos-container" {
                    (paso_vacio(PLACEHOLDER_MEDICOS))
                }
            }
            section class="wizard-step" {
                h3 { "3. Horario" }
                div id="calendario-turnos" {
                    (paso_vacio(PLACEHOLDER_CALENDARIO))
                }
                (btn_paso_siguiente(None, false))
            }
            section class="wizard-step" {
                h3 { "4. Confirmación" }
                div id="confirmacion-container" {
                    (paso_vacio(PLACEHOLDER_CONFIRMACION))
                }
            }
        }
    }
}

pub fn medicos_lista(medicos: &[Medico], especialidad_id: i64) -> Markup {
    if medicos.is_empty() {
        return paso_vacio("No hay médicos disponibles para esta especialidad");
    }

    html! {
        div class="medicos-lista" {
            @for medico in medicos {
                button class="medico-btn"
                    hx-get={
                        "/turnos/_calendario?medico_id=" (medico.id)
                        "&especialidad_id=" (especialidad_id)
                    }
                    hx-target="#calendario-turnos" {
                    i class="fas fa-user-doctor" {}
                    span class="medico-nombre" { (medico.display_name()) }
                    span class="medico-matricula" { "Mat. " (medico.matricula) }
                }
            }
        }
    }
}

/// One card per day, in date order. Blocked days show the block reason in
/// place of the slot grid; clicking a slot re-renders the calendar with that
/// slot marked.
pub fn calendario(
    calendario: &Calendario,
    medico_id: i64,
    especialidad_id: i64,
    seleccionado: Option<NaiveDateTime>,
) -> Markup {
    if calendario.is_empty() {
        return paso_vacio("No hay horarios disponibles en los próximos 14 días");
    }

    html! {
        @for (fecha, dia) in calendario {
            div.fecha-card.fecha-bloqueada[dia.bloqueado()] {
                div class="fecha-header" {
                    i class="fas fa-calendar-day" {}
                    span { (fecha.format_localized(FORMATO_FECHA_LARGA, Locale::es_AR)) }
                    @if dia.bloqueado() {
                        span class="badge-bloqueado" {
                            i class="fas fa-ban" {} " Bloqueado"
                        }
                    } @else {
                        span class="badge-count" { (dia.horarios().len()) " turnos" }
                    }
                }
                @if dia.bloqueado() {
                    div class="mensaje-bloqueo" {
                        i class="fas fa-info-circle" {}
                        div {
                            p { strong { "Médico no disponible" } }
                            p class="motivo-bloqueo" {
                                (dia.motivo_bloqueo().unwrap_or("Sin especificar"))
                            }
                        }
                    }
                } @else {
                    div class="horarios-mini-grid" {
                        @for horario in dia.horarios() {
                            @let es_seleccionado = seleccionado == Some(*horario);
                            button.horario-mini-btn.selected[es_seleccionado]
                                hx-get={
                                    "/turnos/_calendario?medico_id=" (medico_id)
                                    "&especialidad_id=" (especialidad_id)
                                    "&seleccionado=" (horario.format(FORMATO_ISO))
                                }
                                hx-target="#calendario-turnos" {
                                (horario.format("%H:%M"))
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Next-step control under the calendar. Enabled only while a slot is
/// selected; swapped out-of-band by the fragment handlers.
pub fn btn_paso_siguiente(seleccion: Option<&SeleccionTurno>, oob: bool) -> Markup {
    let oob_attr = oob.then_some("true");
    match seleccion {
        Some(sel) => html! {
            button id="btn-step-4" class="btn btn-primary" hx-swap-oob=[oob_attr]
                hx-get={
                    "/turnos/_confirmar?medico_id=" (sel.medico_id)
                    "&especialidad_id=" (sel.especialidad_id)
                    "&fecha_hora=" (sel.fecha_hora.format(FORMATO_ISO))
                }
                hx-target="#confirmacion-container" {
                "Continuar " i class="fas fa-arrow-right" {}
            }
        },
        None => html! {
            button id="btn-step-4" class="btn btn-primary" disabled hx-swap-oob=[oob_attr] {
                "Continuar " i class="fas fa-arrow-right" {}
            }
        },
    }
}

/// Out-of-band reset of steps 3 and 4, for responses that invalidate the
/// current selection.
pub fn pasos_reiniciados_oob() -> Markup {
    html! {
        div id="calendario-turnos" hx-swap-oob="true" {
            (paso_vacio(PLACEHOLDER_CALENDARIO))
        }
        (confirmacion_reiniciada_oob())
        (btn_paso_siguiente(None, true))
    }
}

pub fn confirmacion_reiniciada_oob() -> Markup {
    html! {
        div id="confirmacion-container" hx-swap-oob="true" {
            (paso_vacio(PLACEHOLDER_CONFIRMACION))
        }
    }
}

/// Last step of the wizard: booking summary plus patient and reason fields.
/// The chosen slot travels in hidden inputs.
pub fn confirmacion(
    medico: &Medico,
    especialidad: &Especialidad,
    fecha_hora: NaiveDateTime,
    pacientes: &[Paciente],
    paciente_seleccionado: Option<i64>,
    motivo: &str,
) -> Markup {
    html! {
        form id="form-confirmar-turno" hx-post="/turnos/confirmar"
            hx-target="#confirmacion-container" {
            input type="hidden" name="medico_id" value=(medico.id);
            input type="hidden" name="especialidad_id" value=(especialidad.id);
            input type="hidden" name="fecha_hora" value=(fecha_hora.format(FORMATO_ISO));
            div class="resumen-turno" {
                p { strong { "Especialidad: " } (especialidad.nombre) }
                p { strong { "Médico: " } (medico.display_name()) }
                p {
                    strong { "Fecha: " }
                    (fecha_hora.date().format_localized(FORMATO_FECHA_LARGA, Locale::es_AR))
                    " a las " (fecha_hora.format("%H:%M")) " hs"
                }
            }
            div class="form-group" {
                label for="turno-paciente" { "Paciente" }
                select id="turno-paciente" name="paciente_id" required {
                    option value="" disabled selected[paciente_seleccionado.is_none()] {
                        "Seleccione un paciente"
                    }
                    @for paciente in pacientes {
                        option value=(paciente.id)
                            selected[paciente_seleccionado == Some(paciente.id)] {
                            (paciente.display_name())
                        }
                    }
                }
            }
            div class="form-group" {
                label for="turno-motivo" { "Motivo" }
                textarea id="turno-motivo" name="motivo" rows="2"
                    placeholder="Motivo de la consulta (opcional)" {
                    (motivo)
                }
            }
            button type="submit" class="btn btn-primary" {
                i class="fas fa-check" {} " Confirmar Turno"
            }
        }
    }
}

pub fn reserva_confirmada(turno: &Turno) -> Markup {
    html! {
        div class="reserva-exito" {
            i class="fas fa-circle-check" {}
            h3 { "¡Turno reservado!" }
            p {
                "Turno #" (turno.id) " confirmado para el "
                (turno.fecha_hora.date().format_localized(FORMATO_FECHA_LARGA, Locale::es_AR))
                " a las " (turno.fecha_hora.format("%H:%M")) " hs."
            }
            a class="btn btn-secondary" href="/turnos" { "Reservar otro turno" }
        }
    }
}

pub fn paso_vacio(mensaje: &str) -> Markup {
    html! { p class="paso-vacio" { (mensaje) } }
}

pub fn paso_error(mensaje: &str) -> Markup {
    html! { p class="paso-error" { (mensaje) } }
}
