use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Form;
use scraper::{Html, Selector};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use booking_cell::handlers::{
    confirmar_fragment, confirmar_turno, medicos_fragment, turnos_page, ConfirmarForm,
    ConfirmarQuery, MedicosQuery,
};
use shared_config::AppConfig;

fn test_config(server: &MockServer) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        turnero_api_url: server.uri(),
        turnero_api_token: String::new(),
    })
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

async fn mock_datos_confirmacion(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/medicos/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "matricula": "MP-1234",
            "nombre": "Juan",
            "apellido": "Pérez",
            "nombre_completo": "Dr. Juan Pérez"
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/especialidades/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "nombre": "Cardiología",
            "descripcion": null
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pacientes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "nombre": "María", "apellido": "López", "dni": "30111222"},
            {"id": 2, "nombre": "Carlos", "apellido": "Gómez", "dni": "28999000"}
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_turnos_page_renders_wizard_steps() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/especialidades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "nombre": "Cardiología", "descripcion": null},
            {"id": 2, "nombre": "Pediatría", "descripcion": null}
        ])))
        .mount(&mock_server)
        .await;

    let html = turnos_page(State(test_config(&mock_server)))
        .await
        .into_string();
    let document = Html::parse_document(&html);

    // Placeholder option plus one per especialidad.
    assert_eq!(
        document
            .select(&selector("#select-especialidad option"))
            .count(),
        3
    );
    assert_eq!(document.select(&selector("#medicos-container")).count(), 1);
    assert_eq!(document.select(&selector("#calendario-turnos")).count(), 1);
    assert_eq!(
        document.select(&selector("#confirmacion-container")).count(),
        1
    );

    let boton = document
        .select(&selector("#btn-step-4"))
        .next()
        .expect("next-step button");
    assert!(boton.value().attr("disabled").is_some());
}

#[tokio::test]
async fn test_turnos_page_renders_even_when_especialidades_fail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/especialidades"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "db down"})))
        .mount(&mock_server)
        .await;

    let html = turnos_page(State(test_config(&mock_server)))
        .await
        .into_string();
    let document = Html::parse_document(&html);

    assert_eq!(
        document
            .select(&selector("#select-especialidad option"))
            .count(),
        1
    );
    assert_eq!(document.select(&selector(".toast-error")).count(), 1);
    assert!(html.contains("Error al cargar especialidades"));
}

#[tokio::test]
async fn test_medicos_fragment_lists_doctors_and_resets_later_steps() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/medicos/especialidad/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "matricula": "MP-1234", "nombre": "Juan", "apellido": "Pérez",
             "nombre_completo": "Dr. Juan Pérez"},
            {"id": 11, "matricula": "MP-5678", "nombre": "Ana", "apellido": "García",
             "nombre_completo": null}
        ])))
        .mount(&mock_server)
        .await;

    let html = medicos_fragment(
        State(test_config(&mock_server)),
        Query(MedicosQuery { especialidad_id: 1 }),
    )
    .await
    .into_string();
    let document = Html::parse_document(&html);

    let botones: Vec<_> = document.select(&selector(".medico-btn")).collect();
    assert_eq!(botones.len(), 2);
    assert_eq!(
        botones[0].value().attr("hx-get"),
        Some("/turnos/_calendario?medico_id=10&especialidad_id=1")
    );
    assert!(html.contains("Dr. Juan Pérez"));
    // Doctors without a precomputed full name fall back to nombre + apellido.
    assert!(html.contains("Ana García"));
    assert!(html.contains("Mat. MP-5678"));

    // Steps 3 and 4 are reset out-of-band.
    let calendario = document
        .select(&selector("#calendario-turnos"))
        .next()
        .expect("calendar reset");
    assert_eq!(calendario.value().attr("hx-swap-oob"), Some("true"));
    let boton = document
        .select(&selector("#btn-step-4"))
        .next()
        .expect("next-step button");
    assert!(boton.value().attr("disabled").is_some());
}

#[tokio::test]
async fn test_medicos_fragment_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/medicos/especialidad/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let html = medicos_fragment(
        State(test_config(&mock_server)),
        Query(MedicosQuery { especialidad_id: 9 }),
    )
    .await
    .into_string();

    assert!(html.contains("No hay médicos disponibles para esta especialidad"));
}

#[tokio::test]
async fn test_medicos_fragment_failure_shows_error_and_toast() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/medicos/especialidad/1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&mock_server)
        .await;

    let html = medicos_fragment(
        State(test_config(&mock_server)),
        Query(MedicosQuery { especialidad_id: 1 }),
    )
    .await
    .into_string();
    let document = Html::parse_document(&html);

    let error = document
        .select(&selector(".paso-error"))
        .next()
        .expect("error message");
    assert_eq!(error.text().collect::<String>(), "Error al cargar médicos");
    assert_eq!(document.select(&selector(".toast-error")).count(), 1);
}

#[tokio::test]
async fn test_confirmar_fragment_renders_summary_and_patients() {
    let mock_server = MockServer::start().await;
    mock_datos_confirmacion(&mock_server).await;

    let html = confirmar_fragment(
        State(test_config(&mock_server)),
        Query(ConfirmarQuery {
            medico_id: 5,
            especialidad_id: 1,
            fecha_hora: "2025-02-03T09:30:00".parse().unwrap(),
        }),
    )
    .await
    .into_string();
    let document = Html::parse_document(&html);

    assert_eq!(
        document.select(&selector("#form-confirmar-turno")).count(),
        1
    );
    assert!(html.contains("Cardiología"));
    assert!(html.contains("Dr. Juan Pérez"));
    assert!(html.contains("lunes, 3 de febrero de 2025"));
    assert!(html.contains("09:30"));
    // Patients are listed as "Apellido Nombre (DNI)".
    assert!(html.contains("López María (30111222)"));
    assert_eq!(
        document.select(&selector("#turno-paciente option")).count(),
        3
    );

    let fecha = document
        .select(&selector("input[name=\"fecha_hora\"]"))
        .next()
        .expect("hidden fecha_hora");
    assert_eq!(fecha.value().attr("value"), Some("2025-02-03T09:30:00"));
}

#[tokio::test]
async fn test_confirmar_fragment_failure_shows_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/medicos/5"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "no existe"})))
        .mount(&mock_server)
        .await;

    let html = confirmar_fragment(
        State(test_config(&mock_server)),
        Query(ConfirmarQuery {
            medico_id: 5,
            especialidad_id: 1,
            fecha_hora: "2025-02-03T09:30:00".parse().unwrap(),
        }),
    )
    .await
    .into_string();

    assert!(html.contains("Error al cargar los datos del turno"));
}

#[tokio::test]
async fn test_confirmar_turno_posts_payload_and_shows_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/turnos"))
        .and(body_json(json!({
            "id_paciente": 2,
            "id_medico": 5,
            "id_especialidad": 1,
            "fecha_hora": "2025-02-03T09:30:00",
            "duracion_minutos": 30,
            "motivo": null
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 77,
            "fecha_hora": "2025-02-03T09:30:00",
            "duracion_minutos": 30
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let html = confirmar_turno(
        State(test_config(&mock_server)),
        Form(ConfirmarForm {
            paciente_id: 2,
            medico_id: 5,
            especialidad_id: 1,
            fecha_hora: "2025-02-03T09:30:00".parse().unwrap(),
            motivo: "   ".to_string(),
        }),
    )
    .await
    .into_string();
    let document = Html::parse_document(&html);

    assert_eq!(document.select(&selector(".reserva-exito")).count(), 1);
    assert!(html.contains("¡Turno reservado!"));
    assert!(html.contains("Turno #77"));
    assert!(html.contains("Turno reservado correctamente"));

    let boton = document
        .select(&selector("#btn-step-4"))
        .next()
        .expect("next-step button");
    assert!(boton.value().attr("disabled").is_some());
}

#[tokio::test]
async fn test_confirmar_turno_sends_trimmed_motivo() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/turnos"))
        .and(body_json(json!({
            "id_paciente": 1,
            "id_medico": 5,
            "id_especialidad": 1,
            "fecha_hora": "2025-02-03T09:30:00",
            "duracion_minutos": 30,
            "motivo": "Dolor de cabeza"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 78,
            "fecha_hora": "2025-02-03T09:30:00",
            "duracion_minutos": 30
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let html = confirmar_turno(
        State(test_config(&mock_server)),
        Form(ConfirmarForm {
            paciente_id: 1,
            medico_id: 5,
            especialidad_id: 1,
            fecha_hora: "2025-02-03T09:30:00".parse().unwrap(),
            motivo: "  Dolor de cabeza  ".to_string(),
        }),
    )
    .await
    .into_string();

    assert!(html.contains("Turno #78"));
}

#[tokio::test]
async fn test_confirmar_turno_failure_keeps_form_with_backend_detail() {
    let mock_server = MockServer::start().await;
    mock_datos_confirmacion(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/turnos"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "detail": "El horario seleccionado ya no está disponible"
        })))
        .mount(&mock_server)
        .await;

    let html = confirmar_turno(
        State(test_config(&mock_server)),
        Form(ConfirmarForm {
            paciente_id: 2,
            medico_id: 5,
            especialidad_id: 1,
            fecha_hora: "2025-02-03T09:30:00".parse().unwrap(),
            motivo: "Control anual".to_string(),
        }),
    )
    .await
    .into_string();
    let document = Html::parse_document(&html);

    // The form comes back with the user's choices intact.
    assert_eq!(
        document.select(&selector("#form-confirmar-turno")).count(),
        1
    );
    let elegido = document
        .select(&selector("option[value=\"2\"]"))
        .next()
        .expect("patient option");
    assert!(elegido.value().attr("selected").is_some());
    let motivo = document
        .select(&selector("#turno-motivo"))
        .next()
        .expect("motivo textarea");
    assert_eq!(motivo.text().collect::<String>(), "Control anual");

    assert!(html.contains("El horario seleccionado ya no está disponible"));
    assert_eq!(document.select(&selector(".toast-error")).count(), 1);
}
