mod common;

use common::*;
use rgiras::api::{check_status, decode_response};
use rgiras::errors::AppError;
use rgiras::models::asistencia::Asistencia;
use rgiras::models::gira::Gira;
use rgiras::models::incidencia::IncidenciaPage;
use rgiras::models::sede::Sede;
use serde_json::json;

#[test]
fn success_passes_through() {
    assert!(check_status(200, "", "/api/giras").is_ok());
    assert!(check_status(204, "", "/api/giras/1").is_ok());
}

#[test]
fn unauthorized_maps_to_session_error() {
    let err = check_status(401, r#"{"message":"jwt expired"}"#, "/api/giras").unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));
}

#[test]
fn not_found_prefers_backend_message() {
    match check_status(404, r#"{"message":"Gira no encontrada"}"#, "/api/giras/9").unwrap_err() {
        AppError::NotFound(m) => assert_eq!(m, "Gira no encontrada"),
        other => panic!("unexpected {other:?}"),
    }
    match check_status(404, "", "/api/giras/9").unwrap_err() {
        AppError::NotFound(m) => assert_eq!(m, "/api/giras/9"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn server_errors_get_a_generic_message() {
    match check_status(500, "<html>boom</html>", "/api/sedes").unwrap_err() {
        AppError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal server error");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn backend_error_field_aliases() {
    match check_status(400, r#"{"error":"DNI duplicado"}"#, "/api/usuarios").unwrap_err() {
        AppError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "DNI duplicado");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn decode_list_of_giras() {
    let body = json!([
        serde_json::to_value(gira("g1", "u1", "Instalación", "Pendiente", true, "2025-03-03", 10.0, 0.0)).unwrap()
    ])
    .to_string();
    let giras: Vec<Gira> = decode_response(200, &body, "/api/giras").unwrap();
    assert_eq!(giras.len(), 1);
    assert_eq!(giras[0].usuario.full_name(), "Ana Quispe");
}

#[test]
fn malformed_body_is_a_schema_error() {
    let err = decode_response::<Vec<Gira>>(200, r#"{"not":"a list"}"#, "/api/giras").unwrap_err();
    assert!(matches!(err, AppError::Schema { .. }));
}

#[test]
fn negative_amount_fails_validation() {
    let mut v = serde_json::to_value(gira("g1", "u1", "x", "Pendiente", true, "2025-03-03", 0.0, 0.0)).unwrap();
    v["monto_soles"] = json!(-5.0);
    let err = decode_response::<Gira>(200, &v.to_string(), "/api/giras/g1").unwrap_err();
    match err {
        AppError::Schema { detail, .. } => assert!(detail.contains("monto_soles")),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn sede_coordinates_may_be_strings() {
    let body = json!({
        "_id": "s1",
        "nombre": "Planta",
        "latitude": "-12.0464",
        "longitude": "-77.0428",
        "radio": "75"
    })
    .to_string();
    let sede: Sede = decode_response(200, &body, "/api/sedes/s1").unwrap();
    assert_eq!(sede.latitude, -12.0464);
    assert_eq!(sede.radio, 75.0);
    assert!(sede.active);
}

#[test]
fn out_of_range_site_is_rejected() {
    let body = sede_json("s1", 120.0, -77.0, 50.0).to_string();
    let err = decode_response::<Sede>(200, &body, "/api/sedes/s1").unwrap_err();
    assert!(matches!(err, AppError::Schema { .. }));
}

#[test]
fn attendance_with_bad_exit_point_is_rejected() {
    let v = asistencia_json(
        "a1",
        "Carlos",
        sede_json("s1", -12.0464, -77.0428, 50.0),
        (-12.0464, -77.0428),
        Some((-12.0464, -200.0)),
        true,
        Some(true),
    );
    let err = decode_response::<Vec<Asistencia>>(200, &json!([v]).to_string(), "/api/asistencias")
        .unwrap_err();
    assert!(matches!(err, AppError::Schema { .. }));
}

#[test]
fn incident_page_envelope() {
    let body = json!({
        "incidencias": [
            serde_json::to_value(incidencia("i1", "Fuga", "Almacén A", "Alto", "Pendiente", "2025-03-05")).unwrap()
        ],
        "total": 31,
        "totalPages": 4
    })
    .to_string();
    let page: IncidenciaPage = decode_response(200, &body, "/api/incidencias").unwrap();
    assert_eq!(page.total, 31);
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.incidencias[0].grado_severidad.as_str(), "Alto");
}

#[test]
fn incident_page_larger_than_total_is_rejected() {
    let i = serde_json::to_value(incidencia("i1", "Fuga", "Almacén A", "Alto", "Pendiente", "2025-03-05")).unwrap();
    let body = json!({ "incidencias": [i.clone(), i], "total": 1, "totalPages": 1 }).to_string();
    let err = decode_response::<IncidenciaPage>(200, &body, "/api/incidencias").unwrap_err();
    assert!(matches!(err, AppError::Schema { .. }));
}
