use chrono::{NaiveDate, TimeZone, Utc};
use rgiras::core::validation::{
    FormMode, is_email, validate_gira, validate_incidencia_update, validate_login, validate_sede,
    validate_usuario,
};
use rgiras::errors::AppError;
use rgiras::models::auth::LoginRequest;
use rgiras::models::gira::GiraPayload;
use rgiras::models::incidencia::IncidenciaEstado;
use rgiras::models::sede::SedePayload;
use rgiras::models::usuario::UsuarioPayload;

fn fields(err: AppError) -> Vec<(&'static str, String)> {
    err.field_errors()
        .expect("validation error")
        .iter()
        .map(|e| (e.field, e.message.clone()))
        .collect()
}

fn login(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.into(),
        password: password.into(),
    }
}

#[test]
fn email_shape() {
    assert!(is_email("ana@empresa.pe"));
    assert!(!is_email("ana@empresa"));
    assert!(!is_email("ana empresa@x.pe"));
    assert!(!is_email(""));
}

#[test]
fn login_accepts_valid_credentials() {
    assert!(validate_login(&login("ana@empresa.pe", "secreto")).is_ok());
}

#[test]
fn login_reports_both_fields() {
    let errs = fields(validate_login(&login("", "")).unwrap_err());
    assert_eq!(
        errs,
        vec![
            ("email", "El correo electrónico es requerido".to_string()),
            ("password", "La contraseña es requerida".to_string()),
        ]
    );
}

#[test]
fn login_rejects_bad_email_and_short_password() {
    let errs = fields(validate_login(&login("ana@", "12345")).unwrap_err());
    assert_eq!(errs[0].1, "Ingresa un correo electrónico válido");
    assert_eq!(errs[1].1, "La contraseña debe tener al menos 6 caracteres");
}

fn valid_usuario() -> UsuarioPayload {
    UsuarioPayload {
        nombre: "Ana".into(),
        apellido: "Quispe".into(),
        dni: "12345678".into(),
        cargo: "Analista".into(),
        area: vec!["Ventas".into()],
        celular: "987654321".into(),
        correo: "ana@empresa.pe".into(),
        password: Some("secreto".into()),
        active: true,
        ..UsuarioPayload::default()
    }
}

#[test]
fn usuario_valid_in_both_modes() {
    assert!(validate_usuario(&valid_usuario(), FormMode::Create).is_ok());

    let mut edit = valid_usuario();
    edit.password = None;
    assert!(validate_usuario(&edit, FormMode::Edit).is_ok());
}

#[test]
fn usuario_create_requires_password() {
    let mut u = valid_usuario();
    u.password = None;
    let errs = fields(validate_usuario(&u, FormMode::Create).unwrap_err());
    assert_eq!(errs, vec![("password", "La contraseña es requerida".to_string())]);
}

#[test]
fn usuario_reports_every_bad_field() {
    let u = UsuarioPayload {
        dni: "1234".into(),
        celular: "12".into(),
        correo: "no-es-correo".into(),
        password: Some("abc".into()),
        ..UsuarioPayload::default()
    };
    let names: Vec<&str> = fields(validate_usuario(&u, FormMode::Edit).unwrap_err())
        .into_iter()
        .map(|(f, _)| f)
        .collect();
    assert_eq!(
        names,
        [
            "nombre", "apellido", "dni", "celular", "correo", "password", "cargo", "area"
        ]
    );
}

#[test]
fn usuario_empty_celular_is_allowed() {
    let mut u = valid_usuario();
    u.celular = String::new();
    assert!(validate_usuario(&u, FormMode::Create).is_ok());
}

fn valid_gira() -> GiraPayload {
    GiraPayload {
        task: "T-100".into(),
        usuario: "u1".into(),
        motivo: "Instalación".into(),
        semana: "S12".into(),
        unidad_negocio: "Automatización".into(),
        lugar: "Arequipa".into(),
        fecha_inicio: Some(Utc.with_ymd_and_hms(2025, 3, 3, 8, 0, 0).unwrap()),
        fecha_fin: Some(Utc.with_ymd_and_hms(2025, 3, 7, 18, 0, 0).unwrap()),
        monto_soles: 1500.0,
        ..GiraPayload::default()
    }
}

#[test]
fn gira_valid() {
    assert!(validate_gira(&valid_gira()).is_ok());
}

#[test]
fn gira_end_must_follow_start() {
    let mut g = valid_gira();
    g.fecha_fin = g.fecha_inicio;
    let errs = fields(validate_gira(&g).unwrap_err());
    assert_eq!(
        errs,
        vec![(
            "fecha_fin",
            "La fecha de fin debe ser posterior a la fecha de inicio".to_string()
        )]
    );
}

#[test]
fn gira_empty_form_lists_all_required_fields() {
    let g = GiraPayload {
        monto_dolares: -1.0,
        ..GiraPayload::default()
    };
    let names: Vec<&str> = fields(validate_gira(&g).unwrap_err())
        .into_iter()
        .map(|(f, _)| f)
        .collect();
    assert_eq!(
        names,
        [
            "task",
            "semana",
            "usuario",
            "unidad_negocio",
            "lugar",
            "motivo",
            "fecha_inicio",
            "fecha_fin",
            "monto_dolares"
        ]
    );
}

fn sede(lat: f64, lon: f64, radio: f64) -> SedePayload {
    SedePayload {
        nombre: "Oficina Central".into(),
        direccion: "Av. Arequipa 123".into(),
        latitude: lat,
        longitude: lon,
        radio,
        active: true,
    }
}

#[test]
fn sede_valid() {
    assert!(validate_sede(&sede(-12.0464, -77.0428, 100.0)).is_ok());
}

#[test]
fn sede_without_location() {
    let errs = fields(validate_sede(&sede(f64::NAN, f64::NAN, 100.0)).unwrap_err());
    assert_eq!(
        errs,
        vec![("coordenadas", "Seleccione una ubicación para la sede".to_string())]
    );
}

#[test]
fn sede_out_of_range_and_zero_radius() {
    let names: Vec<&str> = fields(validate_sede(&sede(95.0, -77.0, 0.0)).unwrap_err())
        .into_iter()
        .map(|(f, _)| f)
        .collect();
    assert_eq!(names, ["coordenadas", "radio"]);
}

#[test]
fn sede_missing_text_fields() {
    let mut s = sede(-12.0, -77.0, 50.0);
    s.nombre = " ".into();
    s.direccion = String::new();
    let errs = fields(validate_sede(&s).unwrap_err());
    assert_eq!(errs.len(), 2);
    assert!(errs.iter().all(|(_, m)| m == "Complete todos los campos requeridos"));
}

#[test]
fn incidencia_update_parses_state_and_deadline() {
    let (estado, day) = validate_incidencia_update("En Revisión", Some("2025-04-01")).unwrap();
    assert_eq!(estado, IncidenciaEstado::EnRevision);
    assert_eq!(day, NaiveDate::from_ymd_opt(2025, 4, 1));

    let (estado, day) = validate_incidencia_update("Cerrado", None).unwrap();
    assert_eq!(estado, IncidenciaEstado::Cerrado);
    assert_eq!(day, None);
}

#[test]
fn incidencia_update_reports_state_and_deadline() {
    let names: Vec<&str> = fields(validate_incidencia_update("Perdido", Some("01/04/2025")).unwrap_err())
        .into_iter()
        .map(|(f, _)| f)
        .collect();
    assert_eq!(names, ["estado", "deadline"]);
}
