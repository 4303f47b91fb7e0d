mod common;

use common::temp_home;
use rgiras::config::Config;
use rgiras::config::migrate::{add_missing_fields, missing_fields};
use rgiras::models::auth::{AuthUser, LoginResponse};
use rgiras::session::Session;
use std::fs;

fn session(token: &str) -> Session {
    Session::from_login(
        LoginResponse {
            token: token.into(),
            user: AuthUser {
                id: "u1".into(),
                nombre: "Ana".into(),
                apellido: Some("Quispe".into()),
                correo: Some("ana@empresa.pe".into()),
                rol: Some("admin".into()),
            },
        },
        "http://localhost:4000/api",
    )
}

#[test]
fn session_round_trips_through_the_file() {
    let home = temp_home();
    let path = home.path().join("session.json");

    assert!(Session::load(&path).unwrap().is_none());

    let s = session("eyJhbGciOiJIUzI1NiJ9.payload.sig");
    s.save(&path).unwrap();

    let loaded = Session::require(&path).unwrap();
    assert_eq!(loaded, s);
    assert_eq!(loaded.user.display_name(), "Ana Quispe");
}

#[cfg(unix)]
#[test]
fn session_file_is_private_to_its_owner() {
    use std::os::unix::fs::PermissionsExt;

    let home = temp_home();
    let path = home.path().join("session.json");

    fs::write(&path, "{}").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

    session("tok").save(&path).unwrap();
    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);

    fs::remove_file(&path).unwrap();
    session("tok").save(&path).unwrap();
    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn clearing_reports_whether_a_session_existed() {
    let home = temp_home();
    let path = home.path().join("session.json");

    session("abcdefgh").save(&path).unwrap();
    assert!(Session::clear(&path).unwrap());
    assert!(!Session::clear(&path).unwrap());
    assert!(matches!(
        Session::require(&path),
        Err(rgiras::errors::AppError::NotLoggedIn)
    ));
}

#[test]
fn token_is_masked() {
    assert_eq!(session("abcdefgh1234").masked_token(), "****1234");
    assert_eq!(session("abc").masked_token(), "****");
}

#[test]
fn display_name_falls_back_to_email() {
    let user = AuthUser {
        id: "u9".into(),
        nombre: String::new(),
        apellido: None,
        correo: Some("ops@empresa.pe".into()),
        rol: None,
    };
    assert_eq!(user.display_name(), "ops@empresa.pe");
}

#[test]
fn missing_config_file_gives_defaults() {
    let home = temp_home();
    let cfg = Config::load(Some(home.path())).unwrap();
    assert_eq!(cfg.api_url, "http://localhost:4000/api");
    assert_eq!(cfg.page_size, 10);
    assert_eq!(cfg.default_radius, 100.0);
    assert_eq!(cfg.home, home.path());
    assert_eq!(cfg.session_file(), home.path().join("session.json"));
}

#[test]
fn init_writes_once_unless_forced() {
    let home = temp_home();
    assert!(Config::init_all(Some(home.path()), false).unwrap());
    assert!(home.path().join("rgiras.conf").exists());
    assert!(home.path().join("logs").is_dir());

    assert!(!Config::init_all(Some(home.path()), false).unwrap());
    assert!(Config::init_all(Some(home.path()), true).unwrap());
}

#[test]
fn partial_config_keeps_its_values() {
    let home = temp_home();
    fs::write(
        home.path().join("rgiras.conf"),
        "api_url: https://giras.example.pe/api/\npage_size: 25\n",
    )
    .unwrap();

    let cfg = Config::load(Some(home.path())).unwrap();
    assert_eq!(cfg.api_base(), "https://giras.example.pe/api");
    assert_eq!(cfg.page_size, 25);
    assert_eq!(cfg.timeout_seconds, 30);
}

#[test]
fn broken_yaml_is_a_config_error() {
    let home = temp_home();
    fs::write(home.path().join("rgiras.conf"), "page_size: [oops\n").unwrap();
    assert!(matches!(
        Config::load(Some(home.path())),
        Err(rgiras::errors::AppError::Config(_))
    ));
}

#[test]
fn migrate_adds_only_missing_fields() {
    let home = temp_home();
    let path = home.path().join("rgiras.conf");
    fs::write(&path, "api_url: https://giras.example.pe/api\n").unwrap();

    let missing = missing_fields(&path).unwrap();
    assert!(missing.contains(&"page_size".to_string()));
    assert!(!missing.contains(&"api_url".to_string()));
    assert!(!missing.contains(&"home".to_string()));

    let added = add_missing_fields(&path).unwrap();
    assert_eq!(added, missing);
    assert!(missing_fields(&path).unwrap().is_empty());

    let cfg = Config::load(Some(home.path())).unwrap();
    assert_eq!(cfg.api_url, "https://giras.example.pe/api");
    assert!(add_missing_fields(&path).unwrap().is_empty());
}
