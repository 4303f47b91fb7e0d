mod common;

use common::{rgiras, rgiras_in, temp_home};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

#[test]
fn help_lists_the_admin_commands() {
    rgiras()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("giras"))
        .stdout(contains("asistencia"))
        .stdout(contains("incidencias"));
}

#[test]
fn distance_between_two_close_points() {
    let home = temp_home();
    rgiras_in(&home)
        .args(["distance", "-12.0464", "-77.0428", "-12.0464", "-77.0429"])
        .assert()
        .success()
        .stdout(contains("11 m"));
}

#[test]
fn distance_with_radius_reports_the_verdict() {
    let home = temp_home();
    rgiras_in(&home)
        .args(["distance", "-12.0464", "-77.0428", "-12.0464", "-77.0429", "--radius", "50"])
        .assert()
        .success()
        .stdout(contains("inside"));

    rgiras_in(&home)
        .args(["distance", "-12.0464", "-77.0428", "-12.0600", "-77.0428", "--radius", "50"])
        .assert()
        .success()
        .stdout(contains("outside"));
}

#[test]
fn distance_rejects_out_of_range_latitude() {
    let home = temp_home();
    rgiras_in(&home)
        .args(["distance", "91", "0", "0", "0"])
        .assert()
        .failure();
}

#[test]
fn init_creates_the_config_file() {
    let home = temp_home();
    rgiras_in(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Configuration written"));

    let conf = fs::read_to_string(home.path().join("rgiras.conf")).unwrap();
    assert!(conf.contains("api_url"));

    rgiras_in(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("already exists"));
}

#[test]
fn config_print_and_check() {
    let home = temp_home();
    rgiras_in(&home).arg("init").assert().success();

    rgiras_in(&home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("api_url:"))
        .stdout(contains("localhost:4000/api"));

    rgiras_in(&home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is complete."));
}

#[test]
fn config_migrate_fills_an_old_file() {
    let home = temp_home();
    fs::write(home.path().join("rgiras.conf"), "api_url: http://10.0.0.5:4000/api\n").unwrap();

    rgiras_in(&home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields"));

    rgiras_in(&home)
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added missing fields"));

    let conf = fs::read_to_string(home.path().join("rgiras.conf")).unwrap();
    assert!(conf.contains("10.0.0.5"));
    assert!(conf.contains("page_size"));
}

#[test]
fn api_url_flag_overrides_the_file() {
    let home = temp_home();
    rgiras_in(&home)
        .args(["--api-url", "https://giras.example.pe/api", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("https://giras.example.pe/api"));
}

#[test]
fn login_validates_before_contacting_the_backend() {
    let home = temp_home();
    rgiras_in(&home)
        .args(["login", "--email", "ana@empresa", "--password", "123"])
        .assert()
        .failure()
        .stderr(contains("Ingresa un correo electrónico válido"))
        .stderr(contains("La contraseña debe tener al menos 6 caracteres"));

    assert!(!home.path().join("session.json").exists());
}

#[test]
fn login_with_no_email() {
    let home = temp_home();
    rgiras_in(&home)
        .args(["login", "--password", "secreto"])
        .assert()
        .failure()
        .stderr(contains("El correo electrónico es requerido"));
}

#[test]
fn logout_without_session() {
    let home = temp_home();
    rgiras_in(&home)
        .arg("logout")
        .assert()
        .success()
        .stdout(contains("No active session."));
}

#[test]
fn whoami_requires_a_session() {
    let home = temp_home();
    rgiras_in(&home)
        .arg("whoami")
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn commands_needing_the_backend_require_login() {
    let home = temp_home();
    for args in [
        vec!["giras", "list"],
        vec!["sedes", "list"],
        vec!["asistencia", "list"],
        vec!["incidencias", "list"],
    ] {
        rgiras_in(&home)
            .args(&args)
            .assert()
            .failure()
            .stderr(contains("Not logged in"));
    }
}

#[test]
fn usuarios_areas_works_offline() {
    let home = temp_home();
    rgiras_in(&home)
        .args(["usuarios", "areas"])
        .assert()
        .success()
        .stdout(contains("Sistemas"))
        .stdout(contains("RRHH"));
}

#[test]
fn asistencia_prev_and_next_conflict() {
    let home = temp_home();
    rgiras_in(&home)
        .args(["asistencia", "list", "--prev", "--next"])
        .assert()
        .failure()
        .stderr(contains("cannot be used with").or(contains("conflict")));
}

#[test]
fn unknown_export_format_is_rejected_by_the_parser() {
    let home = temp_home();
    rgiras_in(&home)
        .args(["export", "giras", "--format", "docx"])
        .assert()
        .failure()
        .stderr(contains("docx"));
}
