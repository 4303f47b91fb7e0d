use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::validation::validate_login;
use crate::errors::{AppError, AppResult};
use crate::models::auth::LoginRequest;
use crate::session::Session;
use crate::ui::messages::{detail, header, info, success};
use crate::utils::date::fmt_datetime;
use std::io::{self, Write};
use tracing::info as log_info;

/// Handle `login`, `logout` and `whoami`
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Login { email, password } => login(cfg, email, password.as_deref()),
        Commands::Logout => logout(cfg),
        Commands::Whoami => whoami(cfg),
        _ => Ok(()),
    }
}

fn read_password() -> AppResult<String> {
    print!("Password: ");
    io::stdout().flush()?;
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim_end_matches(['\r', '\n']).to_string())
}

fn login(cfg: &Config, email: &str, password: Option<&str>) -> AppResult<()> {
    let password = match password {
        Some(p) => p.to_string(),
        None => read_password()?,
    };

    let req = LoginRequest {
        email: email.trim().to_string(),
        password,
    };
    validate_login(&req)?;

    let client = ApiClient::new(cfg, None)?;
    let resp = client.login(&req)?;

    let session = Session::from_login(resp, cfg.api_base());
    session.save(&cfg.session_file())?;

    log_info!(user = %session.user.id, "logged in");
    success(format!("Bienvenido, {}", session.user.display_name()));
    Ok(())
}

fn logout(cfg: &Config) -> AppResult<()> {
    if Session::clear(&cfg.session_file())? {
        log_info!("session removed");
        success("Session closed.");
    } else {
        info("No active session.");
    }
    Ok(())
}

fn whoami(cfg: &Config) -> AppResult<()> {
    let session = Session::load(&cfg.session_file())?.ok_or(AppError::NotLoggedIn)?;

    header("Session");
    detail("Usuario", session.user.display_name());
    detail("Correo", session.user.correo.as_deref().unwrap_or("-"));
    detail("Rol", session.user.rol.as_deref().unwrap_or("-"));
    detail("Backend", &session.api_url);
    detail("Desde", fmt_datetime(&session.created_at));
    detail("Token", session.masked_token());

    if session.api_url != cfg.api_base() {
        info(format!(
            "The session was issued by {}, but the configured backend is {}.",
            session.api_url,
            cfg.api_base()
        ));
    }
    Ok(())
}
