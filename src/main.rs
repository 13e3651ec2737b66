use serde::Deserialize;

use cpm_registration::api::HttpApi;
use cpm_registration::config::ApiConfig;
use cpm_registration::controller::{FormEvent, RegistrationController};
use cpm_registration::errors::AppError;
use cpm_registration::models::team::{LogoFile, PlayerEntry};
use cpm_registration::ui::Field;

/// On-disk registration, same field names the form collects.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegistrationFile {
    name: String,
    owner: String,
    captain: String,
    #[serde(default)]
    coach: Option<String>,
    players: Vec<PlayerEntry>,
}

fn content_type_for(path: &str) -> &'static str {
    match path.rsplit('.').next().map(str::to_ascii_lowercase).as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

fn load_logo(path: &str) -> Result<LogoFile, AppError> {
    let bytes = std::fs::read(path)
        .map_err(|e| AppError::EnvError(format!("Failed to read logo {}: {}", path, e)))?;

    let file_name = path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or("logo")
        .to_string();

    Ok(LogoFile {
        content_type: content_type_for(path).to_string(),
        file_name,
        bytes,
    })
}

fn load_registration(path: &str) -> Result<RegistrationFile, AppError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AppError::EnvError(format!("Failed to read {}: {}", path, e)))?;

    serde_json::from_str(&raw)
        .map_err(|e| AppError::Deserialization(format!("Invalid registration file: {}", e)))
}

async fn run(registration_path: &str, logo_path: &str) -> Result<(), AppError> {
    let registration = load_registration(registration_path)?;
    let logo = load_logo(logo_path)?;

    let api = HttpApi::new(&ApiConfig::from_env());
    let mut controller = RegistrationController::new(api);

    controller.init().await;

    if !controller.ui.form_enabled {
        controller.submit().await;
        let notice = controller
            .ui
            .alerts
            .last()
            .cloned()
            .unwrap_or_else(|| "Inscrições fechadas.".to_string());
        return Err(AppError::RegistrationClosed {
            message: notice,
            next_open: None,
        });
    }

    controller.handle_event(FormEvent::ClubNameChanged(registration.name));
    controller.handle_event(FormEvent::OwnerChanged(registration.owner));
    controller.handle_event(FormEvent::CaptainChanged(registration.captain));
    if let Some(coach) = registration.coach {
        controller.handle_event(FormEvent::CoachChanged(coach));
    }
    controller.handle_event(FormEvent::LogoSelected(logo));
    if let Some(msg) = controller.ui.error(Field::Logo) {
        return Err(AppError::validation(Field::Logo, msg));
    }

    // The roster starts at six blank slots; grow it to fit, then fill.
    while controller.roster.len() < registration.players.len() {
        controller.handle_event(FormEvent::AddPlayer);
    }
    for (index, player) in registration.players.iter().enumerate() {
        controller.handle_event(FormEvent::PlayerIdChanged {
            index,
            value: player.id.clone(),
        });
        controller.handle_event(FormEvent::PlayerNickChanged {
            index,
            value: player.nick.clone(),
        });
        for position in &player.positions {
            controller.handle_event(FormEvent::PlayerPositionToggled {
                index,
                position: *position,
            });
        }
    }

    controller.submit().await;

    if controller.ui.modal.is_some() {
        println!("Inscrição enviada com sucesso.");
        return Ok(());
    }

    if let Some(alert) = controller.ui.alerts.last() {
        return Err(AppError::RegistrationClosed {
            message: alert.clone(),
            next_open: None,
        });
    }

    let message = controller
        .ui
        .error(Field::Form)
        .or_else(|| controller.ui.error(Field::ClubName))
        .or_else(|| controller.ui.error(Field::Owner))
        .or_else(|| controller.ui.error(Field::Captain))
        .unwrap_or("Falha desconhecida ao enviar inscrição.")
        .to_string();

    Err(AppError::Server {
        status: 0,
        message,
    })
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    let [_, registration_path, logo_path] = args.as_slice() else {
        eprintln!("Usage: cpm_registration <registration.json> <logo.{{png,jpg,webp}}>");
        std::process::exit(2);
    };

    if let Err(err) = run(registration_path, logo_path).await {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
