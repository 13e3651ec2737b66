use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use cpm_registration::api::RegistrationApi;
use cpm_registration::controller::{
    FormEvent, RegistrationController, SCHEDULE_HINT, SEASON_CHECK_FAILED_MSG, SEASON_CLOSED_MSG,
    SUBMIT_FAILED_MSG, SUCCESS_TITLE,
};
use cpm_registration::errors::AppError;
use cpm_registration::models::season::{Season, SeasonStatus};
use cpm_registration::models::team::{LogoFile, Position, TeamSubmission};
use cpm_registration::ui::Field;
use cpm_registration::validate::CLUB_NAME_REQUIRED;

#[derive(Default)]
struct StubApi {
    season: Mutex<Option<Result<SeasonStatus, AppError>>>,
    submissions: Mutex<VecDeque<Result<(), AppError>>>,
    submit_calls: AtomicUsize,
    last_submission: Mutex<Option<TeamSubmission>>,
}

#[async_trait]
impl RegistrationApi for StubApi {
    async fn current_season(&self) -> Result<SeasonStatus, AppError> {
        self.season
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Ok(SeasonStatus::Closed { next_open: None }))
    }

    async fn submit_team(&self, team: &TeamSubmission) -> Result<(), AppError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_submission.lock().unwrap() = Some(team.clone());
        self.submissions.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

fn stub(season: Result<SeasonStatus, AppError>) -> Arc<StubApi> {
    let api = StubApi::default();
    *api.season.lock().unwrap() = Some(season);
    Arc::new(api)
}

fn open_season() -> Result<SeasonStatus, AppError> {
    Ok(SeasonStatus::Open(Season {
        id: "season-7".to_string(),
        name: Some("Temporada 7".to_string()),
        next_open: None,
    }))
}

fn queue_submit(api: &Arc<StubApi>, outcome: Result<(), AppError>) {
    api.submissions.lock().unwrap().push_back(outcome);
}

fn png_logo() -> LogoFile {
    LogoFile {
        file_name: "escudo.png".to_string(),
        content_type: "image/png".to_string(),
        bytes: vec![0u8; 128],
    }
}

fn fill_valid_form(controller: &mut RegistrationController<Arc<StubApi>>) {
    controller.handle_event(FormEvent::ClubNameChanged("Clube do Mar".to_string()));
    controller.handle_event(FormEvent::OwnerChanged("Dona Ana".to_string()));
    controller.handle_event(FormEvent::CaptainChanged("Capitão Rui".to_string()));
    controller.handle_event(FormEvent::LogoSelected(png_logo()));

    for index in 0..controller.roster.len() {
        controller.handle_event(FormEvent::PlayerIdChanged {
            index,
            value: format!("{}", 1000 + index),
        });
        controller.handle_event(FormEvent::PlayerNickChanged {
            index,
            value: format!("Jogador{}", index + 1),
        });
        controller.handle_event(FormEvent::PlayerPositionToggled {
            index,
            position: Position::GL,
        });
    }
}

#[tokio::test]
async fn open_season_enables_the_form() {
    let api = stub(open_season());
    let mut controller = RegistrationController::new(api);

    controller.init().await;

    assert!(controller.ui.form_enabled);
    assert!(controller.ui.add_player_enabled);
    assert_eq!(
        controller.current_season().map(|s| s.id.as_str()),
        Some("season-7")
    );
}

#[tokio::test]
async fn closed_season_disables_everything_but_the_logo_controls() {
    let api = stub(Ok(SeasonStatus::Closed { next_open: None }));
    let mut controller = RegistrationController::new(api);

    controller.init().await;

    assert!(!controller.ui.form_enabled);
    assert!(!controller.ui.add_player_enabled);

    // Text and roster edits are dropped while disabled.
    controller.handle_event(FormEvent::ClubNameChanged("Clube do Mar".to_string()));
    controller.handle_event(FormEvent::AddPlayer);
    assert!(controller.club_name.is_empty());
    assert_eq!(controller.roster.len(), 6);

    // The logo slot still responds to change and remove.
    controller.handle_event(FormEvent::LogoSelected(png_logo()));
    assert!(controller.logo.file().is_some());
    controller.handle_event(FormEvent::RemoveLogo);
    assert!(controller.logo.is_empty());
}

#[tokio::test]
async fn closed_season_intercepts_the_first_submit_only() {
    let api = stub(Ok(SeasonStatus::Closed { next_open: None }));
    let mut controller = RegistrationController::new(api.clone());
    controller.init().await;

    controller.submit().await;
    controller.submit().await;

    assert_eq!(controller.ui.alerts.len(), 1);
    assert!(controller.ui.alerts[0].contains(SEASON_CLOSED_MSG));
    assert!(controller.ui.alerts[0].contains(SCHEDULE_HINT));
    assert_eq!(api.submit_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn closed_season_alert_carries_the_next_open_in_brasilia_time() {
    let next_open = Utc.with_ymd_and_hms(2025, 12, 25, 18, 0, 0).unwrap();
    let api = stub(Ok(SeasonStatus::Closed {
        next_open: Some(next_open),
    }));
    let mut controller = RegistrationController::new(api);
    controller.init().await;

    controller.submit().await;

    // UTC-3 in December.
    assert!(
        controller.ui.alerts[0].contains("Próxima abertura: 25/12/2025, 15:00:00"),
        "unexpected alert: {}",
        controller.ui.alerts[0]
    );
}

#[tokio::test]
async fn season_check_failure_reads_as_closed() {
    let api = stub(Err(AppError::Transport("connection refused".to_string())));
    let mut controller = RegistrationController::new(api.clone());

    controller.init().await;

    assert!(!controller.ui.form_enabled);

    controller.submit().await;
    assert!(controller.ui.alerts[0].contains(SEASON_CHECK_FAILED_MSG));
    assert_eq!(api.submit_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn successful_submission_opens_the_modal_exactly_once() {
    let api = stub(open_season());
    queue_submit(&api, Ok(()));
    let mut controller = RegistrationController::new(api.clone());
    controller.init().await;
    fill_valid_form(&mut controller);

    controller.submit().await;

    let modal = controller.ui.modal.as_ref().expect("success modal open");
    assert_eq!(modal.title, SUCCESS_TITLE);
    assert_eq!(controller.ui.modal_open_count, 1);
    assert_eq!(api.submit_calls.load(Ordering::SeqCst), 1);
    assert!(!controller.ui.submit_busy);
    assert!(controller.ui.error(Field::Form).is_none());

    // Submitted data stays in place; nothing is reset.
    assert_eq!(controller.club_name, "Clube do Mar");
}

#[tokio::test]
async fn submission_payload_is_trimmed_and_carries_the_season_id() {
    let api = stub(open_season());
    queue_submit(&api, Ok(()));
    let mut controller = RegistrationController::new(api.clone());
    controller.init().await;
    fill_valid_form(&mut controller);
    controller.handle_event(FormEvent::ClubNameChanged("  Clube do Mar  ".to_string()));
    controller.handle_event(FormEvent::CoachChanged(" Treinador Zé ".to_string()));

    controller.submit().await;

    let guard = api.last_submission.lock().unwrap();
    let submission = guard.as_ref().expect("submission captured");
    assert_eq!(submission.name, "Clube do Mar");
    assert_eq!(submission.coach, "Treinador Zé");
    assert_eq!(submission.season_id.as_deref(), Some("season-7"));
    assert_eq!(submission.players.len(), 6);
    assert_eq!(submission.players[0].positions, vec![Position::GL]);

    let players_json = serde_json::to_string(&submission.players).unwrap();
    assert!(players_json.contains(r#""positions":["GL"]"#));
}

#[tokio::test]
async fn forbidden_submission_alerts_and_preserves_the_form() {
    let api = stub(open_season());
    let next_open = Utc.with_ymd_and_hms(2026, 1, 1, 21, 0, 0).unwrap();
    queue_submit(
        &api,
        Err(AppError::RegistrationClosed {
            message: "Inscrições fechadas para esta temporada.".to_string(),
            next_open: Some(next_open),
        }),
    );
    let mut controller = RegistrationController::new(api);
    controller.init().await;
    fill_valid_form(&mut controller);

    controller.submit().await;

    assert!(controller.ui.modal.is_none());
    assert_eq!(controller.ui.modal_open_count, 0);
    let alert = controller.ui.alerts.last().expect("blocking alert shown");
    assert!(alert.contains("Inscrições fechadas para esta temporada."));
    assert!(alert.contains("Próxima abertura: 01/01/2026, 18:00:00"));
    assert_eq!(controller.club_name, "Clube do Mar");
    assert!(controller.ui.form_enabled);
    assert!(!controller.ui.submit_busy);
}

#[tokio::test]
async fn server_failure_surfaces_the_server_message_inline() {
    let api = stub(open_season());
    queue_submit(
        &api,
        Err(AppError::Server {
            status: 422,
            message: "Nome de clube já registrado.".to_string(),
        }),
    );
    let mut controller = RegistrationController::new(api);
    controller.init().await;
    fill_valid_form(&mut controller);

    controller.submit().await;

    assert_eq!(
        controller.ui.error(Field::Form),
        Some("Nome de clube já registrado.")
    );
    assert!(controller.ui.form_enabled);
    assert!(!controller.ui.submit_busy);
}

#[tokio::test]
async fn transport_failure_surfaces_the_generic_message() {
    let api = stub(open_season());
    queue_submit(&api, Err(AppError::Transport("timeout".to_string())));
    let mut controller = RegistrationController::new(api);
    controller.init().await;
    fill_valid_form(&mut controller);

    controller.submit().await;

    assert_eq!(controller.ui.error(Field::Form), Some(SUBMIT_FAILED_MSG));
    assert!(!controller.ui.submit_busy);
}

#[tokio::test]
async fn invalid_form_never_reaches_the_network() {
    let api = stub(open_season());
    let mut controller = RegistrationController::new(api.clone());
    controller.init().await;
    fill_valid_form(&mut controller);
    controller.handle_event(FormEvent::ClubNameChanged("   ".to_string()));

    controller.submit().await;

    assert_eq!(api.submit_calls.load(Ordering::SeqCst), 0);
    assert_eq!(controller.ui.error(Field::ClubName), Some(CLUB_NAME_REQUIRED));
    assert!(controller.ui.modal.is_none());
}

#[tokio::test]
async fn settled_submission_allows_another_attempt() {
    let api = stub(open_season());
    queue_submit(&api, Err(AppError::Transport("timeout".to_string())));
    queue_submit(&api, Ok(()));
    let mut controller = RegistrationController::new(api.clone());
    controller.init().await;
    fill_valid_form(&mut controller);

    controller.submit().await;
    controller.submit().await;

    assert_eq!(api.submit_calls.load(Ordering::SeqCst), 2);
    assert_eq!(controller.ui.modal_open_count, 1);
    assert!(controller.ui.modal.is_some());
}

#[tokio::test]
async fn modal_dismisses_on_close_backdrop_and_escape() {
    let api = stub(open_season());
    queue_submit(&api, Ok(()));
    queue_submit(&api, Ok(()));
    queue_submit(&api, Ok(()));
    let mut controller = RegistrationController::new(api);
    controller.init().await;
    fill_valid_form(&mut controller);

    // Escape with no modal open is a no-op.
    controller.handle_event(FormEvent::EscapePressed);
    assert!(controller.ui.modal.is_none());

    controller.submit().await;
    controller.handle_event(FormEvent::CloseModal);
    assert!(controller.ui.modal.is_none());

    controller.submit().await;
    controller.handle_event(FormEvent::ModalBackdropClick);
    assert!(controller.ui.modal.is_none());

    controller.submit().await;
    controller.handle_event(FormEvent::EscapePressed);
    assert!(controller.ui.modal.is_none());
}

#[tokio::test]
async fn add_control_disables_at_the_cap() {
    let api = stub(open_season());
    let mut controller = RegistrationController::new(api);
    controller.init().await;

    for _ in 0..4 {
        controller.handle_event(FormEvent::AddPlayer);
    }

    assert_eq!(controller.roster.len(), 10);
    assert!(!controller.ui.add_player_enabled);
    assert_eq!(controller.ui.players_counter, "10 de 10");

    // Further adds are dropped.
    controller.handle_event(FormEvent::AddPlayer);
    assert_eq!(controller.roster.len(), 10);
}

#[tokio::test]
async fn remove_below_minimum_raises_the_blocking_notice() {
    let api = stub(open_season());
    let mut controller = RegistrationController::new(api);
    controller.init().await;

    controller.handle_event(FormEvent::RemovePlayer(0));

    assert_eq!(controller.roster.len(), 6);
    assert!(
        controller.ui.alerts[0].contains("ao menos 6"),
        "unexpected notice: {}",
        controller.ui.alerts[0]
    );
}
