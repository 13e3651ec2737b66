use crate::api::RegistrationApi;
use crate::errors::AppError;
use crate::logo::LogoSlot;
use crate::models::season::{Season, SeasonStatus};
use crate::models::team::{LogoFile, Position, TeamSubmission};
use crate::roster::Roster;
use crate::time::format_next_open;
use crate::ui::{Field, UiState};
use crate::validate::validate;

pub const SEASON_CLOSED_MSG: &str = "Inscrições estão fechadas";
pub const SEASON_CHECK_FAILED_MSG: &str =
    "Não foi possível verificar período de inscrições. Tente novamente mais tarde.";
pub const SUBMIT_FAILED_MSG: &str = "Erro ao enviar. Conecte-se à internet e tente novamente.";
pub const SCHEDULE_HINT: &str =
    "Inscrições geralmente abrem entre dia 1 às 18h e dia 5 às 18h (horário de Brasília).";
pub const SUCCESS_TITLE: &str = "Inscrição enviada!";
pub const SUCCESS_MSG: &str = "Seus dados foram recebidos e estão sendo analisados. \
     Você receberá um e-mail com mais informações em breve.";

/// Everything the page can do to the controller. One enum, one dispatch point,
/// so tests drive the form without a rendering environment.
#[derive(Debug, Clone)]
pub enum FormEvent {
    ClubNameChanged(String),
    OwnerChanged(String),
    CaptainChanged(String),
    CoachChanged(String),
    LogoSelected(LogoFile),
    RemoveLogo,
    AddPlayer,
    RemovePlayer(usize),
    PlayerIdChanged { index: usize, value: String },
    PlayerNickChanged { index: usize, value: String },
    PlayerPositionToggled { index: usize, position: Position },
    CloseModal,
    ModalBackdropClick,
    EscapePressed,
}

/// Owns the whole registration form: field values, roster, logo slot, season
/// gate, and the visible page state. Constructed once at startup.
pub struct RegistrationController<A> {
    api: A,
    pub ui: UiState,
    pub roster: Roster,
    pub logo: LogoSlot,
    pub club_name: String,
    pub owner: String,
    pub captain: String,
    pub coach: String,
    current_season: Option<Season>,
    /// One-shot submit intercept armed when the window is closed.
    closed_notice: Option<String>,
    /// Re-entrancy guard; the disabled submit control alone is not trusted.
    submitting: bool,
}

impl<A: RegistrationApi> RegistrationController<A> {
    pub fn new(api: A) -> Self {
        let roster = Roster::new();
        let mut ui = UiState::default();
        ui.players_counter = roster.counter_label();

        Self {
            api,
            ui,
            roster,
            logo: LogoSlot::Empty,
            club_name: String::new(),
            owner: String::new(),
            captain: String::new(),
            coach: String::new(),
            current_season: None,
            closed_notice: None,
            submitting: false,
        }
    }

    pub fn current_season(&self) -> Option<&Season> {
        self.current_season.as_ref()
    }

    /// Season gate. The form stays disabled until the backend confirms an open
    /// window; a transport failure reads as closed, never as open.
    pub async fn init(&mut self) {
        self.set_form_enabled(false);

        match self.api.current_season().await {
            Ok(SeasonStatus::Open(season)) => {
                tracing::info!(season = %season.id, "registration window open");
                self.current_season = Some(season);
                self.set_form_enabled(true);
            }
            Ok(SeasonStatus::Closed { next_open }) => {
                let mut msg = SEASON_CLOSED_MSG.to_string();
                if let Some(next_open) = next_open {
                    msg.push_str(". Próxima abertura: ");
                    msg.push_str(&format_next_open(next_open));
                }
                self.season_closed(msg);
            }
            Err(err) => {
                tracing::warn!("season check failed: {}", err);
                self.season_closed(SEASON_CHECK_FAILED_MSG.to_string());
            }
        }
    }

    pub fn handle_event(&mut self, event: FormEvent) {
        match event {
            // Logo change/remove stay live even while the season gate has the
            // rest of the form disabled.
            FormEvent::LogoSelected(file) => match self.logo.select(file) {
                Ok(()) => self.ui.hide_error(Field::Logo),
                Err(msg) => self.ui.show_error(Field::Logo, msg),
            },
            FormEvent::RemoveLogo => {
                self.logo.clear();
                self.ui.hide_error(Field::Logo);
            }
            FormEvent::ClubNameChanged(value) if self.ui.form_enabled => self.club_name = value,
            FormEvent::OwnerChanged(value) if self.ui.form_enabled => self.owner = value,
            FormEvent::CaptainChanged(value) if self.ui.form_enabled => self.captain = value,
            FormEvent::CoachChanged(value) if self.ui.form_enabled => self.coach = value,
            FormEvent::AddPlayer if self.ui.form_enabled => {
                self.roster.add();
                self.refresh_roster_ui();
            }
            FormEvent::RemovePlayer(index) if self.ui.form_enabled => {
                match self.roster.remove(index) {
                    Ok(()) => self.refresh_roster_ui(),
                    Err(notice) => self.ui.alert(notice.to_string()),
                }
            }
            FormEvent::PlayerIdChanged { index, value } if self.ui.form_enabled => {
                if let Some(slot) = self.roster.slot_mut(index) {
                    slot.id = value;
                }
            }
            FormEvent::PlayerNickChanged { index, value } if self.ui.form_enabled => {
                if let Some(slot) = self.roster.slot_mut(index) {
                    slot.nick = value;
                }
            }
            FormEvent::PlayerPositionToggled { index, position } if self.ui.form_enabled => {
                if let Some(slot) = self.roster.slot_mut(index) {
                    if !slot.positions.remove(&position) {
                        slot.positions.insert(position);
                    }
                }
            }
            FormEvent::CloseModal | FormEvent::ModalBackdropClick => self.ui.close_modal(),
            FormEvent::EscapePressed => {
                if self.ui.modal.is_some() {
                    self.ui.close_modal();
                }
            }
            // Edits while the form is disabled fall through untouched.
            _ => {}
        }
    }

    /// Validated submit. Every outcome lands back in `UiState`; the busy state
    /// is restored on all paths.
    pub async fn submit(&mut self) {
        if let Some(notice) = self.closed_notice.take() {
            self.ui.alert(format!("{}\n\n{}", notice, SCHEDULE_HINT));
            return;
        }

        if !self.ui.form_enabled || self.submitting {
            return;
        }

        self.ui.hide_error(Field::Form);

        if let Err(err) = validate(
            &self.club_name,
            &self.owner,
            &self.captain,
            &self.roster,
            &self.logo,
        ) {
            self.surface_validation(err);
            return;
        }

        for field in [Field::ClubName, Field::Owner, Field::Captain] {
            self.ui.hide_error(field);
        }

        let Some(submission) = self.build_submission() else {
            return;
        };

        self.submitting = true;
        self.ui.submit_busy = true;

        let outcome = self.api.submit_team(&submission).await;

        self.submitting = false;
        self.ui.submit_busy = false;

        match outcome {
            Ok(()) => self.ui.open_modal(SUCCESS_TITLE, SUCCESS_MSG),
            Err(AppError::RegistrationClosed { message, next_open }) => {
                let mut alert = message;
                if let Some(next_open) = next_open {
                    alert.push_str("\n\nPróxima abertura: ");
                    alert.push_str(&format_next_open(next_open));
                }
                self.ui.alert(alert);
            }
            Err(AppError::Transport(err)) => {
                tracing::error!("team submission failed: {}", err);
                self.ui.show_error(Field::Form, SUBMIT_FAILED_MSG);
            }
            Err(err) => self.ui.show_error(Field::Form, err.to_string()),
        }
    }

    fn surface_validation(&mut self, err: AppError) {
        if let AppError::Validation { field, message } = err {
            // Earlier fields passed, so their stale errors go away.
            for cleared in [Field::ClubName, Field::Owner, Field::Captain, Field::Form] {
                if cleared != field {
                    self.ui.hide_error(cleared);
                }
            }
            self.ui.show_error(field, message);
        }
    }

    fn build_submission(&self) -> Option<TeamSubmission> {
        let logo = self.logo.file()?.clone();

        Some(TeamSubmission {
            name: self.club_name.trim().to_string(),
            owner: self.owner.trim().to_string(),
            captain: self.captain.trim().to_string(),
            coach: self.coach.trim().to_string(),
            logo,
            players: self.roster.entries(),
            season_id: self.current_season.as_ref().map(|s| s.id.clone()),
        })
    }

    fn season_closed(&mut self, message: String) {
        self.set_form_enabled(false);
        self.closed_notice = Some(message);
    }

    fn set_form_enabled(&mut self, enabled: bool) {
        self.ui.form_enabled = enabled;
        self.ui.add_player_enabled = enabled && self.roster.can_add();
    }

    fn refresh_roster_ui(&mut self) {
        self.ui.players_counter = self.roster.counter_label();
        self.ui.add_player_enabled = self.ui.form_enabled && self.roster.can_add();
    }
}
