use crate::errors::AppError;
use crate::logo::{LogoSlot, validate_logo};
use crate::roster::Roster;
use crate::ui::Field;

use crate::config::{MAX_PLAYERS, MIN_PLAYERS};

pub const CLUB_NAME_REQUIRED: &str = "Nome do clube é obrigatório";
pub const OWNER_REQUIRED: &str = "Nome do dono é obrigatório";
pub const CAPTAIN_REQUIRED: &str = "Nome do capitão é obrigatório";
pub const ROSTER_SIZE_INVALID: &str = "Número de jogadores inválido (6–10).";
pub const PLAYER_FIELDS_REQUIRED: &str = "Cada jogador precisa de ID e Nick.";
pub const PLAYER_POSITION_REQUIRED: &str = "Marque ao menos uma posição para cada jogador.";
pub const LOGO_REQUIRED: &str = "A logo do clube é obrigatória.";
pub const LOGO_INVALID: &str = "Arquivo inválido. Veja os requisitos da logo.";

/// Pre-submit check. Short-circuits on the first failing rule, so at most one
/// error is reported per run. Coach is optional and not checked here.
pub fn validate(
    club_name: &str,
    owner: &str,
    captain: &str,
    roster: &Roster,
    logo: &LogoSlot,
) -> Result<(), AppError> {
    if club_name.trim().is_empty() {
        return Err(AppError::validation(Field::ClubName, CLUB_NAME_REQUIRED));
    }

    if owner.trim().is_empty() {
        return Err(AppError::validation(Field::Owner, OWNER_REQUIRED));
    }

    if captain.trim().is_empty() {
        return Err(AppError::validation(Field::Captain, CAPTAIN_REQUIRED));
    }

    // The roster manager already holds this; re-checked against state drift.
    if roster.len() < MIN_PLAYERS || roster.len() > MAX_PLAYERS {
        return Err(AppError::validation(Field::Form, ROSTER_SIZE_INVALID));
    }

    for slot in roster.slots() {
        if slot.id.trim().is_empty() || slot.nick.trim().is_empty() {
            return Err(AppError::validation(Field::Form, PLAYER_FIELDS_REQUIRED));
        }

        if slot.positions.is_empty() {
            return Err(AppError::validation(Field::Form, PLAYER_POSITION_REQUIRED));
        }
    }

    let Some(file) = logo.file() else {
        return Err(AppError::validation(Field::Form, LOGO_REQUIRED));
    };

    if validate_logo(file).is_err() {
        return Err(AppError::validation(Field::Form, LOGO_INVALID));
    }

    Ok(())
}
