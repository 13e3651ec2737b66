use std::collections::BTreeSet;

use crate::config::{MAX_PLAYERS, MIN_PLAYERS};
use crate::errors::AppError;
use crate::models::team::{PlayerEntry, Position};
use crate::ui::Field;

pub const MIN_PLAYERS_NOTICE: &str = "É necessário ao menos 6 jogadores.";

/// One editable player card.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSlot {
    /// 1-based display index, kept contiguous after every mutation.
    pub number: usize,
    pub id: String,
    pub nick: String,
    pub positions: BTreeSet<Position>,
}

impl PlayerSlot {
    fn blank(number: usize) -> Self {
        Self {
            number,
            id: String::new(),
            nick: String::new(),
            positions: BTreeSet::new(),
        }
    }
}

/// Ordered list of player editors, always within [6, 10] entries.
#[derive(Debug, Clone)]
pub struct Roster {
    slots: Vec<PlayerSlot>,
}

impl Roster {
    /// Starts with exactly six blank entries.
    pub fn new() -> Self {
        let slots = (1..=MIN_PLAYERS).map(PlayerSlot::blank).collect();
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[PlayerSlot] {
        &self.slots
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut PlayerSlot> {
        self.slots.get_mut(index)
    }

    pub fn can_add(&self) -> bool {
        self.slots.len() < MAX_PLAYERS
    }

    /// Appends a blank entry. No-op at the cap.
    pub fn add(&mut self) -> bool {
        if !self.can_add() {
            return false;
        }

        let number = self.slots.len() + 1;
        self.slots.push(PlayerSlot::blank(number));
        true
    }

    /// Removes the entry at `index`, refusing to drop below the minimum.
    pub fn remove(&mut self, index: usize) -> Result<(), AppError> {
        if self.slots.len() <= MIN_PLAYERS {
            return Err(AppError::validation(Field::Form, MIN_PLAYERS_NOTICE));
        }

        if index >= self.slots.len() {
            return Err(AppError::validation(Field::Form, "Jogador inexistente."));
        }

        self.slots.remove(index);
        self.reindex();

        Ok(())
    }

    pub fn counter_label(&self) -> String {
        format!("{} de {}", self.slots.len(), MAX_PLAYERS)
    }

    /// Wire entries for submission: trimmed fields, positions in display order.
    pub fn entries(&self) -> Vec<PlayerEntry> {
        self.slots
            .iter()
            .map(|slot| PlayerEntry {
                id: slot.id.trim().to_string(),
                nick: slot.nick.trim().to_string(),
                positions: slot.positions.iter().copied().collect(),
            })
            .collect()
    }

    fn reindex(&mut self) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.number = i + 1;
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
