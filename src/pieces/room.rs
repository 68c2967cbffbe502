//! Room occupancy.

use serde::{Deserialize, Serialize};

use super::names::{CharacterName, RoomName, WeaponName};

/// A room and the tokens currently inside it.
///
/// Occupant lists never hold duplicates: adding a present token is a no-op
/// that returns `false`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    name: RoomName,
    characters: Vec<CharacterName>,
    weapons: Vec<WeaponName>,
}

impl Room {
    #[must_use]
    pub fn new(name: RoomName) -> Self {
        Self {
            name,
            characters: Vec::new(),
            weapons: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> RoomName {
        self.name
    }

    /// Characters in order of arrival.
    #[must_use]
    pub fn characters(&self) -> &[CharacterName] {
        &self.characters
    }

    /// Weapons in order of arrival.
    #[must_use]
    pub fn weapons(&self) -> &[WeaponName] {
        &self.weapons
    }

    #[must_use]
    pub fn contains_character(&self, character: CharacterName) -> bool {
        self.characters.contains(&character)
    }

    #[must_use]
    pub fn contains_weapon(&self, weapon: WeaponName) -> bool {
        self.weapons.contains(&weapon)
    }

    pub(crate) fn add_character(&mut self, character: CharacterName) -> bool {
        if self.contains_character(character) {
            return false;
        }
        self.characters.push(character);
        true
    }

    pub(crate) fn remove_character(&mut self, character: CharacterName) -> bool {
        let before = self.characters.len();
        self.characters.retain(|c| *c != character);
        self.characters.len() != before
    }

    pub(crate) fn add_weapon(&mut self, weapon: WeaponName) -> bool {
        if self.contains_weapon(weapon) {
            return false;
        }
        self.weapons.push(weapon);
        true
    }

    pub(crate) fn remove_weapon(&mut self, weapon: WeaponName) -> bool {
        let before = self.weapons.len();
        self.weapons.retain(|w| *w != weapon);
        self.weapons.len() != before
    }
}
