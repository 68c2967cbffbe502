//! Game state: the single owned aggregate every rule reads and writes.
//!
//! ## GameState
//!
//! - Players (name, character, hand, alive flag)
//! - Character and weapon tokens, room occupant lists
//! - Corridor occupancy grid
//! - The deck, including the hidden solution
//! - The RNG
//! - Action history
//!
//! Token moves go through the `place_*` / `remove_*` methods here, which
//! keep three views in step: each token's own location, the room occupant
//! lists, and the corridor occupancy grid. A character is in exactly one of
//! a corridor cell, a room, or off the board.

use im::Vector;
use tracing::{debug, info};

use super::action::{Action, ActionRecord};
use super::error::{InvariantError, SetupError};
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::board::{Board, Cell, COLS, ROWS};
use crate::cards::{Card, CardHolder, Deck, Solution};
use crate::pieces::{
    Character, CharacterName, Location, Player, Room, RoomName, Weapon, WeaponName,
};

type Occupancy = [[Option<CharacterName>; COLS]; ROWS];

/// Complete game state.
#[derive(Clone, Debug)]
pub struct GameState {
    players: PlayerMap<Player>,
    characters: [Character; 6],
    weapons: [Weapon; 6],
    rooms: [Room; 9],
    occupancy: Occupancy,
    deck: Deck,
    rng: GameRng,

    /// Turn number (starts at 1).
    turn_number: u32,

    /// Action sequence within turn.
    action_sequence: u32,

    history: Vector<ActionRecord>,
}

impl GameState {
    /// Seat the players, place every token and run the deck setup.
    ///
    /// Seats are `(name, character)` pairs in seating order.
    pub fn new(seats: Vec<(String, CharacterName)>, mut rng: GameRng) -> Result<Self, SetupError> {
        Board::new().verify()?;

        let setup = Deck::setup(seats.len(), &mut rng)?;

        for (seat, (name, character)) in seats.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(SetupError::EmptyName { seat });
            }
            if seats[..seat].iter().any(|(_, c)| c == character) {
                return Err(SetupError::DuplicateCharacter(*character));
            }
        }

        let mut characters = CharacterName::ALL.map(Character::new);
        let mut occupancy: Occupancy = [[None; COLS]; ROWS];
        for character in &characters {
            if let Some(cell) = character.cell() {
                occupancy[cell.row as usize][cell.col as usize] = Some(character.name());
            }
        }

        let mut rooms = RoomName::ALL.map(Room::new);
        let weapons = WeaponName::ALL.map(|w| Weapon::new(w, setup.weapon_rooms[w.index()]));
        for weapon in &weapons {
            rooms[weapon.room().index()].add_weapon(weapon.name());
        }

        let players: Vec<Player> = seats
            .into_iter()
            .zip(setup.hands.iter())
            .map(|((name, character), (_, hand))| {
                let mut player = Player::new(name, character);
                for card in hand.cards() {
                    player.deal(*card);
                }
                player
            })
            .collect();
        let players = PlayerMap::from_vec(players);

        for (id, player) in players.iter() {
            characters[player.character().index()].set_owner(id);
        }

        info!(
            seed = rng.seed(),
            players = players.player_count(),
            "game set up"
        );

        Ok(Self {
            players,
            characters,
            weapons,
            rooms,
            occupancy,
            deck: setup.deck,
            rng,
            turn_number: 1,
            action_sequence: 0,
            history: Vector::new(),
        })
    }

    // === Players ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Seats still in the game, in seating order.
    pub fn alive_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .filter(|(_, p)| p.is_alive())
            .map(|(id, _)| id)
    }

    /// Eliminate `player` and take their character off the board.
    ///
    /// Returns `false` (and changes nothing) if they were already out.
    pub(crate) fn eliminate_player(&mut self, player: PlayerId) -> Result<bool, InvariantError> {
        let entry = self
            .players
            .get_mut(player)
            .ok_or(InvariantError::UnknownPlayer(player))?;
        if !entry.die() {
            return Ok(false);
        }
        let character = entry.character();
        self.remove_from_board(character);
        info!(%player, %character, "player eliminated");
        Ok(true)
    }

    // === Tokens ===

    #[must_use]
    pub fn character(&self, name: CharacterName) -> &Character {
        &self.characters[name.index()]
    }

    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    #[must_use]
    pub fn weapon(&self, name: WeaponName) -> &Weapon {
        &self.weapons[name.index()]
    }

    #[must_use]
    pub fn room(&self, name: RoomName) -> &Room {
        &self.rooms[name.index()]
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// The character standing on a corridor cell, if any.
    #[must_use]
    pub fn occupant_at(&self, cell: Cell) -> Option<CharacterName> {
        if !cell.in_bounds() {
            return None;
        }
        self.occupancy[cell.row as usize][cell.col as usize]
    }

    /// Take a character out of wherever it is now.
    fn lift(&mut self, name: CharacterName) {
        match self.characters[name.index()].location() {
            Location::Corridor(cell) => {
                let slot = &mut self.occupancy[cell.row as usize][cell.col as usize];
                if *slot == Some(name) {
                    *slot = None;
                }
            }
            Location::Room(room) => {
                self.rooms[room.index()].remove_character(name);
            }
            Location::OffBoard => {}
        }
    }

    /// Put a character on a corridor cell. The caller has checked the cell
    /// is a free corridor.
    pub(crate) fn place_in_corridor(&mut self, name: CharacterName, cell: Cell) {
        self.lift(name);
        let character = &mut self.characters[name.index()];
        if character.room().is_some() {
            character.leave_room(cell);
        } else {
            character.step_to(cell);
        }
        self.occupancy[cell.row as usize][cell.col as usize] = Some(name);
        debug!(%name, %cell, "character in corridor");
    }

    /// Put a character into a room, from anywhere (including off the board).
    pub(crate) fn place_in_room(&mut self, name: CharacterName, room: RoomName) {
        self.lift(name);
        self.characters[name.index()].enter_room(room);
        self.rooms[room.index()].add_character(name);
        debug!(%name, %room, "character in room");
    }

    pub(crate) fn remove_from_board(&mut self, name: CharacterName) {
        self.lift(name);
        self.characters[name.index()].remove_from_board();
    }

    pub(crate) fn place_weapon(&mut self, name: WeaponName, room: RoomName) {
        let from = self.weapons[name.index()].room();
        self.rooms[from.index()].remove_weapon(name);
        self.weapons[name.index()].move_to_room(room);
        self.rooms[room.index()].add_weapon(name);
        debug!(weapon = %name, %from, to = %room, "weapon moved");
    }

    // === Cards ===

    /// Cards nobody was dealt, visible to every player.
    #[must_use]
    pub fn face_up(&self) -> &[Card] {
        self.deck.face_up()
    }

    pub(crate) fn solution(&self) -> &Solution {
        self.deck.solution()
    }

    // === RNG ===

    pub(crate) fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // === Turns and history ===

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub(crate) fn advance_turn(&mut self) {
        self.turn_number += 1;
        self.action_sequence = 0;
    }

    /// Record an accepted action in history.
    pub(crate) fn record(&mut self, player: PlayerId, action: Action) {
        let record = ActionRecord::new(player, action, self.turn_number, self.action_sequence);
        self.history.push_back(record);
        self.action_sequence += 1;
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Invariants ===

    /// Check that token locations, room lists and the occupancy grid agree.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        for character in &self.characters {
            let name = character.name();
            match character.location() {
                Location::Corridor(cell) => {
                    if self.occupant_at(cell) != Some(name) {
                        return Err(InvariantError::OccupancyDesync {
                            cell,
                            character: name,
                        });
                    }
                }
                Location::Room(room) => {
                    if !self.rooms[room.index()].contains_character(name) {
                        return Err(InvariantError::RoomDesync {
                            room,
                            character: name,
                        });
                    }
                }
                Location::OffBoard => {
                    let owner_alive = character
                        .owner()
                        .and_then(|id| self.players.get(id))
                        .is_some_and(|p| p.is_alive());
                    if owner_alive {
                        return Err(InvariantError::CharacterOffBoard(name));
                    }
                }
            }
            if let Some(stray) = self
                .rooms
                .iter()
                .find(|r| r.contains_character(name) && character.room() != Some(r.name()))
            {
                return Err(InvariantError::RoomDesync {
                    room: stray.name(),
                    character: name,
                });
            }
        }

        for (row, cells) in self.occupancy.iter().enumerate() {
            for (col, occupant) in cells.iter().enumerate() {
                if let Some(name) = occupant {
                    let cell = Cell::new(row as u8, col as u8);
                    if self.characters[name.index()].cell() != Some(cell) {
                        return Err(InvariantError::OccupancyDesync {
                            cell,
                            character: *name,
                        });
                    }
                }
            }
        }

        for (player, entry) in self.players.iter() {
            for card in entry.hand().cards() {
                let piece = card.piece();
                if self.deck.holder(piece) != Some(CardHolder::Player(player)) {
                    return Err(InvariantError::HandDesync { player, piece });
                }
            }
        }

        for weapon in &self.weapons {
            let listed: Vec<_> = self
                .rooms
                .iter()
                .filter(|r| r.contains_weapon(weapon.name()))
                .map(|r| r.name())
                .collect();
            if listed != [weapon.room()] {
                return Err(InvariantError::WeaponDesync(weapon.name()));
            }
        }

        Ok(())
    }
}
