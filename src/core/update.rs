use crate::core::{Cell, Direction, GameChangeType, Grid};

impl Grid {
    /// Moves the player one cell, pushing a crate if one is in the way.
    /// Returns `None` and leaves the grid untouched when the move is blocked.
    pub fn step(&mut self, direction: Direction) -> Option<GameChangeType> {
        let dir = direction.offset();
        let player = self.find_player();

        let dest_pos = player + dir;
        let dest = self.get(&dest_pos)?;
        if dest.contains(Cell::WALL) {
            return None;
        }

        let pushing = dest.contains(Cell::CRATE);
        if pushing {
            let beyond_pos = dest_pos + dir;
            let beyond = self.get(&beyond_pos)?;
            if beyond.is_blocking() {
                return None;
            }

            // Move box
            self[&beyond_pos].insert(Cell::CRATE);
            self[&dest_pos].remove(Cell::CRATE);
        }

        // Move player
        self[&dest_pos].insert(Cell::SOKO);
        self[&player].remove(Cell::SOKO);
        self.set_player(dest_pos);

        Some(if pushing {
            GameChangeType::PlayerAndBoxMove
        } else {
            GameChangeType::PlayerMove
        })
    }
}
