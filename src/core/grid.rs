use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::{LevelRule, Result, SokobanError};
use crate::core::models::{Cell, Vec2};

/// Rectangular, validated level grid. Cloning yields an independent copy.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    player: Vec2,
}

impl Grid {
    /// Pads every row to the longest one and checks the level invariants.
    pub fn new(mut rows: Vec<Vec<Cell>>) -> Result<Grid> {
        let height = rows.len();
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        if width * height <= 2 {
            return Err(LevelRule::TooSmall { width, height }.into());
        }

        let mut cells = Vec::with_capacity(width * height);
        for row in rows.iter_mut() {
            row.resize(width, Cell::EMPTY);
            cells.extend_from_slice(row);
        }

        let mut grid = Grid { width, height, cells, player: Vec2 { i: 0, j: 0 } };
        grid.validate()?;
        Ok(grid)
    }

    /// Decodes rows written in the level symbol alphabet.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Grid> {
        let mut decoded = Vec::with_capacity(rows.len());
        for (row_index, row) in rows.iter().enumerate() {
            decoded.push(decode_row(row.as_ref(), row_index)?);
        }
        Grid::new(decoded)
    }

    fn validate(&mut self) -> Result<()> {
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell.symbol().is_none() {
                return Err(LevelRule::IllegalCell {
                    row: index / self.width,
                    column: index % self.width,
                    bits: cell.bits(),
                }
                .into());
            }
        }

        let players = self.count(Cell::SOKO);
        if players != 1 {
            return Err(LevelRule::PlayerCount(players).into());
        }
        let crates = self.count(Cell::CRATE);
        let targets = self.count(Cell::TARGET);
        if crates != targets {
            return Err(LevelRule::CrateTargetMismatch { crates, targets }.into());
        }
        if crates == 0 {
            return Err(LevelRule::NoCrates.into());
        }

        if let Some(index) = self.cells.iter().position(|c| c.contains(Cell::SOKO)) {
            self.player = self.position_of(index);
        }
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.i >= 0 && pos.j >= 0 && (pos.i as usize) < self.height && (pos.j as usize) < self.width
    }

    pub fn get(&self, pos: &Vec2) -> Option<Cell> {
        if !self.contains(pos) {
            return None;
        }
        Some(self[pos])
    }

    pub fn find_player(&self) -> Vec2 {
        self.player
    }

    pub(crate) fn set_player(&mut self, pos: Vec2) {
        self.player = pos;
    }

    /// Number of cells carrying `flag`, alone or combined.
    pub fn count(&self, flag: Cell) -> usize {
        self.cells.iter().filter(|c| c.contains(flag)).count()
    }

    pub fn row(&self, i: usize) -> &[Cell] {
        &self.cells[i * self.width..(i + 1) * self.width]
    }

    pub fn rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|i| self.row(i).iter().map(|c| c.symbol().unwrap_or('?')).collect())
            .collect()
    }

    fn position_of(&self, index: usize) -> Vec2 {
        Vec2 { i: (index / self.width) as i32, j: (index % self.width) as i32 }
    }
}

pub(crate) fn decode_row(row: &str, row_index: usize) -> Result<Vec<Cell>> {
    row.chars()
        .map(|symbol| Cell::from_symbol(symbol).ok_or(SokobanError::Decode { symbol, row: row_index }))
        .collect()
}

impl std::ops::Index<&Vec2> for Grid {
    type Output = Cell;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[index.i as usize * self.width + index.j as usize]
    }
}

impl std::ops::IndexMut<&Vec2> for Grid {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        &mut self.cells[index.i as usize * self.width + index.j as usize]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = SokobanError;

    fn try_from(rows: Vec<String>) -> Result<Grid> {
        Grid::from_rows(&rows)
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Vec<String> {
        grid.rows()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rows_are_padded_to_widest() {
        let grid = Grid::from_rows(&["#####", "#@$.#", "###"]).unwrap();

        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.rows()[2], "###  ");
        assert_eq!(grid.find_player(), Vec2 { i: 1, j: 1 });
    }

    #[test]
    fn rejects_level_rule_violations() {
        let cases: [(&[&str], LevelRule); 5] = [
            (&["@$"], LevelRule::TooSmall { width: 2, height: 1 }),
            (&["#@$.@#"], LevelRule::PlayerCount(2)),
            (&["# $.#"], LevelRule::PlayerCount(0)),
            (&["#@$$.#"], LevelRule::CrateTargetMismatch { crates: 2, targets: 1 }),
            (&["#@  #"], LevelRule::NoCrates),
        ];
        for (rows, expected) in cases {
            match Grid::from_rows(rows) {
                Err(SokobanError::InvalidLevel(rule)) => assert_eq!(rule, expected, "for {:?}", rows),
                other => panic!("expected {:?} for {:?}, got {:?}", expected, rows, other),
            }
        }
    }

    #[test]
    fn rejects_illegal_cell_combination() {
        let rows = vec![vec![Cell::SOKO, Cell::CRATE, Cell::TARGET, Cell::WALL | Cell::CRATE]];
        let result = Grid::new(rows);
        assert!(matches!(
            result,
            Err(SokobanError::InvalidLevel(LevelRule::IllegalCell { row: 0, column: 3, .. }))
        ));
    }

    #[test]
    fn crate_on_target_counts_on_both_sides() {
        let grid = Grid::from_rows(&["#@*#"]).unwrap();
        assert_eq!(grid.count(Cell::CRATE), 1);
        assert_eq!(grid.count(Cell::TARGET), 1);
    }

    #[test]
    fn serializes_as_symbol_rows() {
        let grid = Grid::from_rows(&["#####", "#+$ #", "#####"]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r######"["#####","#+$ #","#####"]"######);

        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }
}
