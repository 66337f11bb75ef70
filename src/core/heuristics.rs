use crate::core::{Cell, Grid, Vec2};

impl Grid {
    /// Won once every crate sits on a target. Crates and targets are balanced
    /// by construction, so this only has to look for a bare crate.
    pub fn is_won(&self) -> bool {
        !self.iter_cells().any(Cell::is_bare_crate)
    }

    /// Detects the obvious deadlocks only:
    /// a fully occupied 2x2 square holding at least one crate that is off target,
    /// or an off-target crate with a wall on two neighbouring sides inside a 2x2 square.
    /// Misses everything else.
    pub fn is_deadlock(&self) -> bool {
        if self.height() < 2 || self.width() < 2 {
            return false;
        }
        for i in 0..self.height() - 1 {
            for j in 0..self.width() - 1 {
                if is_quad_dead(self.quad_at(i, j)) {
                    return true;
                }
            }
        }
        false
    }

    /// Cells of the 2x2 window with its top-left corner at row `i`, column `j`,
    /// ordered top-left, top-right, bottom-left, bottom-right.
    fn quad_at(&self, i: usize, j: usize) -> [Cell; 4] {
        let at = |di: usize, dj: usize| self[&Vec2 { i: (i + di) as i32, j: (j + dj) as i32 }];
        [at(0, 0), at(0, 1), at(1, 0), at(1, 1)]
    }

    fn iter_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height()).flat_map(move |i| self.row(i).iter().copied())
    }
}

fn is_quad_dead(quad: [Cell; 4]) -> bool {
    if quad.iter().any(|c| c.is_bare_crate()) && quad.iter().all(|c| c.is_blocking()) {
        return true;
    }

    let [tl, tr, bl, br] = quad;
    let wall = |c: Cell| c == Cell::WALL;
    (tl.is_bare_crate() && wall(tr) && wall(bl))
        || (tr.is_bare_crate() && wall(tl) && wall(br))
        || (bl.is_bare_crate() && wall(tl) && wall(br))
        || (br.is_bare_crate() && wall(tr) && wall(bl))
}
