//! Static evaluation of non-terminal positions.
//!
//! Score = positional term + pattern term.
//!
//! - **Positional**: every token adds its column weight for the evaluated
//!   player and subtracts it for the opponent. Center columns take part in
//!   more lines, so they weigh more.
//! - **Pattern**: every 4-cell window is scored on its own and summed.
//!
//! | window (player, opponent, empty) | score |
//! |----------------------------------|-------|
//! | 4, 0, 0                          | +inf |
//! | 3, 0, 1, both ends open          | +inf (cannot be stopped) |
//! | 3, 0, 1, otherwise               | `three_in_window` |
//! | 2, 0, 2, both ends open          | `open_two` |
//! | 2, 0, 2, one end open            | `extendability_score(free cells past that end)` |
//!
//! The opponent's patterns mirror these with negative signs, and every other
//! mix scores zero. An "open end" is the cell just before the window's first
//! cell or just after its last, along the window's direction, that is on the
//! board and empty.
//!
//! A position can hold an unstoppable threat for both sides at once. The
//! infinite terms then cancel and only the finite part is returned, so the
//! result is never NaN.

use super::grid::Board;
use super::lines::{step, Window};
use crate::core::Player;

/// Accumulator for the pattern term.
#[derive(Clone, Copy, Debug, Default)]
struct PatternTally {
    finite: f64,
    winning: bool,
    losing: bool,
}

impl PatternTally {
    fn total(self, positional: f64) -> f64 {
        match (self.winning, self.losing) {
            (true, false) => f64::INFINITY,
            (false, true) => f64::NEG_INFINITY,
            _ => positional + self.finite,
        }
    }
}

/// Which ends of a window are open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OpenEnds {
    before: bool,
    after: bool,
}

impl OpenEnds {
    fn count(self) -> usize {
        usize::from(self.before) + usize::from(self.after)
    }
}

impl Board {
    /// Heuristic value of the position from `player`'s point of view.
    ///
    /// Only meaningful for positions without a winner; the searches check for
    /// wins first and never evaluate a finished game.
    #[must_use]
    pub fn evaluate(&self, player: Player) -> f64 {
        debug_assert!(
            self.check_winner().is_none(),
            "evaluate called on a position that is already won"
        );

        let weights = &self.config().column_weights;
        let mut positional = 0.0;
        for row in 0..self.rows() {
            for col in 0..self.columns() {
                match self.cell(row, col) {
                    Some(p) if p == player => positional += weights[col],
                    Some(_) => positional -= weights[col],
                    None => {}
                }
            }
        }

        let mut tally = PatternTally::default();
        for &window in self.windows() {
            self.score_window(window, player, &mut tally);
        }
        tally.total(positional)
    }

    fn score_window(&self, window: Window, player: Player, tally: &mut PatternTally) {
        let (mut mine, mut theirs, mut empty) = (0, 0, 0);
        for (r, c) in window.cells() {
            match self.cell(r, c) {
                Some(p) if p == player => mine += 1,
                Some(_) => theirs += 1,
                None => empty += 1,
            }
        }

        let eval = &self.config().eval;
        match (mine, theirs, empty) {
            (4, 0, 0) => tally.winning = true,
            (0, 4, 0) => tally.losing = true,
            (3, 0, 1) => {
                if self.open_ends(window).count() == 2 {
                    tally.winning = true;
                } else {
                    tally.finite += eval.three_in_window;
                }
            }
            (0, 3, 1) => {
                if self.open_ends(window).count() == 2 {
                    tally.losing = true;
                } else {
                    tally.finite -= eval.three_in_window;
                }
            }
            (2, 0, 2) => tally.finite += self.two_score(window),
            (0, 2, 2) => tally.finite -= self.two_score(window),
            _ => {}
        }
    }

    /// Score of a two-token window, before applying the owner's sign.
    fn two_score(&self, window: Window) -> f64 {
        let eval = &self.config().eval;
        let ends = self.open_ends(window);
        match ends.count() {
            2 => eval.open_two,
            1 => eval.extendability_score(self.extendability(window, ends)),
            _ => 0.0,
        }
    }

    fn open_ends(&self, window: Window) -> OpenEnds {
        let (rows, columns) = (self.rows(), self.columns());
        let is_empty = |cell: Option<(usize, usize)>| {
            cell.is_some_and(|(r, c)| self.cell(r, c).is_none())
        };
        OpenEnds {
            before: is_empty(window.before(rows, columns)),
            after: is_empty(window.after(rows, columns)),
        }
    }

    /// Empty cells continuing the line outward from its single open end,
    /// including the end cell itself.
    fn extendability(&self, window: Window, ends: OpenEnds) -> usize {
        let (rows, columns) = (self.rows(), self.columns());
        let (mut cell, dr, dc) = if ends.after {
            (window.after(rows, columns), window.dr, window.dc)
        } else {
            (window.before(rows, columns), -window.dr, -window.dc)
        };

        let mut free = 0;
        while let Some((r, c)) = cell {
            if self.cell(r, c).is_some() {
                break;
            }
            free += 1;
            cell = step(r, c, dr, dc, rows, columns);
        }
        free
    }
}
