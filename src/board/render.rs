//! Human- and machine-readable views of a board.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::grid::Board;
use crate::core::Player;

/// Serializable picture of a position, for external move sources.
///
/// Rows are listed top to bottom as strings of the configured symbols.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    /// One string per row, top row first.
    pub rows: Vec<String>,
    /// Symbol of the player to move.
    pub to_play: char,
    /// Legal columns.
    pub legal_moves: Vec<usize>,
}

impl Board {
    /// Symbol for a cell's contents.
    #[must_use]
    pub fn symbol_at(&self, row: usize, col: usize) -> char {
        match self.cell(row, col) {
            Some(player) => self.config().symbol(player),
            None => self.config().empty_symbol,
        }
    }

    /// Capture the grid and side to move.
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            rows: (0..self.rows())
                .map(|r| (0..self.columns()).map(|c| self.symbol_at(r, c)).collect())
                .collect(),
            to_play: self.config().symbol(self.to_play()),
            legal_moves: self.available_moves(),
        }
    }

    /// Map a render symbol back to its player.
    #[must_use]
    pub fn player_for_symbol(&self, symbol: char) -> Option<Player> {
        Player::ALL
            .into_iter()
            .find(|&p| self.config().symbol(p) == symbol)
    }

    /// Framed grid with the winning line, if any, wrapped in brackets.
    #[must_use]
    pub fn render_highlighted(&self) -> String {
        let line = self.winning_line();
        let mut out = String::new();
        self.write_grid(&mut out, |r, c| line.is_some_and(|l| l.contains(&(r, c))))
            .expect("writing to a String cannot fail");
        out
    }

    fn write_grid(
        &self,
        out: &mut impl fmt::Write,
        highlight: impl Fn(usize, usize) -> bool,
    ) -> fmt::Result {
        let width = self.columns() * 4 - 1;
        writeln!(out, " {}", "-".repeat(width))?;
        for r in 0..self.rows() {
            write!(out, "|")?;
            for c in 0..self.columns() {
                let symbol = self.symbol_at(r, c);
                if highlight(r, c) {
                    write!(out, "[{symbol}]|")?;
                } else {
                    write!(out, " {symbol} |")?;
                }
            }
            writeln!(out)?;
            if r + 1 != self.rows() {
                writeln!(out, "|{}|", "-".repeat(width))?;
            }
        }
        writeln!(out, " {}", "-".repeat(width))?;
        let labels: Vec<String> = (0..self.columns()).map(|c| format!("{c:^3}")).collect();
        write!(out, " {}", labels.join(" "))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, |_, _| false)
    }
}
