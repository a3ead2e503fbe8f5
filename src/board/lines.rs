//! Enumeration of the 4-cell windows a line of four can occupy.
//!
//! Every window is a start cell plus a unit direction. The same list drives
//! win detection and the heuristic, and its order fixes the scan order:
//! horizontal, vertical, diagonal `\`, diagonal `/`.

use crate::core::CONNECT;

/// Horizontal, left to right.
pub const HORIZONTAL: (isize, isize) = (0, 1);
/// Vertical, top to bottom.
pub const VERTICAL: (isize, isize) = (1, 0);
/// Diagonal `\`, top-left to bottom-right.
pub const DIAGONAL_DOWN: (isize, isize) = (1, 1);
/// Diagonal `/`, bottom-left to top-right.
pub const DIAGONAL_UP: (isize, isize) = (-1, 1);

/// Four consecutive cells along one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Window {
    /// Row of the first cell.
    pub row: usize,
    /// Column of the first cell.
    pub col: usize,
    /// Row step.
    pub dr: isize,
    /// Column step.
    pub dc: isize,
}

impl Window {
    /// Create a window from its first cell and direction.
    #[must_use]
    pub const fn new(row: usize, col: usize, (dr, dc): (isize, isize)) -> Self {
        Self { row, col, dr, dc }
    }

    /// The four cells, in direction order.
    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        (0..CONNECT as isize).map(move |k| {
            (
                (self.row as isize + k * self.dr) as usize,
                (self.col as isize + k * self.dc) as usize,
            )
        })
    }

    /// Coordinates of the four cells as an array.
    #[must_use]
    pub fn coords(self) -> [(usize, usize); CONNECT] {
        let mut out = [(0, 0); CONNECT];
        for (slot, cell) in out.iter_mut().zip(self.cells()) {
            *slot = cell;
        }
        out
    }

    /// The cell one step before the first cell, if on the board.
    #[must_use]
    pub fn before(self, rows: usize, columns: usize) -> Option<(usize, usize)> {
        step(self.row, self.col, -self.dr, -self.dc, rows, columns)
    }

    /// The cell one step past the last cell, if on the board.
    #[must_use]
    pub fn after(self, rows: usize, columns: usize) -> Option<(usize, usize)> {
        let last = CONNECT as isize - 1;
        let row = self.row as isize + last * self.dr;
        let col = self.col as isize + last * self.dc;
        step(row as usize, col as usize, self.dr, self.dc, rows, columns)
    }
}

/// Move one cell from `(row, col)` by `(dr, dc)`, staying on the board.
#[must_use]
pub fn step(
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    rows: usize,
    columns: usize,
) -> Option<(usize, usize)> {
    let r = row as isize + dr;
    let c = col as isize + dc;
    if r < 0 || c < 0 || r >= rows as isize || c >= columns as isize {
        None
    } else {
        Some((r as usize, c as usize))
    }
}

/// All windows of a `rows x columns` board in scan order.
#[must_use]
pub fn all_windows(rows: usize, columns: usize) -> Vec<Window> {
    let n = CONNECT;
    if rows < n || columns < n {
        return Vec::new();
    }

    let mut windows = Vec::new();
    for r in 0..rows {
        for c in 0..=columns - n {
            windows.push(Window::new(r, c, HORIZONTAL));
        }
    }
    for c in 0..columns {
        for r in 0..=rows - n {
            windows.push(Window::new(r, c, VERTICAL));
        }
    }
    for r in 0..=rows - n {
        for c in 0..=columns - n {
            windows.push(Window::new(r, c, DIAGONAL_DOWN));
        }
    }
    for r in n - 1..rows {
        for c in 0..=columns - n {
            windows.push(Window::new(r, c, DIAGONAL_UP));
        }
    }
    windows
}
