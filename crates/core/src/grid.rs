//! Grid module - the playing field
//!
//! The grid is a `height x width` interior addressed with 1-based `(row, column)`
//! positions. Uses a flat array sized for the largest legal grid, so it never
//! allocates. Coordinates: row 1 is the top row, column 1 the leftmost column.
//!
//! There is no sentinel border: every accessor bounds-checks and returns `None`
//! outside the interior, which gives scans the same "stop at the edge" behavior.

use std::fmt;

use crate::alphabet::CandyAlphabet;
use crate::error::EngineError;
use crate::rng::RandomSource;
use crate::types::{Candy, Cell, Position, Run, MAX_CELLS, MAX_HEIGHT, MAX_WIDTH};

/// The playing field, row-major flat storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order ((row - 1) * width + (column - 1))
    cells: [Cell; MAX_CELLS],
}

impl Grid {
    /// Create a grid with every interior cell empty
    pub fn new(width: u8, height: u8) -> Result<Self, EngineError> {
        if width == 0 || height == 0 || width > MAX_WIDTH || height > MAX_HEIGHT {
            return Err(EngineError::InvalidDimensions {
                width,
                height,
                max_width: MAX_WIDTH,
                max_height: MAX_HEIGHT,
            });
        }
        Ok(Self {
            width,
            height,
            cells: [None; MAX_CELLS],
        })
    }

    /// Build a grid from text rows: digits `1`..`7` are candies, anything else is empty.
    ///
    /// ```
    /// use tui_crush_core::Grid;
    ///
    /// let grid = Grid::from_rows(&["121", "2.2"]).unwrap();
    /// assert_eq!(grid.width(), 3);
    /// assert_eq!(grid.height(), 2);
    /// assert!(grid.has_empty());
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, EngineError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if height > MAX_HEIGHT as usize
            || width > MAX_WIDTH as usize
            || rows.iter().any(|r| r.chars().count() != width)
        {
            return Err(EngineError::InvalidDimensions {
                width: width.min(u8::MAX as usize) as u8,
                height: height.min(u8::MAX as usize) as u8,
                max_width: MAX_WIDTH,
                max_height: MAX_HEIGHT,
            });
        }

        let mut grid = Self::new(width as u8, height as u8)?;
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                grid.set(
                    Position::new(r as u8 + 1, c as u8 + 1),
                    Candy::from_symbol(ch),
                );
            }
        }
        Ok(grid)
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some((pos.row as usize - 1) * self.width as usize + (pos.column as usize - 1))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Check if a position lies inside the interior
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 1 && pos.row <= self.height && pos.column >= 1 && pos.column <= self.width
    }

    /// Get cell at position. Returns None if out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Candy at position, `None` when empty or out of bounds
    pub fn candy(&self, pos: Position) -> Option<Candy> {
        self.get(pos).flatten()
    }

    /// Set cell at position. Returns false if out of bounds
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Exchange two cells. Returns false (and changes nothing) if either is out of bounds
    pub fn swap(&mut self, a: Position, b: Position) -> bool {
        match (self.index(a), self.index(b)) {
            (Some(ia), Some(ib)) => {
                self.cells.swap(ia, ib);
                true
            }
            _ => false,
        }
    }

    /// Interior cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells[..self.width as usize * self.height as usize]
    }

    /// One interior row (1-based)
    pub fn row(&self, row: u8) -> Option<&[Cell]> {
        if row == 0 || row > self.height {
            return None;
        }
        let start = (row as usize - 1) * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Whether any interior cell is empty
    pub fn has_empty(&self) -> bool {
        self.cells().iter().any(|c| c.is_none())
    }

    /// Whether every interior cell holds a candy
    pub fn is_dense(&self) -> bool {
        !self.has_empty()
    }

    /// Number of empty interior cells
    pub fn empty_count(&self) -> usize {
        self.cells().iter().filter(|c| c.is_none()).count()
    }

    /// Replace every empty interior cell with an independent uniform draw.
    ///
    /// Cells are visited row-major, which fixes the draw order for scripted sources.
    pub fn fill(&mut self, alphabet: &CandyAlphabet, rng: &mut impl RandomSource) {
        let len = self.width as usize * self.height as usize;
        for cell in &mut self.cells[..len] {
            if cell.is_none() {
                *cell = Some(alphabet.draw(rng));
            }
        }
    }

    /// Empty every cell covered by a run.
    pub fn clear_run(&mut self, run: &Run) {
        for pos in run.positions() {
            self.set(pos, None);
        }
    }
}

impl fmt::Display for Grid {
    /// One line per row, candies as digits and empty cells as `.`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 1..=self.height {
            if row > 1 {
                writeln!(f)?;
            }
            for cell in self.row(row).unwrap_or(&[]) {
                let ch = cell.map(|c| c.symbol()).unwrap_or('.');
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}
