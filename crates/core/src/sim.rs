//! The snake simulation.
//!
//! One `tick` moves the head a single cell, the tail follows unless the
//! head just ate, and the occupancy buffer is updated in place. Food is
//! placed lazily on the first tick; until then `meat_position()` reports
//! the `(0, 0)` sentinel and the renderer treats the origin as empty.

use std::collections::VecDeque;
use std::fmt;

use crate::rng::SimpleRng;
use crate::snapshot::BoardSnapshot;
use crate::types::{Cell, Direction, BOARD_HEIGHT, BOARD_WIDTH, CELL_EMPTY, CELL_FILLED};

/// Fatal step failure.
///
/// Once returned, the round is over and every later `tick` returns the
/// same value again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    HitWall,
    HitBody,
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::HitWall => write!(f, "snake hit the wall"),
            StepError::HitBody => write!(f, "snake ran into itself"),
        }
    }
}

impl std::error::Error for StepError {}

/// The simulation engine.
///
/// Owns the occupancy buffer, the snake body, food placement, and the
/// score. All coordinates are (row, col) with row 0 at the top.
#[derive(Debug, Clone)]
pub struct SnakeSim {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    /// Body coordinates, tail at the front, head at the back.
    body: VecDeque<(u16, u16)>,
    head: (u16, u16),
    meat: Option<(u16, u16)>,
    score: u32,
    fate: Option<StepError>,
    rng: SimpleRng,
}

impl SnakeSim {
    /// Create a fresh game: a single-cell snake at the board center and no
    /// food placed yet.
    pub fn new(seed: u32) -> Self {
        let width = BOARD_WIDTH;
        let height = BOARD_HEIGHT;
        let head = (height / 2, width / 2);

        let mut cells = vec![CELL_EMPTY; (width as usize) * (height as usize)];
        cells[(head.0 as usize) * (width as usize) + (head.1 as usize)] = CELL_FILLED;

        let mut body = VecDeque::new();
        body.push_back(head);

        Self {
            width,
            height,
            cells,
            body,
            head,
            meat: None,
            score: 0,
            fate: None,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Flat row-major occupancy buffer, refreshed in place by `tick`.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Current food coordinate, or the `(0, 0)` sentinel when none is placed.
    pub fn meat_position(&self) -> (u16, u16) {
        self.meat.unwrap_or((0, 0))
    }

    /// Food eaten so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.fate.is_some()
    }

    /// Read-only view of the current state for one frame of rendering.
    pub fn snapshot(&self) -> BoardSnapshot<'_> {
        BoardSnapshot {
            width: self.width,
            height: self.height,
            cells: &self.cells,
            meat: self.meat_position(),
            score: self.score,
        }
    }

    /// Advance the simulation by exactly one step in `direction`.
    ///
    /// Wall or body contact ends the round; the error is sticky.
    pub fn tick(&mut self, direction: Direction) -> Result<(), StepError> {
        if let Some(err) = self.fate {
            return Err(err);
        }

        // The first tick places the food; until then the reported
        // position stays at the sentinel.
        if self.meat.is_none() {
            self.meat = self.place_meat();
        }

        let (dr, dc) = direction.delta();
        let next_row = self.head.0 as i32 + dr;
        let next_col = self.head.1 as i32 + dc;
        if next_row < 0
            || next_col < 0
            || next_row >= self.height as i32
            || next_col >= self.width as i32
        {
            self.fate = Some(StepError::HitWall);
            return Err(StepError::HitWall);
        }
        let next = (next_row as u16, next_col as u16);

        let ate = self.meat == Some(next);
        if !ate {
            // Tail vacates first so the head may enter the old tail cell.
            if let Some(tail) = self.body.pop_front() {
                let idx = self.index(tail.0, tail.1);
                self.cells[idx] = CELL_EMPTY;
            }
        }

        let next_idx = self.index(next.0, next.1);
        if self.cells[next_idx] == CELL_FILLED {
            self.fate = Some(StepError::HitBody);
            return Err(StepError::HitBody);
        }

        self.cells[next_idx] = CELL_FILLED;
        self.body.push_back(next);
        self.head = next;

        if ate {
            self.score += 1;
            self.meat = self.place_meat();
        }

        Ok(())
    }

    fn index(&self, row: u16, col: u16) -> usize {
        (row as usize) * (self.width as usize) + (col as usize)
    }

    /// Pick a random empty cell for the food.
    ///
    /// The origin is reserved as the "not placed" sentinel and is never
    /// chosen. Returns `None` when the board is too full to leave the
    /// sentinel unambiguous.
    fn place_meat(&mut self) -> Option<(u16, u16)> {
        let total = (self.width as usize) * (self.height as usize);
        if self.body.len() + 1 >= total {
            return None;
        }

        loop {
            let row = self.rng.next_range(self.height as u32) as u16;
            let col = self.rng.next_range(self.width as u32) as u16;
            if (row, col) == (0, 0) {
                continue;
            }
            if self.cells[self.index(row, col)] == CELL_EMPTY {
                return Some((row, col));
            }
        }
    }
}
