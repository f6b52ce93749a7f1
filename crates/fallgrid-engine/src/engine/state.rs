use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{
    core::{board::Board, cell::Cell, shape::PieceShape},
    engine::{config::GameConfig, kicks, randomizer::Randomizer},
};

/// Discrete input events fed to [`GameState::key_down`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Key {
    Left,
    Right,
    Clockwise,
    Anticlockwise,
    Flip,
    SoftDrop,
    HardDrop,
    Hold,
}

/// How a piece stamp is painted onto the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stamp {
    Erase,
    Shadow,
    Full,
}

/// One running match.
///
/// The falling piece and its shadow are always painted into the board, so
/// [`cell`](Self::cell) reflects everything a renderer needs. Every
/// mutation follows the same discipline: erase the piece, change the
/// logical state, test for collision, repaint.
#[derive(Debug)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    randomizer: Box<dyn Randomizer>,
    current: &'static PieceShape,
    current_x: i32,
    current_y: i32,
    current_rotation: i32,
    fall_amount: f64,
    next_queue: VecDeque<&'static PieceShape>,
    hold_piece: Option<&'static PieceShape>,
    held: bool,
    lock_delay_counter: u32,
    move_reset_count: u32,
    lowest_y: i32,
    line_clear_delay_counter: u32,
    alive: bool,
    score: u32,
}

impl GameState {
    /// Starts a match: spawns the first piece and pre-fills the preview
    /// queue. A match that cannot even spawn its first piece begins dead.
    ///
    /// # Panics
    ///
    /// Panics if the config's dimensions are not positive or the visible
    /// height exceeds the full height.
    #[must_use]
    pub fn new(config: GameConfig, mut randomizer: Box<dyn Randomizer>) -> Self {
        assert!(config.width > 0 && config.height > 0);
        assert!(config.height <= config.full_height);
        let board = Board::new(config.width, config.full_height);
        let current = randomizer.next_shape();
        let next_queue = (0..config.next_queue_size)
            .map(|_| randomizer.next_shape())
            .collect();
        let mut game = Self {
            config,
            board,
            randomizer,
            current,
            current_x: 0,
            current_y: 0,
            current_rotation: 0,
            fall_amount: 0.0,
            next_queue,
            hold_piece: None,
            held: false,
            lock_delay_counter: 0,
            move_reset_count: 0,
            lowest_y: 0,
            line_clear_delay_counter: 0,
            alive: true,
            score: 0,
        };
        game.reset_spawn_state();
        if game.collided() {
            game.alive = false;
        } else {
            game.draw_piece(false);
        }
        game
    }

    /// False once the match has topped out. A dead match ignores all
    /// further input and ticks.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The cell at `(x, y)`, shadow and falling piece included; `Empty`
    /// outside the board.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.board.cell(x, y)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The `index`-th upcoming piece, 0 being the next to spawn.
    #[must_use]
    pub fn next_piece(&self, index: usize) -> Option<&'static PieceShape> {
        self.next_queue.get(index).copied()
    }

    /// The piece currently parked in the hold slot.
    #[must_use]
    pub fn hold_piece(&self) -> Option<&'static PieceShape> {
        self.hold_piece
    }

    /// Applies one input event. Input is ignored while the match is dead
    /// or frozen by a line clear.
    pub fn key_down(&mut self, key: Key) {
        if !self.alive || self.line_clear_delay_counter > 0 {
            return;
        }
        match key {
            Key::Left => self.player_move(-1),
            Key::Right => self.player_move(1),
            Key::Clockwise => self.player_rotate(1),
            Key::Anticlockwise => self.player_rotate(-1),
            Key::Flip => self.player_rotate(2),
            Key::SoftDrop => {
                while self.move_piece(0, -1) {
                    self.score += 1;
                }
            }
            Key::HardDrop => {
                while self.move_piece(0, -1) {
                    self.score += 2;
                }
                self.lock_piece();
            }
            Key::Hold => self.hold(),
        }
    }

    /// Advances the match by one tick: runs the line-clear freeze, then
    /// either counts down the lock delay (grounded) or applies gravity.
    pub fn tick(&mut self) {
        if !self.alive {
            return;
        }
        if self.line_clear_delay_counter > 0 {
            self.line_clear_delay_counter -= 1;
            if self.line_clear_delay_counter == 0 {
                self.draw_piece(false);
            }
            return;
        }
        if self.grounded() {
            self.lock_delay_counter = self.lock_delay_counter.saturating_sub(1);
            if self.lock_delay_counter == 0 {
                self.lock_piece();
            }
        } else {
            self.fall_amount += self.config.gravity;
            while self.fall_amount >= 1.0 {
                self.fall_amount -= 1.0;
                self.move_piece(0, -1);
            }
        }
    }

    fn player_move(&mut self, dx: i32) {
        let prev_lowest = self.lowest_y;
        if self.move_piece(dx, 0) {
            self.apply_move_reset(prev_lowest);
        }
    }

    fn player_rotate(&mut self, n: i32) {
        let prev_lowest = self.lowest_y;
        if self.rotate_piece(n) {
            self.apply_move_reset(prev_lowest);
        }
    }

    /// A successful player action refreshes the lock delay, up to the
    /// move-reset cap. An action that just reached a new lowest row
    /// already got a free refresh and does not spend a reset.
    fn apply_move_reset(&mut self, prev_lowest: i32) {
        if self.lowest_y < prev_lowest {
            return;
        }
        if self.move_reset_count < self.config.max_move_reset {
            self.move_reset_count += 1;
            self.lock_delay_counter = self.config.lock_delay;
        }
    }

    /// True if the piece cannot descend any further.
    fn grounded(&mut self) -> bool {
        self.draw_piece(true);
        self.current_y -= 1;
        let blocked = self.collided();
        self.current_y += 1;
        self.draw_piece(false);
        blocked
    }

    /// True if any full cell of the piece lies outside the field or over
    /// a settled cell. Shadow cells do not collide.
    fn collided(&self) -> bool {
        for row in 0..self.current.height() {
            for col in 0..self.current.width() {
                if !self
                    .current
                    .cell_at(self.current_rotation, row, col)
                    .is_full()
                {
                    continue;
                }
                let x = self.current_x + col;
                let y = self.current_y + row;
                if !self.board.in_bounds(x, y) || self.board.cell(x, y).is_full() {
                    return true;
                }
            }
        }
        false
    }

    fn draw(&mut self, stamp: Stamp) {
        for row in 0..self.current.height() {
            for col in 0..self.current.width() {
                let local = self.current.cell_at(self.current_rotation, row, col);
                if !local.is_full() {
                    continue;
                }
                let cell = match stamp {
                    Stamp::Erase => Cell::Empty,
                    Stamp::Shadow => Cell::Shadow,
                    Stamp::Full => local,
                };
                self.board.set(self.current_x + col, self.current_y + row, cell);
            }
        }
    }

    /// Paints (or erases) the shadow at the piece's drop row, then the
    /// piece itself. Erasing runs in the opposite order so the shadow scan
    /// never sees the piece's own cells.
    fn draw_piece(&mut self, clear: bool) {
        if clear {
            self.draw(Stamp::Erase);
        }
        let real_y = self.current_y;
        while !self.collided() {
            self.current_y -= 1;
        }
        self.current_y += 1;
        self.draw(if clear { Stamp::Erase } else { Stamp::Shadow });
        self.current_y = real_y;
        if !clear {
            self.draw(Stamp::Full);
        }
    }

    /// Attempts to translate the piece; reverts on collision. Reaching a
    /// new lowest row refreshes the lock delay and move-reset budget.
    fn move_piece(&mut self, dx: i32, dy: i32) -> bool {
        self.draw_piece(true);
        self.current_x += dx;
        self.current_y += dy;
        let blocked = self.collided();
        if blocked {
            self.current_x -= dx;
            self.current_y -= dy;
        } else {
            self.refresh_lowest();
        }
        self.draw_piece(false);
        !blocked
    }

    /// Attempts to rotate the piece by `n` quarter-turns (negative for
    /// anticlockwise), trying each wall-kick candidate in order; reverts
    /// if all candidates collide.
    fn rotate_piece(&mut self, n: i32) -> bool {
        self.draw_piece(true);
        let from = self.current_rotation;
        let (x, y) = (self.current_x, self.current_y);
        let to = (from + n).rem_euclid(self.current.rotation_count());
        self.current_rotation = to;
        let wide = self.current.width().max(self.current.height()) >= 4;
        let mut placed = false;
        for (dx, dy) in kicks::kick_candidates(wide, from, to, n > 0) {
            self.current_x = x + dx;
            self.current_y = y + dy;
            if !self.collided() {
                placed = true;
                break;
            }
        }
        if placed {
            self.refresh_lowest();
        } else {
            self.current_rotation = from;
            self.current_x = x;
            self.current_y = y;
        }
        self.draw_piece(false);
        placed
    }

    fn refresh_lowest(&mut self) {
        if self.current_y < self.lowest_y {
            self.lowest_y = self.current_y;
            self.move_reset_count = 0;
            self.lock_delay_counter = self.config.lock_delay;
        }
    }

    /// Settles the piece where it stands, scores any cleared rows, and
    /// spawns the next piece. Spawning into a collision tops the match
    /// out; clearing rows arms the freeze window instead of drawing the
    /// new piece immediately.
    fn lock_piece(&mut self) {
        self.current = self.next_from_queue();
        self.reset_spawn_state();
        self.held = false;

        let mut cleared: usize = 0;
        let mut y = self.config.full_height;
        while y > 0 {
            y -= 1;
            if self.board.is_row_full(y) {
                self.board.shift_rows_down(y);
                cleared += 1;
                // The row above just moved here; examine this index again.
                y += 1;
            }
        }
        self.score += self.config.clear_scores[cleared.min(4)];

        if self.collided() {
            self.alive = false;
            return;
        }
        if cleared > 0 && self.config.line_clear_delay > 0 {
            self.line_clear_delay_counter = self.config.line_clear_delay;
        } else {
            self.draw_piece(false);
        }
    }

    /// Parks the falling piece in the hold slot and continues with the
    /// held piece (or the next queued piece on first use). Allowed once
    /// per piece; the latch releases when a piece locks.
    fn hold(&mut self) {
        if self.held {
            return;
        }
        self.draw_piece(true);
        let swapped = self.hold_piece.replace(self.current);
        self.current = match swapped {
            Some(shape) => shape,
            None => self.next_from_queue(),
        };
        self.reset_spawn_state();
        self.held = true;
        if self.collided() {
            self.alive = false;
            return;
        }
        self.draw_piece(false);
    }

    fn next_from_queue(&mut self) -> &'static PieceShape {
        match self.next_queue.pop_front() {
            Some(shape) => {
                self.next_queue.push_back(self.randomizer.next_shape());
                shape
            }
            None => self.randomizer.next_shape(),
        }
    }

    /// Resets the per-piece state: spawn position centered above the
    /// visible area, fresh gravity accumulator, lock delay, and move-reset
    /// budget.
    fn reset_spawn_state(&mut self) {
        self.current_rotation = 0;
        self.current_x = (self.config.width - self.current.width()) / 2;
        self.current_y = self.config.height + self.current.spawn_row_offset();
        self.fall_amount = 0.0;
        self.lock_delay_counter = self.config.lock_delay;
        self.move_reset_count = 0;
        self.lowest_y = self.current_y;
    }
}
