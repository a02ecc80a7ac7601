//! Game orchestrator: runs one game between two [`Player`]s.
//!
//! Each turn the player on move is asked for a move, the move is executed on
//! the board (promotions become queens), the opponent is notified and the
//! position is checked for the end of the game.

use crate::agent::player::{GameResult, Player};
use crate::board::Board;
use crate::config::GameConfig;
use crate::error::Result;
use crate::game_repr::{Color, Move};

pub struct Orchestrator {
    board: Board,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    /// Ply limit after which the game is called a draw
    max_plies: usize,
    plies_played: usize,
    result: Option<GameResult>,
}

impl Orchestrator {
    /// Game from the starting position
    pub fn new(white: Box<dyn Player>, black: Box<dyn Player>, max_plies: usize) -> Self {
        Self::with_board(Board::new(), white, black, max_plies)
    }

    /// Game continuing from an existing board
    pub fn with_board(board: Board, white: Box<dyn Player>, black: Box<dyn Player>, max_plies: usize) -> Self {
        Self {
            board,
            white,
            black,
            max_plies,
            plies_played: 0,
            result: None,
        }
    }

    /// Players and limits from a [`GameConfig`]. The two sides get different
    /// seeds so two random players do not mirror each other.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.white.build(config.seed),
            config.black.build(config.seed.wrapping_add(1)),
            config.max_plies,
        )
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn plies_played(&self) -> usize {
        self.plies_played
    }

    /// Ask the player on move for a move and execute it.
    ///
    /// Returns the result once the game is over. A player that returns no
    /// move while legal moves exist resigns.
    pub fn request_move(&mut self) -> Result<Option<GameResult>> {
        if self.result.is_none() {
            self.check_game_end();
        }
        if self.result.is_some() {
            return Ok(self.result);
        }

        let color = self.board.side_to_move();
        let player = match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };

        match player.get_move(self.board.position(), color) {
            Some(mv) => {
                log::debug!("{} ({color:?}): {mv}", player.name());
                self.process_move(mv)?;
            }
            None => {
                log::info!("{} ({color:?}) resigns", player.name());
                self.handle_game_end(GameResult::from_winner(color.opposite()));
            }
        }
        Ok(self.result)
    }

    /// Play until the game ends
    pub fn run(&mut self) -> Result<GameResult> {
        loop {
            if let Some(result) = self.request_move()? {
                return Ok(result);
            }
        }
    }

    fn process_move(&mut self, mv: Move) -> Result<()> {
        let color = self.board.side_to_move();
        if self.board.make_move(mv)? {
            self.board.promote(0)?;
        }
        self.plies_played += 1;
        log::trace!("after ply {}:\n{}", self.plies_played, self.board);

        let opponent = match color {
            Color::White => &mut self.black,
            Color::Black => &mut self.white,
        };
        opponent.opponent_moved(mv);

        self.check_game_end();
        Ok(())
    }

    fn check_game_end(&mut self) {
        match self.board.game_result() {
            Some(GameResult::Stalemate) => {
                log::info!("Stalemate! Game is a draw");
                self.handle_game_end(GameResult::Stalemate);
            }
            Some(result) => {
                log::info!("Checkmate! {result:?}");
                self.handle_game_end(result);
            }
            None if self.plies_played >= self.max_plies => {
                log::info!("Ply limit of {} reached, game drawn", self.max_plies);
                self.handle_game_end(GameResult::Draw);
            }
            None => {}
        }
    }

    fn handle_game_end(&mut self, result: GameResult) {
        self.result = Some(result);
        self.white.game_ended(result);
        self.black.game_ended(result);
    }
}
