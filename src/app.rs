use crate::taunts::Taunts;
use crate::ui::prompt;
use crate::ui::render::Renderer;
use anyhow::{Context, Result};
use catnect_core::engine::config::EngineConfig;
use catnect_core::engine::search::MinimaxEngine;
use catnect_core::engine::Searcher;
use catnect_core::logic::board::Piece;
use catnect_core::logic::game::{GameState, RoundStatus};
use rand::Rng;
use std::io::{BufRead, Write};
use std::sync::Arc;

enum RoundEnd {
    Finished,
    InputClosed,
}

/// The console session: rounds of human against engine until the human
/// declines a rematch or input runs out.
pub struct App<R> {
    game: GameState,
    engine: MinimaxEngine,
    taunts: Taunts<R>,
    renderer: Renderer,
}

impl<R: Rng> App<R> {
    pub fn new(config: EngineConfig, taunts: Taunts<R>, renderer: Renderer) -> Self {
        Self {
            game: GameState::new(),
            engine: MinimaxEngine::new(Arc::new(config)),
            taunts,
            renderer,
        }
    }

    #[cfg(test)]
    pub const fn game(&self) -> &GameState {
        &self.game
    }

    /// # Errors
    ///
    /// Fails only on I/O errors; rejected moves are re-prompted.
    pub fn run<I: BufRead, O: Write>(&mut self, input: &mut I, output: &mut O) -> Result<()> {
        loop {
            if let RoundEnd::InputClosed = self.play_round(input, output)? {
                return Ok(());
            }

            let tally = self.game.tally();
            writeln!(
                output,
                "Score - Player: {}, AI: {}",
                tally.player_wins, tally.opponent_wins
            )?;
            write!(output, "Play again? (y/n): ")?;
            output.flush()?;

            let answer = prompt::read_line(input)?;
            if !prompt::wants_another_round(answer.as_deref()) {
                return Ok(());
            }
            self.game.new_round();
            log::info!("new round, tally {tally:?}");
        }
    }

    fn play_round<I: BufRead, O: Write>(&mut self, input: &mut I, output: &mut O) -> Result<RoundEnd> {
        loop {
            write!(output, "{}", self.renderer.render(self.game.board()))?;

            let status = match self.game.turn() {
                Piece::Opponent => self.opponent_turn(output)?,
                _ => match self.player_turn(input, output)? {
                    Some(status) => status,
                    None => return Ok(RoundEnd::InputClosed),
                },
            };

            let verdict = match status {
                RoundStatus::Playing => continue,
                RoundStatus::Won(Piece::Opponent) => "AI wins!",
                RoundStatus::Won(_) => "Player wins!",
                RoundStatus::Draw => "It's a draw!",
            };
            write!(output, "{}", self.renderer.render(self.game.board()))?;
            writeln!(output, "{verdict}")?;
            return Ok(RoundEnd::Finished);
        }
    }

    fn opponent_turn<O: Write>(&mut self, output: &mut O) -> Result<RoundStatus> {
        let (col, stats) = self
            .engine
            .search(self.game.board_mut())
            .context("no open column for the opponent")?;
        log::debug!("search stats {stats:?}");

        writeln!(output, "AI chooses column {col}")?;
        let status = self.game.play(col)?;
        writeln!(output, "{}", self.taunts.pick())?;
        Ok(status)
    }

    /// `None` when input has run out.
    fn player_turn<I: BufRead, O: Write>(
        &mut self,
        input: &mut I,
        output: &mut O,
    ) -> Result<Option<RoundStatus>> {
        write!(output, "{}", prompt::column_prompt())?;
        output.flush()?;

        let Some(line) = prompt::read_line(input)? else {
            return Ok(None);
        };

        let Some(col) = prompt::parse_column(&line) else {
            writeln!(output, "Invalid move: {line:?} is not a column number. Try again.")?;
            return Ok(Some(RoundStatus::Playing));
        };

        match self.game.play(col) {
            Ok(status) => Ok(Some(status)),
            Err(err) => {
                log::debug!("rejected player move: {err}");
                writeln!(output, "Invalid move: {err}. Try again.")?;
                Ok(Some(RoundStatus::Playing))
            }
        }
    }
}
