//! Session loop: banner, prompts, rounds and the running score.

use crate::config::SessionConfig;
use crate::console::{Console, Continue, Interrupt, PlayerMode, parse_continue, parse_player_mode};
use crate::error::SessionError;
use crate::games::tictactoe::{MoveError, Outcome, Player, Round, TurnState};
use crate::players::{HumanPlayer, MoveSource, RandomComputer};
use crate::score::ScoreRecord;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

/// Banner shown before every continue prompt.
pub const BANNER: &str = "TIC\n     TAC\n          TOE\n";

/// Rejection shown when a move targets a taken cell.
pub const SPACE_TAKEN: &str = "That space is already taken. Try again.";

/// How a session finished. Every variant is a successful exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionEnd {
    /// The user answered `n` at the continue prompt.
    #[display("declined to continue")]
    Declined,
    /// The user typed a quit token.
    #[display("quit")]
    Quit,
    /// Input reached end of file.
    #[display("input closed")]
    InputClosed,
}

/// All state for one process run: the current round, the player mode
/// and the cumulative score.
#[derive(Debug)]
pub struct GameSession {
    round: Round,
    scores: ScoreRecord,
    mode: PlayerMode,
    human: HumanPlayer,
    computer: RandomComputer<StdRng>,
}

impl GameSession {
    /// Creates a session whose computer player draws from `rng`.
    #[instrument(skip(rng))]
    pub fn new(rng: StdRng) -> Self {
        info!("Creating new game session");
        Self {
            round: Round::new(),
            scores: ScoreRecord::new(),
            mode: PlayerMode::default(),
            human: HumanPlayer::default(),
            computer: RandomComputer::new("Computer", rng),
        }
    }

    /// Creates a session seeded from `config`, or from entropy when no
    /// seed is configured.
    #[instrument(skip(config), fields(seed = ?config.seed()))]
    pub fn from_config(config: &SessionConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }

    /// Returns the current round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the cumulative score.
    pub fn scores(&self) -> &ScoreRecord {
        &self.scores
    }

    /// Returns the player mode of the current round.
    pub fn mode(&self) -> PlayerMode {
        self.mode
    }

    /// Starts a fresh round in `mode`. Scores are kept.
    #[instrument(skip(self))]
    pub fn new_round(&mut self, mode: PlayerMode) {
        info!(%mode, "Starting new round");
        self.mode = mode;
        self.round.reset();
    }

    /// Zeroes the cumulative score.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }

    /// Runs the session until the user declines, quits or input ends.
    ///
    /// Quit and end of input stop the session at whatever prompt they
    /// occur, with no further output.
    #[instrument(skip(self, console))]
    pub fn run(&mut self, console: &mut Console<'_>) -> Result<SessionEnd, SessionError> {
        let end = match self.run_rounds(console) {
            Ok(end) => end,
            Err(Interrupt::Quit) => SessionEnd::Quit,
            Err(Interrupt::Closed) => SessionEnd::InputClosed,
            Err(Interrupt::Fault(err)) => return Err(err),
        };
        info!(%end, "Session finished");
        Ok(end)
    }

    fn run_rounds(&mut self, console: &mut Console<'_>) -> Result<SessionEnd, Interrupt> {
        loop {
            if self.ask_continue(console)? == Continue::No {
                return Ok(SessionEnd::Declined);
            }
            let mode = console.ask("1 or 2 players? (1/2) ", parse_player_mode)?;
            self.new_round(mode);
            let outcome = self.play_round(console)?;
            self.finish_round(outcome, console)?;
        }
    }

    /// Shows the banner and the continue prompt until the answer is valid.
    fn ask_continue(&mut self, console: &mut Console<'_>) -> Result<Continue, Interrupt> {
        loop {
            console.line(BANNER)?;
            let answer = console.read("Continue? (y/n) ")?;
            match parse_continue(&answer) {
                Ok(choice) => return Ok(choice),
                Err(reason) => debug!(%reason, "Re-prompting continue"),
            }
        }
    }

    /// Plays the current round until the turn controller reports it over.
    #[instrument(skip(self, console), fields(mode = %self.mode))]
    pub fn play_round(&mut self, console: &mut Console<'_>) -> Result<Outcome, Interrupt> {
        loop {
            let player = match self.round.state() {
                TurnState::RoundOver(outcome) => return Ok(outcome),
                TurnState::AwaitingMove(player) => player,
            };

            console.line(self.round.board())?;

            let source: &mut dyn MoveSource = if self.mode.is_computer(player) {
                &mut self.computer
            } else {
                &mut self.human
            };
            let position = source.choose(&self.round, console)?;

            match self.round.place(position) {
                Ok(_) => console.line(source.confirmation(position))?,
                Err(MoveError::SquareOccupied(_)) => {
                    debug!(source = source.name(), %position, "Square taken");
                    console.line(SPACE_TAKEN)?;
                    console.blank()?;
                }
                Err(err) => {
                    warn!(%err, "Move rejected unexpectedly");
                    return Err(SessionError::new(err.to_string()).into());
                }
            }
        }
    }

    /// Credits the winner and prints the board, result and score block.
    fn finish_round(&mut self, outcome: Outcome, console: &mut Console<'_>) -> Result<(), Interrupt> {
        self.scores.record(outcome);
        console.line(self.round.board())?;
        console.line(outcome)?;
        console.blank()?;
        console.line(self.scores)?;
        console.blank()?;
        Ok(())
    }

    /// Wins recorded for `player` so far.
    pub fn wins(&self, player: Player) -> u32 {
        self.scores.wins(player)
    }
}
