//! Interactive play over a line-oriented reader and writer.

use crate::render;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument};
use vanishing_tictactoe::{GameEngine, Position};

const HELP: &str = "\
Commands:
  0-8 or a label (e.g. \"center\", \"top left\")  place a piece
  reset                                       start over
  state                                       print the game as JSON
  help                                        show this message
  quit                                        leave";

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Place a piece at this cell index (validated by the engine).
    Move(usize),
    /// Start a new game.
    Reset,
    /// Print the JSON snapshot.
    State,
    /// Show the command list.
    Help,
    /// End the session.
    Quit,
    /// Blank line.
    Empty,
    /// Anything else.
    Unknown(String),
}

impl Input {
    /// Parses one line of input.
    ///
    /// Numbers are passed through unchecked so the engine can reject
    /// out-of-range cells itself.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => Input::Empty,
            "reset" | "r" => Input::Reset,
            "state" | "s" => Input::State,
            "help" | "h" | "?" => Input::Help,
            "quit" | "q" | "exit" => Input::Quit,
            _ => {
                if let Ok(index) = line.parse::<usize>() {
                    return Input::Move(index);
                }
                match Position::from_label_or_number(line) {
                    Some(pos) => Input::Move(pos.to_index()),
                    None => Input::Unknown(line.to_string()),
                }
            }
        }
    }
}

/// An interactive game between two people sharing one terminal.
#[derive(Debug)]
pub struct PlaySession<R, W> {
    engine: GameEngine,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PlaySession<R, W> {
    /// Creates a session around `engine`.
    pub fn new(engine: GameEngine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    /// The engine driven by this session.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Only I/O failures end the session early; rejected moves are reported
    /// to the player and play continues.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> io::Result<()> {
        info!("Interactive session started");
        writeln!(self.output, "Each player keeps three pieces; a fourth makes the oldest vanish.")?;
        writeln!(self.output, "Type \"help\" for commands.\n")?;
        self.show()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }
            if !self.handle(Input::parse(&line))? {
                break;
            }
        }

        info!("Interactive session ended");
        Ok(())
    }

    /// Applies one command; returns `false` when the session should end.
    fn handle(&mut self, input: Input) -> io::Result<bool> {
        match input {
            Input::Move(index) => match self.engine.apply_move(index).map(|_| ()) {
                Ok(()) => self.show()?,
                Err(e) => writeln!(self.output, "Move rejected: {}", e)?,
            },
            Input::Reset => {
                self.engine.reset();
                self.show()?;
            }
            Input::State => {
                let json = serde_json::to_string_pretty(self.engine.state()).map_err(io::Error::other)?;
                writeln!(self.output, "{}", json)?;
            }
            Input::Help => writeln!(self.output, "{}", HELP)?,
            Input::Quit => return Ok(false),
            Input::Empty => {}
            Input::Unknown(text) => {
                writeln!(self.output, "Unrecognized input {:?}; type \"help\" for commands.", text)?
            }
        }
        Ok(true)
    }

    fn show(&mut self) -> io::Result<()> {
        let state = self.engine.state();
        writeln!(self.output, "{}\n", render::snapshot(state))?;
        if state.winner().is_none() {
            writeln!(self.output, "{}\n", render::at_risk(state))?;
        }
        Ok(())
    }
}
