use std::io::{self, BufRead, Write};
use tictactoe_common::games::tictactoe::{Mark, Position};

pub const INVALID_CELL_MESSAGE: &str =
    "Invalid input. Type a number from 1 to 9 (shown on board). Try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChoice {
    TwoPlayer,
    VsComputer,
}

pub fn parse_mode(text: &str) -> Option<ModeChoice> {
    match text.trim() {
        "1" => Some(ModeChoice::TwoPlayer),
        "2" => Some(ModeChoice::VsComputer),
        _ => None,
    }
}

pub fn parse_mark(text: &str) -> Option<Mark> {
    Mark::from_symbol(text)
}

pub fn parse_cell(text: &str) -> Option<Position> {
    text.trim()
        .parse::<usize>()
        .ok()
        .and_then(Position::from_cell_number)
}

pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }

    pub fn show(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()
    }

    /// Trimmed input line, `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.show(prompt)?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Re-asks until `parse` accepts the answer, printing `retry_message` after each rejection.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        retry_message: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            if let Some(value) = parse(&answer) {
                return Ok(Some(value));
            }
            self.say(retry_message)?;
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
