//! Interactive console session
//!
//! A line-oriented menu loop:
//!
//! ```text
//! Menu ── "1" ──────────────▶ AwaitingKeyword ── search ──▶ Menu
//! Menu ── "2" / anything else ──▶ Menu
//! Menu ── "0" / end of input ──▶ Terminated
//! ```
//!
//! The session owns its input handle. [`Session::run`] consumes the session,
//! so the handle is dropped exactly once whichever way the loop ends.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::catalog::SearchService;
use crate::report;

pub const BANNER: &str = "========== 書籍検索システム ==========";
pub const MENU_SEARCH: &str = "1. 書籍を検索する";
pub const MENU_LIST_ALL: &str = "2. 全ての書籍を表示する";
pub const MENU_QUIT: &str = "0. 終了";
pub const MENU_PROMPT: &str = "選択肢を入力してください: ";
pub const KEYWORD_PROMPT: &str = "タイトルまたは著者名のキーワードを入力してください: ";
pub const FAREWELL: &str = "システムを終了します。";
pub const INVALID_CHOICE: &str = "無効な選択です。もう一度お試しください。";

/// A menu command entered at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Search,
    ListAll,
    Quit,
    Invalid(String),
}

impl MenuChoice {
    /// Parse a menu line; the line must match a command exactly
    pub fn parse(line: &str) -> Self {
        match line {
            "1" => MenuChoice::Search,
            "2" => MenuChoice::ListAll,
            "0" => MenuChoice::Quit,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose `0`
    Quit,
    /// The input stream closed
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Menu,
    AwaitingKeyword,
    Terminated(SessionEnd),
}

/// A console session over any line reader and writer
pub struct Session<R, W> {
    service: SearchService,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(service: SearchService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Run the menu loop until the user quits or input ends
    pub fn run(mut self) -> Result<SessionEnd> {
        writeln!(self.output, "{BANNER}")?;

        let mut state = State::Menu;
        loop {
            state = match state {
                State::Menu => self.on_menu()?,
                State::AwaitingKeyword => self.on_keyword()?,
                State::Terminated(end) => {
                    self.output.flush().context("Failed to flush console output")?;
                    debug!(?end, "Console session terminated");
                    return Ok(end);
                }
            };
        }
    }

    fn on_menu(&mut self) -> Result<State> {
        writeln!(self.output)?;
        writeln!(self.output, "{MENU_SEARCH}")?;
        writeln!(self.output, "{MENU_LIST_ALL}")?;
        writeln!(self.output, "{MENU_QUIT}")?;
        self.prompt(MENU_PROMPT)?;

        let Some(line) = self.read_line()? else {
            return Ok(State::Terminated(SessionEnd::EndOfInput));
        };

        let choice = MenuChoice::parse(&line);
        debug!(?choice, "Menu selection");

        let next = match choice {
            MenuChoice::Search => State::AwaitingKeyword,
            MenuChoice::ListAll => {
                self.show_results("")?;
                State::Menu
            }
            MenuChoice::Quit => {
                writeln!(self.output, "{FAREWELL}")?;
                State::Terminated(SessionEnd::Quit)
            }
            MenuChoice::Invalid(_) => {
                writeln!(self.output, "{INVALID_CHOICE}")?;
                State::Menu
            }
        };

        Ok(next)
    }

    fn on_keyword(&mut self) -> Result<State> {
        writeln!(self.output)?;
        self.prompt(KEYWORD_PROMPT)?;

        match self.read_line()? {
            Some(keyword) => {
                self.show_results(&keyword)?;
                Ok(State::Menu)
            }
            None => Ok(State::Terminated(SessionEnd::EndOfInput)),
        }
    }

    fn show_results(&mut self, keyword: &str) -> Result<()> {
        let results = self.service.search_books(Some(keyword));
        report::write_results(&mut self.output, &results, keyword)
            .context("Failed to write search results")
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush().context("Failed to flush prompt")
    }

    /// Read one line without its terminator; `None` at end of input
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read console input")?;

        if read == 0 {
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }
}
