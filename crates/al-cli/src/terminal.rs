//! Terminal implementation of the presentation boundary.

use std::io::{BufRead, Write};

use al_engine::{EngineError, EngineResult, Presenter};
use al_story::Choice;
use colored::{Color, Colorize};

use crate::markup;

const RULE_WIDTH: usize = 60;

/// Configuration for the terminal presenter.
#[derive(Debug, Clone)]
pub struct PresenterConfig {
    /// Clear the screen before each scene.
    pub clear_screen: bool,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

impl PresenterConfig {
    /// Enable or disable screen clearing.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }
}

/// Presents scenes on a terminal and reads numbered choices from a line
/// based input.
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
    config: PresenterConfig,
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    /// Create a presenter reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, config: PresenterConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Show the story menu and return the zero-based index picked.
    pub fn choose_story(&mut self, names: &[&str]) -> EngineResult<usize> {
        if self.config.clear_screen {
            self.clear();
        }
        self.frame(
            Some("Main Menu"),
            Color::Green,
            &"Welcome to Adventure Lite!".cyan().bold().to_string(),
        );
        self.line(&format!("\n{}\n", "Please choose a story to play:".bold()));
        self.numbered(names);
        self.prompt_number(names.len())
    }

    /// Announce that a story is being loaded.
    pub fn loading(&mut self, name: &str) {
        self.line(&format!("\nLoading '{name}'..."));
    }

    /// Say goodbye after the player aborted.
    pub fn farewell(&mut self) {
        self.line(&format!("\n\n{}", "Exiting game. Goodbye!".yellow().bold()));
    }

    fn clear(&mut self) {
        self.write("\x1b[2J\x1b[H");
    }

    fn write(&mut self, text: &str) {
        // nothing sensible to do when the terminal is gone
        let _ = self.output.write_all(text.as_bytes());
        let _ = self.output.flush();
    }

    fn line(&mut self, text: &str) {
        self.write(text);
        self.write("\n");
    }

    fn frame(&mut self, title: Option<&str>, accent: Color, body: &str) {
        let top = match title {
            Some(title) => {
                let fill = RULE_WIDTH.saturating_sub(title.chars().count() + 4);
                format!(
                    "{} {} {}",
                    "──".color(accent),
                    title.color(accent).bold(),
                    "─".repeat(fill).color(accent)
                )
            }
            None => "─".repeat(RULE_WIDTH).color(accent).to_string(),
        };
        self.line(&top);
        self.line("");
        for text in body.lines() {
            self.line(&format!("  {text}"));
        }
        self.line("");
        self.line(&"─".repeat(RULE_WIDTH).color(accent).to_string());
    }

    fn numbered<S: AsRef<str>>(&mut self, entries: &[S]) {
        for (i, entry) in entries.iter().enumerate() {
            self.line(&format!(
                "  {}. {}",
                (i + 1).to_string().yellow(),
                entry.as_ref()
            ));
        }
        self.line("");
    }

    /// Ask until the player enters a number in `1..=count`. Returns it
    /// zero-based. End of input counts as an interruption.
    fn prompt_number(&mut self, count: usize) -> EngineResult<usize> {
        let mut line = String::new();
        loop {
            self.write(&format!(
                "{} [1-{count}]: ",
                "Enter the number of your choice".bold()
            ));

            line.clear();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return Err(EngineError::Interrupted),
                Ok(_) => {}
            }

            match line.trim().parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => return Ok(n - 1),
                _ => self.line(
                    &format!("Please enter a number between 1 and {count}.")
                        .red()
                        .to_string(),
                ),
            }
        }
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn present_scene(&mut self, description: &str, title: &str) {
        if self.config.clear_screen {
            self.clear();
        }
        let body = markup::render(description);
        self.frame(Some(title), Color::Cyan, &body);
    }

    fn present_choices(&mut self, choices: &[&Choice]) -> EngineResult<usize> {
        self.line(&format!("\n{}\n", "What do you do?".bold()));
        let labels: Vec<&str> = choices.iter().map(|c| c.text.as_str()).collect();
        self.numbered(&labels);
        self.prompt_number(choices.len())
    }

    fn present_ending(&mut self, message: &str) {
        let body = format!(
            "{}\n\n{}",
            "GAME OVER".red().bold(),
            markup::render(message)
        );
        self.frame(None, Color::Red, &body);
    }

    fn present_error(&mut self, message: &str) {
        let body = format!("{} {message}", "Error:".red().bold());
        self.frame(Some("Error"), Color::Red, &body);
    }
}
