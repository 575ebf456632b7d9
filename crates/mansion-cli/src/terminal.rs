//! Terminal renderer.

use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;
use mansion_engine::{LuckTier, Renderer, SceneView};

/// Writes the story to a terminal (or any writer).
///
/// The renderer contract has no error channel, so the first write error is
/// kept and later writes are skipped until the caller collects it.
pub struct TerminalRenderer<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Print the story banner.
    pub fn banner(&mut self, title: &str) {
        self.line(format!("  {}", title.bold()));
        self.line(format!(
            "  {}",
            "Type a number to choose, Enter to continue, 'help' for commands.".dimmed()
        ));
    }

    /// Print a short message that is not part of the story.
    pub fn notice(&mut self, message: &str) {
        self.line(format!("  {}", message.yellow()));
    }

    pub fn help(&mut self) {
        self.line(format!("  {}", "Commands".bold()));
        self.line("  <number>      choose an option");
        self.line("  Enter, c      continue");
        self.line("  luck          show your luck");
        self.line("  restart       start the story over");
        self.line("  quit          leave the game");
    }

    /// Hand back the first write error, if any.
    pub fn take_error(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl Display) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{text}") {
            self.error = Some(e);
        }
    }

    fn play_again_hint(&mut self) {
        self.line(format!(
            "  {}",
            "Type 'restart' to play again or 'quit' to leave.".dimmed()
        ));
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn present_scene(&mut self, view: &SceneView<'_>) {
        self.line("");
        self.line(format!("  {}", view.title.bold().underline()));
        for paragraph in view.description.lines() {
            self.line(format!("  {paragraph}"));
        }
        if !view.choices.is_empty() {
            self.line("");
        }
        for (i, choice) in view.choices.iter().enumerate() {
            match choice.luck_delta {
                Some(delta) => self.line(format!(
                    "  [{}] {} {}",
                    i + 1,
                    choice.label,
                    format!("({delta:+})").dimmed()
                )),
                None => self.line(format!("  [{}] {}", i + 1, choice.label)),
            }
        }
    }

    fn present_continue(&mut self, _turn: u64) {
        self.line(format!("  {}", "(press Enter to continue)".dimmed().italic()));
    }

    fn present_ending(&mut self, text: &str) {
        self.line("");
        self.line(format!("  {}", "The End".bold()));
        for paragraph in text.lines() {
            self.line(format!("  {paragraph}"));
        }
        self.play_again_hint();
    }

    fn present_error(&mut self, message: &str) {
        self.line("");
        self.line(format!("  {} {message}", "Error:".red().bold()));
        self.play_again_hint();
    }

    fn report_luck(&mut self, luck: i32) {
        let value = luck.to_string();
        let value = match LuckTier::from_luck(luck) {
            LuckTier::High => value.green(),
            LuckTier::Medium => value.yellow(),
            LuckTier::Low => value.red(),
        };
        self.line(format!("  Luck: {value}"));
    }
}
