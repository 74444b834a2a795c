//! Terminal key source for the project wizard

use crate::wizard::{Input, KeySource, Line, LineKind};
use console::{style, Key, Term};
use std::io;

/// Reads keys from and draws onto stderr
pub struct TermKeys {
    term: Term,
    drawn: usize,
}

impl TermKeys {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            drawn: 0,
        }
    }
}

impl Default for TermKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TermKeys {
    fn drop(&mut self) {
        let _ = self.term.show_cursor();
    }
}

impl KeySource for TermKeys {
    fn read_input(&mut self) -> io::Result<Input> {
        loop {
            let input = match self.term.read_key()? {
                Key::Enter => Input::Enter,
                Key::Escape => Input::Escape,
                Key::Backspace => Input::Backspace,
                Key::ArrowUp => Input::Up,
                Key::ArrowDown => Input::Down,
                // Raw mode delivers Ctrl+C as ETX instead of a signal
                Key::Char('\u{3}') => Input::Interrupt,
                Key::Char(c) => Input::Char(c),
                _ => continue,
            };
            return Ok(input);
        }
    }

    fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        if self.drawn == 0 {
            self.term.hide_cursor()?;
        } else {
            self.term.clear_last_lines(self.drawn)?;
        }

        for line in lines {
            self.term.write_line(&styled(line))?;
        }
        self.drawn = lines.len();
        Ok(())
    }
}

fn styled(line: &Line) -> String {
    let text = line.text.as_str();
    match line.kind {
        LineKind::Title => style(text).magenta().bold().to_string(),
        LineKind::Question => style(text).magenta().bold().to_string(),
        LineKind::Input => style(text).cyan().to_string(),
        LineKind::Selected => style(text).green().bold().to_string(),
        LineKind::Option => text.to_string(),
        LineKind::Error => style(text).red().to_string(),
        LineKind::Success => style(text).green().bold().to_string(),
        LineKind::Hint => style(text).dim().to_string(),
    }
}
