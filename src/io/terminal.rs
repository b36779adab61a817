use std::io::{BufRead, Write};

use crate::common::error::AppError;

/// The three primitives the menu needs from the outside world.
pub trait Terminal {
    /// Prompts until the user enters a non-negative integer.
    fn request_number(&mut self, prompt: &str) -> Result<u64, AppError>;

    /// Prompts until the user enters a non-blank line. Surrounding whitespace
    /// is stripped from the result; inner spacing is kept.
    fn request_text(&mut self, prompt: &str) -> Result<String, AppError>;

    fn display(&mut self, line: &str) -> Result<(), AppError>;
}

/// Line-oriented terminal over any reader/writer pair, e.g. locked stdin and
/// stdout, or in-memory buffers in tests.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use marketplace::io::terminal::{LineTerminal, Terminal};
///
/// let mut term = LineTerminal::new(Cursor::new("abc\n42\n"), Vec::new());
/// assert_eq!(term.request_number("Your option: ").unwrap(), 42);
///
/// let out = String::from_utf8(term.into_output()).unwrap();
/// assert_eq!(out, "Your option: Try again. Your option: ");
/// ```
pub struct LineTerminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<(), AppError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    // Retry loop shared by both request primitives.
    fn request_until<T>(
        &mut self,
        prompt: &str,
        accept: impl Fn(&str) -> Option<T>,
    ) -> Result<T, AppError> {
        self.prompt(prompt)?;
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(AppError::InputClosed);
            }
            let line = line.trim_end_matches(['\r', '\n']);
            if let Some(value) = accept(line) {
                return Ok(value);
            }
            self.prompt(&format!("Try again. {prompt}"))?;
        }
    }
}

impl<R: BufRead, W: Write> Terminal for LineTerminal<R, W> {
    fn request_number(&mut self, prompt: &str) -> Result<u64, AppError> {
        self.request_until(prompt, |line| {
            if !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit()) {
                // too large for u64 counts as invalid input
                line.parse::<u64>().ok()
            } else {
                None
            }
        })
    }

    fn request_text(&mut self, prompt: &str) -> Result<String, AppError> {
        self.request_until(prompt, |line| {
            let text = line.trim();
            (!text.is_empty()).then(|| text.to_string())
        })
    }

    fn display(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn terminal(input: &str) -> LineTerminal<Cursor<Vec<u8>>, Vec<u8>> {
        LineTerminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(term: LineTerminal<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(term.into_output()).unwrap()
    }

    #[test]
    fn number_accepts_digits_only() {
        let mut term = terminal("-1\n1.5\n\n 7\n0\n");
        assert_eq!(term.request_number("N: ").unwrap(), 0);
        assert_eq!(
            output(term),
            "N: Try again. N: Try again. N: Try again. N: Try again. N: "
        );
    }

    #[test]
    fn number_rejects_overflow() {
        let mut term = terminal("99999999999999999999999\n12\n");
        assert_eq!(term.request_number("N: ").unwrap(), 12);
    }

    #[test]
    fn number_accepts_windows_line_endings() {
        let mut term = terminal("15\r\n");
        assert_eq!(term.request_number("N: ").unwrap(), 15);
    }

    #[test]
    fn text_rejects_blank_lines_and_trims() {
        let mut term = terminal("\n   \n  Milk \n");
        assert_eq!(term.request_text("Name: ").unwrap(), "Milk");
        assert_eq!(output(term), "Name: Try again. Name: Try again. Name: ");
    }

    #[test]
    fn text_keeps_inner_spacing() {
        let mut term = terminal("\t Mary  Ann \r\n");
        assert_eq!(term.request_text("Name: ").unwrap(), "Mary  Ann");
    }

    #[test]
    fn end_of_input_is_reported() {
        let mut term = terminal("abc\n");
        assert!(matches!(
            term.request_number("N: "),
            Err(AppError::InputClosed)
        ));
    }

    #[test]
    fn display_writes_a_line() {
        let mut term = terminal("");
        term.display("Removal successful").unwrap();
        assert_eq!(output(term), "Removal successful\n");
    }
}
