//! Terminal-backed [`ChatView`].

use std::cell::RefCell;
use std::io::{self, Stdout, Write};

use plauder_core::models::Sender;
use plauder_core::view::ChatView;

const PROMPT: &str = "> ";

pub struct TerminalView<W: Write> {
    out: RefCell<W>,
}

impl TerminalView<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    /// Prints the input prompt.
    pub fn prompt(&self) {
        self.write(format_args!("{PROMPT}"));
    }

    /// Terminates the prompt line at end of input.
    pub fn finish(&self) {
        self.write(format_args!("\n"));
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write(&self, args: std::fmt::Arguments<'_>) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = out.write_fmt(args).and_then(|_| out.flush()) {
            log::warn!("failed to write to terminal: {e}");
        }
    }
}

impl<W: Write> ChatView for TerminalView<W> {
    fn append_message(&self, text: &str, sender: Sender) {
        match sender {
            Sender::User => self.write(format_args!("you: {text}\n")),
            Sender::Ai => self.write(format_args!("ai: {text}\n")),
        }
    }

    // The line has already been consumed from stdin.
    fn clear_input(&self) {}

    fn set_sending(&self, _sending: bool) {}

    fn focus_input(&self) {
        self.prompt();
    }
}
