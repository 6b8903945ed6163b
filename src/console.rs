//! Styled terminal output helpers, shared via the `echo!`/`error!`/`echo_lines!`
//! macros so the rest of the crate never touches `crossterm` directly.

use crossterm::{cursor, execute, style, ExecutableCommand};
use std::io::{self, Write};

pub fn echo(s: String) {
    let _ = io::stdout().execute(style::Print(s));
    let _ = io::stdout().flush();
}

pub fn error(s: String) {
    let _ = io::stdout().execute(style::Print(s));
    let _ = io::stdout().flush();
}

pub fn echo_lines(s: String) {
    for l in s.lines() {
        let _ = io::stdout().execute(style::Print(format!("{}\n", l)));
        let _ = execute!(std::io::stdout(), cursor::MoveToNextLine(0));
    }
    let _ = io::stdout().flush();
}

#[macro_export]
macro_rules! echo {
    ($($arg:tt)*) => {
        crate::console::echo(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        crate::console::error(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! echo_lines {
    ($($arg:tt)*) => {
        crate::console::echo_lines(format!($($arg)*))
    };
}
