//! Line-oriented terminal output.
//!
//! Commands write whole lines through [`ios_println!`](crate::ios_println)
//! and [`ios_eprintln!`](crate::ios_eprintln) so tests can swap the real
//! streams for in-memory buffers.

use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex, PoisonError};

use console::Style;

type Buffer = Arc<Mutex<Vec<u8>>>;

/// Where a stream's lines end up.
#[derive(Debug)]
enum Sink {
    Stdout,
    Stderr,
    Buffer(Buffer),
}

impl Sink {
    fn write_line(&self, args: fmt::Arguments<'_>) {
        // Output is best effort: a closed pipe must not abort the command.
        let _ = match self {
            Self::Stdout => write_line(&mut io::stdout().lock(), args),
            Self::Stderr => write_line(&mut io::stderr().lock(), args),
            Self::Buffer(buf) => write_line(
                &mut *buf.lock().unwrap_or_else(PoisonError::into_inner),
                args,
            ),
        };
    }
}

fn write_line(w: &mut impl Write, args: fmt::Arguments<'_>) -> io::Result<()> {
    w.write_fmt(args)?;
    w.write_all(b"\n")
}

fn contents(buf: &Buffer) -> String {
    let bytes = buf.lock().unwrap_or_else(PoisonError::into_inner);
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Handle on the buffers behind [`IOStreams::captured`].
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    out: Buffer,
    err: Buffer,
}

impl CapturedOutput {
    /// Everything written to stdout so far.
    pub fn stdout(&self) -> String {
        contents(&self.out)
    }

    /// Everything written to stderr so far.
    pub fn stderr(&self) -> String {
        contents(&self.err)
    }
}

/// Output streams shared by all commands.
#[derive(Debug)]
pub struct IOStreams {
    out: Sink,
    err: Sink,
    color: bool,
}

impl IOStreams {
    /// Streams bound to the process stdout/stderr.
    ///
    /// Color is used only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn system() -> Self {
        Self {
            out: Sink::Stdout,
            err: Sink::Stderr,
            color: std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal(),
        }
    }

    /// Streams writing into memory, without color.
    pub fn captured() -> (Self, CapturedOutput) {
        let output = CapturedOutput {
            out: Buffer::default(),
            err: Buffer::default(),
        };
        let ios = Self {
            out: Sink::Buffer(Arc::clone(&output.out)),
            err: Sink::Buffer(Arc::clone(&output.err)),
            color: false,
        };
        (ios, output)
    }

    /// Write one line to stdout.
    pub fn line_out(&self, args: fmt::Arguments<'_>) {
        self.out.write_line(args);
    }

    /// Write one line to stderr.
    pub fn line_err(&self, args: fmt::Arguments<'_>) {
        self.err.write_line(args);
    }

    /// Styles matching whether these streams use color.
    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme {
            enabled: self.color,
        }
    }
}

/// Applies terminal styles when color is enabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    enabled: bool,
}

impl ColorScheme {
    fn paint(self, style: Style, text: &str) -> String {
        if self.enabled {
            style.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Bold text.
    pub fn bold(self, text: &str) -> String {
        self.paint(Style::new().bold(), text)
    }

    /// Green check mark for supported plugins.
    pub fn success_icon(self) -> String {
        self.paint(Style::new().green(), "\u{2713}")
    }

    /// Dim dash for unsupported plugins.
    pub fn unsupported_icon(self) -> String {
        self.paint(Style::new().dim(), "-")
    }

    /// Yellow exclamation mark for warnings.
    pub fn warning_icon(self) -> String {
        self.paint(Style::new().yellow(), "!")
    }
}

/// Write a formatted line to the streams' stdout.
#[macro_export]
macro_rules! ios_println {
    ($ios:expr, $($arg:tt)*) => {
        $ios.line_out(format_args!($($arg)*))
    };
}

/// Write a formatted line to the streams' stderr.
#[macro_export]
macro_rules! ios_eprintln {
    ($ios:expr, $($arg:tt)*) => {
        $ios.line_err(format_args!($($arg)*))
    };
}
