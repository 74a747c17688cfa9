//! Line-oriented console boundary.

use std::io::{self, BufRead, Write};

/// Blocking line I/O used by the session loop.
///
/// The session never touches stdin/stdout directly; tests script this
/// trait instead of attaching a terminal.
pub trait Console {
    /// Reads one line, without its trailing newline.
    ///
    /// Blocks until a full line arrives. End of input is an error
    /// (`UnexpectedEof`), not an empty line.
    fn read_line(&mut self) -> io::Result<String>;

    /// Writes one line, appending a newline.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_line(&mut self) -> io::Result<String> {
        (**self).read_line()
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

/// Console over process stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Creates a stdio-backed console.
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()
    }
}
