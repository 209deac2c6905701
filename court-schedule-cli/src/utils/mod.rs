use std::io::{self, BufRead, Write};

/// A single line read from the terminal after printing `msg`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Prompt<'a> {
    msg: &'a str,
}

impl<'a> Prompt<'a> {
    #[inline]
    pub fn new(msg: &'a str) -> Self {
        Self { msg }
    }

    /// Reads one line from stdin. Returns `None` once stdin is closed.
    pub fn read(&self) -> io::Result<Option<String>> {
        let stdin = io::stdin();
        self.read_from(&mut stdin.lock(), &mut io::stdout())
    }

    pub fn read_from<R, W>(&self, reader: &mut R, writer: &mut W) -> io::Result<Option<String>>
    where
        R: BufRead,
        W: Write,
    {
        writer.write_all(self.msg.as_bytes())?;
        writer.write_all(b": ")?;
        writer.flush()?;

        let mut string = String::new();
        if reader.read_line(&mut string)? == 0 {
            return Ok(None);
        }

        Ok(Some(string.trim().to_owned()))
    }
}
