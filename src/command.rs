//! Command interpreter for a `StringSet`.
//!
//! Input is a stream of `<op> <word>` pairs separated by any whitespace:
//! `+` adds, `-` removes, `?` prints `yes` or `no`, and `#` stops reading.
//! The operation is one character, so `+abc` is the same as `+ abc`.

use crate::error::Result;
use crate::string_set::StringSet;
use std::io::{BufRead, Write};

/// One parsed `<op> <word>` pair.
///
/// An operation with no operand before end of input is dropped rather than
/// applied; it does not repeat the previous operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Remove(String),
    Query(String),
    /// Unrecognised operation; its operand is consumed and dropped.
    Unknown(char, String),
}

impl Command {
    pub fn from_parts(op: char, word: String) -> Self {
        match op {
            '+' => Command::Add(word),
            '-' => Command::Remove(word),
            '?' => Command::Query(word),
            _ => Command::Unknown(op, word),
        }
    }
}

/// Whitespace token scanner that reads one line of raw bytes at a time.
///
/// Words that are not valid UTF-8 are decoded lossily, so a bad byte never
/// ends the run.
pub struct Tokens<R> {
    reader: R,
    line: Vec<u8>,
    pos: usize,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Tokens {
            reader,
            line: Vec::new(),
            pos: 0,
        }
    }

    // Advances to the next non-whitespace byte. False at end of input.
    fn fill(&mut self) -> Result<bool> {
        loop {
            while self.pos < self.line.len() && self.line[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos < self.line.len() {
                return Ok(true);
            }
            self.line.clear();
            self.pos = 0;
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(false);
            }
        }
    }

    /// Next single non-whitespace byte, as a character.
    pub fn next_char(&mut self) -> Result<Option<char>> {
        if !self.fill()? {
            return Ok(None);
        }
        let b = self.line[self.pos];
        self.pos += 1;
        Ok(Some(b as char))
    }

    /// Next whitespace-delimited word.
    pub fn next_word(&mut self) -> Result<Option<String>> {
        if !self.fill()? {
            return Ok(None);
        }
        let rest = &self.line[self.pos..];
        let end = rest
            .iter()
            .position(|b| b.is_ascii_whitespace())
            .unwrap_or(rest.len());
        let word = String::from_utf8_lossy(&rest[..end]).into_owned();
        self.pos += end;
        Ok(Some(word))
    }

    /// Next command, or `None` at `#` or end of input.
    pub fn next_command(&mut self) -> Result<Option<Command>> {
        let op = match self.next_char()? {
            Some('#') | None => return Ok(None),
            Some(op) => op,
        };
        match self.next_word()? {
            Some(word) => Ok(Some(Command::from_parts(op, word))),
            None => {
                log::warn!("operation '{}' has no operand, stopping", op);
                Ok(None)
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub added: usize,
    pub removed: usize,
    pub queries: usize,
    pub hits: usize,
    pub ignored: usize,
}

/// Applies every command from `input` to `set`, writing query answers to `out`.
pub fn run<R: BufRead, W: Write>(set: &mut StringSet, input: R, out: &mut W) -> Result<RunSummary> {
    let mut tokens = Tokens::new(input);
    let mut summary = RunSummary::default();

    while let Some(cmd) = tokens.next_command()? {
        match cmd {
            Command::Add(s) => {
                if set.add(&s) {
                    summary.added += 1;
                }
            }
            Command::Remove(s) => {
                if set.remove(&s) {
                    summary.removed += 1;
                }
            }
            Command::Query(s) => {
                summary.queries += 1;
                if set.contains(&s) {
                    summary.hits += 1;
                    writeln!(out, "yes")?;
                } else {
                    writeln!(out, "no")?;
                }
            }
            Command::Unknown(op, s) => {
                log::debug!("ignoring unknown operation '{}' {}", op, s);
                summary.ignored += 1;
            }
        }
    }

    log::debug!(
        "commands done: {} added, {} removed, {}/{} queries hit, {} ignored",
        summary.added,
        summary.removed,
        summary.hits,
        summary.queries,
        summary.ignored
    );
    Ok(summary)
}

/// Writes every palindrome in `set`, one per line. Returns how many.
pub fn write_palindromes<W: Write>(set: &StringSet, out: &mut W) -> Result<usize> {
    let palindromes = set.all_palindromes();
    for p in &palindromes {
        writeln!(out, "{}", p)?;
    }
    Ok(palindromes.len())
}
