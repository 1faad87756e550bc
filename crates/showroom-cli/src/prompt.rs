//! Token-based console input with re-prompting
//!
//! Input is whitespace-delimited tokens; a line may carry several. A
//! malformed numeric token re-triggers the same prompt (chosen policy for
//! the otherwise undefined behavior). EOF while a prompt is pending is the
//! one unrecoverable fault.

use showroom_domain::service::{FieldKind, FieldSpec};
use showroom_types::{Error, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

pub struct Prompter<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Prompter<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Read the next whitespace-delimited token, pulling lines as needed
    pub fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Prompt with `label` and read one token of the given kind
    ///
    /// Re-prompts until the token parses as the expected kind. `Word`
    /// accepts any token.
    pub fn read_field<W: Write>(&mut self, out: &mut W, spec: &FieldSpec) -> Result<String> {
        loop {
            write!(out, "  {}: ", spec.label)?;
            out.flush()?;
            let token = self.next_token()?;
            let ok = match spec.kind {
                FieldKind::Int => token.parse::<i32>().is_ok(),
                FieldKind::Float => token.parse::<f64>().is_ok(),
                FieldKind::Word => true,
            };
            if ok {
                return Ok(token);
            }
            writeln!(out, "  Invalid number \"{}\", try again.", token)?;
        }
    }

    /// Prompt with `label` and read one integer, re-prompting on junk
    pub fn read_int<W: Write>(&mut self, out: &mut W, label: &str) -> Result<i32> {
        loop {
            write!(out, "{}", label)?;
            out.flush()?;
            let token = self.next_token()?;
            match token.parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(out, "Invalid number \"{}\", try again.", token)?,
            }
        }
    }

    /// Prompt with `label` and read one bare token
    pub fn read_word<W: Write>(&mut self, out: &mut W, label: &str) -> Result<String> {
        write!(out, "{}", label)?;
        out.flush()?;
        self.next_token()
    }
}
