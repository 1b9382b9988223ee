use crate::error::{Error, Result};
use std::io::Write;

/// The data lines of one named FASTA entry, addressable by base position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldBuffer {
    name: String,
    lines: Vec<String>,
    len: usize,
}

fn is_header(line: &str) -> bool {
    line.starts_with('>')
}

impl ScaffoldBuffer {
    /// Scans `lines` for the header `>name` and collects the lines up to the next
    /// header. Lines after the scaffold are never read.
    pub fn find<I>(lines: I, name: &str) -> Result<Self>
    where
        I: IntoIterator<Item = Result<(usize, String)>>,
    {
        let name = name.strip_prefix('>').unwrap_or(name);
        let mut lines = lines.into_iter();

        loop {
            match lines.next() {
                Some(item) => {
                    let (line_no, line) = item?;
                    if line.strip_prefix('>') == Some(name) {
                        tracing::debug!("Found scaffold {} on line {}", name, line_no);
                        break;
                    }
                }
                None => {
                    return Err(Error::ScaffoldNotFound {
                        name: name.to_string(),
                    })
                }
            }
        }

        let mut data = Vec::new();
        for item in lines {
            let (_, line) = item?;
            if is_header(&line) {
                break;
            }
            data.push(line);
        }

        Ok(Self::from_lines(name, data))
    }

    pub fn from_lines(name: impl Into<String>, lines: Vec<String>) -> Self {
        let len = lines.iter().map(String::len).sum();
        Self {
            name: name.into(),
            lines,
            len,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn concatenated(&self) -> String {
        self.lines.concat()
    }

    /// Rejects ranges whose start lies after their end. Needs no scaffold data, so
    /// callers can run it before opening any file.
    pub fn check_range(start: usize, end: usize) -> Result<()> {
        if start > end {
            return Err(Error::Validation(format!(
                "Start position {} is after end position {}",
                start, end
            )));
        }
        Ok(())
    }

    /// Bases `start..=end`, zero-based, collected into a string.
    pub fn extract(&self, start: usize, end: usize) -> Result<String> {
        let span = end.saturating_sub(start).saturating_add(1);
        let mut out = Vec::with_capacity(span.min(self.len));
        self.write_range(start, end, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Writes bases `start..=end`, zero-based, to `writer`.
    ///
    /// Ranges reaching past the end wrap around to the start of the scaffold,
    /// addressing position `k` as column `k % L` of line `k / L` (modulo the line
    /// count), where `L` is the length of the first line. This needs every line to
    /// be exactly `L` long. Output is written one line segment at a time, so the
    /// range may be far longer than the scaffold.
    pub fn write_range<W: Write + ?Sized>(
        &self,
        start: usize,
        end: usize,
        writer: &mut W,
    ) -> Result<()> {
        Self::check_range(start, end)?;

        if end < self.len {
            let concatenated = self.concatenated();
            return writer
                .write_all(&concatenated.as_bytes()[start..=end])
                .map_err(|e| Error::io("writing scaffold range", e));
        }

        let line_len = self.check_uniform_lines()?;
        tracing::debug!(
            "Range {}..={} exceeds scaffold {} length {}, wrapping with line length {}",
            start,
            end,
            self.name,
            self.len,
            line_len
        );

        let mut k = start;
        loop {
            let line = self.lines[(k / line_len) % self.lines.len()].as_bytes();
            let column = k % line_len;
            // Stays in bounds for end == usize::MAX.
            let take = (end - k).min(line_len - column - 1) + 1;
            writer
                .write_all(&line[column..column + take])
                .map_err(|e| Error::io("writing scaffold range", e))?;

            match k.checked_add(take) {
                Some(next) if next <= end => k = next,
                _ => return Ok(()),
            }
        }
    }

    fn check_uniform_lines(&self) -> Result<usize> {
        let first = match self.lines.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => {
                return Err(Error::EmptyScaffold {
                    name: self.name.clone(),
                })
            }
        };

        for (idx, line) in self.lines.iter().enumerate() {
            if line.len() != first {
                return Err(Error::IrregularLineLength {
                    name: self.name.clone(),
                    line: idx + 1,
                    expected: first,
                    found: line.len(),
                });
            }
        }
        Ok(first)
    }
}
