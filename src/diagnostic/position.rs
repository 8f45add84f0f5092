//! Offset to row/column conversion for a single script.

/// A 1-based row and a 0-based column counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct Location {
    pub row: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("offset {offset} is past the end of the script ({len} bytes)")]
    OutOfBounds { offset: usize, len: usize },

    #[error("offset {0} is not on a character boundary")]
    NotCharBoundary(usize),
}

/// Line index over a script. Built once, queried many times.
#[derive(Debug, Clone)]
pub struct LineMap<'a> {
    source: &'a str,
    starts: Vec<usize>,
}

impl<'a> LineMap<'a> {
    pub fn new(source: &'a str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { source, starts }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Number of lines; a trailing newline opens one more (empty) line.
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    pub fn locate(&self, offset: usize) -> Result<Location, PositionError> {
        if offset > self.source.len() {
            return Err(PositionError::OutOfBounds {
                offset,
                len: self.source.len(),
            });
        }
        if !self.source.is_char_boundary(offset) {
            return Err(PositionError::NotCharBoundary(offset));
        }

        let index = self.starts.partition_point(|&start| start <= offset) - 1;
        let column = self.source[self.starts[index]..offset].chars().count();
        Ok(Location {
            row: index + 1,
            column,
        })
    }

    /// Text of a 1-based row without its line terminator.
    pub fn line(&self, row: usize) -> Option<&'a str> {
        let start = *self.starts.get(row.checked_sub(1)?)?;
        let end = self
            .starts
            .get(row)
            .map_or(self.source.len(), |next| next - 1);
        let line = &self.source[start..end];
        Some(line.strip_suffix('\r').unwrap_or(line))
    }

    /// Text between the start of `location`'s row and `location` itself.
    pub fn prefix(&self, location: Location) -> Option<&'a str> {
        let line = self.line(location.row)?;
        let end = line
            .char_indices()
            .nth(location.column)
            .map_or(line.len(), |(i, _)| i);
        Some(&line[..end])
    }
}
