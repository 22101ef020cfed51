// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Item loader for delimited text sources.
//!
//! Each non-empty line describes one item as `value,weight`. Cells may be
//! separated by commas, semicolons or whitespace; surrounding whitespace is
//! trimmed and any cells after the second are ignored. Lines may carry
//! comments introduced by `#`. There is no header unless the loader is told
//! to skip one.
//!
//! The loader only acquires items. Validation of signs and finiteness is
//! the business of `ModelBuilder::build`, so a file of negative numbers
//! loads fine and is rejected later with a `ModelError` that names the item.
//!
//! The parser accepts any `BufRead`, file path, raw reader, or string slice.

use crate::{
    item::Item,
    model::{Model, ModelBuilder, ModelError},
};
use satchel_core::num::float::SolverFloat;
use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// The error type for the item loading process.
#[derive(Debug)]
pub enum ItemLoaderError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// A cell could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// A line has fewer than two cells.
    MissingField {
        /// The 1-based line number.
        line: usize,
        /// The name of the missing field.
        field: &'static str,
    },
    /// The items were read but do not form a valid instance.
    Model(ModelError),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The 1-based line number of the token.
    pub line: usize,
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "f32").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' on line {} as type {}",
            self.token, self.line, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

impl Display for ItemLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::MissingField { line, field } => {
                write!(f, "Line {} is missing the {} field", line, field)
            }
            Self::Model(e) => write!(f, "Invalid instance: {e}"),
        }
    }
}

impl std::error::Error for ItemLoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Model(e) => Some(e),
            Self::MissingField { .. } => None,
        }
    }
}

impl From<std::io::Error> for ItemLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ModelError> for ItemLoaderError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}

impl From<ParseTokenError> for ItemLoaderError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

/// A configurable loader for item lists.
///
/// # Configuration
/// * `has_header`: skip the first non-comment line. Off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemLoader {
    has_header: bool,
}

impl ItemLoader {
    /// Creates a new `ItemLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether the first data line is a header to be skipped.
    #[inline]
    pub fn has_header(mut self, yes: bool) -> Self {
        self.has_header = yes;
        self
    }

    /// Loads items from a type implementing `BufRead`.
    pub fn from_bufread<T, R>(&self, rdr: R) -> Result<Vec<Item<T>>, ItemLoaderError>
    where
        T: SolverFloat,
        R: BufRead,
    {
        let mut items = Vec::new();
        let mut header_pending = self.has_header;

        for (i, line) in rdr.lines().enumerate() {
            let line = line?;
            let line_number = i + 1;

            let content = match line.find('#') {
                Some(pos) => &line[..pos],
                None => line.as_str(),
            };

            let mut cells = content
                .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
                .filter(|cell| !cell.is_empty());

            let Some(value_cell) = cells.next() else {
                continue;
            };

            if header_pending {
                header_pending = false;
                continue;
            }

            let weight_cell = cells.next().ok_or(ItemLoaderError::MissingField {
                line: line_number,
                field: "weight",
            })?;

            let value = parse_cell::<T>(value_cell, line_number)?;
            let weight = parse_cell::<T>(weight_cell, line_number)?;
            items.push(Item::new(value, weight));
        }

        Ok(items)
    }

    /// Loads items from a file path.
    #[inline]
    pub fn from_path<T, P>(&self, path: P) -> Result<Vec<Item<T>>, ItemLoaderError>
    where
        T: SolverFloat,
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads items from a file path and builds a validated model with the
    /// given capacity.
    pub fn model_from_path<T, P>(&self, path: P, capacity: T) -> Result<Model, ItemLoaderError>
    where
        T: SolverFloat,
        P: AsRef<Path>,
    {
        let items = self.from_path::<T, _>(path)?;
        Ok(ModelBuilder::from_items(capacity, &items).build()?)
    }

    /// Loads items from a generic reader.
    #[inline]
    pub fn from_reader<T, R>(&self, r: R) -> Result<Vec<Item<T>>, ItemLoaderError>
    where
        T: SolverFloat,
        R: Read,
    {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads items from a string slice.
    #[inline]
    pub fn from_str<T>(&self, s: &str) -> Result<Vec<Item<T>>, ItemLoaderError>
    where
        T: SolverFloat,
    {
        self.from_reader(s.as_bytes())
    }
}

#[inline]
fn parse_cell<T>(cell: &str, line: usize) -> Result<T, ParseTokenError>
where
    T: SolverFloat,
{
    cell.parse::<T>().map_err(|_| ParseTokenError {
        line,
        token: cell.to_owned(),
        type_name: std::any::type_name::<T>(),
    })
}
