//! Named colour tables and the providers that supply them.
//!
//! A provider hands the generator three ordered name → colour mappings:
//!
//! - [`SourceTable::Base`]: matplotlib's single-letter `BASE_COLORS`
//! - [`SourceTable::Css4`]: the CSS4 extended web colours
//! - [`SourceTable::Xkcd`]: the xkcd colour naming survey
//!
//! Providers:
//!
//! - [`ColorTables`]: tables held in memory
//! - [`BuiltinProvider`]: all three compiled in, xkcd optionally read from an
//!   xkcd `rgb.txt` file
//! - [`JsonProvider`]: all three tables from a JSON dump (feature `json`)
//!
//! # Examples
//!
//! ```
//! use named_color_consts::color::RawColor;
//! use named_color_consts::tables::{ColorTableProvider, ColorTables, SourceTable};
//!
//! let mut tables = ColorTables::new();
//! tables.base.push("r", RawColor::unit(1.0, 0.0, 0.0));
//!
//! let provided = tables.tables().unwrap();
//! assert_eq!(provided.get(SourceTable::Base).len(), 1);
//! assert!(provided.get(SourceTable::Xkcd).is_empty());
//! ```

mod builtin;
#[cfg(feature = "json")]
mod json;
mod xkcd;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::color::RawColor;

pub use builtin::{BASE_COLORS, BuiltinProvider, CSS4_COLORS, XKCD_COLORS};
#[cfg(feature = "json")]
pub use json::{JsonProvider, parse_json_tables};
pub use xkcd::{XKCD_PREFIX, parse_xkcd_rgb_txt};

/// Which source table a colour came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceTable {
    Base,
    Css4,
    Xkcd,
}

impl SourceTable {
    /// Tables in output order.
    pub const ALL: [Self; 3] = [Self::Base, Self::Css4, Self::Xkcd];

    /// Name of the table as it appears in generated docs.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Base => "BASE_COLORS",
            Self::Css4 => "CSS4_COLORS",
            Self::Xkcd => "XKCD_COLORS",
        }
    }

    /// Look a table up by its tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|table| table.tag() == tag)
    }
}

impl fmt::Display for SourceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One ordered name → colour mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable {
    source: SourceTable,
    entries: Vec<(String, RawColor)>,
}

impl ColorTable {
    /// Create an empty table.
    #[must_use]
    pub fn new(source: SourceTable) -> Self {
        Self {
            source,
            entries: Vec::new(),
        }
    }

    /// Append an entry; insertion order is output order.
    pub fn push(&mut self, name: impl Into<String>, color: RawColor) {
        self.entries.push((name.into(), color));
    }

    /// Builder-style [`ColorTable::push`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, color: RawColor) -> Self {
        self.push(name, color);
        self
    }

    #[must_use]
    pub const fn source(&self) -> SourceTable {
        self.source
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawColor)> {
        self.entries.iter().map(|(name, color)| (name.as_str(), color))
    }
}

/// The three tables a provider supplies.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTables {
    pub base: ColorTable,
    pub css4: ColorTable,
    pub xkcd: ColorTable,
}

impl Default for ColorTables {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorTables {
    /// Three empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: ColorTable::new(SourceTable::Base),
            css4: ColorTable::new(SourceTable::Css4),
            xkcd: ColorTable::new(SourceTable::Xkcd),
        }
    }

    #[must_use]
    pub const fn get(&self, source: SourceTable) -> &ColorTable {
        match source {
            SourceTable::Base => &self.base,
            SourceTable::Css4 => &self.css4,
            SourceTable::Xkcd => &self.xkcd,
        }
    }

    pub const fn get_mut(&mut self, source: SourceTable) -> &mut ColorTable {
        match source {
            SourceTable::Base => &mut self.base,
            SourceTable::Css4 => &mut self.css4,
            SourceTable::Xkcd => &mut self.xkcd,
        }
    }

    /// Tables in output order: BASE, CSS4, XKCD.
    pub fn iter(&self) -> impl Iterator<Item = &ColorTable> {
        SourceTable::ALL.into_iter().map(|source| self.get(source))
    }

    /// Total number of entries across all tables.
    #[must_use]
    pub fn total(&self) -> usize {
        self.iter().map(ColorTable::len).sum()
    }
}

/// Source of the three colour tables.
///
/// Implementations are read once per generation run and must return the
/// same order every time.
pub trait ColorTableProvider {
    /// Produce the tables.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` if the backing data cannot be read or parsed.
    fn tables(&self) -> Result<ColorTables, ProviderError>;
}

impl ColorTableProvider for ColorTables {
    fn tables(&self) -> Result<ColorTables, ProviderError> {
        Ok(self.clone())
    }
}

impl<P: ColorTableProvider + ?Sized> ColorTableProvider for &P {
    fn tables(&self) -> Result<ColorTables, ProviderError> {
        (**self).tables()
    }
}

/// Error type for colour table providers.
#[derive(Debug)]
pub enum ProviderError {
    /// The backing file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// A line of an `rgb.txt`-style file is malformed.
    Parse {
        path: Option<PathBuf>,
        line: usize,
        message: String,
    },
    /// A JSON dump is malformed or has the wrong structure.
    #[cfg(feature = "json")]
    Json {
        path: Option<PathBuf>,
        source: Option<serde_json::Error>,
        message: String,
    },
}

impl ProviderError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Attach a file path to a parse error produced from in-memory text.
    #[must_use]
    pub fn with_path(self, file: &Path) -> Self {
        match self {
            Self::Parse { line, message, .. } => Self::Parse {
                path: Some(file.to_path_buf()),
                line,
                message,
            },
            #[cfg(feature = "json")]
            Self::Json {
                source, message, ..
            } => Self::Json {
                path: Some(file.to_path_buf()),
                source,
                message,
            },
            other @ Self::Io { .. } => other,
        }
    }
}

fn describe(path: Option<&PathBuf>) -> String {
    path.map_or_else(|| "<input>".to_string(), |p| p.display().to_string())
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read colour table {}: {source}", path.display())
            }
            Self::Parse {
                path,
                line,
                message,
            } => write!(f, "{}:{line}: {message}", describe(path.as_ref())),
            #[cfg(feature = "json")]
            Self::Json { path, message, .. } => {
                write!(f, "{}: {message}", describe(path.as_ref()))
            }
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { .. } => None,
            #[cfg(feature = "json")]
            Self::Json { source, .. } => source
                .as_ref()
                .map(|e| e as &(dyn std::error::Error + 'static)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_table_tags() {
        assert_eq!(SourceTable::Base.tag(), "BASE_COLORS");
        assert_eq!(SourceTable::Css4.tag(), "CSS4_COLORS");
        assert_eq!(SourceTable::Xkcd.tag(), "XKCD_COLORS");
        assert_eq!(SourceTable::from_tag("CSS4_COLORS"), Some(SourceTable::Css4));
        assert_eq!(SourceTable::from_tag("TABLEAU_COLORS"), None);
    }

    #[test]
    fn test_color_table_keeps_insertion_order() {
        let table = ColorTable::new(SourceTable::Css4)
            .with("zebra", RawColor::hex("#000000"))
            .with("apple", RawColor::hex("#FF0000"))
            .with("mango", RawColor::hex("#FFAA00"));
        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_color_tables_iterate_in_output_order() {
        let tables = ColorTables::new();
        let order: Vec<SourceTable> = tables.iter().map(ColorTable::source).collect();
        assert_eq!(order, SourceTable::ALL);
    }

    #[test]
    fn test_in_memory_provider_returns_copy() {
        let mut tables = ColorTables::new();
        tables.get_mut(SourceTable::Xkcd).push("xkcd:red", RawColor::hex("#e50000"));
        let provided = (&tables).tables().unwrap();
        assert_eq!(provided, tables);
        assert_eq!(provided.total(), 1);
    }

    #[test]
    fn test_parse_error_display_with_path() {
        let err = ProviderError::Parse {
            path: None,
            line: 3,
            message: "missing hex value".to_string(),
        };
        assert_eq!(err.to_string(), "<input>:3: missing hex value");

        let err = err.with_path(Path::new("rgb.txt"));
        assert_eq!(err.to_string(), "rgb.txt:3: missing hex value");
    }
}
