//! The generation pipeline: tables in, declaration text out.
//!
//! [`Generator::generate`] is pure: it reads a provider and returns the
//! complete output text without touching the filesystem. [`Generator::run`]
//! adds the single file write.
//!
//! # Examples
//!
//! ```
//! use named_color_consts::color::RawColor;
//! use named_color_consts::generator::Generator;
//! use named_color_consts::tables::ColorTables;
//!
//! let mut tables = ColorTables::new();
//! tables.base.push("r", RawColor::unit(1.0, 0.0, 0.0));
//!
//! let generated = Generator::default().generate(&tables).unwrap();
//! assert_eq!(generated.emitted, 1);
//! assert!(generated.text.contains("pub const R: Color = Color(255, 0, 0);"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::color::{ColorParseError, normalize_color};
use crate::name::{is_valid_identifier, normalize_name};
use crate::render::{ColorEntry, RenderOptions};
use crate::tables::{ColorTableProvider, ColorTables, ProviderError, SourceTable};

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "all_the_colors.txt";

/// What to do with an entry that cannot become a valid constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InvalidEntryPolicy {
    /// Leave the entry out, log a warning, keep going.
    #[default]
    Skip,
    /// Stop at the first bad entry; nothing is written.
    Abort,
}

impl InvalidEntryPolicy {
    /// Parse `skip` or `abort` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns a usage message for any other value.
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            _ => Err(format!(
                "Invalid --on-invalid value `{value}` (expected: skip|abort)."
            )),
        }
    }
}

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    output: PathBuf,
    render: RenderOptions,
    on_invalid: InvalidEntryPolicy,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            render: RenderOptions::default(),
            on_invalid: InvalidEntryPolicy::default(),
        }
    }
}

impl GeneratorOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output file path.
    #[must_use]
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    /// Set how declarations are spelled.
    #[must_use]
    pub fn render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    /// Set the invalid-entry policy.
    #[must_use]
    pub fn on_invalid(mut self, policy: InvalidEntryPolicy) -> Self {
        self.on_invalid = policy;
        self
    }

    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output
    }

    #[must_use]
    pub fn render_options(&self) -> &RenderOptions {
        &self.render
    }

    #[must_use]
    pub const fn policy(&self) -> InvalidEntryPolicy {
        self.on_invalid
    }
}

/// Why a single entry was not emitted.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryErrorKind {
    /// The colour value could not be normalised.
    Color(ColorParseError),
    /// The normalised name is not a valid identifier.
    InvalidIdentifier(String),
    /// The normalised name was already emitted by an earlier entry.
    NameCollision {
        name: String,
        first_source: SourceTable,
        first_raw_name: String,
    },
}

/// A per-entry failure.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryError {
    pub source: SourceTable,
    pub index: usize,
    pub raw_name: String,
    pub kind: EntryErrorKind,
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} entry `{}` (#{}): ", self.source, self.raw_name, self.index)?;
        match &self.kind {
            EntryErrorKind::Color(err) => write!(f, "{err}"),
            EntryErrorKind::InvalidIdentifier(name) => {
                write!(f, "`{name}` is not a valid identifier")
            }
            EntryErrorKind::NameCollision {
                name,
                first_source,
                first_raw_name,
            } => write!(
                f,
                "`{name}` already declared by {first_source} entry `{first_raw_name}`"
            ),
        }
    }
}

impl std::error::Error for EntryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            EntryErrorKind::Color(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for a generation run.
#[derive(Debug)]
pub enum GenerateError {
    /// The provider could not produce the tables.
    Provider(ProviderError),
    /// An entry was invalid under [`InvalidEntryPolicy::Abort`].
    Entry(EntryError),
    /// The output file could not be written.
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Provider(err) => write!(f, "{err}"),
            Self::Entry(err) => write!(f, "Invalid colour entry: {err}"),
            Self::Io { path, source } => {
                write!(f, "Cannot write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Provider(err) => Some(err),
            Self::Entry(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ProviderError> for GenerateError {
    fn from(err: ProviderError) -> Self {
        Self::Provider(err)
    }
}

impl From<EntryError> for GenerateError {
    fn from(err: EntryError) -> Self {
        Self::Entry(err)
    }
}

/// Result of a generation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    /// The concatenated declaration blocks.
    pub text: String,
    /// Number of blocks in `text`.
    pub emitted: usize,
    /// Entries left out under [`InvalidEntryPolicy::Skip`].
    pub skipped: Vec<EntryError>,
}

/// Turns colour tables into constant declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generator {
    options: GeneratorOptions,
}

impl Generator {
    #[must_use]
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Read the provider and render every entry.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::Provider` if the tables cannot be read, and
    /// `GenerateError::Entry` for the first bad entry under
    /// [`InvalidEntryPolicy::Abort`].
    pub fn generate<P: ColorTableProvider + ?Sized>(
        &self,
        provider: &P,
    ) -> Result<Generated, GenerateError> {
        let tables = provider.tables()?;
        self.generate_tables(&tables)
    }

    /// Render already-loaded tables.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::Entry` for the first bad entry under
    /// [`InvalidEntryPolicy::Abort`].
    pub fn generate_tables(&self, tables: &ColorTables) -> Result<Generated, GenerateError> {
        let mut text = String::with_capacity(tables.total() * 320);
        if self.options.render.includes_type_definition() {
            self.options.render.render_type_definition_into(&mut text);
        }
        let mut seen: HashMap<String, (SourceTable, String)> = HashMap::new();
        let mut skipped = Vec::new();
        let mut emitted = 0;
        // Shared by all tables; bad entries still consume their number.
        let mut index = 0;

        for table in tables.iter() {
            log::debug!("rendering {} ({} entries)", table.source(), table.len());

            for (raw_name, raw) in table.iter() {
                let built = build_entry(table.source(), index, raw_name, raw, &seen);
                index += 1;

                let entry = match built {
                    Ok(entry) => entry,
                    Err(err) => match self.options.on_invalid {
                        InvalidEntryPolicy::Abort => return Err(err.into()),
                        InvalidEntryPolicy::Skip => {
                            log::warn!("skipping {err}");
                            skipped.push(err);
                            continue;
                        }
                    },
                };

                entry.render_into(&mut text, &self.options.render);
                seen.insert(entry.name, (entry.source, entry.raw_name));
                emitted += 1;
            }
        }

        log::info!(
            "generated {emitted} colour constants ({} skipped)",
            skipped.len()
        );
        Ok(Generated {
            text,
            emitted,
            skipped,
        })
    }

    /// Generate and write the output file.
    ///
    /// The text is fully built before the file is opened, so an aborted run
    /// leaves any previous output untouched.
    ///
    /// # Errors
    ///
    /// Everything [`Generator::generate`] returns, plus `GenerateError::Io`.
    pub fn run<P: ColorTableProvider + ?Sized>(
        &self,
        provider: &P,
    ) -> Result<Generated, GenerateError> {
        let generated = self.generate(provider)?;
        write_output(&self.options.output, &generated.text)?;
        log::info!("wrote {}", self.options.output.display());
        Ok(generated)
    }
}

fn build_entry(
    source: SourceTable,
    index: usize,
    raw_name: &str,
    raw: &crate::color::RawColor,
    seen: &HashMap<String, (SourceTable, String)>,
) -> Result<ColorEntry, EntryError> {
    let fail = |kind| EntryError {
        source,
        index,
        raw_name: raw_name.to_string(),
        kind,
    };

    let triplet = normalize_color(raw).map_err(|e| fail(EntryErrorKind::Color(e)))?;

    let name = normalize_name(raw_name);
    if !is_valid_identifier(&name) {
        return Err(fail(EntryErrorKind::InvalidIdentifier(name)));
    }
    if let Some((first_source, first_raw_name)) = seen.get(&name) {
        return Err(fail(EntryErrorKind::NameCollision {
            name,
            first_source: *first_source,
            first_raw_name: first_raw_name.clone(),
        }));
    }

    Ok(ColorEntry {
        name,
        raw_name: raw_name.to_string(),
        source,
        index,
        triplet,
    })
}

/// Render `provider` with default options.
///
/// # Errors
///
/// See [`Generator::generate`].
pub fn generate<P: ColorTableProvider + ?Sized>(provider: &P) -> Result<Generated, GenerateError> {
    Generator::default().generate(provider)
}

/// Create or overwrite `path` with `text`.
///
/// # Errors
///
/// Returns `GenerateError::Io` if the file cannot be created or written.
pub fn write_output(path: &Path, text: &str) -> Result<(), GenerateError> {
    let io_err = |source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes()).map_err(io_err)?;
    writer.flush().map_err(io_err)
}
