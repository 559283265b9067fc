//! Rendering one colour into a documented constant declaration.
//!
//! A rendered block looks like this (note the leading and trailing newline):
//!
//! ```text
//!
//! /// Colour `(r = 255, g = 0, b = 0)`
//! ///
//! /// Colour `R` from the set `BASE_COLORS`. (Colour number `2`)
//! /// ## Representations:
//! /// - int tuple `(255, 0, 0)`
//! /// - float tuple `(1.0, 0.0, 0.0)`
//! /// - hex: `#FF0000`
//! pub const R: Color = Color(255, 0, 0);
//! ```
//!
//! Concatenated blocks are therefore separated by one blank line and the
//! whole output ends with a newline.

use std::fmt::Write as _;

use crate::color::ColorTriplet;
use crate::tables::SourceTable;

/// A single colour ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    /// Normalised constant identifier.
    pub name: String,
    /// Key as it appeared in the source table.
    pub raw_name: String,
    pub source: SourceTable,
    /// Position across all tables, counted from 0.
    pub index: usize,
    pub triplet: ColorTriplet,
}

/// How declarations are spelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    type_name: String,
    visibility: String,
    type_definition: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            type_name: "Color".to_string(),
            visibility: "pub".to_string(),
            type_definition: false,
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Type the constants are declared as; it must be a 3-field tuple struct.
    #[must_use]
    pub fn type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    /// Visibility prefix, e.g. `pub(crate)`. Empty for private constants.
    #[must_use]
    pub fn visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = visibility.into();
        self
    }

    /// Emit a definition of the declared type ahead of the constants.
    #[must_use]
    pub fn with_type_definition(mut self, include: bool) -> Self {
        self.type_definition = include;
        self
    }

    #[must_use]
    pub const fn includes_type_definition(&self) -> bool {
        self.type_definition
    }

    fn vis_prefix(&self) -> String {
        if self.visibility.is_empty() {
            String::new()
        } else {
            format!("{} ", self.visibility)
        }
    }

    /// Append the definition of the declared type to `out`.
    ///
    /// The type is a tuple struct of three `u8` channels with `to_hex()`,
    /// `ansi()` (24-bit foreground escape), `Debug` as `Color(r=.., g=.., b=..)`
    /// and `Display` as `(r, g, b)`.
    pub fn render_type_definition_into(&self, out: &mut String) {
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            r##"use std::fmt;

/// An RGB24 colour. Each channel has a depth of 8 bit.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
{vis}struct {ty}(pub u8, pub u8, pub u8);

impl {ty} {{
    /// Hex representation `#RRGGBB`.
    pub fn to_hex(&self) -> String {{
        format!("#{{:02X}}{{:02X}}{{:02X}}", self.0, self.1, self.2)
    }}

    /// ANSI escape sequence setting this colour as the foreground.
    pub fn ansi(&self) -> String {{
        format!("\x1B[38;2;{{}};{{}};{{}}m", self.0, self.1, self.2)
    }}
}}

impl fmt::Debug for {ty} {{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{
        write!(f, "{ty}(r={{}}, g={{}}, b={{}})", self.0, self.1, self.2)
    }}
}}

impl fmt::Display for {ty} {{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{
        write!(f, "({{}}, {{}}, {{}})", self.0, self.1, self.2)
    }}
}}
"##,
            vis = self.vis_prefix(),
            ty = self.type_name,
        );
    }
}

impl ColorEntry {
    /// Render this entry as a declaration block.
    #[must_use]
    pub fn render(&self, options: &RenderOptions) -> String {
        let mut out = String::with_capacity(320);
        self.render_into(&mut out, options);
        out
    }

    /// Append this entry's declaration block to `out`.
    pub fn render_into(&self, out: &mut String, options: &RenderOptions) {
        let t = self.triplet;
        let ty = &options.type_name;
        let vis = options.vis_prefix();

        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "\n/// Colour `{debug}`\n\
             ///\n\
             /// Colour `{name}` from the set `{set}`. (Colour number `{index}`)\n\
             /// ## Representations:\n\
             /// - int tuple `{ints}`\n\
             /// - float tuple `{floats}`\n\
             /// - hex: `{hex}`\n\
             {vis}const {name}: {ty} = {ty}({r}, {g}, {b});\n",
            debug = t.debug_string(),
            name = self.name,
            set = self.source.tag(),
            index = self.index,
            ints = t.int_tuple(),
            floats = t.float_tuple(),
            hex = t.hex(),
            r = t.red,
            g = t.green,
            b = t.blue,
        );
    }
}

/// Render `entry` with the default options (`pub const NAME: Color = Color(..)`).
#[must_use]
pub fn render(entry: &ColorEntry) -> String {
    entry.render(&RenderOptions::default())
}
