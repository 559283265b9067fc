//! # named_color_consts
//!
//! Generates documented Rust colour constants from matplotlib's named colour
//! tables: the single-letter base colours, the CSS4 web colours and the xkcd
//! colour survey.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use named_color_consts::prelude::*;
//!
//! let provider = BuiltinProvider::new();
//! let generated = Generator::default().run(&provider)?;
//! println!("{} constants written", generated.emitted);
//! # Ok::<(), named_color_consts::generator::GenerateError>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Provider**: supplies the BASE, CSS4 and XKCD tables in order
//! - **RawColor**: a table value (unit tuple, byte tuple, `#RRGGBB` or other)
//! - **ColorEntry**: one normalised colour, rendered into a declaration block
//! - **Generator**: turns tables into text and writes the output file

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod generator;
pub mod logging;
pub mod name;
pub mod render;
pub mod sync;
pub mod tables;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::color::{
        ColorParseError, ColorTriplet, RawColor, TupleScale, normalize_color, to_hex,
    };
    pub use crate::generator::{
        Generated, GenerateError, Generator, GeneratorOptions, InvalidEntryPolicy, generate,
        write_output,
    };
    pub use crate::name::normalize_name;
    pub use crate::render::{ColorEntry, RenderOptions, render};
    pub use crate::tables::{
        BuiltinProvider, ColorTable, ColorTableProvider, ColorTables, ProviderError, SourceTable,
    };

    #[cfg(feature = "json")]
    pub use crate::tables::JsonProvider;
}

// Re-export key types at crate root
pub use color::{ColorTriplet, RawColor};
pub use generator::{Generated, Generator};
pub use tables::{ColorTableProvider, ColorTables, SourceTable};
