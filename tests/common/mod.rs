//! Common test utilities and logging infrastructure
//!
//! # Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::init_test_logging;
//!
//! #[test]
//! fn my_test() {
//!     init_test_logging();
//!     // test code...
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG=debug` - Enable debug logging in tests
//! - `RUST_LOG=named_color_consts::generator=trace` - Module-specific output
//! - `TEST_LOG_JSON=1` - Output JSON format for CI parsing
//!
//! Not every test binary uses every helper.

#![allow(dead_code)]

pub mod assertions;

use std::path::PathBuf;
use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use named_color_consts::color::RawColor;
use named_color_consts::tables::ColorTables;

static INIT: Once = Once::new();

/// Initialize test logging infrastructure.
///
/// `log` records from the library are forwarded into tracing by the
/// subscriber's log bridge. Calling this more than once is safe.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let use_json = std::env::var("TEST_LOG_JSON").is_ok();

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("named_color_consts=debug,test=info"));

        if use_json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_test_writer())
                .try_init()
                .ok();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_file(true)
                        .with_line_number(true)
                        .with_target(true)
                        .compact(),
                )
                .try_init()
                .ok();
        }
    });
}

/// Create a test phase span for structured logging.
pub fn test_phase(name: &str) -> tracing::span::EnteredSpan {
    let span = tracing::info_span!("test_phase", phase = name);
    tracing::info!(phase = name, "entering test phase");
    span.entered()
}

/// A scratch directory unique to `name`, emptied first.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("named_color_consts_tests")
        .join(format!("{name}_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

/// Tables with a single red base colour.
pub fn single_red() -> ColorTables {
    let mut tables = ColorTables::new();
    tables.base.push("r", RawColor::unit(1.0, 0.0, 0.0));
    tables
}

/// A few lines of the xkcd survey file.
pub const XKCD_SAMPLE: &str = "# License: http://creativecommons.org/publicdomain/zero/1.0/\n\
cloudy blue\t#acc2d9\t\n\
dark pastel green\t#56ae57\t\n\
dust\t#b2996e\t\n\
baby's breath\t#fffbd8\t\n\
green/blue\t#01c08d\t\n";
