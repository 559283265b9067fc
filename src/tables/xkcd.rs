//! Reader for the xkcd colour survey `rgb.txt` file.
//!
//! The file has a license comment on its first line and then one colour per
//! line, `name<TAB>#rrggbb<TAB>`. Names are prefixed with [`XKCD_PREFIX`] the
//! same way matplotlib builds `XKCD_COLORS`.

use super::{ColorTable, ProviderError, SourceTable};
use crate::color::RawColor;

/// Prefix added to every xkcd colour name.
pub const XKCD_PREFIX: &str = "xkcd:";

/// Parse the contents of an xkcd `rgb.txt`.
///
/// Blank lines and lines starting with `#` are skipped. The colour value is
/// kept raw; validating it is the generator's job.
///
/// # Errors
///
/// Returns `ProviderError::Parse` for a line without a tab-separated value.
pub fn parse_xkcd_rgb_txt(text: &str) -> Result<ColorTable, ProviderError> {
    let mut table = ColorTable::new(SourceTable::Xkcd);

    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = line.split('\t').map(str::trim).filter(|f| !f.is_empty());
        let (Some(name), Some(value)) = (fields.next(), fields.next()) else {
            return Err(ProviderError::Parse {
                path: None,
                line: idx + 1,
                message: format!("expected `name<TAB>#rrggbb`, got `{trimmed}`"),
            });
        };

        table.push(format!("{XKCD_PREFIX}{name}"), RawColor::hex(value));
    }

    log::debug!("parsed {} xkcd colours", table.len());
    Ok(table)
}
