use genpdf::error::Error;
use genpdf::fonts::{FontData, FontFamily};

/// Noto Sans, embedded in the binary. Covers the full Latin-1 range, so
/// Portuguese diacritics are encoded and measured correctly.
pub fn noto_sans() -> Result<FontFamily<FontData>, Error> {
    Ok(FontFamily {
        regular: FontData::new(notosans::REGULAR_TTF.to_vec(), None)?,
        bold: FontData::new(notosans::BOLD_TTF.to_vec(), None)?,
        italic: FontData::new(notosans::ITALIC_TTF.to_vec(), None)?,
        bold_italic: FontData::new(notosans::BOLD_ITALIC_TTF.to_vec(), None)?,
    })
}
