//! notifica-export
//!
//! Renders a resolved notification into a paginated A4 PDF: letterhead and
//! metadata header, numbered sections, photographic evidence grid and a
//! page-numbered footer. Page flow is delegated to `genpdf`.

pub mod elements;
pub mod error;
pub mod fonts;
pub mod footer;
pub mod grid;
pub mod header;
pub mod images;
pub mod pdf;
pub mod sections;
pub mod styles;
pub mod text;
