//! Two-column grid of photographic evidence.

use genpdf::elements::{Break, TableLayout};
use genpdf::{Alignment, Element};
use image::{DynamicImage, GenericImageView};

use crate::elements::PhotoCell;
use crate::error::{ImageError, RenderError};
use crate::images;
use crate::styles::DocumentStyles;

pub const COLUMNS: usize = 2;

/// A decoded photo and the size it will be drawn at, in millimetres.
pub struct EvidencePhoto {
    image: DynamicImage,
    pub width: f64,
    pub height: f64,
}

impl EvidencePhoto {
    pub fn pixel_size(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Decoded evidence photos packed into rows of two, in request order.
pub struct EvidenceGrid {
    rows: Vec<Vec<EvidencePhoto>>,
}

impl EvidenceGrid {
    /// Decode every base64 photo and size the survivors at `image_width`,
    /// capping any that would be taller than `max_height`.
    ///
    /// Entries that fail to decode are logged and skipped; they never leave a
    /// hole in the grid and never abort the document.
    pub fn build(photos: &[String], image_width: f64, max_height: f64) -> Self {
        let photos = photos
            .iter()
            .enumerate()
            .filter_map(|(index, encoded)| match decode_photo(encoded) {
                Ok(image) => {
                    let (width, height) = images::fit(image.dimensions(), image_width, max_height);
                    if width < image_width {
                        tracing::debug!(index, height, "evidence photo capped to page height");
                    }
                    Some(EvidencePhoto {
                        image,
                        width,
                        height,
                    })
                }
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping evidence photo");
                    None
                }
            })
            .collect();

        Self {
            rows: pack_rows(photos),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<EvidencePhoto>] {
        &self.rows
    }

    pub fn image_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// The grid as a two-column table, or `None` when no photo survived
    /// decoding. A short last row is padded with an empty cell.
    pub fn into_element(self, styles: &DocumentStyles) -> Result<Option<TableLayout>, RenderError> {
        if self.rows.is_empty() {
            return Ok(None);
        }

        let mut table = TableLayout::new(vec![1; COLUMNS]);
        for row in self.rows {
            let row_height = row.iter().map(|p| p.height).fold(0.0, f64::max);
            let mut cells: Vec<Box<dyn Element>> = Vec::with_capacity(COLUMNS);
            for photo in row {
                let image = images::embed(photo.image, photo.width, Alignment::Center)?;
                cells.push(Box::new(PhotoCell::new(
                    image,
                    row_height,
                    styles.grid_cell_padding,
                    styles.grid_cell_padding_bottom,
                )));
            }
            while cells.len() < COLUMNS {
                cells.push(Box::new(Break::new(0.0)));
            }
            table.push_row(cells)?;
        }
        Ok(Some(table))
    }
}

fn decode_photo(encoded: &str) -> Result<DynamicImage, ImageError> {
    let bytes = images::decode_base64(encoded)?;
    images::decode_image(&bytes)
}

/// Pack items left-to-right into rows of [`COLUMNS`]; the last row may be short.
pub fn pack_rows<T>(items: Vec<T>) -> Vec<Vec<T>> {
    let mut rows = Vec::with_capacity(items.len().div_ceil(COLUMNS));
    let mut row = Vec::with_capacity(COLUMNS);
    for item in items {
        row.push(item);
        if row.len() == COLUMNS {
            rows.push(std::mem::replace(&mut row, Vec::with_capacity(COLUMNS)));
        }
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}
