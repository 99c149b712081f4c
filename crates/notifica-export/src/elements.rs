//! Small `genpdf` elements the stock set does not provide.

use genpdf::elements::Image;
use genpdf::error::Error;
use genpdf::render::Area;
use genpdf::style::{LineStyle, Style};
use genpdf::{Context, Element, Margins, Mm, Position, RenderResult, Size};

use crate::styles::Color;

/// Full-width horizontal rule followed by some empty space.
pub struct Divider {
    pub thickness: f64,
    pub color: Color,
    pub space_after: f64,
}

impl Element for Divider {
    fn render(
        &mut self,
        _context: &Context,
        area: Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let height = Mm::from(self.thickness + self.space_after);
        let width = area.size().width;
        if area.size().height < height {
            return Ok(RenderResult {
                has_more: true,
                ..RenderResult::default()
            });
        }

        let y = Mm::from(self.thickness / 2.0);
        area.draw_line(
            vec![Position::new(0.0, y), Position::new(width, y)],
            LineStyle::new()
                .with_thickness(self.thickness)
                .with_color(self.color.into()),
        );
        Ok(RenderResult {
            size: Size::new(width, height),
            has_more: false,
        })
    }
}

/// Fixed vertical gap. Truncated at the bottom of a page rather than carried
/// over to the next one.
pub struct Spacer(pub f64);

impl Element for Spacer {
    fn render(
        &mut self,
        _context: &Context,
        area: Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let size = area.size();
        let wanted = Mm::from(self.0);
        let height = if size.height < wanted {
            size.height
        } else {
            wanted
        };
        Ok(RenderResult {
            size: Size::new(size.width, height),
            has_more: false,
        })
    }
}

/// One evidence-grid cell.
///
/// Every cell of a row carries the row's full height, so a row is either
/// drawn entirely or moved to the next page as a whole. Nothing is drawn and
/// no size is reported when the row does not fit.
pub struct PhotoCell {
    image: Image,
    row_height: f64,
    padding: f64,
    padding_bottom: f64,
}

impl PhotoCell {
    pub fn new(image: Image, row_height: f64, padding: f64, padding_bottom: f64) -> Self {
        Self {
            image,
            row_height,
            padding,
            padding_bottom,
        }
    }

    pub fn height(&self) -> f64 {
        self.row_height + self.padding_bottom
    }
}

impl Element for PhotoCell {
    fn render(
        &mut self,
        context: &Context,
        mut area: Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let size = area.size();
        let height = Mm::from(self.height());
        if size.height < height {
            return Ok(RenderResult {
                has_more: true,
                ..RenderResult::default()
            });
        }

        area.add_margins(Margins::trbl(0.0, self.padding, 0.0, self.padding));
        self.image.render(context, area, style)?;
        Ok(RenderResult {
            size: Size::new(size.width, height),
            has_more: false,
        })
    }
}
