use genpdf::error::Error;
use genpdf::render::Area;
use genpdf::style::{LineStyle, Style};
use genpdf::{Context, Margins, Mm, PageDecorator, Position};

use crate::styles::{DocumentStyles, Letterhead, POINT};

pub fn page_label(number: usize) -> String {
    format!("Página {number}")
}

/// Footer drawn identically on every page: divider, organization line on
/// the left, `Página N` on the right. Also applies the page margins.
pub struct FooterDecorator {
    styles: DocumentStyles,
    letterhead: Letterhead,
    page: usize,
}

impl FooterDecorator {
    pub fn new(styles: DocumentStyles, letterhead: Letterhead) -> Self {
        Self {
            styles,
            letterhead,
            page: 0,
        }
    }
}

impl PageDecorator for FooterDecorator {
    fn decorate_page<'a>(
        &mut self,
        context: &Context,
        mut area: Area<'a>,
        _style: Style,
    ) -> Result<Area<'a>, Error> {
        self.page += 1;
        let page = self.styles.page;
        let palette = &self.styles.palette;
        let left = page.margin_left;
        let right = page.width - page.margin_right;

        let rule_y = page.height - self.styles.footer_rule_offset;
        area.draw_line(
            vec![Position::new(left, rule_y), Position::new(right, rule_y)],
            LineStyle::new()
                .with_thickness(POINT)
                .with_color(palette.light_gray.into()),
        );

        // Text is positioned by its top edge; lift it by the font size so the
        // baseline sits at the footer offset.
        let style = self.styles.footer();
        let text_top = page.height
            - self.styles.footer_text_offset
            - f64::from(self.styles.footer_size) * POINT;
        area.print_str(
            &context.font_cache,
            Position::new(left, text_top),
            style,
            &self.letterhead.footer_text,
        )?;

        let label = page_label(self.page);
        let label_width = style.str_width(&context.font_cache, &label);
        area.print_str(
            &context.font_cache,
            Position::new(Mm::from(right) - label_width, text_top),
            style,
            &label,
        )?;

        area.add_margins(Margins::trbl(
            page.margin_top,
            page.margin_right,
            page.margin_bottom,
            page.margin_left,
        ));
        Ok(area)
    }
}
