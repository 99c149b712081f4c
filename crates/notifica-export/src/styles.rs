use genpdf::style::{self, Style};
use serde::{Deserialize, Serialize};

/// Millimetres per inch. All lengths in this module are millimetres.
pub const INCH: f64 = 25.4;

/// Millimetres per typographic point.
pub const POINT: f64 = INCH / 72.0;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for style::Color {
    fn from(c: Color) -> Self {
        style::Color::Rgb(c.r, c.g, c.b)
    }
}

/// Fixed palette of the notification template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    /// Titles and section headings.
    pub primary: Color,
    /// Hyperlinks.
    pub secondary: Color,
    /// Body text.
    pub text: Color,
    /// Section dividers and the footer rule.
    pub light_gray: Color,
    /// Footer text.
    pub muted: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::rgb(0x2c, 0x3e, 0x50),
            secondary: Color::rgb(0x34, 0x98, 0xdb),
            text: Color::rgb(0x34, 0x49, 0x5e),
            light_gray: Color::rgb(0xec, 0xf0, 0xf1),
            muted: Color::rgb(0x80, 0x80, 0x80),
        }
    }
}

/// Page size and margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl PageGeometry {
    /// A4 with one-inch side and bottom margins and a half-inch top margin.
    pub const A4: PageGeometry = PageGeometry {
        width: 210.0,
        height: 297.0,
        margin_left: INCH,
        margin_right: INCH,
        margin_top: 0.5 * INCH,
        margin_bottom: INCH,
    };

    pub fn content_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn content_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::A4
    }
}

/// Document styling configuration for notification PDFs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    pub palette: Palette,
    pub page: PageGeometry,

    /// Font sizes in points.
    pub title_size: u8,
    pub heading_size: u8,
    pub body_size: u8,
    pub footer_size: u8,

    /// Line height as a multiple of the font size.
    pub line_spacing: f64,

    pub heading_space_before: f64,
    pub heading_space_after: f64,
    pub paragraph_space_after: f64,

    /// Horizontal gap subtracted from each half of the content width in the
    /// evidence grid.
    pub grid_gutter: f64,
    pub grid_cell_padding: f64,
    pub grid_cell_padding_bottom: f64,

    /// Divider drawn under each section heading.
    pub divider_thickness: f64,
    pub divider_space_after: f64,

    /// Footer rule and text baseline, measured up from the bottom edge.
    pub footer_rule_offset: f64,
    pub footer_text_offset: f64,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            page: PageGeometry::A4,
            title_size: 18,
            heading_size: 12,
            body_size: 10,
            footer_size: 8,
            line_spacing: 1.3,
            heading_space_before: 12.0 * POINT,
            heading_space_after: 6.0 * POINT,
            paragraph_space_after: 6.0 * POINT,
            grid_gutter: 0.2 * INCH,
            grid_cell_padding: 5.0 * POINT,
            grid_cell_padding_bottom: 10.0 * POINT,
            divider_thickness: 0.5 * POINT,
            divider_space_after: 5.0 * POINT,
            footer_rule_offset: 0.7 * INCH,
            footer_text_offset: 0.5 * INCH,
        }
    }
}

impl DocumentStyles {
    /// Width of one evidence-grid image: half the content width minus the gutter.
    pub fn grid_image_width(&self) -> f64 {
        self.page.content_width() / 2.0 - self.grid_gutter
    }

    /// Tallest image a grid row can hold and still fit on an empty page.
    pub fn max_image_height(&self) -> f64 {
        self.page.content_height() - self.grid_cell_padding_bottom - 2.0 * POINT
    }

    pub fn body(&self) -> Style {
        Style::new()
            .with_font_size(self.body_size)
            .with_color(self.palette.text.into())
    }

    pub fn link(&self) -> Style {
        Style::new()
            .with_font_size(self.body_size)
            .with_color(self.palette.secondary.into())
    }

    pub fn heading(&self) -> Style {
        Style::new()
            .bold()
            .with_font_size(self.heading_size)
            .with_color(self.palette.primary.into())
    }

    pub fn title(&self) -> Style {
        Style::new()
            .bold()
            .with_font_size(self.title_size)
            .with_color(self.palette.primary.into())
    }

    pub fn footer(&self) -> Style {
        Style::new()
            .with_font_size(self.footer_size)
            .with_color(self.palette.muted.into())
    }
}

/// Organization identity printed on every notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Letterhead {
    pub organization_name: String,
    pub footer_text: String,
    /// Optional logo, read at render time. Missing files fall back to text.
    pub logo_path: String,
    /// Rendered logo width; height follows the image aspect ratio.
    pub logo_width: f64,
    /// Width of the header column holding the logo.
    pub logo_column_width: f64,
}

impl Default for Letterhead {
    fn default() -> Self {
        Self {
            organization_name: "Condomínio Miami Beach".to_string(),
            footer_text: "Condomínio Miami Beach | E-mail: conselhofiscalmiami2025@gmail.com"
                .to_string(),
            logo_path: "logo.png".to_string(),
            logo_width: 1.2 * INCH,
            logo_column_width: 1.6 * INCH,
        }
    }
}
