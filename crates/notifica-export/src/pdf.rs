use genpdf::{Document, Size};
use jiff::civil::Date;

use notifica_core::dates;
use notifica_core::models::notification::Notification;

use crate::error::RenderError;
use crate::fonts;
use crate::footer::FooterDecorator;
use crate::grid::EvidenceGrid;
use crate::header;
use crate::sections;
use crate::styles::{DocumentStyles, Letterhead};

/// Renders notifications with a fixed template.
///
/// Holds only immutable configuration, so one instance can be shared across
/// threads; every call builds its own document in memory.
#[derive(Debug, Clone, Default)]
pub struct NotificationRenderer {
    styles: DocumentStyles,
    letterhead: Letterhead,
}

impl NotificationRenderer {
    pub fn new(styles: DocumentStyles, letterhead: Letterhead) -> Self {
        Self { styles, letterhead }
    }

    /// Render using today's date for a missing or invalid issue date.
    pub fn render(&self, notification: &Notification) -> Result<Vec<u8>, RenderError> {
        self.render_on(notification, dates::today())
    }

    /// Render with an explicit "today", making the output independent of the clock.
    pub fn render_on(&self, notification: &Notification, today: Date) -> Result<Vec<u8>, RenderError> {
        let issue_date = dates::format_issue_date(notification.issue_date.as_deref(), today);
        let styles = &self.styles;

        let mut doc = Document::new(fonts::noto_sans()?);
        doc.set_title(format!("Notificação {}", notification.number).trim());
        doc.set_minimal_conformance();
        doc.set_paper_size(Size::new(styles.page.width, styles.page.height));
        doc.set_font_size(styles.body_size);
        doc.set_line_spacing(styles.line_spacing);
        doc.set_page_decorator(FooterDecorator::new(styles.clone(), self.letterhead.clone()));

        doc.push(header::header(notification, &issue_date, styles, &self.letterhead)?);

        let evidence = EvidenceGrid::build(
            &notification.photos,
            styles.grid_image_width(),
            styles.max_image_height(),
        );
        let photos = evidence.image_count();
        let body = sections::assemble(notification, evidence, styles)?;
        let sections = body.headings.len();
        doc.push(body.content);

        let mut bytes = Vec::new();
        doc.render(&mut bytes)?;

        tracing::info!(
            number = %notification.number,
            sections,
            photos_requested = notification.photos.len(),
            photos_rendered = photos,
            size = bytes.len(),
            "notification rendered"
        );
        Ok(bytes)
    }
}
