use std::path::Path;

use genpdf::elements::{LinearLayout, Paragraph, TableLayout};
use genpdf::{Alignment, Element, Margins};

use notifica_core::models::notification::Notification;

use crate::elements::Spacer;
use crate::error::RenderError;
use crate::images;
use crate::styles::{DocumentStyles, INCH, Letterhead, POINT};

const LABEL_COLUMN_WIDTH: f64 = 1.3 * INCH;

/// Label/value pairs of the metadata table, in display order.
pub fn metadata_entries(notification: &Notification, issue_date: &str) -> [(&'static str, String); 5] {
    [
        ("Notificação Nº:", notification.number.clone()),
        ("Data de Emissão:", issue_date.to_string()),
        ("Unidade:", notification.unit_label()),
        ("Tipo:", notification.notification_type.clone()),
        ("Assunto:", notification.subject.clone()),
    ]
}

/// Document title, e.g. `NOTIFICAÇÃO N° 042/2025`.
pub fn title(notification: &Notification) -> String {
    format!(
        "{} N° {}",
        notification.document_type.to_uppercase(),
        notification.number
    )
}

/// Header at the top of the first page: logo beside the metadata table,
/// then the document title and the place/date line.
pub fn header(
    notification: &Notification,
    issue_date: &str,
    styles: &DocumentStyles,
    letterhead: &Letterhead,
) -> Result<LinearLayout, RenderError> {
    let content_width = styles.page.content_width();
    let mut banner = TableLayout::new(vec![
        column_weight(letterhead.logo_column_width),
        column_weight(content_width - letterhead.logo_column_width),
    ]);
    let metadata = metadata_table(
        notification,
        issue_date,
        styles,
        content_width - letterhead.logo_column_width,
    )?;
    let cells: Vec<Box<dyn Element>> = vec![logo(letterhead, styles), Box::new(metadata)];
    banner.push_row(cells)?;

    let mut layout = LinearLayout::vertical();
    layout.push(banner);
    layout.push(
        Paragraph::default()
            .styled_string(title(notification), styles.title())
            .aligned(Alignment::Center)
            .padded(Margins::trbl(18.0 * POINT, 0.0, 6.0 * POINT, 0.0)),
    );
    layout.push(
        Paragraph::default()
            .styled_string(format!("{}, {}", notification.city, issue_date), styles.body())
            .aligned(Alignment::Right),
    );
    layout.push(Spacer(0.2 * INCH));
    Ok(layout)
}

/// Column weights are whole numbers; millimetres keep the ratio close enough.
fn column_weight(width: f64) -> usize {
    width.round().max(1.0) as usize
}

/// The logo scaled to the letterhead width, or the organization name when
/// no usable logo file exists.
fn logo(letterhead: &Letterhead, styles: &DocumentStyles) -> Box<dyn Element> {
    let path = Path::new(&letterhead.logo_path);
    if path.exists() {
        let embedded = images::load_image_file(path).map_err(|e| e.to_string()).and_then(|image| {
            images::embed(image, letterhead.logo_width, Alignment::Left).map_err(|e| e.to_string())
        });
        match embedded {
            Ok(image) => return Box::new(image),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "logo unreadable, using text heading");
            }
        }
    } else {
        tracing::debug!(path = %path.display(), "no logo file, using text heading");
    }

    Box::new(Paragraph::default().styled_string(letterhead.organization_name.clone(), styles.heading()))
}

fn metadata_table(
    notification: &Notification,
    issue_date: &str,
    styles: &DocumentStyles,
    width: f64,
) -> Result<TableLayout, RenderError> {
    let mut table = TableLayout::new(vec![
        column_weight(LABEL_COLUMN_WIDTH),
        column_weight(width - LABEL_COLUMN_WIDTH),
    ]);
    let cell = Margins::trbl(0.0, 4.0 * POINT, 4.0 * POINT, 0.0);
    for (label, value) in metadata_entries(notification, issue_date) {
        let row: Vec<Box<dyn Element>> = vec![
            Box::new(
                Paragraph::default()
                    .styled_string(label, styles.body().bold())
                    .padded(cell),
            ),
            Box::new(Paragraph::default().styled_string(value, styles.body()).padded(cell)),
        ];
        table.push_row(row)?;
    }
    Ok(table)
}
