use genpdf::elements::{LinearLayout, Paragraph};
use genpdf::{Element, Margins};

use notifica_core::models::notification::{AppealTerms, Facts, Notification, Penalty};

use crate::elements::{Divider, Spacer};
use crate::error::RenderError;
use crate::grid::EvidenceGrid;
use crate::styles::{DocumentStyles, INCH};
use crate::text::{self, Span};

pub const FACTS_TITLE: &str = "DOS FATOS";
pub const EVIDENCE_TITLE: &str = "DAS EVIDÊNCIAS FOTOGRÁFICAS";
pub const LEGAL_TITLE: &str = "DA FUNDAMENTAÇÃO LEGAL";
pub const PENALTY_TITLE: &str = "DA PENALIDADE";
pub const APPEAL_TITLE: &str = "DO DIREITO AO CONTRADITÓRIO E AMPLA DEFESA";

const SIGNATURE_LINE: &str = "________________________________________";

/// Upper-case Roman numeral for `n` (1..=3999; anything else renders as digits).
pub fn roman(n: usize) -> String {
    if n == 0 || n > 3999 {
        return n.to_string();
    }
    const TABLE: [(usize, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut rest = n;
    let mut out = String::new();
    for (value, symbol) in TABLE {
        while rest >= value {
            out.push_str(symbol);
            rest -= value;
        }
    }
    out
}

/// `Aplicada <KIND> conforme as disposições regimentais.`, plus the fine
/// amount when one is set.
pub fn penalty_spans(penalty: &Penalty) -> Vec<Span> {
    let mut spans = vec![
        Span::plain("Aplicada "),
        Span::bold(penalty.kind.to_uppercase()),
        Span::plain(" conforme as disposições regimentais."),
    ];
    if let Some(amount) = &penalty.fine_amount {
        spans.push(Span::plain(" Valor: "));
        spans.push(Span::bold(amount.clone()));
    }
    spans
}

pub fn appeal_spans(appeal: &AppealTerms) -> Vec<Span> {
    vec![
        Span::plain(format!(
            "Fica assegurado o direito de apresentação de recurso no prazo de {} dias, \
             contados a partir do recebimento desta notificação, por meio do formulário \
             disponível em ",
            appeal.days
        )),
        Span::link(appeal.url.clone()),
        Span::plain("."),
    ]
}

/// The assembled body plus a plain-text record of what went into it.
pub struct Body {
    pub content: LinearLayout,
    /// Numbered headings, e.g. `I. DOS FATOS`.
    pub headings: Vec<String>,
    /// Every paragraph as plain text, in order.
    pub lines: Vec<String>,
}

/// Accumulates body elements, numbering headed sections in emission order
/// so omitted sections leave no gaps.
pub struct SectionWriter<'a> {
    styles: &'a DocumentStyles,
    content: LinearLayout,
    headings: Vec<String>,
    lines: Vec<String>,
}

impl<'a> SectionWriter<'a> {
    pub fn new(styles: &'a DocumentStyles) -> Self {
        Self {
            styles,
            content: LinearLayout::vertical(),
            headings: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Push `"<numeral>. <title>"` and a thin divider.
    pub fn heading(&mut self, title: &str) {
        let label = format!("{}. {}", roman(self.headings.len() + 1), title);
        let styles = self.styles;
        self.content.push(
            Paragraph::default()
                .styled_string(label.clone(), styles.heading())
                .padded(Margins::trbl(
                    styles.heading_space_before,
                    0.0,
                    styles.heading_space_after,
                    0.0,
                )),
        );
        self.content.push(Divider {
            thickness: styles.divider_thickness,
            color: styles.palette.light_gray,
            space_after: styles.divider_space_after,
        });
        self.headings.push(label);
    }

    pub fn paragraph(&mut self, spans: &[Span]) {
        let styles = self.styles;
        self.content.push(
            text::paragraph(spans, styles.body(), styles.link())
                .padded(Margins::trbl(0.0, 0.0, styles.paragraph_space_after, 0.0)),
        );
        self.lines.push(text::plain_text(spans));
    }

    pub fn body_text(&mut self, text: &str) {
        self.paragraph(&[Span::plain(text)]);
    }

    /// A paragraph with no space after it, for the stacked signature lines.
    pub fn line(&mut self, spans: &[Span]) {
        let styles = self.styles;
        self.content
            .push(text::paragraph(spans, styles.body(), styles.link()));
        self.lines.push(text::plain_text(spans));
    }

    pub fn element<E: Element + 'static>(&mut self, element: E) {
        self.content.push(element);
    }

    pub fn spacer(&mut self, height: f64) {
        self.content.push(Spacer(height));
    }

    pub fn finish(self) -> Body {
        Body {
            content: self.content,
            headings: self.headings,
            lines: self.lines,
        }
    }
}

/// Body of the notification: every section whose driving field is present,
/// then the appeal notice and the signature block, which always appear.
pub fn assemble(
    notification: &Notification,
    evidence: EvidenceGrid,
    styles: &DocumentStyles,
) -> Result<Body, RenderError> {
    let mut writer = SectionWriter::new(styles);

    if !notification.facts.is_empty() {
        writer.heading(FACTS_TITLE);
        match &notification.facts {
            Facts::Numbered(items) => {
                for (index, fact) in items.iter().enumerate() {
                    writer.body_text(&format!("{}. {}", index + 1, fact));
                }
            }
            Facts::Text(text) => writer.body_text(text),
        }
    }

    if let Some(grid) = evidence.into_element(styles)? {
        writer.heading(EVIDENCE_TITLE);
        writer.element(grid);
    }

    if notification.legal_basis.is_some() || notification.description.is_some() {
        writer.heading(LEGAL_TITLE);
        if let Some(legal_basis) = &notification.legal_basis {
            writer.body_text(legal_basis);
        }
        if let Some(description) = &notification.description {
            writer.body_text(description);
        }
    }

    if let Some(penalty) = &notification.penalty {
        writer.heading(PENALTY_TITLE);
        writer.paragraph(&penalty_spans(penalty));
    }

    writer.heading(APPEAL_TITLE);
    writer.paragraph(&appeal_spans(&notification.appeal));

    writer.spacer(0.5 * INCH);
    writer.body_text("Atenciosamente,");
    writer.spacer(0.5 * INCH);
    writer.line(&[Span::plain(SIGNATURE_LINE)]);
    writer.line(&[Span::bold(notification.signature.name.clone())]);
    writer.line(&[Span::plain(notification.signature.role.clone())]);

    Ok(writer.finish())
}
