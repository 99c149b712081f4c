//! Inline runs of body text.

use genpdf::elements::Paragraph;
use genpdf::style::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Plain,
    Bold,
    /// Drawn in the link color.
    Link,
}

/// A run of text sharing one emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub emphasis: Emphasis,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Plain,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Bold,
        }
    }

    pub fn link(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Link,
        }
    }
}

/// The spans joined without markup.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

/// Build a wrapping paragraph from `spans` in `base`, switching to bold or to
/// `link` per span.
pub fn paragraph(spans: &[Span], base: Style, link: Style) -> Paragraph {
    let mut paragraph = Paragraph::default();
    for span in spans {
        let style = match span.emphasis {
            Emphasis::Plain => base,
            Emphasis::Bold => base.bold(),
            Emphasis::Link => link,
        };
        paragraph.push_styled(span.text.clone(), style);
    }
    paragraph
}
