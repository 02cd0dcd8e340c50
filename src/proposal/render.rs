//! HTML rendering of a composed proposal

use askama::Template;

use super::composer::{ProposalDocument, Section};

/// Printable proposal document, one `.page` per section
#[derive(Template)]
#[template(path = "proposal/document.html")]
struct DocumentTemplate<'a> {
    document: &'a ProposalDocument,
}

pub fn render_html(document: &ProposalDocument) -> Result<String, askama::Error> {
    let html = DocumentTemplate { document }.render()?;
    tracing::debug!(
        "Rendered proposal '{}': {} section(s), {} bytes",
        document.title,
        document.sections.len(),
        html.len()
    );
    Ok(html)
}
