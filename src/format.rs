//! Markdown link and phone formatting
//!
//! Both formatters are pass-through for anything that does not qualify:
//! free-text addresses stay free text, the placeholder stays untouched.

use tracing::trace;
use url::Url;

use crate::normalize::PLACEHOLDER;

/// Wrap a phone number cell as a Markdown `tel:` link.
///
/// Cells containing a hyphen are returned unchanged: they are treated as
/// already formatted or free text (ranges, extensions). A real phone
/// number written with hyphens is therefore never linkified; that is a
/// known limitation of the heuristic, not a validity check.
pub fn format_phone(cell: &str) -> String {
    if cell.is_empty() || cell == PLACEHOLDER {
        return PLACEHOLDER.to_string();
    }
    if cell.contains('-') {
        return cell.to_string();
    }
    format!("[{}](tel:{})", cell, cell.replace(' ', ""))
}

/// Wrap a URL cell as a Markdown link with the given display label.
///
/// The cell must parse as an absolute URL with a host component;
/// anything else (free-text addresses, `tel:`-style non-authority URLs)
/// is returned unchanged. The link target is the original cell string,
/// unmodified.
pub fn format_link(cell: &str, label: &str) -> String {
    if parse_url(cell).is_some() {
        format!("[{}]({})", label, cell)
    } else {
        trace!(cell, "not a url, passing through");
        cell.to_string()
    }
}

/// Host component of a URL cell, used as a derived link label for columns
/// carrying arbitrary external links.
pub fn host_label(cell: &str) -> Option<String> {
    parse_url(cell).and_then(|url| url.host_str().map(str::to_string))
}

fn parse_url(cell: &str) -> Option<Url> {
    let url = Url::parse(cell).ok()?;
    url.has_host().then_some(url)
}
