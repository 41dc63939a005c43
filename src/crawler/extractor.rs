//! Link and form extraction from HTML content
//!
//! Extraction never fails: `scraper` produces a best-effort tree for
//! malformed HTML, which degrades to zero links or forms rather than
//! aborting the page. Deduplication and origin scoping are the frontier's
//! job, not the extractor's.

use crate::models::Method;
use scraper::{Html, Selector};
use url::Url;

/// A named form field captured during extraction
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    /// Declared `type` attribute ("text" when absent, "textarea" for textareas)
    pub kind: String,
    /// Pre-filled `value` attribute, kept as the submit default
    pub value: String,
}

impl FormField {
    /// Submit-type fields are preserved with their literal value, never fuzzed
    pub fn is_submit(&self) -> bool {
        self.kind.eq_ignore_ascii_case("submit")
    }
}

/// A `<form>` element reduced to what the probe engine needs
#[derive(Debug, Clone)]
pub struct FormDescriptor {
    /// Raw `action` attribute; empty means "submit to the current URL"
    pub action: String,
    /// Form method, GET when absent
    pub method: Method,
    pub fields: Vec<FormField>,
}

/// Resolves every anchor `href` against `base_url`, dropping fragment-only
/// references and non-navigable schemes. Duplicates are kept.
pub fn extract_links(base_url: &Url, html: &str) -> Vec<Url> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(resolved) = resolve_link(base_url, href) {
                    links.push(resolved);
                }
            }
        }
    }

    links
}

/// Extracts every `<form>` with its action, method, and named input fields
pub fn extract_forms(html: &str) -> Vec<FormDescriptor> {
    let document = Html::parse_document(html);
    let mut forms = Vec::new();

    let Ok(form_selector) = Selector::parse("form") else {
        return forms;
    };

    for form in document.select(&form_selector) {
        let action = form.value().attr("action").unwrap_or("").to_string();
        let method = match form.value().attr("method") {
            Some(m) if m.eq_ignore_ascii_case("post") => Method::Post,
            _ => Method::Get,
        };

        let mut fields = Vec::new();
        if let Ok(input_sel) = Selector::parse("input[name]") {
            for input in form.select(&input_sel) {
                let Some(name) = input.value().attr("name") else {
                    continue;
                };
                if name.is_empty() {
                    continue;
                }
                fields.push(FormField {
                    name: name.to_string(),
                    kind: input.value().attr("type").unwrap_or("text").to_string(),
                    value: input.value().attr("value").unwrap_or("").to_string(),
                });
            }
        }
        if let Ok(ta_sel) = Selector::parse("textarea[name]") {
            for ta in form.select(&ta_sel) {
                let Some(name) = ta.value().attr("name") else {
                    continue;
                };
                if name.is_empty() {
                    continue;
                }
                fields.push(FormField {
                    name: name.to_string(),
                    kind: "textarea".to_string(),
                    value: String::new(),
                });
            }
        }

        forms.push(FormDescriptor {
            action,
            method,
            fields,
        });
    }

    forms
}

/// Resolves a potentially relative href, dropping fragment-only and
/// non-navigable references
fn resolve_link(base_url: &Url, raw: &str) -> Option<Url> {
    let trimmed = raw.trim();

    if trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("mailto:")
        || trimmed.starts_with("tel:")
        || trimmed.starts_with("javascript:")
        || trimmed.starts_with("data:")
    {
        return None;
    }

    let mut resolved = base_url.join(trimmed).ok()?;
    resolved.set_fragment(None);
    Some(resolved)
}
