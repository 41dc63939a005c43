//! Surface enumeration: turning fetched pages into testable injection points
//!
//! A surface is one (URL, parameter, method, baseline) tuple. Surfaces are
//! yielded in page-then-field discovery order so a scan is reproducible given
//! a fixed payload order.

use crate::crawler::extractor::FormDescriptor;
use crate::models::Method;
use std::collections::HashSet;
use url::Url;

/// Where a surface was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceOrigin {
    QueryString,
    FormField,
}

/// Captured form context for form-origin surfaces: the resolved action plus
/// every field's default value (submit fields keep their literal value)
#[derive(Debug, Clone)]
pub struct FormContext {
    pub action: Url,
    pub fields: Vec<(String, String)>,
}

/// A single testable injection point
#[derive(Debug, Clone)]
pub struct Surface {
    /// URL the probe submits to (the page itself, or the resolved form action)
    pub url: Url,
    /// Parameter under test
    pub param: String,
    pub method: Method,
    /// Original value before payload substitution ("" for form fields)
    pub baseline: String,
    pub origin: SurfaceOrigin,
    /// Present for form-origin surfaces
    pub form: Option<FormContext>,
}

/// Enumerates GET surfaces from a URL's query string. Each key with at least
/// one non-empty value becomes one surface, baseline = first such value.
pub fn from_query(url: &Url) -> Vec<Surface> {
    let mut seen = HashSet::new();
    let mut surfaces = Vec::new();

    for (key, value) in url.query_pairs() {
        if key.is_empty() || value.is_empty() {
            continue;
        }
        if !seen.insert(key.to_string()) {
            continue;
        }
        surfaces.push(Surface {
            url: url.clone(),
            param: key.to_string(),
            method: Method::Get,
            baseline: value.to_string(),
            origin: SurfaceOrigin::QueryString,
            form: None,
        });
    }

    surfaces
}

/// Enumerates surfaces from a form discovered on `page_url`. The action
/// resolves against the page (empty action means the page itself); every
/// non-submit named field yields one surface with an empty baseline.
pub fn from_form(page_url: &Url, form: &FormDescriptor) -> Vec<Surface> {
    let action = if form.action.trim().is_empty() {
        page_url.clone()
    } else {
        match page_url.join(form.action.trim()) {
            Ok(resolved) => resolved,
            Err(_) => return Vec::new(),
        }
    };

    let defaults: Vec<(String, String)> = form
        .fields
        .iter()
        .map(|f| (f.name.clone(), f.value.clone()))
        .collect();

    form.fields
        .iter()
        .filter(|f| !f.is_submit())
        .map(|f| Surface {
            url: action.clone(),
            param: f.name.clone(),
            method: form.method,
            baseline: String::new(),
            origin: SurfaceOrigin::FormField,
            form: Some(FormContext {
                action: action.clone(),
                fields: defaults.clone(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::extractor::{FormDescriptor, FormField};

    #[test]
    fn test_from_query_uses_first_value_as_baseline() {
        let url = Url::parse("http://example.test/login.php?user=admin&page=2&user=guest").unwrap();
        let surfaces = from_query(&url);

        assert_eq!(surfaces.len(), 2);
        assert_eq!(surfaces[0].param, "user");
        assert_eq!(surfaces[0].baseline, "admin");
        assert_eq!(surfaces[0].method, Method::Get);
        assert_eq!(surfaces[0].origin, SurfaceOrigin::QueryString);
        assert_eq!(surfaces[1].param, "page");
    }

    #[test]
    fn test_from_query_empty_query() {
        let url = Url::parse("http://example.test/index.html").unwrap();
        assert!(from_query(&url).is_empty());
    }

    #[test]
    fn test_from_query_skips_blank_values() {
        let url = Url::parse("http://example.test/search?user=&page=2").unwrap();
        let surfaces = from_query(&url);

        assert_eq!(surfaces.len(), 1);
        assert_eq!(surfaces[0].param, "page");

        // a later non-empty value still makes the key a surface
        let url = Url::parse("http://example.test/search?user=&user=admin").unwrap();
        let surfaces = from_query(&url);
        assert_eq!(surfaces.len(), 1);
        assert_eq!(surfaces[0].param, "user");
        assert_eq!(surfaces[0].baseline, "admin");
    }

    #[test]
    fn test_from_form_resolves_action_and_skips_submit() {
        let page = Url::parse("http://example.test/blog/post.html").unwrap();
        let form = FormDescriptor {
            action: "/post.php".to_string(),
            method: Method::Post,
            fields: vec![
                FormField {
                    name: "comment".to_string(),
                    kind: "text".to_string(),
                    value: String::new(),
                },
                FormField {
                    name: "go".to_string(),
                    kind: "submit".to_string(),
                    value: "Send".to_string(),
                },
            ],
        };

        let surfaces = from_form(&page, &form);
        assert_eq!(surfaces.len(), 1);

        let s = &surfaces[0];
        assert_eq!(s.param, "comment");
        assert_eq!(s.method, Method::Post);
        assert_eq!(s.baseline, "");
        assert_eq!(s.url.as_str(), "http://example.test/post.php");
        // submit default is carried along for replay
        let ctx = s.form.as_ref().expect("form context");
        assert!(ctx.fields.contains(&("go".to_string(), "Send".to_string())));
    }

    #[test]
    fn test_from_form_empty_action_is_page_url() {
        let page = Url::parse("http://example.test/search").unwrap();
        let form = FormDescriptor {
            action: String::new(),
            method: Method::Get,
            fields: vec![FormField {
                name: "q".to_string(),
                kind: "text".to_string(),
                value: String::new(),
            }],
        };

        let surfaces = from_form(&page, &form);
        assert_eq!(surfaces[0].url, page);
    }
}
