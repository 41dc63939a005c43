//! Reflected XSS probing for form surfaces
//!
//! Coarse heuristic: the raw payload goes into the field under test and a
//! verbatim substring check looks for it in the response body. No
//! HTML-context-aware escaping analysis is attempted.

use crate::http::HttpClient;
use crate::models::{EvidenceKind, Finding, Severity, VulnClass};
use crate::payloads::XSS_PAYLOADS;
use crate::scanner::surface::Surface;
use tracing::debug;

use super::send_probe;

/// Probes one form surface for reflected XSS, stopping at the first payload
/// that comes back unmodified
pub async fn probe(client: &HttpClient, surface: &Surface) -> Option<Finding> {
    for payload in XSS_PAYLOADS {
        let body = match send_probe(client, surface, payload).await {
            Ok(body) => body,
            Err(e) => {
                debug!("XSS probe failed for '{}': {e}", surface.param);
                continue;
            }
        };

        if body.contains(payload) {
            let mut finding = Finding::new(
                VulnClass::Xss,
                surface.url.as_str(),
                surface.method,
                EvidenceKind::PayloadReflection,
                Severity::High,
            )
            .with_parameter(&surface.param)
            .with_payload(*payload)
            .with_detail("payload reflected verbatim in response body");

            if let Some(ctx) = &surface.form {
                finding = finding.with_form_action(ctx.action.as_str());
            }

            return Some(finding);
        }
    }

    None
}
