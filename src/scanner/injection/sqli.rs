//! SQL injection probing: error-signature and length-differential strategies
//!
//! Error signatures catch verbose-error configurations; the differential
//! check catches boolean-blind injection where no error text leaks, using
//! response-size perturbation as a cheap oracle with a single extra request.

use crate::http::HttpClient;
use crate::models::{EvidenceKind, Finding, Severity, VulnClass};
use crate::payloads::{sql_error_signature, FALSE_CONDITION_SUFFIX, SQL_PAYLOADS};
use crate::scanner::surface::{Surface, SurfaceOrigin};
use tracing::debug;

use super::send_probe;

/// Probes one surface for SQL injection. Payloads are tried in order and the
/// first positive signal ends the probe; a transport failure on any attempt
/// is no evidence and the next payload is tried.
pub async fn probe(client: &HttpClient, surface: &Surface, threshold: u64) -> Option<Finding> {
    for payload in SQL_PAYLOADS {
        let test_value = format!("{}{}", surface.baseline, payload);

        let first_body = match send_probe(client, surface, &test_value).await {
            Ok(body) => body,
            Err(e) => {
                debug!("SQLi probe failed for '{}': {e}", surface.param);
                continue;
            }
        };

        if let Some(engine) = sql_error_signature(&first_body) {
            return Some(build_finding(surface, payload, EvidenceKind::ErrorSignature)
                .with_detail(format!("{engine} error banner in response")));
        }

        // Second request with a logically-false tautology appended; a large
        // length shift means the injected condition changed the result set.
        let false_value = format!("{test_value}{FALSE_CONDITION_SUFFIX}");
        let second_body = match send_probe(client, surface, &false_value).await {
            Ok(body) => body,
            Err(e) => {
                debug!("SQLi differential probe failed for '{}': {e}", surface.param);
                continue;
            }
        };

        if length_differential(first_body.len(), second_body.len(), threshold) {
            let diff = first_body.len().abs_diff(second_body.len());
            return Some(
                build_finding(surface, payload, EvidenceKind::LengthDifferential)
                    .with_detail(format!("response length shifted by {diff} bytes")),
            );
        }
    }

    None
}

/// Deterministic differential test: positive when the absolute body-length
/// difference exceeds the threshold.
pub fn length_differential(first_len: usize, second_len: usize, threshold: u64) -> bool {
    first_len.abs_diff(second_len) as u64 > threshold
}

fn build_finding(surface: &Surface, payload: &str, evidence: EvidenceKind) -> Finding {
    let mut finding = Finding::new(
        VulnClass::SqlInjection,
        surface.url.as_str(),
        surface.method,
        evidence,
        Severity::Critical,
    )
    .with_parameter(&surface.param)
    .with_payload(payload);

    if surface.origin == SurfaceOrigin::FormField {
        if let Some(ctx) = &surface.form {
            finding = finding.with_form_action(ctx.action.as_str());
        }
    }

    finding
}
