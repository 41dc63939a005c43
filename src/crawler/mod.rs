//! Target normalization, origin scoping, and crawl primitives
//!
//! The crawl itself is driven by the injection scanner: it fetches pages
//! sequentially off the frontier, feeds extracted links back in, and fans
//! surfaces out to the probe workers.

pub mod extractor;
pub mod frontier;

use crate::error::Result;
use url::Url;

/// Normalizes a raw target into a base URL: scheme defaults to http, and a
/// bare authority gets a trailing slash for path-joining contexts.
pub fn normalize_target(raw: &str) -> Result<Url> {
    let with_scheme = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    };
    let url = Url::parse(&with_scheme)?;
    Ok(url)
}

/// True when both URLs share scheme, host, and port
pub fn same_origin(a: &Url, b: &Url) -> bool {
    a.scheme() == b.scheme() && a.host_str() == b.host_str() && a.port_or_known_default() == b.port_or_known_default()
}

/// Base URL for joining relative path entries: query and fragment cleared,
/// trailing slash enforced so joined entries land under the target path
/// instead of replacing its last segment.
pub fn join_base(url: &Url) -> Url {
    let mut base = url.clone();
    base.set_query(None);
    base.set_fragment(None);
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}
