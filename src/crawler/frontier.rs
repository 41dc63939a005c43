//! FIFO crawl frontier with deduplication and a page ceiling
//!
//! The visited set covers URLs fetched *or* enqueued, so a URL can enter the
//! queue at most once no matter how many pages link to it. The ceiling bounds
//! `next()` calls, which is the only place a fetch is handed out.

use std::collections::{HashSet, VecDeque};
use url::Url;

/// FIFO queue of URLs pending fetch, with an enqueue guard
#[derive(Debug)]
pub struct Frontier {
    queue: VecDeque<Url>,
    visited: HashSet<String>,
    max_pages: usize,
    fetched: usize,
}

impl Frontier {
    pub fn new(max_pages: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            visited: HashSet::new(),
            max_pages,
            fetched: 0,
        }
    }

    /// Enqueues a URL unless it was already fetched or enqueued.
    /// Returns true when the URL was accepted.
    pub fn enqueue(&mut self, url: &Url) -> bool {
        let key = dedup_key(url);
        if !self.visited.insert(key) {
            return false;
        }
        self.queue.push_back(url.clone());
        true
    }

    /// Hands out the next URL to fetch, or None when the queue is empty or
    /// the page ceiling has been reached.
    pub fn next(&mut self) -> Option<Url> {
        if self.fetched >= self.max_pages {
            return None;
        }
        let url = self.queue.pop_front()?;
        self.fetched += 1;
        Some(url)
    }

    /// Number of fetches handed out so far
    pub fn pages_fetched(&self) -> usize {
        self.fetched
    }
}

/// Dedup key: absolute URL with the fragment stripped
fn dedup_key(url: &Url) -> String {
    let mut clean = url.clone();
    clean.set_fragment(None);
    clean.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(s: &str) -> Url {
        Url::parse(s).expect("valid url")
    }

    #[test]
    fn test_duplicate_urls_enqueue_once() {
        let mut frontier = Frontier::new(10);
        assert!(frontier.enqueue(&u("http://example.test/a")));
        assert!(!frontier.enqueue(&u("http://example.test/a")));
        assert!(!frontier.enqueue(&u("http://example.test/a#section")));
        assert!(frontier.enqueue(&u("http://example.test/b")));

        assert!(frontier.next().is_some());
        assert!(frontier.next().is_some());
        assert!(frontier.next().is_none());
    }

    #[test]
    fn test_page_ceiling_bounds_fetches() {
        let mut frontier = Frontier::new(2);
        for i in 0..5 {
            frontier.enqueue(&u(&format!("http://example.test/page{i}")));
        }

        assert!(frontier.next().is_some());
        assert!(frontier.next().is_some());
        assert!(frontier.next().is_none());
        assert_eq!(frontier.pages_fetched(), 2);
    }

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::new(10);
        frontier.enqueue(&u("http://example.test/first"));
        frontier.enqueue(&u("http://example.test/second"));

        assert_eq!(frontier.next().unwrap().path(), "/first");
        assert_eq!(frontier.next().unwrap().path(), "/second");
    }

    #[test]
    fn test_fetched_url_not_requeued() {
        let mut frontier = Frontier::new(10);
        frontier.enqueue(&u("http://example.test/a"));
        frontier.next();
        assert!(!frontier.enqueue(&u("http://example.test/a")));
    }
}
