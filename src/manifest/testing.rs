//! Testing utilities
//!
//! - [factories]: build expected token streams from `(kind, start, end)` triples
//! - [sources]: read the sample manifests under `tests/fixtures`
//! - [assert_tokens_cover]: the coverage check every token stream must pass
//!
//! Prefer the fixture files over inline manifest text when a test is about a realistic file;
//! inline text is fine for single-construct tests.

pub mod factories;
pub mod sources;

pub use factories::{mk_token, mk_tokens};
pub use sources::ManifestSources;

use crate::manifest::lexing::TokenSpan;

/// Assert that `tokens` are non-empty, contiguous and cover `source[start..end]` exactly.
pub fn assert_tokens_cover(source: &str, tokens: &[TokenSpan], start: usize, end: usize) {
    let mut offset = start;
    for (kind, range) in tokens {
        assert_eq!(
            range.start, offset,
            "{} at {:?} does not start where the previous token ended in {:?}",
            kind, range, source
        );
        assert!(
            range.end > range.start,
            "empty {} token at {} in {:?}",
            kind,
            range.start,
            source
        );
        offset = range.end;
    }
    assert_eq!(offset, end, "tokens stop at {} in {:?}", offset, source);
}
