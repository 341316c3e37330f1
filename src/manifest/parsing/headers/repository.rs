//! Lookup of header value parsers by header name

use crate::manifest::parsing::headers::known_headers::builtin_clause_headers;
use crate::manifest::parsing::headers::{ClauseHeaderParser, HeaderParser, StandardHeaderParser};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Maps header names to value parsers.
///
/// Names are matched ignoring ASCII case. Unregistered names resolve to the default parser.
#[derive(Clone)]
pub struct HeaderParserRepository {
    default: Arc<dyn HeaderParser>,
    parsers: HashMap<String, Arc<dyn HeaderParser>>,
}

impl HeaderParserRepository {
    pub fn new(default: Arc<dyn HeaderParser>) -> Self {
        Self {
            default,
            parsers: HashMap::new(),
        }
    }

    /// Standard default plus the clause parser for every built-in clause header
    pub fn with_defaults() -> Self {
        Self::with_clause_headers(builtin_clause_headers())
    }

    /// Standard default plus the clause parser for exactly `names`
    pub fn with_clause_headers<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut repository = Self::new(Arc::new(StandardHeaderParser));
        repository.register_clause_headers(names);
        repository
    }

    pub fn register(&mut self, name: &str, parser: Arc<dyn HeaderParser>) {
        self.parsers.insert(name.to_ascii_lowercase(), parser);
    }

    pub fn register_clause_headers<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parser: Arc<dyn HeaderParser> = Arc::new(ClauseHeaderParser);
        for name in names {
            self.register(name.as_ref(), Arc::clone(&parser));
        }
    }

    pub fn resolve(&self, name: &str) -> Arc<dyn HeaderParser> {
        self.parsers
            .get(&name.to_ascii_lowercase())
            .cloned()
            .unwrap_or_else(|| Arc::clone(&self.default))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parsers.contains_key(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl Default for HeaderParserRepository {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for HeaderParserRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.parsers.keys().collect();
        names.sort();
        f.debug_struct("HeaderParserRepository")
            .field("default", &self.default.name())
            .field("headers", &names)
            .finish()
    }
}
