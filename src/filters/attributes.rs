use std::collections::HashSet;
use std::path::Path;

use crate::core::TypeRef;
use crate::filters::{SymbolFilter, SymbolRef};

/// Marker prefix of a type identity token in an exclusion file.
const TYPE_DOC_ID_PREFIX: &str = "T:";

/// An immutable set of type identity tokens, loaded once at construction.
///
/// The file format is best-effort: one `T:`-prefixed token per line;
/// blank lines and lines without the marker prefix are skipped, never an
/// error. A missing file yields an empty set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    doc_ids: HashSet<String>,
}

impl ExclusionSet {
    pub fn from_doc_ids<I, S>(doc_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            doc_ids: doc_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_file(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                log::warn!(
                    "exclusion file {} not readable ({err}); using empty set",
                    path.display()
                );
                return Self::default();
            }
        };
        Self::parse(&contents)
    }

    /// Parse newline-delimited identity tokens, skipping malformed lines.
    pub fn parse(contents: &str) -> Self {
        let mut doc_ids = HashSet::new();
        let mut skipped = 0usize;
        for line in contents.lines() {
            let token = line.trim();
            if token.is_empty() {
                continue;
            }
            if !token.starts_with(TYPE_DOC_ID_PREFIX) {
                skipped += 1;
                continue;
            }
            doc_ids.insert(token.to_string());
        }
        if skipped > 0 {
            log::debug!("skipped {skipped} malformed exclusion-file line(s)");
        }
        Self { doc_ids }
    }

    pub fn is_empty(&self) -> bool {
        self.doc_ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.doc_ids.len()
    }

    pub fn contains(&self, doc_id: &str) -> bool {
        self.doc_ids.contains(doc_id)
    }

    /// Whether an attribute application referencing `attribute_type` should
    /// be suppressed.
    pub fn contains_type(&self, attribute_type: &TypeRef) -> bool {
        self.doc_ids.contains(&attribute_type.doc_id())
    }
}

/// Rejects named-type symbols whose identity token appears in the
/// exclusion set. All other symbol kinds pass through.
#[derive(Clone, Debug)]
pub struct AttributeExclusionFilter {
    excluded: ExclusionSet,
}

impl AttributeExclusionFilter {
    pub fn new(excluded: ExclusionSet) -> Self {
        Self { excluded }
    }
}

impl SymbolFilter for AttributeExclusionFilter {
    fn include(&self, symbol: &SymbolRef<'_>) -> bool {
        match symbol {
            SymbolRef::Type { doc_id, .. } => !self.excluded.contains(doc_id),
            _ => true,
        }
    }
}
