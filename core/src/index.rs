use crate::tokenizer::Tokenizer;
use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;
use walkdir::WalkDir;

/// Occurrence count per token within one document.
pub type TermFreq = HashMap<String, u32>;

/// The full corpus: per-document term frequencies plus, per term, the
/// number of documents containing it.
///
/// Built once during the indexing phase, persisted to a vars file, then
/// loaded read-only by the serving process. Never mutated after load.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CorpusIndex {
    pub docs: HashMap<String, TermFreq>,
    pub doc_freq: TermFreq,
}

impl CorpusIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one document's term frequencies under `path` and bump the
    /// document frequency once for each distinct term it contains.
    pub fn add_document(&mut self, path: String, term_freq: TermFreq) {
        for term in term_freq.keys() {
            *self.doc_freq.entry(term.clone()).or_insert(0) += 1;
        }
        self.docs.insert(path, term_freq);
    }
}

/// Tokenize `text` and count occurrences per token.
pub fn tokenize_document(text: &str) -> TermFreq {
    let mut term_freq = TermFreq::new();
    for token in Tokenizer::new(text) {
        *term_freq.entry(token).or_insert(0) += 1;
    }
    term_freq
}

/// Index every file under `root`, keyed by path string.
///
/// `extract` turns a file into plain text; a document it fails on is
/// skipped with a warning and the build continues. That is the only
/// recoverable failure here; walking errors are fatal.
pub fn build_corpus(
    root: &Path,
    mut extract: impl FnMut(&Path) -> Result<String>,
) -> Result<CorpusIndex> {
    let mut index = CorpusIndex::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        tracing::info!(path = %path.display(), "indexing");

        let text = match extract(path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "skipping document");
                continue;
            }
        };

        index.add_document(path.display().to_string(), tokenize_document(&text));
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_terms() {
        let tf = tokenize_document("the cat and the mat");
        assert_eq!(tf["THE"], 2);
        assert_eq!(tf["CAT"], 1);
        assert_eq!(tf.len(), 4);
    }

    #[test]
    fn empty_document_has_empty_map() {
        assert!(tokenize_document("").is_empty());
    }

    #[test]
    fn doc_freq_counts_documents_not_occurrences() {
        let mut index = CorpusIndex::new();
        index.add_document("a".into(), tokenize_document("cat cat cat"));
        index.add_document("b".into(), tokenize_document("cat dog"));
        assert_eq!(index.doc_freq["CAT"], 2);
        assert_eq!(index.doc_freq["DOG"], 1);
    }
}
