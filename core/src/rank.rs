use crate::index::{CorpusIndex, TermFreq};
use crate::tokenizer::Tokenizer;
use std::cmp::Ordering;

/// Knobs for query evaluation.
#[derive(Debug, Clone, Copy)]
pub struct RankConfig {
    /// Maximum number of results returned per query.
    pub limit: usize,
    /// Denominator of the IDF ratio. The historical value is 1, which
    /// makes IDF plain `log10(df)` and weights *popular* terms up —
    /// the opposite of classical IDF. Kept as observed behavior.
    pub idf_denominator: u32,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self { limit: 20, idf_denominator: 1 }
    }
}

/// Occurrences of `term` in the document, normalized by the document's
/// total token count. 0 for an empty document or an absent term.
fn term_frequency(term: &str, doc: &TermFreq) -> f32 {
    let count = doc.get(term).copied().unwrap_or(0) as f32;
    let total: u32 = doc.values().sum();
    if total == 0 {
        return 0.0;
    }
    count / total as f32
}

fn inverse_document_frequency(term: &str, index: &CorpusIndex, config: &RankConfig) -> f32 {
    let df = index.doc_freq.get(term).copied().unwrap_or(0).max(1);
    let denominator = config.idf_denominator.max(1);
    (df as f32 / denominator as f32).log10()
}

/// Score every document in `index` against the query text and return at
/// most `config.limit` results, sorted by strictly descending score.
///
/// Unknown query tokens contribute 0 and are never an error. Equal
/// scores keep the order the sort leaves them in, which is stable for a
/// given index but otherwise arbitrary.
pub fn rank(query: &str, index: &CorpusIndex, config: &RankConfig) -> Vec<(String, f32)> {
    let tokens: Vec<String> = Tokenizer::new(query).collect();

    let mut results: Vec<(String, f32)> = index
        .docs
        .iter()
        .map(|(path, doc)| {
            let score = tokens
                .iter()
                .map(|t| term_frequency(t, doc) * inverse_document_frequency(t, index, config))
                .sum();
            (path.clone(), score)
        })
        .collect();

    results.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    results.truncate(config.limit);
    results
}
