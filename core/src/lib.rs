pub mod index;
pub mod rank;
pub mod tokenizer;
pub mod vars;

pub use index::{build_corpus, tokenize_document, CorpusIndex, TermFreq};
pub use rank::{rank, RankConfig};
pub use tokenizer::Tokenizer;
