//! The "vars" persistence format: a line-oriented text encoding of a
//! [`CorpusIndex`], one section per document plus one reserved section
//! for the aggregate document frequencies.
//!
//! ```text
//! docs/gl/glClear.xml:[
//!  CLEAR:4
//!  BUFFER:2
//! ]
//! ```

use crate::index::{CorpusIndex, TermFreq};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// On-disk key for the aggregate document-frequency section. A real
/// document may not use this path.
pub const RESERVED_KEY: &str = ".";

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("line {line_no}: section opened inside another section: {line:?}")]
    NestedSection { line_no: usize, line: String },
    #[error("line {line_no}: `]` outside any section: {line:?}")]
    StrayClose { line_no: usize, line: String },
    #[error("line {line_no}: term line outside any section: {line:?}")]
    EntryOutsideSection { line_no: usize, line: String },
    #[error("line {line_no}: expected `term:count`: {line:?}")]
    MalformedLine { line_no: usize, line: String },
    #[error("line {line_no}: count is not a non-negative integer: {line:?}")]
    BadCount { line_no: usize, line: String },
    #[error("unterminated section {path:?} at end of input")]
    UnterminatedSection { path: String },
    #[error("missing aggregate document-frequency section `.`")]
    MissingAggregate,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Write `index` in vars format: every document section, then the
/// aggregate under the reserved key.
pub fn encode(index: &CorpusIndex, mut w: impl Write) -> io::Result<()> {
    for (path, term_freq) in &index.docs {
        encode_section(path, term_freq, &mut w)?;
    }
    encode_section(RESERVED_KEY, &index.doc_freq, &mut w)
}

fn encode_section(path: &str, term_freq: &TermFreq, w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "{path}:[")?;
    for (term, count) in term_freq {
        // A literal `:` term comes out as ` ::count`, which the decoder
        // recognizes by its leading colon.
        writeln!(w, " {term}:{count}")?;
    }
    writeln!(w, "]")
}

enum State {
    Idle,
    InSection { path: String, term_freq: TermFreq },
}

/// Parse a vars stream back into a [`CorpusIndex`].
///
/// Any malformed line aborts the whole load; there is no
/// partial-document recovery.
pub fn decode(reader: impl BufRead) -> Result<CorpusIndex, DecodeError> {
    let mut index = CorpusIndex::new();
    let mut aggregate = None;
    let mut state = State::Idle;

    for (line_no, line) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line?;
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            continue;
        }

        // Closing `]`: commit the pending section.
        if trimmed.contains(']') && !trimmed.contains(':') {
            match std::mem::replace(&mut state, State::Idle) {
                State::InSection { path, term_freq } => {
                    if path == RESERVED_KEY {
                        aggregate = Some(term_freq);
                    } else {
                        index.docs.insert(path, term_freq);
                    }
                }
                State::Idle => {
                    return Err(DecodeError::StrayClose { line_no, line });
                }
            }
            continue;
        }

        // A leading `:` is the escape for the literal colon term: strip
        // it, split what remains as usual, force the first field to `:`.
        let (unescaped, forced_term) = match trimmed.strip_prefix(':') {
            Some(stripped) => (stripped, Some(":")),
            None => (trimmed, None),
        };
        let mut fields = unescaped.splitn(2, ':');
        let first = fields.next().unwrap_or_default();
        let term = forced_term.unwrap_or(first);
        let rest = match fields.next() {
            Some(rest) => rest,
            None => return Err(DecodeError::MalformedLine { line_no, line }),
        };
        if rest.contains(':') {
            return Err(DecodeError::MalformedLine { line_no, line });
        }

        // Section header `path:[`.
        if rest == "[" {
            if matches!(state, State::InSection { .. }) {
                return Err(DecodeError::NestedSection { line_no, line });
            }
            state = State::InSection { path: term.to_string(), term_freq: TermFreq::new() };
            continue;
        }

        let term_freq = match &mut state {
            State::InSection { term_freq, .. } => term_freq,
            State::Idle => return Err(DecodeError::EntryOutsideSection { line_no, line }),
        };
        let count: u32 = rest
            .parse()
            .map_err(|_| DecodeError::BadCount { line_no, line: line.clone() })?;
        term_freq.insert(term.to_string(), count);
    }

    if let State::InSection { path, .. } = state {
        return Err(DecodeError::UnterminatedSection { path });
    }
    index.doc_freq = aggregate.ok_or(DecodeError::MissingAggregate)?;

    Ok(index)
}

/// Encode `index` into the file at `path`.
pub fn save(path: &Path, index: &CorpusIndex) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut w = BufWriter::new(file);
    encode(index, &mut w).with_context(|| format!("writing {}", path.display()))?;
    w.flush()?;
    Ok(())
}

/// Load a previously saved index from the file at `path`.
pub fn load(path: &Path) -> Result<CorpusIndex> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    decode(BufReader::new(file)).with_context(|| format!("loading index from {}", path.display()))
}
