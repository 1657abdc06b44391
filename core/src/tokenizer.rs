/// Lexer over a text buffer producing uppercased tokens.
///
/// A token is a maximal run of ASCII digits, a maximal run of ASCII
/// alphanumerics starting with a letter, or a single character for
/// anything else. Whitespace separates tokens and is never emitted.
pub struct Tokenizer<'a> {
    source: &'a str,
    chars: std::str::CharIndices<'a>,
    current: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, chars: source.char_indices(), current: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.chars.clone().next().map(|(_, c)| c)
    }

    fn advance(&mut self) -> Option<char> {
        let (idx, c) = self.chars.next()?;
        self.current = idx + c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\r' | '\n' | '\x0b')) {
            self.advance();
        }
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.skip_whitespace();

        let start = self.current;
        let c = self.advance()?;

        if c.is_ascii_digit() {
            self.consume_while(|c| c.is_ascii_digit());
        } else if c.is_ascii_alphabetic() {
            self.consume_while(|c| c.is_ascii_alphanumeric());
        }
        // Any other character, non-ASCII included, stands alone.

        Some(self.source[start..self.current].to_ascii_uppercase())
    }
}
