use loupe_core::Tokenizer;

fn tokens(text: &str) -> Vec<String> {
    Tokenizer::new(text).collect()
}

#[test]
fn letter_led_alphanumeric_runs_are_one_token() {
    assert_eq!(tokens("a1b2"), ["A1B2"]);
}

#[test]
fn punctuation_stands_alone() {
    assert_eq!(tokens("a!b"), ["A", "!", "B"]);
}

#[test]
fn digit_runs_stop_at_letters() {
    assert_eq!(tokens("123abc"), ["123", "ABC"]);
    assert_eq!(tokens("glClear2D"), ["GLCLEAR2D"]);
}

#[test]
fn concatenated_tokens_reconstruct_non_whitespace_input() {
    let input = "fn main() { return 42; } <tag attr=\"x\"/>";
    let expected: String = input
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    assert_eq!(tokens(input).concat(), expected);
}

#[test]
fn non_ascii_chars_pass_through_alone() {
    assert_eq!(tokens("héllo"), ["H", "é", "LLO"]);
}

#[test]
fn whitespace_only_input_is_empty() {
    assert!(tokens("  \t\r\n \x0b ").is_empty());
}
