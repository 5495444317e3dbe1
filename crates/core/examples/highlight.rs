//! Cleans up a noisy string, then maps spans of the cleaned text back to
//! the raw input to show where each token came from.

use regex::Regex;

use weft_core::{BiString, NormalForm, RegexTokenizer, Tokenizer};

fn main() {
    let raw = "  \u{1e6a}\u{1e27}\u{eb} QUICK, BR\u{f6}WN fox!  ";

    let cleaned = BiString::new(raw)
        .normalize(NormalForm::Nfkd)
        .to_lowercase()
        .replace_re(&Regex::new(r"[^\w\s]+").unwrap(), "")
        .trim();

    println!("raw:     {:?}", cleaned.original());
    println!("cleaned: {:?}", cleaned.modified());
    println!();

    let tokenizer = RegexTokenizer::new(Regex::new(r"\w+").unwrap());
    let tokens = tokenizer.tokenize(&cleaned);
    for i in 0..tokens.len() {
        let token = &tokens.tokens()[i];
        let span = tokens.original_bounds(i, i + 1);
        println!(
            "token {i}: {:?} <- {:?} at {}..{}",
            token.modified(),
            &raw[span.to_range()],
            span.start,
            span.end
        );
    }
}
