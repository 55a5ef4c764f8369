//! Lexer for postfix curve expressions
//!
//! Syntax:
//! ```text
//! # five straight spokes: circle // 5 * line ** 5
//! 5 circle step  5 line repeat  scale
//! ```
//!
//! Words are separated by whitespace; `(`, `)` and `,` delimit themselves.
//! A parenthesized list of numbers is a pair literal (or, with another
//! number of components, a tuple literal that coercion will reject).
//! `#` comments run to the end of the line.

use pic_core::{Combinator, Token};

/// A word of source text with its position
#[derive(Debug, Clone)]
pub struct Word {
    pub text: String,
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed)
    pub column: usize,
}

impl Word {
    fn new(text: String, line: usize, column: usize) -> Self {
        Word { text, line, column }
    }

    /// Position for error messages (1-indexed)
    fn position(&self) -> String {
        format!("line {}, column {}", self.line + 1, self.column + 1)
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

/// Turn postfix source text into curve tokens
pub fn tokenize(source: &str) -> Result<Vec<Token>, String> {
    let words = split_words(source);
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < words.len() {
        let word = &words[pos];
        pos += 1;

        if *word == "(" {
            let (items, next) = parse_tuple(&words, pos, word)?;
            pos = next;
            tokens.push(match items.as_slice() {
                [x, y] => Token::Pair(*x, *y),
                _ => Token::Tuple(items),
            });
            continue;
        }

        if *word == ")" || *word == "," {
            return Err(format!("Unexpected '{}' at {}", word.text, word.position()));
        }

        tokens.push(parse_word(word)?);
    }

    Ok(tokens)
}

fn parse_word(word: &Word) -> Result<Token, String> {
    match word.text.as_str() {
        "circle" => return Ok(Token::Circle),
        "line" => return Ok(Token::Line),
        _ => {}
    }
    if let Some(combinator) = Combinator::lookup(&word.text) {
        return Ok(Token::Combinator(combinator));
    }
    if let Some(n) = parse_number(&word.text) {
        return Ok(Token::Number(n));
    }
    Err(format!("Unknown word '{}' at {}", word.text, word.position()))
}

/// Parse the components of a literal after its opening parenthesis.
///
/// Returns the numbers and the index just past the closing parenthesis.
fn parse_tuple(
    words: &[Word],
    mut pos: usize,
    open: &Word,
) -> Result<(Vec<f64>, usize), String> {
    let mut items = Vec::new();
    loop {
        let word = words
            .get(pos)
            .ok_or_else(|| format!("Unclosed '(' at {}", open.position()))?;
        pos += 1;

        if *word == ")" {
            if items.is_empty() {
                return Err(format!("Empty literal at {}", open.position()));
            }
            return Ok((items, pos));
        }

        let n = parse_number(&word.text).ok_or_else(|| {
            format!(
                "Expected a number in literal, got '{}' at {}",
                word.text,
                word.position()
            )
        })?;
        items.push(n);

        match words.get(pos) {
            Some(sep) if *sep == "," => pos += 1,
            Some(close) if *close == ")" => {}
            Some(other) => {
                return Err(format!(
                    "Expected ',' or ')' in literal, got '{}' at {}",
                    other.text,
                    other.position()
                ));
            }
            None => return Err(format!("Unclosed '(' at {}", open.position())),
        }
    }
}

/// Numbers use Rust float syntax; `inf` and `nan` spellings are not literals.
fn parse_number(text: &str) -> Option<f64> {
    let starts_numeric = text
        .trim_start_matches(['-', '+'])
        .starts_with(|c: char| c.is_ascii_digit() || c == '.');
    if !starts_numeric {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Split source into words, tracking positions
fn split_words(source: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut current_start_line = 0;
    let mut current_start_col = 0;
    let mut in_comment = false;

    // Track current position (0-indexed)
    let mut line = 0;
    let mut col = 0;

    for ch in source.chars() {
        if in_comment {
            if ch == '\n' {
                in_comment = false;
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        } else if ch == '#' {
            if !current.is_empty() {
                words.push(Word::new(
                    current.clone(),
                    current_start_line,
                    current_start_col,
                ));
                current.clear();
            }
            in_comment = true;
            col += 1;
        } else if ch.is_whitespace() {
            if !current.is_empty() {
                words.push(Word::new(
                    current.clone(),
                    current_start_line,
                    current_start_col,
                ));
                current.clear();
            }
            if ch == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        } else if "(),".contains(ch) {
            if !current.is_empty() {
                words.push(Word::new(
                    current.clone(),
                    current_start_line,
                    current_start_col,
                ));
                current.clear();
            }
            words.push(Word::new(ch.to_string(), line, col));
            col += 1;
        } else {
            if current.is_empty() {
                current_start_line = line;
                current_start_col = col;
            }
            current.push(ch);
            col += 1;
        }
    }

    if !current.is_empty() {
        words.push(Word::new(current, current_start_line, current_start_col));
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_primitives_and_combinators() {
        let tokens = tokenize("circle line scale").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Circle,
                Token::Line,
                Token::Combinator(Combinator::Scale)
            ]
        );
    }

    #[test]
    fn test_tokenize_operator_aliases() {
        let tokens = tokenize("+ * ** //").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Combinator(Combinator::Translate),
                Token::Combinator(Combinator::Scale),
                Token::Combinator(Combinator::Repeat),
                Token::Combinator(Combinator::Step),
            ]
        );
    }

    #[test]
    fn test_tokenize_numbers() {
        let tokens = tokenize("1 -2.5 .5 2e3 +4").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(1.0),
                Token::Number(-2.5),
                Token::Number(0.5),
                Token::Number(2000.0),
                Token::Number(4.0),
            ]
        );
    }

    #[test]
    fn test_tokenize_pair_with_and_without_spaces() {
        assert_eq!(tokenize("(0,1)").unwrap(), vec![Token::Pair(0.0, 1.0)]);
        assert_eq!(
            tokenize("( -1 , 0.5 )").unwrap(),
            vec![Token::Pair(-1.0, 0.5)]
        );
    }

    #[test]
    fn test_tokenize_tuple_literal() {
        assert_eq!(
            tokenize("(1, 2, 3)").unwrap(),
            vec![Token::Tuple(vec![1.0, 2.0, 3.0])]
        );
        assert_eq!(tokenize("(7)").unwrap(), vec![Token::Tuple(vec![7.0])]);
    }

    #[test]
    fn test_tokenize_comments() {
        let tokens = tokenize("circle # the unit circle\n(1, 0) translate").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2], Token::Combinator(Combinator::Translate));
    }

    #[test]
    fn test_unknown_word_position() {
        let err = tokenize("circle\n  squiggle").unwrap_err();
        assert_eq!(err, "Unknown word 'squiggle' at line 2, column 3");
    }

    #[test]
    fn test_nan_and_inf_are_not_numbers() {
        assert!(tokenize("nan").is_err());
        assert!(tokenize("inf").is_err());
    }

    #[test]
    fn test_unclosed_literal() {
        let err = tokenize("(1, 2").unwrap_err();
        assert!(err.contains("Unclosed '('"));
    }

    #[test]
    fn test_empty_literal() {
        assert!(tokenize("()").unwrap_err().contains("Empty literal"));
    }

    #[test]
    fn test_stray_punctuation() {
        assert!(tokenize("circle )").unwrap_err().contains("Unexpected ')'"));
        assert!(tokenize("1 , 2").unwrap_err().contains("Unexpected ','"));
    }

    #[test]
    fn test_missing_separator() {
        let err = tokenize("(1 2)").unwrap_err();
        assert!(err.contains("Expected ',' or ')'"));
    }

    #[test]
    fn test_word_in_literal() {
        let err = tokenize("(circle, 1)").unwrap_err();
        assert!(err.contains("Expected a number"));
    }
}
