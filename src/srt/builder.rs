//! Cue packing: groups a timed token stream into two-line SRT cues.

use super::{Cue, Token, TokenKind};
use crate::error::{Result, SrtError};

/// Character limits that decide where lines break and cues end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueLayout {
    /// Once the running character count passes this, the first line is closed.
    pub max_line_chars: usize,
    /// A cue stops taking tokens once its character count reaches this.
    pub max_cue_chars: usize,
}

impl Default for CueLayout {
    fn default() -> Self {
        Self {
            max_line_chars: 32,
            max_cue_chars: 64,
        }
    }
}

impl CueLayout {
    /// Check that both limits are positive and a line is shorter than a cue.
    pub fn validate(&self) -> Result<()> {
        if self.max_line_chars == 0 || self.max_cue_chars == 0 {
            return Err(SrtError::Config(
                "max_line_chars and max_cue_chars must be greater than 0".to_string(),
            ));
        }
        if self.max_line_chars >= self.max_cue_chars {
            return Err(SrtError::Config(format!(
                "max_line_chars ({}) must be less than max_cue_chars ({})",
                self.max_line_chars, self.max_cue_chars
            )));
        }
        Ok(())
    }
}

/// Text being collected for a single cue.
#[derive(Debug, Default)]
struct CueAccumulator {
    /// Characters of token text seen so far (spaces and breaks not counted).
    len: usize,
    line_broken: bool,
    text: String,
}

impl CueAccumulator {
    fn push(&mut self, token: &Token, layout: &CueLayout) {
        self.len += token.text.chars().count();

        match token.kind {
            TokenKind::Punctuation if !self.text.is_empty() => {
                self.text = fuse_punctuation(&self.text, &token.text);
            }
            TokenKind::Punctuation => self.text.push_str(&token.text),
            TokenKind::Word => {
                self.text.push_str(&token.text);
                self.text.push(' ');
            }
        }

        if self.len > layout.max_line_chars && !self.line_broken {
            self.text.push('\n');
            self.line_broken = true;
        }
    }
}

/// Drop the first and last character of `text`, then append `punctuation`.
fn fuse_punctuation(text: &str, punctuation: &str) -> String {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();

    let mut fused: String = chars.collect();
    fused.push_str(punctuation);
    fused
}

/// Validate a time field and return it in seconds.
fn seconds(index: usize, field: &'static str, value: Option<f64>) -> Result<f64> {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Some(v) => Err(SrtError::MalformedTimestamp {
            index,
            field,
            value: v.to_string(),
        }),
        None => Err(SrtError::MissingTimestamp { index, field }),
    }
}

/// Time for punctuation with no earlier timed token: the start of the next
/// word, or zero when only punctuation follows.
fn leading_punctuation_time(tokens: &[Token], index: usize) -> Result<f64> {
    match tokens[index..].iter().position(|t| !t.is_punctuation()) {
        Some(offset) => seconds(index + offset, "start_time", tokens[index + offset].start),
        None => Ok(0.0),
    }
}

/// Builds SRT cues from a token stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct CueBuilder {
    layout: CueLayout,
}

impl CueBuilder {
    /// Create a builder, rejecting layouts that could never close a cue.
    pub fn new(layout: CueLayout) -> Result<Self> {
        layout.validate()?;
        Ok(Self { layout })
    }

    pub fn layout(&self) -> &CueLayout {
        &self.layout
    }

    /// Group tokens into cues.
    ///
    /// Every token lands in exactly one cue, in order. An empty stream
    /// yields no cues. Punctuation takes its timing from the closest
    /// earlier token that has an end time; at the head of the stream it
    /// takes the start of the next word instead.
    pub fn build(&self, tokens: &[Token]) -> Result<Vec<Cue>> {
        let mut cues = Vec::new();
        let mut index = 0;
        let mut last_end: Option<f64> = None;

        while index < tokens.len() {
            let first = index;
            let start_seconds = match (tokens[index].kind, last_end) {
                (TokenKind::Punctuation, Some(end)) => end,
                (TokenKind::Punctuation, None) => leading_punctuation_time(tokens, index)?,
                (TokenKind::Word, _) => seconds(index, "start_time", tokens[index].start)?,
            };

            let mut acc = CueAccumulator::default();
            let mut end_seconds = start_seconds;

            while acc.len < self.layout.max_cue_chars && index < tokens.len() {
                let token = &tokens[index];
                acc.push(token, &self.layout);

                end_seconds = match (token.kind, last_end) {
                    (TokenKind::Punctuation, Some(end)) => end,
                    (TokenKind::Punctuation, None) => leading_punctuation_time(tokens, index)?,
                    (TokenKind::Word, _) => seconds(index, "end_time", token.end)?,
                };
                last_end = Some(end_seconds);

                index += 1;
            }

            cues.push(Cue {
                sequence: cues.len() + 1,
                start_seconds,
                end_seconds,
                text: acc.text,
                tokens: first..index,
            });
        }

        Ok(cues)
    }

    /// Build cues and render them as a complete SRT document.
    pub fn to_srt(&self, tokens: &[Token]) -> Result<String> {
        Ok(render(&self.build(tokens)?))
    }
}

/// Render cues as an SRT document.
pub fn render(cues: &[Cue]) -> String {
    cues.iter().map(|cue| cue.to_string()).collect()
}

/// Convert tokens to SRT with the default 32/64 layout.
pub fn tokens_to_srt(tokens: &[Token]) -> Result<String> {
    CueBuilder::default().to_srt(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Consecutive words of the given texts, each lasting half a second.
    fn words(texts: &[&str]) -> Vec<Token> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Token::word(*t, i as f64 * 0.5, (i + 1) as f64 * 0.5))
            .collect()
    }

    fn sequence_numbers(srt: &str) -> Vec<usize> {
        srt.split("\n\n")
            .filter_map(|block| block.trim_start_matches('\n').lines().next())
            .filter_map(|line| line.parse().ok())
            .collect()
    }

    #[test]
    fn test_hello_world() {
        let tokens = vec![
            Token::word("Hello", 0.0, 0.5),
            Token::word("world", 0.5, 1.0),
            Token::punctuation("."),
        ];

        let cues = CueBuilder::default().build(&tokens).unwrap();
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].sequence, 1);
        assert_eq!(cues[0].start_seconds, 0.0);
        assert_eq!(cues[0].end_seconds, 1.0);
        // The fusion step drops one character from each end before attaching.
        assert_eq!(cues[0].text, "ello world.");

        let srt = tokens_to_srt(&tokens).unwrap();
        assert_eq!(srt, "\n1\n00:00:00,000 --> 00:00:01,000\nello world.\n");
    }

    #[test]
    fn test_words_without_punctuation() {
        let srt = tokens_to_srt(&words(&["One", "two"])).unwrap();
        assert_eq!(srt, "\n1\n00:00:00,000 --> 00:00:01,000\nOne two \n");
    }

    #[test]
    fn test_empty_stream() {
        assert!(CueBuilder::default().build(&[]).unwrap().is_empty());
        assert_eq!(tokens_to_srt(&[]).unwrap(), "");
    }

    #[test]
    fn test_line_break_after_crossing_line_limit() {
        // 10 chars per word: the running count is 10, 20, 30, 40, ...
        let tokens = words(&["aaaaaaaaaa", "bbbbbbbbbb", "cccccccccc", "dddddddddd", "eeeeeeeeee"]);
        let cues = CueBuilder::default().build(&tokens).unwrap();

        assert_eq!(cues.len(), 1);
        assert_eq!(
            cues[0].text,
            "aaaaaaaaaa bbbbbbbbbb cccccccccc dddddddddd \neeeeeeeeee "
        );
    }

    #[test]
    fn test_long_stream_splits_into_cues() {
        let texts: Vec<String> = (0..20).map(|i| format!("word{:02}", i)).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let tokens = words(&refs);

        let cues = CueBuilder::default().build(&tokens).unwrap();
        // 6 chars per token: a cue closes after 11 tokens (66 >= 64).
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].tokens, 0..11);
        assert_eq!(cues[1].tokens, 11..20);

        // The break follows the sixth token, the first to push the count past 32 (36).
        let first_line = cues[0].text.lines().next().unwrap();
        assert_eq!(first_line, "word00 word01 word02 word03 word04 word05 ");
        assert_eq!(cues[0].text.matches('\n').count(), 1);

        assert_eq!(cues[0].start_seconds, 0.0);
        assert_eq!(cues[0].end_seconds, 5.5);
        assert_eq!(cues[1].start_seconds, 5.5);
        assert_eq!(cues[1].end_seconds, 10.0);
    }

    #[test]
    fn test_cues_partition_tokens() {
        let texts: Vec<String> = (0..57).map(|i| "x".repeat(1 + i % 9)).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let mut tokens = words(&refs);
        tokens.insert(10, Token::punctuation(","));
        tokens.insert(30, Token::punctuation("."));

        let cues = CueBuilder::default().build(&tokens).unwrap();

        let mut next = 0;
        for (i, cue) in cues.iter().enumerate() {
            assert_eq!(cue.sequence, i + 1);
            assert_eq!(cue.tokens.start, next);
            assert!(!cue.tokens.is_empty());
            next = cue.tokens.end;
        }
        assert_eq!(next, tokens.len());

        let srt = render(&cues);
        let expected: Vec<usize> = (1..=cues.len()).collect();
        assert_eq!(sequence_numbers(&srt), expected);
    }

    #[test]
    fn test_punctuation_takes_previous_end_time() {
        let tokens = vec![
            Token::word("Yes", 1.0, 1.5),
            Token::punctuation("?"),
            Token::punctuation("!"),
        ];

        let cues = CueBuilder::default().build(&tokens).unwrap();
        assert_eq!(cues[0].end_seconds, 1.5);
    }

    #[test]
    fn test_punctuation_opening_a_cue() {
        // "abcdefgh" x 8 fills the first cue exactly, leaving the period for the next.
        let mut tokens = words(&["abcdefgh"; 8]);
        tokens.push(Token::punctuation("."));

        let cues = CueBuilder::default().build(&tokens).unwrap();
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[1].text, ".");
        assert_eq!(cues[1].start_seconds, 4.0);
        assert_eq!(cues[1].end_seconds, 4.0);
    }

    #[test]
    fn test_leading_punctuation_takes_next_word_start() {
        let tokens = vec![Token::punctuation("\""), Token::word("Hi", 0.3, 0.6)];
        let srt = tokens_to_srt(&tokens).unwrap();
        assert_eq!(srt, "\n1\n00:00:00,300 --> 00:00:00,600\n\"Hi \n");

        let cues = CueBuilder::default().build(&[Token::punctuation("-")]).unwrap();
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "-");
        assert_eq!(cues[0].start_seconds, 0.0);
        assert_eq!(cues[0].end_seconds, 0.0);
    }

    #[test]
    fn test_leading_punctuation_with_untimed_next_word() {
        let mut tokens = vec![Token::punctuation("-"), Token::word("Hi", 0.0, 0.2)];
        tokens[1].start = None;
        let err = CueBuilder::default().build(&tokens).unwrap_err();
        assert!(matches!(err, SrtError::MissingTimestamp { index: 1, field: "start_time" }));
    }

    #[test]
    fn test_punctuation_after_line_break_joins_lines() {
        // The break ends the text, so fusing trims it away and the cue stays on one line.
        let mut tokens = words(&["aaaaaaaaaa", "bbbbbbbbbb", "cccccccccc", "dddddddddd"]);
        tokens.push(Token::punctuation("."));
        tokens.push(Token::word("eeeeeeeeee", 2.0, 2.5));

        let cues = CueBuilder::default().build(&tokens).unwrap();
        assert_eq!(cues.len(), 1);
        assert_eq!(
            cues[0].text,
            "aaaaaaaaa bbbbbbbbbb cccccccccc dddddddddd .eeeeeeeeee "
        );
        assert!(!cues[0].text.contains('\n'));
    }

    #[test]
    fn test_invalid_layouts_rejected() {
        let zero = CueLayout {
            max_line_chars: 0,
            max_cue_chars: 0,
        };
        assert!(matches!(CueBuilder::new(zero).unwrap_err(), SrtError::Config(_)));

        let inverted = CueLayout {
            max_line_chars: 64,
            max_cue_chars: 32,
        };
        assert!(CueBuilder::new(inverted).is_err());
        assert!(CueBuilder::new(CueLayout::default()).is_ok());
    }

    #[test]
    fn test_missing_and_malformed_times() {
        let mut tokens = words(&["a", "b"]);
        tokens[1].end = None;
        let err = CueBuilder::default().build(&tokens).unwrap_err();
        assert!(matches!(err, SrtError::MissingTimestamp { index: 1, field: "end_time" }));

        let mut tokens = words(&["a", "b"]);
        tokens[0].start = Some(-2.0);
        let err = CueBuilder::default().build(&tokens).unwrap_err();
        assert!(matches!(err, SrtError::MalformedTimestamp { index: 0, field: "start_time", .. }));

        let mut tokens = words(&["a", "b"]);
        tokens[1].end = Some(f64::NAN);
        let err = CueBuilder::default().build(&tokens).unwrap_err();
        assert!(matches!(err, SrtError::MalformedTimestamp { index: 1, .. }));
    }

    #[test]
    fn test_fusion_on_multibyte_text() {
        let tokens = vec![
            Token::word("ÅÄÖ", 0.0, 0.4),
            Token::word("čšž", 0.4, 0.8),
            Token::punctuation("…"),
        ];

        let cues = CueBuilder::default().build(&tokens).unwrap();
        assert_eq!(cues[0].text, "ÄÖ čšž…");
    }

    #[test]
    fn test_fuse_punctuation_edges() {
        assert_eq!(fuse_punctuation("a", "."), ".");
        assert_eq!(fuse_punctuation("ab", "."), ".");
        assert_eq!(fuse_punctuation("Hi there ", ","), "i there,");
    }

    #[test]
    fn test_custom_layout() {
        let layout = CueLayout {
            max_line_chars: 4,
            max_cue_chars: 8,
        };
        let tokens = words(&["abc", "def", "ghi", "jkl"]);

        let builder = CueBuilder::new(layout).unwrap();
        assert_eq!(builder.layout(), &layout);

        let cues = builder.build(&tokens).unwrap();
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].text, "abc def \nghi ");
        assert_eq!(cues[1].text, "jkl ");
    }
}
