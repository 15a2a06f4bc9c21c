//! Word and sentence segmentation.
//!
//! Both passes are single left-to-right scans over the input that classify
//! each character and flush a token on a class transition. Neither pass
//! backtracks, and neither knows about abbreviations or decimal numbers:
//! "Mr. Smith" is two sentences and "3.14" splits at the dot.

/// Character classes seen by the scanners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    /// Alphabetic character (any script).
    Letter,
    /// Apostrophe or hyphen; joins two letter runs into one word.
    Joiner,
    /// `.`, `!`, or `?`.
    Terminator,
    /// Whitespace.
    Space,
    /// Digits, symbols, and all other punctuation.
    Other,
}

fn classify(ch: char) -> CharClass {
    match ch {
        '.' | '!' | '?' => CharClass::Terminator,
        '\'' | '\u{2019}' | '-' => CharClass::Joiner,
        c if c.is_alphabetic() => CharClass::Letter,
        c if c.is_whitespace() => CharClass::Space,
        _ => CharClass::Other,
    }
}

/// Iterator over the words of a text, yielding slices of the input.
///
/// A word is a maximal run of letters in which single apostrophes or hyphens
/// may appear between two letters ("don't", "very-long", "mother-in-law").
/// Joiners at either edge of a run are treated as punctuation.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let mut chars = rest.char_indices().peekable();

        // Skip to the first letter.
        let (start, first) = loop {
            let (i, ch) = chars.next()?;
            if classify(ch) == CharClass::Letter {
                break (i, ch);
            }
        };

        let mut end = start + first.len_utf8();
        while let Some(&(i, ch)) = chars.peek() {
            match classify(ch) {
                CharClass::Letter => {
                    end = i + ch.len_utf8();
                    chars.next();
                }
                CharClass::Joiner => {
                    chars.next();
                    match chars.peek() {
                        Some(&(j, next)) if classify(next) == CharClass::Letter => {
                            end = j + next.len_utf8();
                            chars.next();
                        }
                        _ => break,
                    }
                }
                _ => break,
            }
        }

        let word = &rest[start..end];
        self.pos += end;
        Some(word)
    }
}

/// Iterate over the words in `text`.
pub const fn words(text: &str) -> Words<'_> {
    Words { text, pos: 0 }
}

/// Collect the words in `text`.
pub fn tokenize_words(text: &str) -> Vec<&str> {
    words(text).collect()
}

/// Count the words in `text`. Empty or whitespace-only input yields 0.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn word_count(text: &str) -> usize {
    words(text).count()
}

/// Iterator over the sentences of a text, yielding trimmed slices of the
/// input that include their closing terminators.
///
/// A run of consecutive terminators ("?!", "...") closes a single sentence.
/// A trailing fragment without a terminator is still a sentence, as is a
/// segment made only of terminators.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = &self.text[self.pos..];
            if rest.is_empty() {
                return None;
            }

            let mut end = rest.len();
            let mut in_terminators = false;
            for (i, ch) in rest.char_indices() {
                let is_terminator = classify(ch) == CharClass::Terminator;
                if in_terminators && !is_terminator {
                    end = i;
                    break;
                }
                in_terminators = is_terminator;
            }

            self.pos += end;
            let sentence = rest[..end].trim();
            if !sentence.is_empty() {
                return Some(sentence);
            }
        }
    }
}

/// Iterate over the sentences in `text`.
pub const fn sentences(text: &str) -> Sentences<'_> {
    Sentences { text, pos: 0 }
}

/// Collect the sentences in `text`.
pub fn tokenize_sentences(text: &str) -> Vec<&str> {
    sentences(text).collect()
}

/// Count the sentences in `text`.
///
/// Returns 0 only for empty or whitespace-only input.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn sentence_count(text: &str) -> usize {
    sentences(text).count()
}
