use std::io::{BufRead, Write};

use bip39::Language;
use rand::{CryptoRng, RngCore};

use crate::error::WalletError;

/// Every seed phrase this tool handles is exactly this long.
pub const SEED_WORD_COUNT: usize = 24;

/// An ordered sequence of exactly 24 lowercase words. The count is enforced
/// at construction, so every consumer may rely on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPhrase {
    words: Vec<String>,
}

impl SeedPhrase {
    /// Wraps an already-tokenized word list, rejecting anything but 24 words.
    pub fn from_words(words: Vec<String>) -> Result<Self, WalletError> {
        if words.len() != SEED_WORD_COUNT {
            return Err(WalletError::WordCount(words.len()));
        }
        Ok(Self { words })
    }

    /// Normalizes a single-shot text bundle: any mix of lines and the common
    /// delimiters (space, comma, tab, semicolon, pipe, period) is accepted,
    /// but the token count must come out at exactly 24 — no truncation here.
    pub fn parse(text: &str) -> Result<Self, WalletError> {
        let words: Vec<String> = text.lines().flat_map(tokenize_line).collect();
        Self::from_words(words)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The canonical single-space-joined form fed to key derivation.
    pub fn joined(&self) -> String {
        self.words.join(" ")
    }
}

/// Splits one line of seed input into lowercase tokens. Commas, tabs,
/// semicolons, pipes and periods count as separators, the same as spaces.
fn tokenize_line(line: &str) -> Vec<String> {
    line.split(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | '|' | '.'))
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
        .collect()
}

/// Reads a seed phrase line by line, for interactive entry. Accumulates
/// tokens across lines and stops when:
/// - 24 or more words are held and a blank line is seen, or
/// - at least one word is held and two consecutive blank lines are seen, or
/// - the stream ends with at least one word held.
///
/// A stream that ends before any word was entered is an input-read failure.
/// If the user pasted more than 24 words, only the first 24 are kept; fewer
/// than 24 at termination is a word-count error.
pub fn read_phrase<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<SeedPhrase, WalletError> {
    let mut words: Vec<String> = Vec::new();
    let mut blank_lines = 0u32;

    writeln!(output, "(Press Enter twice when done, or paste all at once)")?;
    write!(output, "> ")?;
    output.flush()?;

    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            if words.is_empty() {
                return Err(WalletError::InputRead("seed phrase"));
            }
            break;
        }

        if line.trim().is_empty() {
            blank_lines += 1;
            // One blank line is enough once the phrase looks complete; an
            // incomplete phrase needs two in a row to give up on more input.
            if words.len() >= SEED_WORD_COUNT {
                break;
            }
            if !words.is_empty() && blank_lines >= 2 {
                break;
            }
            continue;
        }
        blank_lines = 0;

        words.extend(tokenize_line(&line));

        if !words.is_empty() && words.len() < SEED_WORD_COUNT {
            write!(output, "  ({}/{} words) ", words.len(), SEED_WORD_COUNT)?;
        }
        write!(output, "> ")?;
        output.flush()?;
    }

    words.truncate(SEED_WORD_COUNT);
    SeedPhrase::from_words(words)
}

/// Draws a fresh 24-word phrase, each word an independent uniform pick from
/// the English wordlist. 2048 divides 2^32, so the modulo is unbiased.
pub fn generate_seed<R: RngCore + CryptoRng>(rng: &mut R) -> SeedPhrase {
    let wordlist = Language::English.word_list();
    let words = (0..SEED_WORD_COUNT)
        .map(|_| wordlist[rng.next_u32() as usize % wordlist.len()].to_string())
        .collect();
    SeedPhrase { words }
}
