//! GIFT markup tokenizer.
//!
//! # Format
//! ```text
//! ::Capitals:: The capital of France is {=Paris ~London ~Rome}.
//!
//! What is 2+2? {=4 ~5 ~6}
//! ```
//!
//! A block is an optional `::label::`, free text, and ends at the first
//! closing `}` after its first `{`. Braces are not balanced and there is no
//! escape handling: a body with an earlier `{...}` group is cut at that group.

use crate::classifier::classify;
use crate::error::{ParseError, Result};
use crate::types::Question;
use std::fs;
use std::path::Path;

/// File extension of markup sources.
pub const GIFT_EXTENSION: &str = "gift";

/// A block as cut from the source, before title synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    /// Label between `::` markers, trimmed. `None` when absent or blank.
    pub label: Option<String>,
    /// Body text including the answer block, trimmed.
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    OutsideBlock,
    InLabel,
    InBody,
    InAnswerBlock,
}

struct Tokenizer {
    state: State,
    label: String,
    has_label: bool,
    body: String,
    blocks: Vec<RawBlock>,
}

impl Tokenizer {
    fn new() -> Self {
        Self {
            state: State::OutsideBlock,
            label: String::new(),
            has_label: false,
            body: String::new(),
            blocks: Vec::new(),
        }
    }

    fn run(mut self, content: &str) -> Vec<RawBlock> {
        let mut chars = content.chars().peekable();

        while let Some(c) = chars.next() {
            let opens_or_closes_label = c == ':' && chars.peek() == Some(&':');

            match self.state {
                State::OutsideBlock => {
                    if c.is_whitespace() {
                        continue;
                    }
                    if opens_or_closes_label {
                        chars.next();
                        self.has_label = true;
                        self.state = State::InLabel;
                    } else {
                        self.body.push(c);
                        self.state = if c == '{' {
                            State::InAnswerBlock
                        } else {
                            State::InBody
                        };
                    }
                }
                State::InLabel => {
                    if opens_or_closes_label {
                        chars.next();
                        self.state = State::InBody;
                    } else if c == '{' {
                        self.demote_label();
                        self.body.push(c);
                        self.state = State::InAnswerBlock;
                    } else {
                        self.label.push(c);
                    }
                }
                State::InBody => {
                    self.body.push(c);
                    if c == '{' {
                        self.state = State::InAnswerBlock;
                    }
                }
                State::InAnswerBlock => {
                    self.body.push(c);
                    if c == '}' {
                        self.emit();
                    }
                }
            }
        }

        // A trailing fragment without a closed answer block is dropped.
        self.blocks
    }

    /// An unterminated label turns out to be body text.
    fn demote_label(&mut self) {
        self.body.push_str("::");
        self.body.push_str(&self.label);
        self.label.clear();
        self.has_label = false;
    }

    fn emit(&mut self) {
        let label = self.label.trim();
        let label = (self.has_label && !label.is_empty()).then(|| label.to_string());

        self.blocks.push(RawBlock {
            label,
            body: self.body.trim().to_string(),
        });

        self.label.clear();
        self.body.clear();
        self.has_label = false;
        self.state = State::OutsideBlock;
    }
}

/// Cut markup content into raw blocks.
pub fn tokenize(content: &str) -> Vec<RawBlock> {
    Tokenizer::new().run(content)
}

/// Parse markup content into questions.
///
/// Unlabelled blocks are titled `Question {start_index + position}`, where
/// `position` is the block's zero-based index in this content.
pub fn parse(content: &str, start_index: usize, theme: &str) -> Vec<Question> {
    tokenize(content)
        .into_iter()
        .enumerate()
        .map(|(position, block)| {
            let title = block
                .label
                .unwrap_or_else(|| format!("Question {}", start_index + position));
            let question_type = classify(&block.body);
            Question {
                title,
                text: block.body,
                theme: theme.to_string(),
                question_type,
            }
        })
        .collect()
}

/// Parse a single markup file, deriving the theme from its name.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn parse_file(path: &Path, start_index: usize) -> Result<Vec<Question>> {
    let bytes = fs::read(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    let theme = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(extract_theme)
        .unwrap_or_default();

    Ok(parse(&content, start_index, &theme))
}

/// Questions read from a directory, plus the entries that had to be skipped.
#[derive(Debug, Default)]
pub struct DirectoryParse {
    pub questions: Vec<Question>,
    pub skipped: Vec<ParseError>,
}

/// Parse every `.gift` entry in a directory, in directory listing order.
///
/// The title counter starts at 1 and carries across files so synthesized
/// titles stay unique for the whole directory. An entry that cannot be read
/// is recorded in `skipped` and does not consume title numbers. Only a
/// missing or unlistable directory is an error.
pub fn parse_directory(dir: &Path) -> Result<DirectoryParse> {
    if !dir.is_dir() {
        return Err(ParseError::MissingDirectory(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|source| ParseError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut parsed = DirectoryParse::default();
    let mut next_index = 1;

    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(source) => {
                parsed.skipped.push(ParseError::Io {
                    path: dir.to_path_buf(),
                    source,
                });
                continue;
            }
        };

        if path.extension().map_or(true, |ext| ext != GIFT_EXTENSION) {
            continue;
        }

        match parse_file(&path, next_index) {
            Ok(questions) => {
                next_index += questions.len();
                parsed.questions.extend(questions);
            }
            Err(e) => parsed.skipped.push(e),
        }
    }

    Ok(parsed)
}

/// Derive a theme from a filename: the part of the stem after its last `-`.
///
/// Returns an empty string when the stem has no hyphen.
pub fn extract_theme(filename: &str) -> String {
    let name = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);
    let stem = match name.rfind('.') {
        Some(dot) => &name[..dot],
        None => name,
    };

    stem.rfind('-')
        .map(|hyphen| stem[hyphen + 1..].to_string())
        .unwrap_or_default()
}
