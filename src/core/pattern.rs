use std::collections::HashSet;

use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};
use tracing::warn;

/// Names compare case-insensitively where the host filesystem does.
const CASE_INSENSITIVE: bool = cfg!(windows);

/// Pre-compiled glob patterns.
/// Patterns without wildcards are kept for exact comparison, the rest go into one regex set.
#[derive(Debug)]
pub struct CompiledPatterns {
    exact_matches: HashSet<String>,
    regex_set: Option<RegexSet>,
}

impl CompiledPatterns {
    /// Compile a list of glob patterns. A pattern that does not compile is
    /// dropped with a warning and matches nothing.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut exact_matches = HashSet::new();
        let mut regex_patterns = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            if !has_wildcards(pattern) {
                exact_matches.insert(fold_case(pattern));
                continue;
            }

            let regex_str = glob_to_regex(pattern);
            match compile_one(&regex_str) {
                Ok(_) => regex_patterns.push(regex_str),
                Err(err) => warn!(pattern, %err, "glob pattern will never match"),
            }
        }

        let regex_set = if regex_patterns.is_empty() {
            None
        } else {
            RegexSetBuilder::new(&regex_patterns)
                .case_insensitive(CASE_INSENSITIVE)
                .build()
                .map_err(|err| warn!(%err, "glob patterns will never match"))
                .ok()
        };

        Self {
            exact_matches,
            regex_set,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.exact_matches.is_empty() && self.regex_set.is_none()
    }

    /// Check if a name or path matches any of the compiled patterns.
    #[inline]
    pub fn matches(&self, candidate: &str) -> bool {
        if !self.exact_matches.is_empty() && self.exact_matches.contains(&fold_case(candidate)) {
            return true;
        }

        if let Some(ref regex_set) = self.regex_set {
            return regex_set.is_match(candidate);
        }

        false
    }
}

fn has_wildcards(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

fn fold_case(s: &str) -> String {
    if CASE_INSENSITIVE {
        s.to_lowercase()
    } else {
        s.to_owned()
    }
}

fn compile_one(regex_str: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(regex_str)
        .case_insensitive(CASE_INSENSITIVE)
        .build()
}

/// Convert a glob pattern to an anchored regex string.
/// Supports `*`, `?` and bracket sets (`[abc]`, `[a-z]`, `[!abc]`).
/// A `[` without a closing `]` is taken literally.
fn glob_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut regex_pattern = String::with_capacity(pattern.len() * 2 + 6);
    regex_pattern.push_str("(?s)^");

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                // Runs of stars are equivalent to one.
                while chars.get(i) == Some(&'*') {
                    i += 1;
                }
                regex_pattern.push_str(".*");
            }
            '?' => regex_pattern.push('.'),
            '[' => match bracket_end(&chars, i) {
                Some(end) => {
                    push_bracket_set(&mut regex_pattern, &chars[i..end]);
                    i = end + 1;
                }
                None => regex_pattern.push_str(r"\["),
            },
            _ => regex_pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }

    regex_pattern.push('$');
    regex_pattern
}

/// Index of the `]` closing a set whose body starts at `start`.
/// A `]` directly after `[` or `[!` belongs to the set.
fn bracket_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    while j < chars.len() && chars[j] != ']' {
        j += 1;
    }
    (j < chars.len()).then_some(j)
}

/// Translate the body of a bracket set (the text between `[` and `]`).
///
/// The body is cut into chunks at range dashes. A reversed range such as
/// `z-a` is empty, so it is dropped and only its outer characters are kept.
/// Any dash that is not a range dash is literal. A set left with nothing never
/// matches, and `[!]` matches any single character.
fn push_bracket_set(out: &mut String, body: &[char]) {
    let mut chunks = range_chunks(body);

    for k in (1..chunks.len()).rev() {
        let reversed = match (chunks[k - 1].last(), chunks[k].first()) {
            (Some(start), Some(end)) => start > end,
            _ => false,
        };
        if reversed {
            let next = chunks.remove(k);
            let prev = &mut chunks[k - 1];
            prev.pop();
            prev.extend_from_slice(&next[1..]);
        }
    }

    let mut tokens: Vec<SetToken> = Vec::new();
    for (index, chunk) in chunks.iter().enumerate() {
        if index > 0 {
            tokens.push(SetToken::RangeDash);
        }
        tokens.extend(chunk.iter().map(|&c| SetToken::Char(c)));
    }

    match tokens.as_slice() {
        [] => {
            out.push_str("[a&&b]");
            return;
        }
        [SetToken::Char('!')] => {
            out.push('.');
            return;
        }
        _ => {}
    }

    out.push('[');
    let tokens = match tokens.split_first() {
        Some((SetToken::Char('!'), rest)) => {
            out.push('^');
            rest
        }
        _ => &tokens[..],
    };
    for (index, token) in tokens.iter().enumerate() {
        match token {
            SetToken::RangeDash if index != 0 && index + 1 != tokens.len() => out.push('-'),
            SetToken::RangeDash => out.push_str(r"\-"),
            SetToken::Char(c) => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    out.push(']');
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum SetToken {
    Char(char),
    RangeDash,
}

/// Split a set body at the dashes that form ranges. A dash right after the
/// opening `[` (or `[!`) is literal, and so is one that directly follows a range end.
fn range_chunks(body: &[char]) -> Vec<Vec<char>> {
    let mut chunks = Vec::new();
    let mut chunk_start = 0;
    let mut search_from = if body.first() == Some(&'!') { 2 } else { 1 };

    while let Some(offset) = body
        .get(search_from..)
        .and_then(|rest| rest.iter().position(|&c| c == '-'))
    {
        let dash = search_from + offset;
        chunks.push(body[chunk_start..dash].to_vec());
        chunk_start = dash + 1;
        search_from = dash + 3;
    }

    let tail = body[chunk_start..].to_vec();
    match chunks.last_mut() {
        Some(last) if tail.is_empty() => last.push('-'),
        _ => chunks.push(tail),
    }
    chunks
}
