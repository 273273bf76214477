//! Response Parser: pulls shortlisted filenames out of the model's free-text reply.
//!
//! The reply is untrusted prose. Parsing sits behind `ShortlistParser` so a
//! structured-output mode can replace the pattern scrape without touching callers.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

/// Which part of the reply filenames are taken from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MatchScope {
    /// Only between the `Shortlisted` heading and the next `Rejected` heading
    #[default]
    Shortlisted,
    /// Every `Filename:` line in the reply, rejected ones included
    Anywhere,
}

/// Extracts candidate filenames, in reply order.
pub trait ShortlistParser: Send + Sync {
    fn parse(&self, reply: &str) -> Vec<String>;
}

/// Section-unaware scan: every `Filename: ....pdf` anywhere in the reply.
pub struct FilenameScan;

impl ShortlistParser for FilenameScan {
    fn parse(&self, reply: &str) -> Vec<String> {
        scan_filenames(reply)
    }
}

/// Same scan, restricted to the `Shortlisted` section of the reply.
///
/// A reply without a `Shortlisted` heading yields nothing, so a rejected
/// resume echoed elsewhere in the text is never filed.
pub struct ShortlistedSection;

impl ShortlistParser for ShortlistedSection {
    fn parse(&self, reply: &str) -> Vec<String> {
        match shortlisted_section(reply) {
            Some(section) => scan_filenames(section),
            None => {
                if !reply.trim().is_empty() {
                    warn!("Reply has no 'Shortlisted' section; nothing will be filed");
                }
                Vec::new()
            }
        }
    }
}

/// Picks the parser for the configured scope.
pub fn parser_for(scope: MatchScope) -> Box<dyn ShortlistParser> {
    match scope {
        MatchScope::Shortlisted => Box::new(ShortlistedSection),
        MatchScope::Anywhere => Box::new(FilenameScan),
    }
}

fn filename_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Filename:\s*(.*\.pdf)").expect("static regex"))
}

fn shortlisted_heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?im)^[\s#*_]*shortlisted\b").expect("static regex"))
}

fn rejected_heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?im)^[\s#*_]*rejected\b").expect("static regex"))
}

fn scan_filenames(text: &str) -> Vec<String> {
    let names: Vec<String> = filename_re()
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| clean_filename(m.as_str()))
        .filter(|name| !name.is_empty())
        .collect();
    debug!("Matched {} filename(s)", names.len());
    names
}

/// Text after the first `Shortlisted` heading, up to the next `Rejected` heading.
fn shortlisted_section(reply: &str) -> Option<&str> {
    let start = shortlisted_heading_re().find(reply)?.end();
    let rest = &reply[start..];
    let end = rejected_heading_re()
        .find(rest)
        .map(|m| m.start())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Trims whitespace and markdown decoration the model tends to wrap names in.
fn clean_filename(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, '*' | '`' | '<' | '>' | '"'))
        .to_string()
}
