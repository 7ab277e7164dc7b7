//! Regex extraction of using statements and namespace blocks.
//!
//! The patterns are deliberately regex-level rather than a C# parser: the
//! namespace capture runs greedily through the last `}` in the file instead
//! of balancing braces, and the using capture class admits alias syntax
//! (`using Size = System.Drawing.SizeF`) without trimming. The merged
//! output is defined by these patterns, so they must not be tightened.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{NAMESPACE_PREFIX, PLATFORM_SYMBOL, SKIP_MARKER};

/// The region between `#if RAGEMP`/`#elif RAGEMP` and the next `#elif` or
/// `#endif`. Branches keyed to other platform symbols never match.
static SPECIFIC_USINGS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("#e?l?if {PLATFORM_SYMBOL}\n([a-zA-Z0-9; . =\n]*)\n(?:#elif|#endif)"))
        .expect("valid regex")
});

/// A run of statements at the very start of the content or directly after
/// an `#endif`, up to the last semicolon before unrelated code resumes.
static GENERAL_USINGS: Lazy<Regex> =
    Lazy::new(|| Regex::new("(?:^|#endif\n)([a-zA-Z0-9; .\n=]*);").expect("valid regex"));

/// One using statement inside a matched region.
static USING_STATEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new("using ([A-Za-z0-9.= ]+);?").expect("valid regex"));

/// The first project namespace declaration through the last closing brace.
static NAMESPACE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("(namespace {NAMESPACE_PREFIX}[.A-Za-z /]*\n\\{{[\\s\\S]*\\}})"))
        .expect("valid regex")
});

/// Whether the file opts out of the merge. The marker only counts at the
/// very start of the content; the same text further down is ordinary
/// commentary.
pub fn is_skip_marked(content: &str) -> bool {
    content.starts_with(SKIP_MARKER)
}

/// The project namespace block of the file, if it declares one.
pub fn namespace_block(content: &str) -> Option<&str> {
    NAMESPACE_BLOCK.captures(content).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Using statements from the platform-specific preprocessor branch.
pub fn specific_usings(content: &str) -> Vec<String> {
    region_usings(SPECIFIC_USINGS.captures(content))
}

/// Using statements from the start of the file or right after an `#endif`.
pub fn general_usings(content: &str) -> Vec<String> {
    region_usings(GENERAL_USINGS.captures(content))
}

fn region_usings(region: Option<regex::Captures<'_>>) -> Vec<String> {
    let Some(region) = region.and_then(|c| c.get(1)) else {
        return Vec::new();
    };
    USING_STATEMENT
        .captures_iter(region.as_str())
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
