//! Fixed settings for the RageMP build of the merger.
//!
//! The merger targets exactly one project and one platform; everything a run
//! depends on besides the two paths and the optional comment lives here.

/// Extension of the source files picked up by the walk, without the dot.
pub const SOURCE_EXTENSION: &str = "cs";

/// Namespace prefix a file must declare for its body to be merged.
pub const NAMESPACE_PREFIX: &str = "LemonUI";

/// Preprocessor symbol whose conditional branch is scanned for usings, and
/// the symbol defined at the top of the merged output.
pub const PLATFORM_SYMBOL: &str = "RAGEMP";

/// Sentinel comment that excludes a file from the merge. Only counts at the
/// very start of the content.
pub const SKIP_MARKER: &str = "// NO MERGE";

/// First line of the merged output.
pub const BANNER: &str = "// LemonUI for RageMP";

/// Format of the timestamp on the generated-on header line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
