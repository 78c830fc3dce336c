//! Code emission: turning a parsed corpus into generated source text.
//!
//! Emission is a pure data → text transform behind the [`Emitter`] trait,
//! so additional target languages can be added without touching the
//! pipeline. The helpers here (identifier mangling, string escaping) are
//! shared by emitters and must stay injective: distinct inputs must render
//! to distinct outputs or the round-trip guarantee breaks.

pub mod c_lang;

pub use c_lang::CEmitter;

use crate::core::corpus::ParsedCorpus;
use crate::core::errors::Result;

/// A target-language renderer for the parsed corpus.
pub trait Emitter {
    /// Render the corpus into complete, deterministic source text.
    fn emit(&self, corpus: &ParsedCorpus) -> Result<String>;
}

/// Mangle a filename into a C identifier fragment.
///
/// Every character that is not ASCII alphanumeric becomes `_`. A leading
/// digit gets an extra `_` prefix so the result is always a valid
/// identifier. The transform is deterministic but not injective; collisions
/// are detected and rejected by the emitter.
pub fn sanitize_identifier(filename: &str) -> String {
    let mut out = String::with_capacity(filename.len() + 1);
    for ch in filename.chars() {
        let mapped = if ch.is_ascii_alphanumeric() { ch } else { '_' };
        if out.is_empty() && mapped.is_ascii_digit() {
            out.push('_');
        }
        out.push(mapped);
    }
    if out.is_empty() {
        out.push('_');
    }
    out
}

/// Escape content for embedding in a C string literal.
///
/// Backslashes are escaped first so the transform is injective, then
/// quotes. Embedded newlines become an escaped `\n` followed by a literal
/// close-quote/reopen-quote pair, so multi-line content stays readable in
/// the generated source while still concatenating into one logical string
/// constant at compile time.
pub(crate) fn escape_c_string(content: &str) -> String {
    content
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n\"\n\"")
}
