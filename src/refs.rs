#![forbid(unsafe_code)]

//! Ref expansion for branch, tag, and commit-ish arguments

/// Expands user-supplied ref tokens into a canonical ref string
///
/// Callers pass the tokens that name a ref (usually a single token) and get
/// back the string to splice into a URL. Implementations may resolve
/// abbreviations; the default one does not.
pub trait RefExpander {
    fn expand(&self, tokens: &[String]) -> String;
}

/// Returns the first token unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityExpander;

impl RefExpander for IdentityExpander {
    fn expand(&self, tokens: &[String]) -> String {
        tokens.first().cloned().unwrap_or_default()
    }
}
