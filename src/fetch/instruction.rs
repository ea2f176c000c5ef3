//! What one fetched page tells the navigator to do next.

use strum_macros::EnumIter as EnumIterMacro;
use url::Url;

/// Result of inspecting one fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectInstruction {
    /// 3xx status with a `Location` header.
    HttpLocation(Url),
    /// `<meta http-equiv="refresh" content="...;url=...">`.
    MetaRefresh(Url),
    /// Inline script assigning the page location.
    ScriptNavigation(Url),
    /// Link to a known file-hosting site found in the raw body.
    EmbeddedResourceHost(Url),
    /// No navigation signal; this page ends the chain.
    Terminal,
}

/// Kind of navigation signal, without its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InstructionKind {
    HttpLocation,
    MetaRefresh,
    ScriptNavigation,
    EmbeddedResourceHost,
    Terminal,
}

impl RedirectInstruction {
    pub fn kind(&self) -> InstructionKind {
        match self {
            RedirectInstruction::HttpLocation(_) => InstructionKind::HttpLocation,
            RedirectInstruction::MetaRefresh(_) => InstructionKind::MetaRefresh,
            RedirectInstruction::ScriptNavigation(_) => InstructionKind::ScriptNavigation,
            RedirectInstruction::EmbeddedResourceHost(_) => InstructionKind::EmbeddedResourceHost,
            RedirectInstruction::Terminal => InstructionKind::Terminal,
        }
    }

    /// Navigation target, or `None` for `Terminal`.
    pub fn target(&self) -> Option<&Url> {
        match self {
            RedirectInstruction::HttpLocation(url)
            | RedirectInstruction::MetaRefresh(url)
            | RedirectInstruction::ScriptNavigation(url)
            | RedirectInstruction::EmbeddedResourceHost(url) => Some(url),
            RedirectInstruction::Terminal => None,
        }
    }

    pub fn into_target(self) -> Option<Url> {
        match self {
            RedirectInstruction::HttpLocation(url)
            | RedirectInstruction::MetaRefresh(url)
            | RedirectInstruction::ScriptNavigation(url)
            | RedirectInstruction::EmbeddedResourceHost(url) => Some(url),
            RedirectInstruction::Terminal => None,
        }
    }
}

impl std::fmt::Display for InstructionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InstructionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstructionKind::HttpLocation => "HTTP redirect",
            InstructionKind::MetaRefresh => "meta refresh",
            InstructionKind::ScriptNavigation => "script navigation",
            InstructionKind::EmbeddedResourceHost => "embedded file host",
            InstructionKind::Terminal => "terminal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_kinds_have_string_representation() {
        for kind in InstructionKind::iter() {
            assert!(!kind.as_str().is_empty(), "{:?} should have a name", kind);
        }
    }

    #[test]
    fn test_target_and_kind() {
        let url = Url::parse("https://example.com/next").unwrap();
        let instruction = RedirectInstruction::MetaRefresh(url.clone());
        assert_eq!(instruction.kind(), InstructionKind::MetaRefresh);
        assert_eq!(instruction.target(), Some(&url));
        assert_eq!(instruction.into_target(), Some(url));
        assert_eq!(RedirectInstruction::Terminal.target(), None);
        assert_eq!(
            RedirectInstruction::Terminal.kind(),
            InstructionKind::Terminal
        );
    }
}
