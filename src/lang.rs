//! Script language detection.
//!
//! Declared script languages decide which syntax extensions the template
//! expression parser must accept and which downleveling transforms must run
//! before generated code is loaded. An empty detection result means the
//! generated code runs as-is, with no downleveling pass.

use std::collections::BTreeSet;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::descriptor::SfcDescriptor;

lazy_static! {
    /// Tags ending in an "x" flavor (`jsx`, `tsx`) carry component
    /// expression syntax.
    static ref X_FLAVORED_TAG: Regex = Regex::new(r"[jt]sx$").unwrap();
    /// Tags ending in `ts` or `tsx` carry type annotations.
    static ref TYPED_TAG: Regex = Regex::new(r"tsx?$").unwrap();
}

/// A syntax extension contributed by a script language tag.
///
/// Serves double duty: merged into the expression-parser plugin set, and
/// requested verbatim as a downleveling transform.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SyntaxExtension {
    Jsx,
    Typescript,
}

impl fmt::Display for SyntaxExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxExtension::Jsx => f.write_str("jsx"),
            SyntaxExtension::Typescript => f.write_str("typescript"),
        }
    }
}

/// Deduplicated syntax extensions across all present script blocks.
pub fn detect_extensions(descriptor: &SfcDescriptor) -> BTreeSet<SyntaxExtension> {
    let mut extensions = BTreeSet::new();
    for block in descriptor.script_blocks() {
        let tag = block.lang_tag();
        if X_FLAVORED_TAG.is_match(tag) {
            extensions.insert(SyntaxExtension::Jsx);
        }
        if TYPED_TAG.is_match(tag) {
            extensions.insert(SyntaxExtension::Typescript);
        }
    }
    extensions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ScriptBlock;

    fn with_lang(lang: Option<&str>) -> SfcDescriptor {
        SfcDescriptor {
            script: Some(ScriptBlock {
                content: "export default {}".into(),
                lang: lang.map(String::from),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn plain_js_detects_nothing() {
        assert!(detect_extensions(&with_lang(None)).is_empty());
        assert!(detect_extensions(&with_lang(Some("js"))).is_empty());
    }

    #[test]
    fn ts_detects_typescript_only() {
        let extensions = detect_extensions(&with_lang(Some("ts")));
        assert_eq!(
            extensions.into_iter().collect::<Vec<_>>(),
            [SyntaxExtension::Typescript]
        );
    }

    #[test]
    fn jsx_detects_jsx_only() {
        let extensions = detect_extensions(&with_lang(Some("jsx")));
        assert_eq!(
            extensions.into_iter().collect::<Vec<_>>(),
            [SyntaxExtension::Jsx]
        );
    }

    #[test]
    fn tsx_detects_both() {
        let extensions = detect_extensions(&with_lang(Some("tsx")));
        assert!(extensions.contains(&SyntaxExtension::Jsx));
        assert!(extensions.contains(&SyntaxExtension::Typescript));
    }

    #[test]
    fn extensions_deduplicate_across_blocks() {
        let descriptor = SfcDescriptor {
            script: Some(ScriptBlock {
                lang: Some("tsx".into()),
                ..Default::default()
            }),
            script_setup: Some(ScriptBlock {
                lang: Some("tsx".into()),
                setup: true,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(detect_extensions(&descriptor).len(), 2);
    }

    #[test]
    fn no_script_blocks_detect_nothing() {
        assert!(detect_extensions(&SfcDescriptor::default()).is_empty());
    }
}
