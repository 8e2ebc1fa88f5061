//! Descriptor model for single-file components.
//!
//! A descriptor is the structured decomposition of one component source:
//! at most one plain script block, at most one setup-script block, any
//! number of style blocks, and an optional template block. It is produced
//! once per compile by the parser collaborator and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Default language tag assumed for script blocks without a `lang` attribute.
pub const DEFAULT_SCRIPT_LANG: &str = "js";

/// One script or setup-script block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScriptBlock {
    pub content: String,
    /// Declared language tag (`js`, `ts`, `jsx`, `tsx`, ...). `None` means
    /// [`DEFAULT_SCRIPT_LANG`].
    pub lang: Option<String>,
    pub setup: bool,
}

impl ScriptBlock {
    /// Effective language tag, falling back to the default.
    pub fn lang_tag(&self) -> &str {
        self.lang.as_deref().unwrap_or(DEFAULT_SCRIPT_LANG)
    }
}

/// One style block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleBlock {
    pub content: String,
    pub lang: Option<String>,
    pub scoped: bool,
    /// CSS-modules flag. Module-flagged blocks are not compiled here.
    pub module: bool,
    /// External source URL; when set, `content` is ignored and the text is
    /// fetched instead.
    pub src: Option<String>,
}

/// The template block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateBlock {
    pub content: String,
}

/// Structured decomposition of one component source text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SfcDescriptor {
    /// Synthetic filename the source was parsed under (`<hash>.vue` unless
    /// overridden by the caller).
    pub filename: String,
    pub template: Option<TemplateBlock>,
    pub script: Option<ScriptBlock>,
    pub script_setup: Option<ScriptBlock>,
    pub styles: Vec<StyleBlock>,
    /// Whether the component uses slotted-content selectors; forwarded into
    /// template and expression compilation.
    pub slotted: bool,
}

impl SfcDescriptor {
    /// Script blocks that are present, plain block first.
    pub fn script_blocks(&self) -> impl Iterator<Item = &ScriptBlock> {
        self.script.iter().chain(self.script_setup.iter())
    }

    /// Whether any script compilation is required.
    pub fn has_script(&self) -> bool {
        self.script.is_some() || self.script_setup.is_some()
    }

    /// Whether any style block asks for scoped rules.
    pub fn has_scoped_style(&self) -> bool {
        self.styles.iter().any(|s| s.scoped)
    }
}

/// Parser collaborator result: the descriptor plus parse-level diagnostics.
/// Parse errors are diagnostic-class and never abort the pipeline.
#[derive(Debug, Clone, Default)]
pub struct ParsedSfc {
    pub descriptor: SfcDescriptor,
    pub errors: Vec<String>,
}
