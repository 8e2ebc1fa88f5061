//! Compiler option composition.
//!
//! The three block compilers consume interdependent configurations derived
//! from the same compile: the expression options nest inside the template
//! options, which nest inside the script options, and every style block
//! gets its own per-block options. Composition is layered: each config is
//! built from computed defaults, then one named overlay is applied per
//! nesting level with a shallow right-biased merge — an explicit caller
//! value always wins, an unset field keeps the computed default.
//!
//! Binding metadata is not part of the computed defaults: script
//! compilation produces it, and the pipeline merges it into a fresh
//! template configuration via [`TemplateConfig::with_bindings`] before
//! template compilation starts.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::descriptor::StyleBlock;
use crate::lang::SyntaxExtension;

/// How a script-exposed name may be bound when referenced from a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BindingKind {
    SetupConst,
    SetupLet,
    SetupRef,
    Props,
    Data,
    Options,
}

/// Names a template may reference, keyed to how each binds.
/// Produced by script compilation; consumed by template compilation.
pub type BindingMetadata = BTreeMap<String, BindingKind>;

/// Options for the template expression compiler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpressionConfig {
    /// Expression-parser plugins: caller-supplied plugins first, detected
    /// syntax extensions appended, deduplicated.
    pub expression_plugins: Vec<SyntaxExtension>,
    pub filename: String,
    pub scope_id: String,
    pub slotted: bool,
    pub binding_metadata: Option<BindingMetadata>,
}

impl ExpressionConfig {
    /// Computed defaults for one compile.
    pub fn computed(
        filename: &str,
        scope_id: &str,
        slotted: bool,
        detected: &BTreeSet<SyntaxExtension>,
    ) -> Self {
        Self {
            expression_plugins: detected.iter().copied().collect(),
            filename: filename.to_string(),
            scope_id: scope_id.to_string(),
            slotted,
            binding_metadata: None,
        }
    }

    /// Apply the expression overlay. Plugins are unioned rather than
    /// replaced; every other explicit value wins over the computed one.
    pub fn layered(self, overlay: &ExpressionOverlay) -> Self {
        let mut plugins: Vec<SyntaxExtension> =
            overlay.expression_plugins.clone().unwrap_or_default();
        for extension in self.expression_plugins {
            if !plugins.contains(&extension) {
                plugins.push(extension);
            }
        }
        Self {
            expression_plugins: plugins,
            filename: overlay.filename.clone().unwrap_or(self.filename),
            scope_id: overlay.scope_id.clone().unwrap_or(self.scope_id),
            slotted: overlay.slotted.unwrap_or(self.slotted),
            binding_metadata: self.binding_metadata,
        }
    }

    /// Functionally merge script-produced binding metadata.
    pub fn with_bindings(mut self, bindings: BindingMetadata) -> Self {
        self.binding_metadata = Some(bindings);
        self
    }
}

/// Options for the template compiler. The copy nested in [`ScriptConfig`]
/// is the same value handed to standalone template compilation, so the two
/// stay consistent by construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateConfig {
    pub compiler: ExpressionConfig,
    pub filename: String,
    pub id: String,
    pub scoped: bool,
    pub slotted: bool,
}

impl TemplateConfig {
    pub fn computed(
        compiler: ExpressionConfig,
        filename: &str,
        id: &str,
        scoped: bool,
        slotted: bool,
    ) -> Self {
        Self {
            compiler,
            filename: filename.to_string(),
            id: id.to_string(),
            scoped,
            slotted,
        }
    }

    /// Apply the template overlay, cascading into the expression layer.
    pub fn layered(self, overlay: &TemplateOverlay) -> Self {
        Self {
            compiler: self.compiler.layered(&overlay.compiler),
            filename: overlay.filename.clone().unwrap_or(self.filename),
            id: overlay.id.clone().unwrap_or(self.id),
            scoped: overlay.scoped.unwrap_or(self.scoped),
            slotted: overlay.slotted.unwrap_or(self.slotted),
        }
    }

    /// Functionally merge script-produced binding metadata into the nested
    /// expression options.
    pub fn with_bindings(self, bindings: BindingMetadata) -> Self {
        Self {
            compiler: self.compiler.with_bindings(bindings),
            ..self
        }
    }
}

/// Options for the script compiler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScriptConfig {
    pub id: String,
    /// When set and a setup-script block exists, the script compiler inlines
    /// the template and standalone template compilation is skipped.
    pub inline_template: bool,
    pub template: TemplateConfig,
}

impl ScriptConfig {
    /// Build the full configuration triple for one compile: computed
    /// defaults from the descriptor-level facts, then one overlay per
    /// nesting level.
    pub fn compose(
        scope_id: &str,
        filename: &str,
        slotted: bool,
        scoped: bool,
        detected: &BTreeSet<SyntaxExtension>,
        overlay: &CompileOverlay,
    ) -> Self {
        let expression = ExpressionConfig::computed(filename, scope_id, slotted, detected);
        let template = TemplateConfig::computed(expression, filename, scope_id, scoped, slotted)
            .layered(&overlay.script.template);
        Self {
            id: scope_id.to_string(),
            inline_template: false,
            template,
        }
        .layered(&overlay.script)
    }

    fn layered(self, overlay: &ScriptOverlay) -> Self {
        Self {
            id: overlay.id.clone().unwrap_or(self.id),
            inline_template: overlay.inline_template.unwrap_or(self.inline_template),
            // The template layer was already applied during composition.
            template: self.template,
        }
    }
}

/// Per-block options for the style compiler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    pub filename: String,
    pub id: String,
    pub modules: bool,
    pub scoped: bool,
    pub source: String,
}

impl StyleConfig {
    /// Options for one style block: block-declared flags as defaults, the
    /// caller's style overlay on top.
    pub fn for_block(
        filename: &str,
        id: &str,
        block: &StyleBlock,
        source: String,
        overlay: &StyleOverlay,
    ) -> Self {
        Self {
            filename: filename.to_string(),
            id: id.to_string(),
            modules: overlay.modules.unwrap_or(block.module),
            scoped: overlay.scoped.unwrap_or(block.scoped),
            source,
        }
    }
}

/// Caller overlay for descriptor parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseOverlay {
    /// Overrides the synthetic `<hash>.vue` filename.
    pub filename: Option<String>,
}

/// Caller overlay for the expression layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpressionOverlay {
    pub expression_plugins: Option<Vec<SyntaxExtension>>,
    pub filename: Option<String>,
    pub scope_id: Option<String>,
    pub slotted: Option<bool>,
}

/// Caller overlay for the template layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateOverlay {
    pub compiler: ExpressionOverlay,
    pub filename: Option<String>,
    pub id: Option<String>,
    pub scoped: Option<bool>,
    pub slotted: Option<bool>,
}

/// Caller overlay for the script layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScriptOverlay {
    pub id: Option<String>,
    pub inline_template: Option<bool>,
    pub template: TemplateOverlay,
}

/// Caller overlay for the style layer, applied to every style block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleOverlay {
    pub modules: Option<bool>,
    pub scoped: Option<bool>,
}

/// The three independently-optional caller overlays for one compile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompileOverlay {
    pub parse: ParseOverlay,
    pub script: ScriptOverlay,
    pub style: StyleOverlay,
}
