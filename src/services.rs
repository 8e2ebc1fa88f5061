//! Collaborator contracts.
//!
//! The pipeline composes external compiler services; it implements none of
//! them. Every seam is a trait so hosts can plug in a real platform
//! (a browser-backed loader and page registry, an HTTP fetcher, the actual
//! block compilers) and tests can plug in fixtures. Traits are `?Send`:
//! the whole pipeline runs under single-threaded cooperative scheduling.

use std::collections::BTreeSet;

use async_trait::async_trait;
use serde_json::Value;

use crate::descriptor::{ParsedSfc, SfcDescriptor, TemplateBlock};
use crate::error::PipelineError;
use crate::lang::SyntaxExtension;
use crate::options::{BindingMetadata, ParseOverlay, ScriptConfig, StyleConfig, TemplateConfig};

/// Exported bindings of one loaded module, keyed by export name.
pub type ModuleExports = serde_json::Map<String, Value>;

/// Script compilation result.
#[derive(Debug, Clone, Default)]
pub struct ScriptOutput {
    /// Generated executable code.
    pub code: String,
    /// Names the template may reference. Must be merged into the template
    /// configuration before template compilation starts.
    pub bindings: Option<BindingMetadata>,
    pub warnings: Vec<String>,
}

/// Template compilation result. Errors and tips are diagnostic-class.
#[derive(Debug, Clone, Default)]
pub struct TemplateOutput {
    pub code: String,
    pub errors: Vec<String>,
    pub tips: Vec<String>,
}

/// Style compilation result for one block. Errors are diagnostic-class.
#[derive(Debug, Clone, Default)]
pub struct StyleOutput {
    pub code: String,
    pub errors: Vec<String>,
}

/// How JSX survives downleveling. The pipeline always preserves it; the
/// template compiler owns JSX, not the downleveler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsxRuntimeMode {
    #[default]
    Preserve,
    Transform,
}

/// Splits component source text into a [`SfcDescriptor`].
#[async_trait(?Send)]
pub trait SfcParser {
    /// Parse `source` under the given synthetic filename. Parse errors are
    /// reported in the result, never raised.
    async fn parse(&self, source: &str, filename: &str, overlay: &ParseOverlay) -> ParsedSfc;
}

/// Compiles the script and setup-script blocks of a descriptor.
#[async_trait(?Send)]
pub trait ScriptCompiler {
    /// Invoked only when a script or setup-script block is present. An
    /// `Err` is fatal-class and aborts the invocation.
    async fn compile_script(
        &self,
        descriptor: &SfcDescriptor,
        config: &ScriptConfig,
    ) -> Result<ScriptOutput, PipelineError>;
}

/// Compiles a template block into render code.
#[async_trait(?Send)]
pub trait TemplateCompiler {
    async fn compile_template(
        &self,
        template: &TemplateBlock,
        config: &TemplateConfig,
    ) -> TemplateOutput;
}

/// Compiles one style block.
#[async_trait(?Send)]
pub trait StyleCompiler {
    async fn compile_style(&self, config: &StyleConfig) -> StyleOutput;
}

/// Downlevels extended syntax in generated code to the baseline language.
pub trait Downleveler {
    /// Apply exactly the requested transforms. An `Err` is fatal-class.
    fn downlevel(
        &self,
        code: &str,
        transforms: &BTreeSet<SyntaxExtension>,
        jsx: JsxRuntimeMode,
    ) -> Result<String, PipelineError>;
}

/// Retrieves external style source text.
#[async_trait(?Send)]
pub trait RemoteSource {
    /// Fetch the resource as text. Errors are absorbed by the style stage
    /// (logged once, treated as an empty source).
    async fn get_text(&self, url: &str) -> Result<String, PipelineError>;
}

/// Loads generated executable code as a module and captures its exports.
///
/// Implementations own the transient module resource: it must be created
/// immediately before the import and released immediately after, whether
/// or not the import succeeds. Import failures propagate as
/// [`PipelineError::ModuleLoad`] and are fatal-class.
#[async_trait(?Send)]
pub trait ModuleLoader {
    async fn load_module(&self, code: &str) -> Result<ModuleExports, PipelineError>;
}

/// The page's style registry, keyed by scope identifier.
///
/// Only a presence check guards the check-then-insert sequence; that is
/// correct under cooperative scheduling but not against truly parallel
/// invocations.
pub trait StyleRegistry {
    fn contains(&self, id: &str) -> bool;
    /// Register style text for an identifier. At most one entry per
    /// identifier may ever exist; the style stage checks `contains` first.
    fn insert(&self, id: &str, text: &str);
}

/// A shared registry is still a registry; pages outlive pipelines.
impl<T: StyleRegistry + ?Sized> StyleRegistry for std::sync::Arc<T> {
    fn contains(&self, id: &str) -> bool {
        (**self).contains(id)
    }

    fn insert(&self, id: &str, text: &str) {
        (**self).insert(id, text)
    }
}
