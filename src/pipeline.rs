//! The compile-and-load pipeline.
//!
//! One invocation is one pass: parse, detect languages, compose options,
//! compile script, merge binding metadata, compile template, then run the
//! style stage and the two module loads concurrently, inject styles, and
//! assemble the component object. No retries, no incremental caching beyond
//! the style registry's per-identifier dedup.

use serde_json::Value;

use crate::descriptor::ParsedSfc;
use crate::diagnostics::Diagnostics;
use crate::error::PipelineError;
use crate::lang::detect_extensions;
use crate::load::load_compiled_module;
use crate::options::{CompileOverlay, ScriptConfig};
use crate::scope::{content_hash, scope_id, SCOPE_ID_KEY};
use crate::services::{
    Downleveler, ModuleExports, ModuleLoader, RemoteSource, ScriptCompiler, SfcParser,
    StyleCompiler, StyleRegistry, TemplateCompiler,
};
use crate::styles::compile_style_blocks;

/// Placeholder parsed in place of empty source text.
pub const EMPTY_TEMPLATE: &str = "<template></template>";

/// The assembled pipeline: every seam is an injected collaborator.
pub struct SfcPipeline {
    pub parser: Box<dyn SfcParser>,
    pub scripts: Box<dyn ScriptCompiler>,
    pub templates: Box<dyn TemplateCompiler>,
    pub styles: Box<dyn StyleCompiler>,
    pub downleveler: Box<dyn Downleveler>,
    pub remote: Box<dyn RemoteSource>,
    pub loader: Box<dyn ModuleLoader>,
    pub registry: Box<dyn StyleRegistry>,
}

impl SfcPipeline {
    /// Compile one component source text into a runnable component object.
    ///
    /// Diagnostic-class failures are logged and absorbed; the result is
    /// best-effort (a failed block contributes nothing). Fatal-class
    /// failures — script compiler rejection, downleveling failure, module
    /// load failure — abort the invocation with an error, after every
    /// in-flight concurrent task has run to completion.
    pub async fn compile(
        &self,
        source: &str,
        overlay: &CompileOverlay,
    ) -> Result<ModuleExports, PipelineError> {
        let hash = content_hash(source);
        let id = scope_id(&hash);
        let effective = if source.is_empty() { EMPTY_TEMPLATE } else { source };
        let filename = overlay
            .parse
            .filename
            .clone()
            .unwrap_or_else(|| format!("{hash}.vue"));

        let ParsedSfc {
            descriptor,
            errors: parse_errors,
        } = self.parser.parse(effective, &filename, &overlay.parse).await;

        let mut diagnostics = Diagnostics::new();
        diagnostics.extend_errors(parse_errors);

        let transforms = detect_extensions(&descriptor);
        let script_config = ScriptConfig::compose(
            &id,
            &descriptor.filename,
            descriptor.slotted,
            descriptor.has_scoped_style(),
            &transforms,
            overlay,
        );

        let script_output = if descriptor.has_script() {
            Some(
                self.scripts
                    .compile_script(&descriptor, &script_config)
                    .await?,
            )
        } else {
            None
        };
        if let Some(output) = &script_output {
            diagnostics.extend_warnings(output.warnings.iter().cloned());
        }

        // Binding metadata must reach the template configuration before
        // template compilation starts; this ordering is a correctness
        // requirement, not an optimization.
        let template_config = match script_output.as_ref().and_then(|o| o.bindings.clone()) {
            Some(bindings) => script_config.template.clone().with_bindings(bindings),
            None => script_config.template.clone(),
        };

        let inlined = descriptor.script_setup.is_some() && script_config.inline_template;
        let template_output = match &descriptor.template {
            Some(template) if !inlined => Some(
                self.templates
                    .compile_template(template, &template_config)
                    .await,
            ),
            _ => None,
        };
        if let Some(output) = &template_output {
            diagnostics.extend_errors(output.errors.iter().cloned());
            diagnostics.extend_tips(output.tips.iter().cloned());
        }
        diagnostics.flush();

        let style_stage = compile_style_blocks(
            &descriptor,
            &id,
            &overlay.style,
            self.styles.as_ref(),
            self.remote.as_ref(),
            self.registry.as_ref(),
        );

        let script_code = script_output
            .as_ref()
            .map(|o| o.code.as_str())
            .filter(|code| !code.is_empty());
        let template_code = template_output
            .as_ref()
            .map(|o| o.code.as_str())
            .filter(|code| !code.is_empty());

        let script_load = async {
            match script_code {
                Some(code) => load_compiled_module(
                    code,
                    &transforms,
                    self.downleveler.as_ref(),
                    self.loader.as_ref(),
                )
                .await
                .map(Some),
                None => Ok(None),
            }
        };
        let template_load = async {
            match template_code {
                Some(code) => load_compiled_module(
                    code,
                    &transforms,
                    self.downleveler.as_ref(),
                    self.loader.as_ref(),
                )
                .await
                .map(Some),
                None => Ok(None),
            }
        };

        // All three tasks run to completion before any failure surfaces;
        // a sibling already in flight is never cancelled.
        let ((_, style_diagnostics), script_module, template_module) =
            futures::join!(style_stage, script_load, template_load);
        style_diagnostics.flush();
        let script_module = script_module?;
        let template_module = template_module?;

        Ok(assemble(&id, script_module, template_module))
    }
}

/// Merge the loaded modules into the final component object: the scope
/// identifier under its reserved key, then the script module's default
/// export, then the template module's exports — later entries win, so a
/// template-generated render function overrides a script-provided one.
fn assemble(
    scope_id: &str,
    script: Option<ModuleExports>,
    template: Option<ModuleExports>,
) -> ModuleExports {
    let mut component = ModuleExports::new();
    component.insert(
        SCOPE_ID_KEY.to_string(),
        Value::String(scope_id.to_string()),
    );
    if let Some(exports) = script {
        if let Some(Value::Object(default_export)) = exports.get("default") {
            for (key, value) in default_export {
                component.insert(key.clone(), value.clone());
            }
        }
    }
    if let Some(exports) = template {
        for (key, value) in exports {
            component.insert(key, value);
        }
    }
    component
}
