//! Style compilation and injection.
//!
//! Styles are compiled at most once per scope identifier: if the registry
//! already holds an entry for the identifier, the whole stage is skipped.
//! Because the identifier is derived from source text alone, repeated
//! compiles of identical text with *different* style overlays silently
//! reuse the previously injected output — a known staleness risk, kept for
//! parity with the observable skip-if-present behavior.

use futures::future::join_all;
use tracing::error;

use crate::descriptor::SfcDescriptor;
use crate::diagnostics::Diagnostics;
use crate::options::{StyleConfig, StyleOverlay};
use crate::services::{RemoteSource, StyleCompiler, StyleRegistry};

/// Warning emitted once when any style block asks for CSS-module output.
pub const MODULE_STYLES_UNSUPPORTED: &str =
    "<style module> is not supported in the playground.";

/// Resolve an external style source to text.
///
/// Never raises: a collaborator failure is logged once on the error channel
/// and converted to `None`.
pub(crate) async fn fetch_style_source(remote: &dyn RemoteSource, url: &str) -> Option<String> {
    match remote.get_text(url).await {
        Ok(text) => Some(text),
        Err(err) => {
            error!("{err}");
            None
        }
    }
}

/// Compile every style block and inject the concatenated result.
///
/// Returns the per-block style texts and the diagnostics the stage
/// accumulated. Module-flagged blocks contribute empty text and a single
/// warning regardless of how many there are. Injection happens here, inside
/// the style task, so a completed style stage leaves its entry in the
/// registry even if a sibling task later fails the invocation.
pub(crate) async fn compile_style_blocks(
    descriptor: &SfcDescriptor,
    scope_id: &str,
    overlay: &StyleOverlay,
    compiler: &dyn StyleCompiler,
    remote: &dyn RemoteSource,
    registry: &dyn StyleRegistry,
) -> (Vec<String>, Diagnostics) {
    // Compile-once-per-identifier: an existing entry skips the stage.
    if registry.contains(scope_id) {
        return (Vec::new(), Diagnostics::new());
    }

    let mut diagnostics = Diagnostics::new();
    if descriptor.styles.iter().any(|block| block.module) {
        diagnostics.warning(MODULE_STYLES_UNSUPPORTED);
    }

    let blocks = descriptor.styles.iter().map(|block| async move {
        if block.module {
            return (String::new(), Vec::new());
        }
        let source = match &block.src {
            Some(url) => fetch_style_source(remote, url).await.unwrap_or_default(),
            None => block.content.clone(),
        };
        let config =
            StyleConfig::for_block(&descriptor.filename, scope_id, block, source, overlay);
        let output = compiler.compile_style(&config).await;
        (output.code, output.errors)
    });

    let mut texts = Vec::with_capacity(descriptor.styles.len());
    for (code, errors) in join_all(blocks).await {
        diagnostics.extend_errors(errors);
        texts.push(code);
    }

    let combined = texts.join("\n");
    let combined = combined.trim();
    if !combined.is_empty() {
        registry.insert(scope_id, combined);
    }

    (texts, diagnostics)
}
