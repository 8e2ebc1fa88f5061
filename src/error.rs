//! Fatal-class pipeline failures.

use thiserror::Error;

/// Failures that abort an entire compile invocation.
///
/// Everything else (parse errors, template/style compile errors, warnings,
/// tips, fetch failures) is diagnostic-class and flows through
/// [`Diagnostics`](crate::diagnostics::Diagnostics) without interrupting
/// the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The script compiler collaborator rejected the component.
    #[error("script compilation failed: {0}")]
    ScriptCompile(String),

    /// The syntax downleveling transform rejected generated code.
    #[error("syntax downleveling failed: {0}")]
    Downlevel(String),

    /// A generated module failed to load.
    #[error("module load failed: {0}")]
    ModuleLoad(String),

    /// A remote style source could not be retrieved. Raised by the
    /// [`RemoteSource`](crate::services::RemoteSource) collaborator and
    /// absorbed (logged, treated as empty) by the style stage.
    #[error("fetch failed for {url}: {message}")]
    Fetch { url: String, message: String },
}
