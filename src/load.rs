//! Loading of generated code.
//!
//! Generated script and template code goes through an optional downleveling
//! pass and then the host's module loader. The downleveling pass runs only
//! when language detection produced a non-empty transform set; plain
//! scripts load unmodified.

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::error::PipelineError;
use crate::lang::SyntaxExtension;
use crate::services::{Downleveler, JsxRuntimeMode, ModuleExports, ModuleLoader};

/// Downlevel (if required) and load one piece of generated code.
///
/// Both downlevel and load failures are fatal-class and propagate. The
/// loader adapter releases its transient module resource on either outcome.
pub(crate) async fn load_compiled_module(
    code: &str,
    transforms: &BTreeSet<SyntaxExtension>,
    downleveler: &dyn Downleveler,
    loader: &dyn ModuleLoader,
) -> Result<ModuleExports, PipelineError> {
    let runnable = if transforms.is_empty() {
        Cow::Borrowed(code)
    } else {
        Cow::Owned(downleveler.downlevel(code, transforms, JsxRuntimeMode::Preserve)?)
    };
    loader.load_module(&runnable).await
}
