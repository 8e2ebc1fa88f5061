//! Diagnostics accumulation and channel routing.
//!
//! Parse errors, compile errors, warnings, and tips are diagnostic-class:
//! collected here, routed to the matching log channel, and never allowed to
//! abort a compile. Fatal-class failures travel as
//! [`PipelineError`](crate::error::PipelineError) instead.

use tracing::{error, info, warn};

/// Three ordered diagnostic channels accumulated across pipeline stages.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    errors: Vec<String>,
    warnings: Vec<String>,
    tips: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn tip(&mut self, message: impl Into<String>) {
        self.tips.push(message.into());
    }

    pub fn extend_errors<I, S>(&mut self, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors.extend(messages.into_iter().map(Into::into));
    }

    pub fn extend_warnings<I, S>(&mut self, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.warnings.extend(messages.into_iter().map(Into::into));
    }

    pub fn extend_tips<I, S>(&mut self, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tips.extend(messages.into_iter().map(Into::into));
    }

    /// Merge another accumulation, preserving per-channel order.
    pub fn absorb(&mut self, other: Diagnostics) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.tips.extend(other.tips);
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty() && self.tips.is_empty()
    }

    /// Route every accumulated message to its log channel. Fire-and-forget;
    /// callers continue regardless of what was logged.
    pub fn flush(&self) {
        for message in &self.errors {
            error!("{message}");
        }
        for message in &self.warnings {
            warn!("{message}");
        }
        for message in &self.tips {
            info!("{message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_accumulate_in_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.error("first");
        diagnostics.error("second");
        diagnostics.warning("careful");
        diagnostics.tip("hint");
        assert_eq!(diagnostics.errors(), ["first", "second"]);
        assert_eq!(diagnostics.warnings(), ["careful"]);
        assert_eq!(diagnostics.tips(), ["hint"]);
        assert!(!diagnostics.is_empty());
    }

    #[test]
    fn absorb_appends_per_channel() {
        let mut base = Diagnostics::new();
        base.error("a");
        let mut more = Diagnostics::new();
        more.error("b");
        more.tip("t");
        base.absorb(more);
        assert_eq!(base.errors(), ["a", "b"]);
        assert_eq!(base.tips(), ["t"]);
    }

    #[test]
    fn empty_by_default() {
        assert!(Diagnostics::new().is_empty());
    }
}
