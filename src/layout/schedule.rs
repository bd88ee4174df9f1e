//! Reflow request coalescing

/// Collapses bursts of edit notifications into a single pending reflow.
/// Hosts call [`ReflowScheduler::request`] on every edit and drain the
/// flag when they are ready to lay out, so typing ten characters between
/// two frames costs one reflow, not ten.
#[derive(Debug, Default)]
pub struct ReflowScheduler {
    pending: bool,
}

impl ReflowScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Note that content changed and a reflow is due
    pub fn request(&mut self) {
        self.pending = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume the pending request, if any
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}
