use std::path::PathBuf;

/// Where the screen is in its life.
///
/// `Disposed` is terminal: scroll ticks and load completions can still be in
/// flight when the screen goes away, and every handler checks liveness before
/// touching state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentLifecycle {
    Unloaded,
    Loaded,
    Disposed,
}

/// Document-related model.
pub struct DocumentState {
    pub(in crate::app) path: PathBuf,
    pub(in crate::app) title: Option<String>,
    pub(in crate::app) page_count: usize,
    pub(in crate::app) lifecycle: DocumentLifecycle,
    pub(in crate::app) load_error: Option<String>,
    /// Identifies the in-flight load; completions carrying a stale id are
    /// dropped.
    pub(in crate::app) request_id: u64,
}

impl DocumentState {
    pub(in crate::app) fn new(path: PathBuf) -> Self {
        Self {
            path,
            title: None,
            page_count: 0,
            lifecycle: DocumentLifecycle::Unloaded,
            load_error: None,
            request_id: 0,
        }
    }

    pub(in crate::app) fn is_live(&self) -> bool {
        self.lifecycle != DocumentLifecycle::Disposed
    }

    pub(in crate::app) fn mark_loaded(&mut self, page_count: usize, title: Option<String>) {
        if self.lifecycle == DocumentLifecycle::Disposed {
            return;
        }
        self.page_count = page_count;
        self.title = title;
        self.load_error = None;
        self.lifecycle = DocumentLifecycle::Loaded;
    }

    pub(in crate::app) fn dispose(&mut self) {
        self.lifecycle = DocumentLifecycle::Disposed;
    }

    /// Name shown in the top bar: the PDF title, or the file name as a
    /// fallback.
    pub(in crate::app) fn display_name(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
