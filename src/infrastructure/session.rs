//! Per-browser-session runtimes
//!
//! Every visit to `/` starts a new session at the Home panel. Sessions live
//! in memory only; the oldest is dropped once the store is full.

use std::{
    collections::{HashMap, VecDeque},
    fs,
    io::ErrorKind,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use uuid::Uuid;

use crate::{
    core::{cmd_executor::CmdExecutor, state::AppState},
    infrastructure::export::FileExporter,
    integration::runtime::Runtime,
};

pub type SessionId = Uuid;

pub type SharedRuntime = Arc<Mutex<Runtime>>;

#[derive(Debug, Default)]
struct Sessions {
    runtimes: HashMap<SessionId, SharedRuntime>,
    // Creation order, oldest first
    order: VecDeque<SessionId>,
}

#[derive(Debug)]
pub struct SessionStore {
    sessions: Mutex<Sessions>,
    exporter: FileExporter,
    isolate: bool,
    capacity: usize,
}

impl SessionStore {
    /// `isolate` gives each session its own subdirectory of the exporter's
    /// output directory.
    pub fn new(exporter: FileExporter, isolate: bool, capacity: usize) -> Self {
        Self {
            sessions: Mutex::new(Sessions::default()),
            exporter,
            isolate,
            capacity: capacity.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Sessions> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Exporter used by the given session
    pub fn exporter_for(&self, id: SessionId) -> FileExporter {
        if self.isolate {
            self.exporter.scoped(&id.to_string())
        } else {
            self.exporter.clone()
        }
    }

    /// Start a new session with Home visible
    pub fn create(&self) -> SessionId {
        let id = Uuid::new_v4();
        let executor = CmdExecutor::new(self.exporter_for(id));
        let runtime = Runtime::new_with_executor(AppState::new(), executor);

        let mut evicted = Vec::new();
        {
            let mut sessions = self.lock();
            while sessions.order.len() >= self.capacity {
                if let Some(oldest) = sessions.order.pop_front() {
                    sessions.runtimes.remove(&oldest);
                    evicted.push(oldest);
                }
            }
            sessions.order.push_back(id);
            sessions.runtimes.insert(id, Arc::new(Mutex::new(runtime)));
            tracing::info!(session = %id, active = sessions.runtimes.len(), "session started");
        }

        for oldest in evicted {
            tracing::debug!(session = %oldest, "session evicted");
            self.remove_exports(oldest);
        }
        id
    }

    /// Delete the output directory of an isolated session
    fn remove_exports(&self, id: SessionId) {
        if !self.isolate {
            return;
        }
        let exporter = self.exporter_for(id);
        let dir = exporter.output_dir();
        match fs::remove_dir_all(dir) {
            Ok(()) => tracing::debug!(session = %id, dir = %dir.display(), "removed session exports"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(session = %id, dir = %dir.display(), "Failed to remove session exports: {e}")
            }
        }
    }

    pub fn get(&self, id: SessionId) -> Option<SharedRuntime> {
        self.lock().runtimes.get(&id).cloned()
    }

    /// Run `f` against a session's runtime.
    ///
    /// The store lock is released before `f` runs, so sessions don't block
    /// each other.
    pub fn with_session<T>(&self, id: SessionId, f: impl FnOnce(&mut Runtime) -> T) -> Option<T> {
        let runtime = self.get(id)?;
        let mut runtime = runtime.lock().unwrap_or_else(PoisonError::into_inner);
        Some(f(&mut runtime))
    }

    pub fn len(&self) -> usize {
        self.lock().runtimes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
