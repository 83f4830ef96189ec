// Application state for HTTP handlers
use crate::application::warnings_service::WarningsService;
use crate::domain::observation::ValidationMode;
use crate::domain::session::Session;
use std::collections::HashMap;
use tokio::sync::Mutex;

pub struct AppState {
    pub warnings_service: WarningsService,
    pub sessions: SessionStore,
}

/// Sessions keyed by client-chosen id.
///
/// Only writes open a session; reads of an unknown id see `None`.
pub struct SessionStore {
    mode: ValidationMode,
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub async fn with_session<R>(&self, id: &str, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.entry(id.to_string()).or_insert_with(|| {
            tracing::debug!("Opening session {}", id);
            Session::new(self.mode)
        });
        f(session)
    }

    pub async fn read<R>(&self, id: &str, f: impl FnOnce(Option<&Session>) -> R) -> R {
        let sessions = self.sessions.lock().await;
        f(sessions.get(id))
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}
