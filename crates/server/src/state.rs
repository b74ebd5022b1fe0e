use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::notify::Notifier;

/// Shared per-request state: the connection pool and the optional mail path.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub notifier: Option<Arc<Notifier>>,
}
