//! Content-type registry model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered content-type tag that documents may carry.
///
/// The registry is seeded by migration; document create/update validates
/// the tag against this table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContentType {
    /// Unique identifier.
    pub id: Uuid,
    /// The tag itself, e.g. `text/markdown`.
    pub name: String,
}
