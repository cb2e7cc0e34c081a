//! Storage shape of a `Categoria`.
//!
//! Text columns are nullable on the storage side, so they are modelled as
//! `Option`. Turning a record back into an entity goes through
//! [`Categoria::restore`](crate::Categoria::restore), which applies the same
//! rules as construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::categoria::CategoriaId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriaRecord {
    pub id: CategoriaId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
