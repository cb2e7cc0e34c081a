use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use codeflix_core::{Clock, DomainError, DomainResult, Entity, EntityId, SystemClock};

use crate::record::CategoriaRecord;
use crate::rules::{self, ValidationError, ValidationResult};

/// Categoria identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoriaId(pub EntityId);

impl CategoriaId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }

    /// Fresh, never-nil identifier.
    pub fn generate() -> Self {
        Self(EntityId::new())
    }
}

impl core::fmt::Display for CategoriaId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Input for [`Categoria::create`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategoria {
    pub name: String,
    pub description: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl NewCategoria {
    /// Active by default.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            active: true,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Entity: Categoria (catalog category).
///
/// Every constructor and mutator leaves the value satisfying the field rules in
/// [`rules`]; a `Categoria` that exists is always valid. `id` and `created_at`
/// are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Categoria {
    id: CategoriaId,
    name: String,
    description: String,
    active: bool,
    created_at: DateTime<Utc>,
}

impl Categoria {
    /// Create an active categoria stamped with the system clock.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> ValidationResult<Self> {
        Self::create(NewCategoria::new(name, description), SystemClock)
    }

    /// Create a categoria with an explicit active flag, stamped with the system clock.
    pub fn with_active(
        name: impl Into<String>,
        description: impl Into<String>,
        active: bool,
    ) -> ValidationResult<Self> {
        Self::create(NewCategoria::new(name, description).active(active), SystemClock)
    }

    /// Create a categoria, reading `created_at` from `clock`.
    pub fn create(input: NewCategoria, clock: impl Clock) -> ValidationResult<Self> {
        let NewCategoria {
            name,
            description,
            active,
        } = input;

        rules::validate(Some(name.as_str()), Some(description.as_str())).map_err(rejected)?;

        let categoria = Self {
            id: CategoriaId::generate(),
            name,
            description,
            active,
            created_at: clock.now(),
        };

        tracing::debug!(
            categoria_id = %categoria.id,
            active = categoria.active,
            "categoria created"
        );
        Ok(categoria)
    }

    /// Rehydrate a stored categoria, keeping its id and creation time.
    ///
    /// Field violations surface as [`DomainError::Validation`]; a nil id as
    /// [`DomainError::InvalidId`].
    pub fn restore(record: CategoriaRecord) -> DomainResult<Self> {
        let CategoriaRecord {
            id,
            name,
            description,
            active,
            created_at,
        } = record;

        if id.0.is_nil() {
            tracing::debug!("categoria rejected: nil id");
            return Err(DomainError::invalid_id("CategoriaId: nil"));
        }
        rules::validate(name.as_deref(), description.as_deref()).map_err(rejected)?;

        Ok(Self {
            id,
            name: name.unwrap_or_default(),
            description: description.unwrap_or_default(),
            active,
            created_at,
        })
    }

    pub fn to_record(&self) -> CategoriaRecord {
        CategoriaRecord {
            id: self.id,
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            active: self.active,
            created_at: self.created_at,
        }
    }

    pub fn id_typed(&self) -> CategoriaId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Mark as active. Idempotent.
    pub fn activate(&mut self) -> ValidationResult<()> {
        self.active = true;
        self.validate()?;
        tracing::debug!(categoria_id = %self.id, "categoria activated");
        Ok(())
    }

    /// Mark as inactive. Idempotent.
    pub fn deactivate(&mut self) -> ValidationResult<()> {
        self.active = false;
        self.validate()?;
        tracing::debug!(categoria_id = %self.id, "categoria deactivated");
        Ok(())
    }

    /// Replace the name, and the description when one is given.
    ///
    /// The resulting state is validated before anything is written: on error
    /// the categoria keeps its previous name and description.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> ValidationResult<()> {
        let name = name.into();
        let next_description = description.as_deref().unwrap_or(&self.description);

        rules::validate(Some(name.as_str()), Some(next_description)).map_err(|err| {
            tracing::debug!(
                categoria_id = %self.id,
                rule = err.rule().code(),
                "categoria update rejected"
            );
            err
        })?;

        self.name = name;
        if let Some(description) = description {
            self.description = description;
        }

        tracing::debug!(categoria_id = %self.id, "categoria updated");
        Ok(())
    }

    fn validate(&self) -> ValidationResult<()> {
        rules::validate(Some(self.name.as_str()), Some(self.description.as_str()))
    }
}

impl Entity for Categoria {
    type Id = CategoriaId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn rejected(err: ValidationError) -> ValidationError {
    tracing::debug!(rule = err.rule().code(), "categoria rejected");
    err
}
