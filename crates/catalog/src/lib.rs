//! Catalog domain module.
//!
//! Holds the `Categoria` entity and the rules guarding its state. Pure domain
//! logic: no IO, no HTTP, no storage.

pub mod categoria;
pub mod record;
pub mod rules;

pub use categoria::{Categoria, CategoriaId, NewCategoria};
pub use record::CategoriaRecord;
pub use rules::{Rule, ValidationError, ValidationResult};
