use anyhow::Result;
use chrono::{DateTime, Utc};
use codeflix_catalog::{Categoria, CategoriaRecord, NewCategoria, Rule};
use codeflix_core::{DomainError, Entity, FixedClock};

const NAME_REQUIRED: &str = "Nome não pode ser vazio ou nulo.";
const NAME_TOO_SHORT: &str = "Nome não pode ser menor que 3 caracteres.";
const NAME_TOO_LONG: &str = "Nome não pode ser maior que 255 caracteres.";
const DESCRIPTION_REQUIRED: &str = "Descricao não pode ser nulo.";
const DESCRIPTION_TOO_LONG: &str = "Descricao não conter mais que 10000 caracteres.";

struct Fixture;

impl Fixture {
    fn setup() -> Self {
        codeflix_observability::init_for_tests();
        Self
    }

    fn valid_name(&self) -> String {
        "Eletrônicos".to_string()
    }

    fn valid_description(&self) -> String {
        "Televisores, fones de ouvido e acessórios para casa.".to_string()
    }

    fn valid_categoria(&self) -> Categoria {
        Categoria::new(self.valid_name(), self.valid_description())
            .expect("fixture categoria must be valid")
    }
}

#[test]
fn new_categoria_is_active_with_fresh_identity() -> Result<()> {
    let fx = Fixture::setup();

    let before = Utc::now();
    let categoria = Categoria::new(fx.valid_name(), fx.valid_description())?;
    let after = Utc::now();

    assert_eq!(categoria.name(), fx.valid_name());
    assert_eq!(categoria.description(), fx.valid_description());
    assert!(categoria.is_active());
    assert!(!categoria.id().0.is_nil());
    assert!(before <= categoria.created_at());
    assert!(categoria.created_at() <= after);
    Ok(())
}

#[test]
fn explicit_active_flag_is_kept() -> Result<()> {
    let fx = Fixture::setup();

    for active in [true, false] {
        let categoria = Categoria::with_active(fx.valid_name(), fx.valid_description(), active)?;
        assert_eq!(categoria.is_active(), active);
    }
    Ok(())
}

#[test]
fn blank_names_are_rejected() {
    let fx = Fixture::setup();

    for name in ["", "   "] {
        let err = Categoria::new(name, fx.valid_description()).unwrap_err();
        assert_eq!(err.to_string(), NAME_REQUIRED);
    }
}

#[test]
fn names_of_three_characters_or_less_are_rejected() {
    let fx = Fixture::setup();
    let valid = fx.valid_name();

    for len in 1..=3 {
        let name: String = valid.chars().take(len).collect();
        let err = Categoria::new(name, fx.valid_description()).unwrap_err();
        assert_eq!(err.to_string(), NAME_TOO_SHORT);
    }
}

#[test]
fn name_length_upper_bound() {
    let fx = Fixture::setup();

    assert!(Categoria::new("a".repeat(255), fx.valid_description()).is_ok());

    let err = Categoria::new("a".repeat(256), fx.valid_description()).unwrap_err();
    assert_eq!(err.to_string(), NAME_TOO_LONG);
}

#[test]
fn description_length_upper_bound() {
    let fx = Fixture::setup();

    assert!(Categoria::new(fx.valid_name(), "a".repeat(10_000)).is_ok());

    let err = Categoria::new(fx.valid_name(), "a".repeat(10_001)).unwrap_err();
    assert_eq!(err.to_string(), DESCRIPTION_TOO_LONG);
}

#[test]
fn missing_description_is_rejected_on_restore() {
    let fx = Fixture::setup();

    let mut record = fx.valid_categoria().to_record();
    record.description = None;

    let err = Categoria::restore(record).unwrap_err();
    assert_eq!(err, DomainError::Validation(DESCRIPTION_REQUIRED.to_string()));
}

#[test]
fn nil_id_is_rejected_on_restore() -> Result<()> {
    let fx = Fixture::setup();
    let mut value = serde_json::to_value(fx.valid_categoria().to_record())?;
    value["id"] = serde_json::json!("00000000-0000-0000-0000-000000000000");

    let record: CategoriaRecord = serde_json::from_value(value)?;
    let err = Categoria::restore(record).unwrap_err();
    assert!(matches!(err, DomainError::InvalidId(_)), "got {err:?}");
    Ok(())
}

#[test]
fn deactivate_then_activate() -> Result<()> {
    let fx = Fixture::setup();
    let mut categoria = Categoria::with_active(fx.valid_name(), fx.valid_description(), false)?;

    categoria.activate()?;
    assert!(categoria.is_active());

    categoria.deactivate()?;
    assert!(!categoria.is_active());

    categoria.activate()?;
    categoria.activate()?;
    assert!(categoria.is_active());
    Ok(())
}

#[test]
fn update_name_and_description() -> Result<()> {
    let fx = Fixture::setup();
    let mut categoria = fx.valid_categoria();

    categoria.update("Livros", Some("Ficção e não ficção".to_string()))?;

    assert_eq!(categoria.name(), "Livros");
    assert_eq!(categoria.description(), "Ficção e não ficção");
    Ok(())
}

#[test]
fn update_name_only() -> Result<()> {
    let fx = Fixture::setup();
    let mut categoria = fx.valid_categoria();
    let description = categoria.description().to_string();

    categoria.update("Brinquedos", None)?;

    assert_eq!(categoria.name(), "Brinquedos");
    assert_eq!(categoria.description(), description);
    Ok(())
}

#[test]
fn update_rejects_invalid_names_with_construction_messages() {
    let fx = Fixture::setup();
    let cases = [
        (String::new(), NAME_REQUIRED),
        ("   ".to_string(), NAME_REQUIRED),
        ("ab".to_string(), NAME_TOO_SHORT),
        ("a".repeat(256), NAME_TOO_LONG),
    ];

    for (name, message) in cases {
        let mut categoria = fx.valid_categoria();
        let err = categoria.update(name, None).unwrap_err();
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn emoji_count_as_two_code_units() {
    let fx = Fixture::setup();

    assert!(Categoria::new("😀😀", fx.valid_description()).is_ok());

    let err = Categoria::new("😀".repeat(128), fx.valid_description()).unwrap_err();
    assert_eq!(err.to_string(), NAME_TOO_LONG);

    let err = Categoria::new(fx.valid_name(), "😀".repeat(5_001)).unwrap_err();
    assert_eq!(err.to_string(), DESCRIPTION_TOO_LONG);
}

#[test]
fn update_rejects_oversized_description() {
    let fx = Fixture::setup();
    let mut categoria = fx.valid_categoria();

    let mut description = fx.valid_description();
    while description.encode_utf16().count() <= 10_000 {
        description.push(' ');
        description.push_str(&fx.valid_description());
    }

    let err = categoria
        .update("Categoria Nome Válido", Some(description))
        .unwrap_err();
    assert_eq!(err.to_string(), DESCRIPTION_TOO_LONG);
}

#[test]
fn failed_update_does_not_apply_partial_changes() {
    let fx = Fixture::setup();
    let mut categoria = fx.valid_categoria();

    let err = categoria
        .update("Nome novo e válido", Some("a".repeat(10_001)))
        .unwrap_err();

    assert_eq!(err.rule(), Rule::DescriptionTooLong);
    assert_eq!(categoria.name(), fx.valid_name());
    assert_eq!(categoria.description(), fx.valid_description());
}

#[test]
fn id_and_created_at_survive_mutations() -> Result<()> {
    let fx = Fixture::setup();
    let mut categoria = fx.valid_categoria();
    let id = *categoria.id();
    let created_at = categoria.created_at();

    categoria.deactivate()?;
    categoria.update("Ferramentas", Some(String::new()))?;
    categoria.activate()?;

    assert_eq!(*categoria.id(), id);
    assert_eq!(categoria.created_at(), created_at);
    Ok(())
}

#[test]
fn record_survives_json_round_trip() -> Result<()> {
    let fx = Fixture::setup();
    let created_at: DateTime<Utc> = "2024-01-02T03:04:05Z".parse()?;
    let categoria = Categoria::create(
        NewCategoria::new(fx.valid_name(), fx.valid_description()).active(false),
        FixedClock::at(created_at),
    )?;

    let json = serde_json::to_string(&categoria.to_record())?;
    let record: CategoriaRecord = serde_json::from_str(&json)?;
    let restored = Categoria::restore(record)?;

    assert_eq!(restored, categoria);
    assert_eq!(restored.created_at(), created_at);
    Ok(())
}

#[test]
fn null_name_in_stored_json_is_rejected() -> Result<()> {
    let fx = Fixture::setup();
    let mut value = serde_json::to_value(fx.valid_categoria().to_record())?;
    value["name"] = serde_json::Value::Null;

    let record: CategoriaRecord = serde_json::from_value(value)?;
    let err = Categoria::restore(record).unwrap_err();
    assert_eq!(err, DomainError::Validation(NAME_REQUIRED.to_string()));
    Ok(())
}

#[test]
fn validation_error_lifts_into_domain_error() {
    let fx = Fixture::setup();

    let result: Result<Categoria, DomainError> =
        Categoria::new("abc", fx.valid_description()).map_err(DomainError::from);

    assert_eq!(
        result.unwrap_err(),
        DomainError::Validation(NAME_TOO_SHORT.to_string())
    );
}
