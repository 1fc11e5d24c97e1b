use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

pub const NAME_MAX_CHARS: usize = 128;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub active: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

/// Validated fields for a new category. Build it through [`NewServiceCategory::new`].
#[derive(Clone, Debug, PartialEq)]
pub struct NewServiceCategory {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub active: bool,
}

impl NewServiceCategory {
    /// Trims text fields; an empty description becomes `None`.
    pub fn new(name: &str, description: Option<&str>, price_cents: i64, active: bool) -> Result<Self, errors::ModelError> {
        let name = name.trim();
        validate_name(name)?;
        let description = description.map(str::trim).filter(|d| !d.is_empty());
        if let Some(d) = description {
            validate_description(d)?;
        }
        validate_price(price_cents)?;
        Ok(Self {
            name: name.to_string(),
            description: description.map(str::to_string),
            price_cents,
            active,
        })
    }

    /// Materialize the row that `create` would insert.
    pub fn into_model(self) -> Model {
        Model {
            id: Uuid::new_v4(),
            name: self.name,
            description: self.description,
            price_cents: self.price_cents,
            active: self.active,
            created_at: Utc::now().into(),
        }
    }
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(errors::ModelError::Validation(format!("name longer than {NAME_MAX_CHARS} characters")));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), errors::ModelError> {
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(errors::ModelError::Validation(format!("description longer than {DESCRIPTION_MAX_CHARS} characters")));
    }
    Ok(())
}

pub fn validate_price(price_cents: i64) -> Result<(), errors::ModelError> {
    if price_cents < 0 { return Err(errors::ModelError::Validation("price_cents must be >= 0".into())); }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, input: NewServiceCategory) -> Result<Model, errors::ModelError> {
    let m = input.into_model();
    let am = ActiveModel {
        id: Set(m.id),
        name: Set(m.name),
        description: Set(m.description),
        price_cents: Set(m.price_cents),
        active: Set(m.active),
        created_at: Set(m.created_at),
    };
    Ok(am.insert(db).await?)
}
