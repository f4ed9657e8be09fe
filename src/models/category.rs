use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category as DomainCategory;
use crate::domain::types::{CategoryId, TypeConstraintError, round_micros};
use crate::repository::errors::RepositoryError;

/// Stored form of a category.
///
/// `name` is mandatory at the storage boundary and timestamps keep
/// microsecond precision only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl TryFrom<&DomainCategory> for Category {
    type Error = RepositoryError;

    fn try_from(category: &DomainCategory) -> Result<Self, Self::Error> {
        let name = category
            .name()
            .ok_or_else(|| RepositoryError::ConstraintViolation("name".to_string()))?;

        Ok(Self {
            id: category.id().as_str().to_string(),
            name: name.to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: round_micros(category.created_at()),
            updated_at: round_micros(category.updated_at()),
            deleted_at: category.deleted_at().map(round_micros),
        })
    }
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self::with(
            CategoryId::new(category.id)?,
            Some(category.name),
            category.description,
            category.is_active,
            category.created_at,
            category.updated_at,
            category.deleted_at,
        ))
    }
}
