use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::types::{CategoryId, round_micros};

/// Identifier of a freshly created category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryOutput {
    pub id: CategoryId,
}

impl From<&Category> for CreateCategoryOutput {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id().clone(),
        }
    }
}

/// Identifier of an updated category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategoryOutput {
    pub id: CategoryId,
}

impl From<&Category> for UpdateCategoryOutput {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id().clone(),
        }
    }
}

/// Full projection of a category used by reads and listings.
///
/// All three timestamps, `deleted_at` included, are rounded to microseconds
/// so that a projection of a freshly built category equals the projection of
/// its stored copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOutput {
    pub id: CategoryId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl From<&Category> for CategoryOutput {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id().clone(),
            name: value.name().map(str::to_string),
            description: value.description().map(str::to_string),
            is_active: value.is_active(),
            created_at: round_micros(value.created_at()),
            updated_at: round_micros(value.updated_at()),
            deleted_at: value.deleted_at().map(round_micros),
        }
    }
}

impl From<Category> for CategoryOutput {
    fn from(value: Category) -> Self {
        Self::from(&value)
    }
}
