use chrono::{NaiveDateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use validator::ValidateLength;

use crate::domain::types::CategoryId;
use crate::domain::validation::{
    Validation, ValidationError, ValidationFault, ValidationHandler,
};

pub const NAME_MIN_LENGTH: u64 = 3;
pub const NAME_MAX_LENGTH: u64 = 255;
pub const DESCRIPTION_MAX_LENGTH: u64 = 4000;

/// Category aggregate.
///
/// Construction never fails; invalid state is reported by [`Category::validate`].
/// `deleted_at` is set exactly when the category is inactive, and
/// `updated_at` moves forward on every transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: Option<String>,
    description: Option<String>,
    is_active: bool,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    deleted_at: Option<NaiveDateTime>,
}

impl Category {
    /// Create a brand new category with a fresh identifier.
    pub fn new_category(name: Option<String>, description: Option<String>, is_active: bool) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: CategoryId::unique(),
            name,
            description,
            is_active,
            created_at: now,
            updated_at: now,
            deleted_at: (!is_active).then_some(now),
        }
    }

    /// Rebuild a category from previously persisted state.
    pub fn with(
        id: CategoryId,
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
        deleted_at: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            is_active,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    /// Same identity with replaced name, description and activation flag.
    ///
    /// `deleted_at` is recomputed from `is_active` alone; whatever the
    /// previous value was is discarded.
    pub fn update(&self, name: Option<String>, description: Option<String>, is_active: bool) -> Self {
        self.transition(name, description, is_active)
    }

    pub fn activate(&self) -> Self {
        self.transition(self.name.clone(), self.description.clone(), true)
    }

    pub fn deactivate(&self) -> Self {
        self.transition(self.name.clone(), self.description.clone(), false)
    }

    fn transition(&self, name: Option<String>, description: Option<String>, is_active: bool) -> Self {
        let now = next_instant(self.updated_at);
        Self {
            id: self.id.clone(),
            name,
            description,
            is_active,
            created_at: self.created_at,
            updated_at: now,
            deleted_at: (!is_active).then_some(now),
        }
    }

    /// Register this category's checks on `handler`.
    pub fn validate(&self, handler: &mut dyn ValidationHandler) {
        handler.validate(&CategoryValidator::new(self));
    }

    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<NaiveDateTime> {
        self.deleted_at
    }
}

// The clock may not have advanced since the previous transition, so the new
// instant is forced at least one microsecond past it.
fn next_instant(previous: NaiveDateTime) -> NaiveDateTime {
    Utc::now()
        .naive_utc()
        .max(previous + TimeDelta::microseconds(1))
}

/// Checks applied to a [`Category`]; every failing check adds its own error.
pub struct CategoryValidator<'a> {
    category: &'a Category,
}

impl<'a> CategoryValidator<'a> {
    pub fn new(category: &'a Category) -> Self {
        Self { category }
    }

    fn check_name_constraints(&self, handler: &mut dyn ValidationHandler) {
        let Some(name) = self.category.name() else {
            handler.append(ValidationError::new("'name' should not be null"));
            return;
        };

        let trimmed = name.trim().to_string();
        if trimmed.is_empty() {
            handler.append(ValidationError::new("'name' should not be empty"));
        }
        if !trimmed.validate_length(Some(NAME_MIN_LENGTH), Some(NAME_MAX_LENGTH), None) {
            handler.append(ValidationError::new(format!(
                "'name' must be between {NAME_MIN_LENGTH} and {NAME_MAX_LENGTH} characters"
            )));
        }
    }

    fn check_description_constraints(&self, handler: &mut dyn ValidationHandler) {
        let Some(description) = &self.category.description else {
            return;
        };
        if !description.validate_length(None, Some(DESCRIPTION_MAX_LENGTH), None) {
            handler.append(ValidationError::new(format!(
                "'description' must be at most {DESCRIPTION_MAX_LENGTH} characters"
            )));
        }
    }
}

impl Validation for CategoryValidator<'_> {
    fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<(), ValidationFault> {
        self.check_name_constraints(handler);
        self.check_description_constraints(handler);
        Ok(())
    }
}
