use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::either::Either;
use crate::domain::notification::Notification;
use crate::domain::types::CategoryId;
use crate::domain::validation::ValidationHandler;
use crate::dto::categories::UpdateCategoryOutput;
use crate::repository::{CategoryReader, CategoryWriter};
use crate::services::{ServiceResult, UseCase};

use super::not_found;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl UpdateCategoryCommand {
    pub fn with(
        id: impl Into<String>,
        name: Option<&str>,
        description: Option<&str>,
        is_active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.map(str::to_string),
            description: description.map(str::to_string),
            is_active,
        }
    }
}

pub struct UpdateCategoryUseCase<R> {
    repo: R,
}

impl<R> UpdateCategoryUseCase<R>
where
    R: CategoryReader + CategoryWriter,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    fn update(&self, category: &Category) -> Either<Notification, UpdateCategoryOutput> {
        match self.repo.update(category) {
            Ok(updated) => {
                log::info!("Updated category {}", updated.id());
                Either::Right(UpdateCategoryOutput::from(&updated))
            }
            Err(e) => {
                log::error!("Failed to update category {}: {e}", category.id());
                Either::Left(Notification::from(e))
            }
        }
    }
}

impl<R> UseCase<UpdateCategoryCommand> for UpdateCategoryUseCase<R>
where
    R: CategoryReader + CategoryWriter,
{
    type Output = Either<Notification, UpdateCategoryOutput>;

    /// Fails with [`ServiceError::NotFound`](crate::services::ServiceError::NotFound)
    /// when no category has the command's id.
    fn execute(&self, command: UpdateCategoryCommand) -> ServiceResult<Self::Output> {
        let id = CategoryId::new(command.id)?;

        let category = self.repo.find_by_id(&id)?.ok_or_else(|| not_found(&id))?;
        let category = category.update(command.name, command.description, command.is_active);

        let mut notification = Notification::create();
        category.validate(&mut notification);
        if notification.has_error() {
            log::warn!("Rejected update of category {id}: {notification}");
            return Ok(Either::Left(notification));
        }

        Ok(self.update(&category))
    }
}
