use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::either::Either;
use crate::domain::notification::Notification;
use crate::domain::validation::ValidationHandler;
use crate::dto::categories::CreateCategoryOutput;
use crate::repository::CategoryWriter;
use crate::services::{ServiceResult, UseCase};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl CreateCategoryCommand {
    pub fn with(name: Option<&str>, description: Option<&str>, is_active: bool) -> Self {
        Self {
            name: name.map(str::to_string),
            description: description.map(str::to_string),
            is_active,
        }
    }
}

pub struct CreateCategoryUseCase<R> {
    repo: R,
}

impl<R: CategoryWriter> CreateCategoryUseCase<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    fn create(&self, category: &Category) -> Either<Notification, CreateCategoryOutput> {
        match self.repo.create(category) {
            Ok(created) => {
                log::info!("Created category {}", created.id());
                Either::Right(CreateCategoryOutput::from(&created))
            }
            Err(e) => {
                log::error!("Failed to create category: {e}");
                Either::Left(Notification::from(e))
            }
        }
    }
}

impl<R: CategoryWriter> UseCase<CreateCategoryCommand> for CreateCategoryUseCase<R> {
    type Output = Either<Notification, CreateCategoryOutput>;

    fn execute(&self, command: CreateCategoryCommand) -> ServiceResult<Self::Output> {
        let category =
            Category::new_category(command.name, command.description, command.is_active);

        let mut notification = Notification::create();
        category.validate(&mut notification);
        if notification.has_error() {
            log::warn!("Rejected new category: {notification}");
            return Ok(Either::Left(notification));
        }

        Ok(self.create(&category))
    }
}
