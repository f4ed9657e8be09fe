use std::cmp::Ordering;

use crate::domain::category::Category;
use crate::domain::pagination::Pagination;
use crate::domain::search::CategorySearchQuery;
use crate::domain::types::{CategoryId, SortDirection};
use crate::models::category::Category as CategoryRecord;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CategoryReader, CategoryWriter, MemoryRepository};

type Comparator = fn(&CategoryRecord, &CategoryRecord) -> Ordering;

fn by_name(a: &CategoryRecord, b: &CategoryRecord) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

fn by_description(a: &CategoryRecord, b: &CategoryRecord) -> Ordering {
    let a = a.description.as_deref().map(str::to_lowercase);
    let b = b.description.as_deref().map(str::to_lowercase);
    a.cmp(&b)
}

fn by_created_at(a: &CategoryRecord, b: &CategoryRecord) -> Ordering {
    a.created_at.cmp(&b.created_at)
}

fn by_updated_at(a: &CategoryRecord, b: &CategoryRecord) -> Ordering {
    a.updated_at.cmp(&b.updated_at)
}

fn by_is_active(a: &CategoryRecord, b: &CategoryRecord) -> Ordering {
    a.is_active.cmp(&b.is_active)
}

fn comparator(sort: &str) -> RepositoryResult<Comparator> {
    let compare: Comparator = match sort.trim() {
        "name" => by_name,
        "description" => by_description,
        "createdAt" | "created_at" => by_created_at,
        "updatedAt" | "updated_at" => by_updated_at,
        "isActive" | "is_active" | "active" => by_is_active,
        other => {
            return Err(RepositoryError::ValidationError(format!(
                "unsupported sort field: {other}"
            )));
        }
    };
    Ok(compare)
}

fn matches_terms(row: &CategoryRecord, terms: &str) -> bool {
    row.name.to_lowercase().contains(terms)
        || row
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(terms))
}

impl CategoryReader for MemoryRepository {
    fn find_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>> {
        let rows = self.rows.read();

        let category = rows
            .iter()
            .find(|row| row.id == id.as_str())
            .cloned()
            .map(TryInto::try_into)
            .transpose()?;
        Ok(category)
    }

    fn find_all(&self, query: &CategorySearchQuery) -> RepositoryResult<Pagination<Category>> {
        let compare = comparator(&query.sort)?;
        let rows = self.rows.read();

        let mut matching: Vec<&CategoryRecord> = if query.has_terms() {
            let terms = query.terms.trim().to_lowercase();
            rows.iter().filter(|row| matches_terms(row, &terms)).collect()
        } else {
            rows.iter().collect()
        };

        match query.direction {
            SortDirection::Asc => matching.sort_by(|a, b| compare(a, b)),
            SortDirection::Desc => matching.sort_by(|a, b| compare(b, a)),
        }

        let total = matching.len();
        let items = matching
            .into_iter()
            .skip(query.page.saturating_mul(query.per_page))
            .take(query.per_page)
            .cloned()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(Pagination::new(query.page, query.per_page, total, items))
    }
}

impl CategoryWriter for MemoryRepository {
    fn create(&self, category: &Category) -> RepositoryResult<Category> {
        let record = CategoryRecord::try_from(category)?;
        let mut rows = self.rows.write();

        if rows.iter().any(|row| row.id == record.id) {
            return Err(RepositoryError::Conflict(record.id));
        }
        rows.push(record.clone());

        Ok(record.try_into()?)
    }

    fn update(&self, category: &Category) -> RepositoryResult<Category> {
        let record = CategoryRecord::try_from(category)?;
        let mut rows = self.rows.write();

        let row = rows
            .iter_mut()
            .find(|row| row.id == record.id)
            .ok_or(RepositoryError::NotFound)?;
        *row = record.clone();

        Ok(record.try_into()?)
    }

    fn delete_by_id(&self, id: &CategoryId) -> RepositoryResult<()> {
        self.rows.write().retain(|row| row.id != id.as_str());
        Ok(())
    }
}
