//! Helpers for integration tests.

use pushkind_catalog::domain::category::Category;
use pushkind_catalog::repository::{CategoryWriter, MemoryRepository};

/// Categories stored by [`seeded_repository`], as `(name, description)`.
pub const SEED: [(&str, Option<&str>); 7] = [
    ("Filmes", None),
    ("Netflix", Some("Títulos de autoria da Netflix")),
    ("Amazon", Some("Títulos de autoria da Amazon Prime")),
    ("Documentários", None),
    ("Sports", None),
    ("Kids", Some("Categoria para criancas")),
    ("Series", None),
];

/// Repository holding the [`SEED`] categories, all active.
pub fn seeded_repository() -> MemoryRepository {
    let repo = MemoryRepository::new();
    for (name, description) in SEED {
        let category =
            Category::new_category(Some(name.to_string()), description.map(str::to_string), true);
        repo.create(&category)
            .expect("seed category should be stored");
    }
    repo
}
