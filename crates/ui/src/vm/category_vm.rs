use quiz_core::model::{Category, Entity};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryItemVm {
    pub key: String,
    pub label: String,
}

#[must_use]
pub fn map_category_items(categories: &[Category]) -> Vec<CategoryItemVm> {
    categories
        .iter()
        .map(|category| CategoryItemVm {
            key: category.id().to_string(),
            label: format!("{} (ID: {})", category.name(), category.id()),
        })
        .collect()
}
