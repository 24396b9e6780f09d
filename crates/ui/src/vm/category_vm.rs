use dsa_core::model::Category;

/// Sidebar entry for one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryNavVm {
    pub name: String,
    pub icon: String,
    pub progress_label: String,
    pub active: bool,
}

#[must_use]
pub fn map_category_nav(categories: &[Category], active: &str) -> Vec<CategoryNavVm> {
    categories
        .iter()
        .map(|category| {
            let total = category.problems().len();
            let progress_label = if total > 0 {
                format!("({}/{total})", category.completed_count())
            } else {
                String::new()
            };
            CategoryNavVm {
                name: category.name().to_string(),
                icon: category.icon().to_string(),
                progress_label,
                active: category.name() == active,
            }
        })
        .collect()
}
