use tracing::info;

use super::Store;
use crate::models::{Category, Id, NewCategory};

impl Store {
    pub fn categories(&self) -> Vec<Category> {
        self.categories.iter().cloned().collect()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn category(&self, id: Id) -> Option<&Category> {
        self.categories.get(id)
    }

    pub fn create_category(&mut self, new: NewCategory) -> Category {
        let category = self
            .categories
            .insert_with(|id| Category {
                id,
                name: new.name,
                icon: new.icon,
                color: new.color,
            })
            .clone();
        info!(category_id = category.id, name = %category.name, "category created");
        category
    }
}
