use crate::{Category, Machine, Property, machine_matches_muscle_group, muscle_groups};

/// Fields considered by the free-text query.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FilterScope {
    /// Name, description, category, muscle labels and tags.
    #[default]
    Catalog,
    /// Name, description and category.
    Builder,
}

/// Selection state of the category pills, the muscle-group pills and the search box.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MachineFilter {
    category: Option<Category>,
    muscle_group: Option<&'static str>,
    pub query: String,
    pub scope: FilterScope,
}

impl MachineFilter {
    #[must_use]
    pub fn new(scope: FilterScope) -> Self {
        Self {
            scope,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn machines<'a>(
        &self,
        machines: impl IntoIterator<Item = &'a Machine>,
    ) -> Vec<&'a Machine> {
        filter(
            machines,
            self.category,
            self.muscle_group,
            &self.query,
            self.scope,
        )
    }

    #[must_use]
    pub fn matches(&self, machine: &Machine) -> bool {
        !self.machines([machine]).is_empty()
    }

    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    #[must_use]
    pub fn muscle_group(&self) -> Option<&'static str> {
        self.muscle_group
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        if self.category != category {
            self.muscle_group = None;
        }
        self.category = category;
    }

    pub fn toggle_category(&mut self, category: Category) {
        if self.category == Some(category) {
            self.set_category(None);
        } else {
            self.set_category(Some(category));
        }
    }

    /// Labels not configured for the selected category clear the selection.
    pub fn set_muscle_group(&mut self, label: Option<&str>) {
        self.muscle_group = self.category.and_then(|category| {
            label.and_then(|label| {
                muscle_groups(category)
                    .iter()
                    .find(|g| g.label == label)
                    .map(|g| g.label)
            })
        });
    }

    /// Unknown labels are ignored.
    pub fn toggle_muscle_group(&mut self, label: &str) {
        if self.muscle_group == Some(label) {
            self.muscle_group = None;
        } else if let Some(category) = self.category {
            if let Some(group) = muscle_groups(category).iter().find(|g| g.label == label) {
                self.muscle_group = Some(group.label);
            }
        }
    }

    #[must_use]
    pub fn category_list(&self) -> Vec<(Category, bool)> {
        Category::iter()
            .map(|c| (*c, self.category == Some(*c)))
            .collect()
    }

    #[must_use]
    pub fn muscle_group_list(&self) -> Vec<(&'static str, bool)> {
        self.category
            .map(|category| {
                muscle_groups(category)
                    .iter()
                    .map(|g| (g.label, self.muscle_group == Some(g.label)))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.muscle_group.is_none() && self.query.trim().is_empty()
    }
}

/// Machines matching category, muscle group and query, in catalog order.
///
/// The muscle group is only considered together with a category. A group label that is not
/// configured for the category matches nothing.
pub fn filter<'a>(
    machines: impl IntoIterator<Item = &'a Machine>,
    category: Option<Category>,
    muscle_group: Option<&str>,
    query: &str,
    scope: FilterScope,
) -> Vec<&'a Machine> {
    let query = query.trim().to_lowercase();
    machines
        .into_iter()
        .filter(|m| category.is_none_or(|c| m.category == c))
        .filter(|m| match (category, muscle_group) {
            (Some(category), Some(label)) => machine_matches_muscle_group(m, label, category),
            _ => true,
        })
        .filter(|m| query.is_empty() || matches_query(m, &query, scope))
        .collect()
}

fn matches_query(machine: &Machine, query: &str, scope: FilterScope) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(query);
    let name: &String = machine.name.as_ref();
    contains(name)
        || contains(&machine.short_description)
        || contains(machine.category.id())
        || (scope == FilterScope::Catalog
            && (machine.muscles_worked.iter().any(|l| contains(l))
                || machine.tags.iter().any(|t| contains(t))))
}
