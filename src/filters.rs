use crate::criterion::Criterion;

/// Enabled criteria in activation order, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFilterSet {
    active: Vec<Criterion>,
}

impl ActiveFilterSet {
    pub fn new() -> ActiveFilterSet {
        ActiveFilterSet::default()
    }

    /// Deactivates `criterion` if present, otherwise appends it.
    /// Returns whether it is active afterwards.
    pub fn toggle(&mut self, criterion: Criterion) -> bool {
        if self.is_active(criterion) {
            self.remove(criterion);
            false
        } else {
            self.active.push(criterion);
            true
        }
    }

    pub fn remove(&mut self, criterion: Criterion) {
        self.active.retain(|c| *c != criterion);
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn is_active(&self, criterion: Criterion) -> bool {
        self.active.contains(&criterion)
    }

    pub fn as_ordered_list(&self) -> &[Criterion] {
        &self.active
    }
}
