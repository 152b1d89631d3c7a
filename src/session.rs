use crate::criterion::Criterion;
use crate::filters::ActiveFilterSet;
use crate::flight::FlightRecord;
use crate::ordering::{View, reorder};
use tracing::debug;

/// State of one results screen: the fetched flights, the enabled filters
/// and the ordering currently on display.
pub struct Session {
    records: Vec<FlightRecord>,
    filters: ActiveFilterSet,
    view: View,
}

impl Session {
    pub fn new(records: Vec<FlightRecord>) -> Session {
        let view = (0..records.len()).collect();
        Session {
            records,
            filters: ActiveFilterSet::new(),
            view,
        }
    }

    /// Flips `criterion` and recomputes the ordering. Returns whether it is now active.
    pub fn toggle(&mut self, criterion: Criterion) -> bool {
        let active = self.filters.toggle(criterion);
        self.recompute();
        active
    }

    /// Dismisses an applied filter; a no-op when it is not applied.
    pub fn remove(&mut self, criterion: Criterion) {
        self.filters.remove(criterion);
        self.recompute();
    }

    pub fn reset(&mut self) {
        self.filters.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.view = reorder(&self.records, self.filters.as_ordered_list());
        debug!(
            active = ?self.filters.as_ordered_list(),
            flights = self.records.len(),
            "recomputed flight ordering"
        );
    }

    #[cfg(test)]
    pub fn view(&self) -> &[usize] {
        &self.view
    }

    pub fn ordered(&self) -> impl Iterator<Item = &FlightRecord> + '_ {
        self.view.iter().map(|i| &self.records[*i])
    }

    pub fn active(&self) -> &[Criterion] {
        self.filters.as_ordered_list()
    }

    pub fn is_active(&self, criterion: Criterion) -> bool {
        self.filters.is_active(criterion)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
