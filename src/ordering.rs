use crate::criterion::Criterion;
use crate::flight::FlightRecord;

mod sort;

use sort::stable_sort_by;

/// Positions into the backing record slice, in display order.
pub type View = Vec<usize>;

/// Re-sorts the unsorted collection once per active criterion, earliest
/// activation first. Each pass is a complete stable sort, so the criterion
/// activated last decides the primary order and earlier ones only survive
/// as tie-breakers.
pub fn reorder(records: &[FlightRecord], active: &[Criterion]) -> View {
    let identity: View = (0..records.len()).collect();
    active.iter().fold(identity, |view, criterion| {
        let compare = criterion.comparator();
        stable_sort_by(&view, |a, b| compare(&records[*a], &records[*b]))
    })
}

#[cfg(test)]
pub fn reorder_records<'a>(
    records: &'a [FlightRecord],
    active: &[Criterion],
) -> Vec<&'a FlightRecord> {
    reorder(records, active)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}
