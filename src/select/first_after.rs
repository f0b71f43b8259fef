//! First record that starts on or after a threshold.
//!
//! Records come in page order, which is newest first. The selector does not
//! check that order; it relies on it to stop at the boundary between "after
//! the threshold" and "before the threshold".

use log::warn;

use crate::domain::{CalendarPoint, TimeBounded};

/// Return the earliest record whose start is on or after `threshold`.
///
/// `records[0]` is the most recent. The scan walks forward while the next
/// record still qualifies and returns the last qualifying one before the
/// boundary. If every record qualifies, the last (earliest) one is returned.
///
/// A missing start on any inspected record makes the order unusable, so the
/// result is `None` in that case as well as when nothing qualifies.
pub fn select_first_after<T: TimeBounded>(records: &[T], threshold: CalendarPoint) -> Option<&T> {
    for (i, record) in records.iter().enumerate() {
        let Some(start) = record.start() else {
            warn!("Record {i} has no start date; cannot select a first record after {threshold}");
            return None;
        };
        if start < threshold {
            continue;
        }

        let Some(next) = records.get(i + 1) else {
            return Some(record);
        };
        match next.start() {
            Some(next_start) if next_start >= threshold => continue,
            Some(_) => return Some(record),
            None => {
                warn!("Record {} has no start date; cannot select a first record after {threshold}", i + 1);
                return None;
            }
        }
    }

    None
}
