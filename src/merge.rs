//! Folding per-document occurrence maps into the master index.
//!
//! Each keyword's occurrence list stays sorted in non-increasing frequency
//! order. New entries are placed by a binary search over the already-sorted
//! prefix, so a merge costs O(log n) probes plus the shift.

use std::collections::HashMap;

use crate::index::{KeywordIndex, Occurrence};

/// Merge the keywords of a single document into the master index.
///
/// An unseen keyword starts a fresh single-entry list. For a known keyword the
/// new occurrence is appended and then moved to its sorted position by
/// [`insert_last_occurrence`].
pub fn merge_document(index: &mut KeywordIndex, per_doc: HashMap<String, Occurrence>) {
    for (keyword, occurrence) in per_doc {
        match index.get_mut(&keyword) {
            None => {
                index.insert(keyword, vec![occurrence]);
            }
            Some(list) => {
                list.push(occurrence);
                insert_last_occurrence(list);
            }
        }
    }
}

/// Move the last entry of `list` to the position that keeps the list sorted
/// in non-increasing frequency order.
///
/// The entries `0..n-1` must already be sorted; only the last entry is out of
/// place. The insertion point is found by binary search over that prefix,
/// comparing frequencies only. An entry that ties an existing frequency goes
/// after all equal entries, so ties keep their first-merged order.
///
/// Returns the sequence of midpoint indices probed by the search, which is
/// only of interest to tests; `None` if the list holds a single entry and
/// there was nothing to search.
pub fn insert_last_occurrence(list: &mut Vec<Occurrence>) -> Option<Vec<usize>> {
    let n = list.len();
    if n <= 1 {
        return None;
    }

    let frequency = list[n - 1].frequency;
    let mut probes = Vec::new();

    // Half-open search over the sorted prefix [0, n-1). Settles on the first
    // index whose frequency is strictly below the new entry's, which is one
    // past any run of equal frequencies.
    let mut low = 0;
    let mut high = n - 1;
    while low < high {
        let mid = (low + high) / 2;
        probes.push(mid);
        if list[mid].frequency < frequency {
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    if low < n - 1 {
        let pending = list.remove(n - 1);
        list.insert(low, pending);
    }
    Some(probes)
}
