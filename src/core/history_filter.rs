use crate::models::history::{HistoryEntry, HistoryFilterCriteria};

/// Lazily yield the entries matching `criteria`, in archival order.
///
/// Pure: the input is only borrowed, so calling it again with the same
/// arguments yields the same sequence.
pub fn filter_history<'a>(
    entries: &'a [HistoryEntry],
    criteria: &'a HistoryFilterCriteria,
) -> impl Iterator<Item = &'a HistoryEntry> + Clone + 'a {
    entries.iter().filter(move |e| criteria.matches(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed;
    use crate::models::shift::Shift;

    fn archive() -> Vec<HistoryEntry> {
        let mut h = seed::history();
        h.push(HistoryEntry::new("2025-03-09", Shift::A, "Papas Clásicas", 180, 250, 120));
        h
    }

    #[test]
    fn empty_criteria_is_identity() {
        let h = archive();
        let all = HistoryFilterCriteria::default();
        let out: Vec<_> = filter_history(&h, &all).cloned().collect();
        assert_eq!(out, h);
    }

    #[test]
    fn filter_keeps_archival_order_and_is_restartable() {
        let h = archive();
        let c = HistoryFilterCriteria::from_raw(None, None, Some("Papas Clásicas"), None).unwrap();

        let it = filter_history(&h, &c);
        let first: Vec<_> = it.clone().map(|e| e.date.as_str()).collect();
        let second: Vec<_> = it.map(|e| e.date.as_str()).collect();

        assert_eq!(first, vec!["2025-03-08", "2025-03-09"]);
        assert_eq!(first, second);
    }

    #[test]
    fn filter_by_weight_and_shift() {
        let h = archive();
        let c = HistoryFilterCriteria::from_raw(None, Some("F"), None, Some("100")).unwrap();
        let out: Vec<_> = filter_history(&h, &c).collect();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].product, "Chicharrones");

        let c = HistoryFilterCriteria::from_raw(None, Some("F"), None, Some("180")).unwrap();
        assert_eq!(filter_history(&h, &c).count(), 0);
    }
}
