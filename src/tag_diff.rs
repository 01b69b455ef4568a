//! Tag-diff between a banner's stored tag set and a requested one.
//!
//! Updates touch only the association rows that actually change. Rows for tags
//! present in both sets are left alone, so a concurrent `(tag, feature)` lookup
//! never sees an unchanged association disappear mid-update.

use std::collections::HashSet;

use crate::error::{Error, Result};

/// Association changes needed to move from one tag set to another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDiff {
    /// In the requested set, absent from the current one.
    pub to_add: Vec<i64>,
    /// In the current set, absent from the requested one.
    pub to_remove: Vec<i64>,
}

impl TagDiff {
    /// Computes the diff. An empty `requested` list means no change.
    ///
    /// Fails with [`Error::InvalidArgument`] if `requested` repeats an id.
    /// Output order follows the order of the input lists.
    pub fn compute(current: &[i64], requested: &[i64]) -> Result<Self> {
        if requested.is_empty() {
            return Ok(Self::default());
        }
        ensure_unique(requested)?;

        let current_set: HashSet<i64> = current.iter().copied().collect();
        let requested_set: HashSet<i64> = requested.iter().copied().collect();

        let to_add = requested
            .iter()
            .copied()
            .filter(|id| !current_set.contains(id))
            .collect();
        let to_remove = current
            .iter()
            .copied()
            .filter(|id| !requested_set.contains(id))
            .collect();

        Ok(Self { to_add, to_remove })
    }

    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    /// Applies the diff to an in-memory tag list, keeping surviving ids in place.
    pub fn apply(&self, tags: &mut Vec<i64>) {
        tags.retain(|id| !self.to_remove.contains(id));
        for id in &self.to_add {
            if !tags.contains(id) {
                tags.push(*id);
            }
        }
    }
}

pub(crate) fn ensure_unique(ids: &[i64]) -> Result<()> {
    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(*id) {
            return Err(Error::InvalidArgument(format!("duplicate tag id {id}")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn overlapping_sets() {
        let diff = TagDiff::compute(&[1, 2], &[2, 3]).unwrap();
        assert_eq!(diff.to_add, vec![3]);
        assert_eq!(diff.to_remove, vec![1]);
    }

    #[test]
    fn empty_request_is_a_no_op() {
        let diff = TagDiff::compute(&[1, 2], &[]).unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn same_set_in_another_order_is_a_no_op() {
        let diff = TagDiff::compute(&[1, 2, 3], &[3, 1, 2]).unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn duplicates_are_rejected() {
        let err = TagDiff::compute(&[1], &[4, 4]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn apply_keeps_untouched_ids_in_place() {
        let mut tags = vec![1, 2, 5];
        let diff = TagDiff::compute(&tags, &[5, 2, 9]).unwrap();
        diff.apply(&mut tags);
        assert_eq!(tags, vec![2, 5, 9]);
    }

    fn unique_tags() -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::hash_set(0i64..40, 0..12).prop_map(|s| s.into_iter().collect())
    }

    proptest! {
        #[test]
        fn diff_covers_the_symmetric_difference(old in unique_tags(), new in unique_tags()) {
            let diff = TagDiff::compute(&old, &new).unwrap();
            let old_set: HashSet<i64> = old.iter().copied().collect();
            let new_set: HashSet<i64> = new.iter().copied().collect();

            let added: HashSet<i64> = diff.to_add.iter().copied().collect();
            let removed: HashSet<i64> = diff.to_remove.iter().copied().collect();
            prop_assert!(added.is_disjoint(&removed));

            let mut tags = old.clone();
            diff.apply(&mut tags);
            let result: HashSet<i64> = tags.iter().copied().collect();
            prop_assert_eq!(result.len(), tags.len());

            if new.is_empty() {
                prop_assert!(diff.is_empty());
                prop_assert_eq!(result, old_set);
            } else {
                let symmetric: HashSet<i64> = old_set.symmetric_difference(&new_set).copied().collect();
                let covered: HashSet<i64> = added.union(&removed).copied().collect();
                prop_assert_eq!(covered, symmetric);
                prop_assert_eq!(result, new_set);
            }
        }
    }
}
