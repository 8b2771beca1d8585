//! Directory record trees.
//!
//! Records live in an arena and link to each other by index,
//! so links never own the records they point to.
//! Only structural comparison is provided here:
//! directory semantics are left to the caller.

use crate::dataset::DataSet;
use crate::diff::AttributeDifference;
use std::collections::HashSet;

/// Index of a record in its [`RecordTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub usize);

/// A directory record and its links.
#[derive(Debug, Clone, Default)]
pub struct DirectoryRecord {
    pub data: DataSet,
    pub next_sibling: Option<RecordId>,
    pub first_child: Option<RecordId>,
}

impl DirectoryRecord {
    pub fn new(data: DataSet) -> Self {
        DirectoryRecord {
            data,
            next_sibling: None,
            first_child: None,
        }
    }
}

/// Which link of a record differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Link {
    NextSibling,
    FirstChild,
}

/// A structural difference between two record trees.
///
/// Records are identified by their position in the expected tree.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordDifference {
    /// A link is present on one side only
    Link {
        record: RecordId,
        link: Link,
        expected: bool,
        actual: bool,
    },
    /// The data sets of two matching records differ
    Data {
        record: RecordId,
        differences: Vec<AttributeDifference>,
    },
    /// A link points outside of its tree or back into visited records
    BadLink { record: RecordId, link: Link },
}

/// An arena of directory records; the first record is the root.
#[derive(Debug, Clone, Default)]
pub struct RecordTree {
    pub records: Vec<DirectoryRecord>,
}

impl RecordTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to the arena, returning its index.
    pub fn push(&mut self, record: DirectoryRecord) -> RecordId {
        self.records.push(record);
        RecordId(self.records.len() - 1)
    }

    pub fn get(&self, id: RecordId) -> Option<&DirectoryRecord> {
        self.records.get(id.0)
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut DirectoryRecord> {
        self.records.get_mut(id.0)
    }

    pub fn root(&self) -> Option<RecordId> {
        if self.records.is_empty() {
            None
        } else {
            Some(RecordId(0))
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the children of a record, in sibling order.
    pub fn children(&self, id: RecordId) -> impl Iterator<Item = RecordId> + '_ {
        let first = self.get(id).and_then(|r| r.first_child);
        std::iter::successors(first, move |c| self.get(*c).and_then(|r| r.next_sibling))
            .take(self.records.len())
    }

    /// Compare this tree (as expected) with another (as actual),
    /// walking both from their roots in parallel.
    ///
    /// A link missing on exactly one side is a difference,
    /// while two missing links are equal.
    pub fn compare(&self, actual: &RecordTree) -> Vec<RecordDifference> {
        let mut out = Vec::new();
        let mut visited = HashSet::new();
        let mut pending: Vec<(RecordId, RecordId)> = match (self.root(), actual.root()) {
            (Some(e), Some(a)) => vec![(e, a)],
            (None, None) => return out,
            (e, a) => {
                out.push(RecordDifference::Link {
                    record: RecordId(0),
                    link: Link::FirstChild,
                    expected: e.is_some(),
                    actual: a.is_some(),
                });
                return out;
            }
        };

        while let Some((e_id, a_id)) = pending.pop() {
            if !visited.insert(e_id) {
                continue;
            }
            let (e, a) = match (self.get(e_id), actual.get(a_id)) {
                (Some(e), Some(a)) => (e, a),
                _ => {
                    out.push(RecordDifference::BadLink {
                        record: e_id,
                        link: Link::NextSibling,
                    });
                    continue;
                }
            };

            let differences = e.data.compare(&a.data);
            if !differences.is_empty() {
                out.push(RecordDifference::Data {
                    record: e_id,
                    differences,
                });
            }

            for (link, e_next, a_next) in [
                (Link::NextSibling, e.next_sibling, a.next_sibling),
                (Link::FirstChild, e.first_child, a.first_child),
            ] {
                match (e_next, a_next) {
                    (None, None) => {}
                    (Some(en), Some(an)) => {
                        if visited.contains(&en) {
                            out.push(RecordDifference::BadLink { record: e_id, link });
                        } else {
                            pending.push((en, an));
                        }
                    }
                    (en, an) => out.push(RecordDifference::Link {
                        record: e_id,
                        link,
                        expected: en.is_some(),
                        actual: an.is_some(),
                    }),
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::VR;
    use dcmkit_dictionary_std::tags;

    fn record(id: &str) -> DirectoryRecord {
        let mut data = DataSet::new();
        data.put_str(tags::PATIENT_ID, VR::LO, id);
        DirectoryRecord::new(data)
    }

    /// root -> (a, b), a -> (c)
    fn sample() -> RecordTree {
        let mut tree = RecordTree::new();
        let root = tree.push(record("root"));
        let a = tree.push(record("a"));
        let b = tree.push(record("b"));
        let c = tree.push(record("c"));
        tree.records[root.0].first_child = Some(a);
        tree.records[a.0].next_sibling = Some(b);
        tree.records[a.0].first_child = Some(c);
        tree
    }

    #[test]
    fn children_follow_sibling_links() {
        let tree = sample();
        let children: Vec<_> = tree.children(RecordId(0)).collect();
        assert_eq!(children, vec![RecordId(1), RecordId(2)]);
        assert_eq!(tree.children(RecordId(3)).count(), 0);
    }

    #[test]
    fn identical_trees() {
        assert!(sample().compare(&sample()).is_empty());
    }

    #[test]
    fn null_links_compare_symmetrically() {
        let expected = sample();
        let mut actual = sample();
        actual.records[1].first_child = None;

        let diff = expected.compare(&actual);
        assert_eq!(
            diff,
            vec![RecordDifference::Link {
                record: RecordId(1),
                link: Link::FirstChild,
                expected: true,
                actual: false,
            }]
        );
        // and the other way around
        let diff = actual.compare(&expected);
        assert_eq!(
            diff,
            vec![RecordDifference::Link {
                record: RecordId(1),
                link: Link::FirstChild,
                expected: false,
                actual: true,
            }]
        );
    }

    #[test]
    fn record_data_differences() {
        let expected = sample();
        let mut actual = sample();
        actual.records[2].data.put_str(tags::PATIENT_ID, VR::LO, "z");
        let diff = expected.compare(&actual);
        assert_eq!(diff.len(), 1);
        assert!(matches!(
            &diff[0],
            RecordDifference::Data { record: RecordId(2), differences } if differences.len() == 1
        ));
    }

    #[test]
    fn cycles_are_reported() {
        let mut tree = sample();
        tree.records[2].next_sibling = Some(RecordId(1));
        let diff = tree.compare(&tree.clone());
        assert!(diff
            .iter()
            .any(|d| matches!(d, RecordDifference::BadLink { record: RecordId(2), .. })));
    }
}
