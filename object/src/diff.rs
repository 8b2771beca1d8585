//! Itemized comparison of data sets.

use crate::attribute::{values_equal, vr_compatible, Attribute, Value};
use crate::dataset::DataSet;
use dcmkit_core::Tag;
use itertools::{EitherOrBoth, Itertools};
use std::fmt;

/// Values at least this long are rendered as a byte count.
const ABBREVIATE_AT: usize = 64;

/// The kind of a difference between two data sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DifferenceKind {
    /// The attribute is only in the expected data set
    MissingInActual,
    /// The attribute is only in the actual data set
    MissingInExpected,
    DifferentValues,
    DifferentVr,
    /// The two sequences have a different number of items
    DifferentItemCount,
}

impl fmt::Display for DifferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DifferenceKind::MissingInActual => "missing in actual",
            DifferenceKind::MissingInExpected => "missing in expected",
            DifferenceKind::DifferentValues => "different values",
            DifferenceKind::DifferentVr => "different VR",
            DifferenceKind::DifferentItemCount => "different item count",
        })
    }
}

/// A single difference between an expected and an actual data set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDifference {
    pub kind: DifferenceKind,
    pub tag: Tag,
    /// The sequence attributes and item indices leading to the attribute,
    /// outermost first
    pub path: Vec<(Tag, usize)>,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for AttributeDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (tag, item) in &self.path {
            write!(f, "{}[{}].", tag, item)?;
        }
        write!(
            f,
            "{}: {} (expected {}, actual {})",
            self.tag, self.kind, self.expected, self.actual
        )
    }
}

fn is_compared(attribute: &Attribute) -> bool {
    !attribute.is_empty() && !attribute.tag().is_group_length()
}

pub(crate) fn compare_data_sets(
    expected: &DataSet,
    actual: &DataSet,
    path: &mut Vec<(Tag, usize)>,
    out: &mut Vec<AttributeDifference>,
) {
    let pairs = expected
        .iter()
        .filter(|a| is_compared(a))
        .merge_join_by(actual.iter().filter(|a| is_compared(a)), |a, b| {
            a.tag().cmp(&b.tag())
        });

    for pair in pairs {
        match pair {
            EitherOrBoth::Left(e) => out.push(difference(
                DifferenceKind::MissingInActual,
                e.tag(),
                path,
                render(e),
                "<absent>".to_string(),
            )),
            EitherOrBoth::Right(a) => out.push(difference(
                DifferenceKind::MissingInExpected,
                a.tag(),
                path,
                "<absent>".to_string(),
                render(a),
            )),
            EitherOrBoth::Both(e, a) => compare_attributes(e, a, path, out),
        }
    }
}

fn compare_attributes(
    expected: &Attribute,
    actual: &Attribute,
    path: &mut Vec<(Tag, usize)>,
    out: &mut Vec<AttributeDifference>,
) {
    let tag = expected.tag();
    if !vr_compatible(expected.vr(), actual.vr()) {
        out.push(difference(
            DifferenceKind::DifferentVr,
            tag,
            path,
            expected.vr().to_string().to_string(),
            actual.vr().to_string().to_string(),
        ));
        return;
    }

    match (sequence_items(expected), sequence_items(actual)) {
        (Some(e_items), Some(a_items)) => {
            if e_items.len() != a_items.len() {
                out.push(difference(
                    DifferenceKind::DifferentItemCount,
                    tag,
                    path,
                    e_items.len().to_string(),
                    a_items.len().to_string(),
                ));
                return;
            }
            for (i, (e, a)) in e_items.iter().zip(a_items).enumerate() {
                path.push((tag, i));
                compare_data_sets(e, a, path, out);
                path.pop();
            }
        }
        _ => {
            if !values_equal(expected.vr(), expected.value(), actual.value()) {
                out.push(difference(
                    DifferenceKind::DifferentValues,
                    tag,
                    path,
                    render(expected),
                    render(actual),
                ));
            }
        }
    }
}

/// The items of a sequence attribute, where null counts as no items.
fn sequence_items(attribute: &Attribute) -> Option<&[DataSet]> {
    match attribute.value() {
        Value::Sequence(items) => Some(items),
        Value::Null if attribute.vr() == dcmkit_core::VR::SQ => Some(&[]),
        _ => None,
    }
}

fn difference(
    kind: DifferenceKind,
    tag: Tag,
    path: &[(Tag, usize)],
    expected: String,
    actual: String,
) -> AttributeDifference {
    AttributeDifference {
        kind,
        tag,
        path: path.to_vec(),
        expected,
        actual,
    }
}

/// Render an attribute value for a report,
/// abbreviating long values to their size.
fn render(attribute: &Attribute) -> String {
    match attribute.value() {
        Value::Empty => "<empty>".to_string(),
        Value::Null => "<null>".to_string(),
        Value::Primitive(v) => {
            let len = if attribute.vr().is_text() {
                v.to_str().len()
            } else {
                v.calculate_byte_len()
            };
            if len >= ABBREVIATE_AT {
                format!("<{} bytes>", len)
            } else if attribute.vr().is_text() {
                format!("\"{}\"", v.to_str())
            } else {
                format!("[{}]", v.to_str())
            }
        }
        Value::Sequence(items) => format!("<{} items>", items.len()),
        Value::PixelSequence(seq) => format!("<{} fragments>", seq.fragments().len()),
        Value::PixelReference(r) => format!("<{} bytes at offset {}>", r.length, r.offset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::value::{PrimitiveValue, C};
    use dcmkit_core::VR;
    use dcmkit_dictionary_std::tags;

    fn base() -> DataSet {
        let mut ds = DataSet::new();
        ds.put_str(tags::PATIENT_NAME, VR::PN, "Doe^John");
        ds.put_str(tags::PATIENT_ID, VR::LO, "P01");
        ds
    }

    #[test]
    fn equal_sets_have_no_differences() {
        assert!(base().compare(&base()).is_empty());
    }

    #[test]
    fn missing_and_different_values() {
        let expected = base();
        let mut actual = base();
        actual.remove(tags::PATIENT_ID);
        actual.put_str(tags::PATIENT_NAME, VR::PN, "Doe^Jane");
        actual.put_str(tags::MODALITY, VR::CS, "CT");

        let diff = expected.compare(&actual);
        assert_eq!(diff.len(), 3);
        // differences follow tag order
        assert_eq!(diff[0].kind, DifferenceKind::MissingInExpected);
        assert_eq!(diff[0].tag, tags::MODALITY);
        assert_eq!(diff[0].expected, "<absent>");
        assert_eq!(diff[1].kind, DifferenceKind::DifferentValues);
        assert_eq!(diff[1].tag, tags::PATIENT_NAME);
        assert_eq!(diff[1].expected, "\"Doe^John\"");
        assert_eq!(diff[1].actual, "\"Doe^Jane\"");
        assert_eq!(diff[2].kind, DifferenceKind::MissingInActual);
        assert_eq!(diff[2].tag, tags::PATIENT_ID);
    }

    #[test]
    fn different_vr() {
        let expected = base();
        let mut actual = base();
        actual.put_str(tags::PATIENT_ID, VR::SH, "P01");
        let diff = expected.compare(&actual);
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].kind, DifferenceKind::DifferentVr);
        assert_eq!(diff[0].expected, "LO");
        assert_eq!(diff[0].actual, "SH");
    }

    #[test]
    fn group_lengths_and_empty_attributes_are_skipped() {
        let expected = base();
        let mut actual = base();
        actual.put_u32(Tag(0x0010, 0x0000), VR::UL, 100);
        actual.attribute_mut(tags::PATIENT_BIRTH_DATE);
        assert!(expected.compare(&actual).is_empty());
    }

    #[test]
    fn nested_differences_carry_a_path() {
        let mut inner = DataSet::new();
        inner.put_str(tags::CODE_VALUE, VR::SH, "A");
        let mut expected = DataSet::new();
        expected.put(Attribute::sequence(
            tags::CONCEPT_NAME_CODE_SEQUENCE,
            vec![DataSet::new(), inner.clone()],
        ));

        let mut actual = expected.clone();
        inner.put_str(tags::CODE_VALUE, VR::SH, "B");
        actual.put(Attribute::sequence(
            tags::CONCEPT_NAME_CODE_SEQUENCE,
            vec![DataSet::new(), inner],
        ));

        let diff = expected.compare(&actual);
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].tag, tags::CODE_VALUE);
        assert_eq!(diff[0].path, vec![(tags::CONCEPT_NAME_CODE_SEQUENCE, 1)]);
        assert_eq!(
            diff[0].to_string(),
            "(0040,A043)[1].(0008,0100): different values (expected \"A\", actual \"B\")"
        );

        actual.put(Attribute::sequence(
            tags::CONCEPT_NAME_CODE_SEQUENCE,
            vec![DataSet::new()],
        ));
        let diff = expected.compare(&actual);
        assert_eq!(diff[0].kind, DifferenceKind::DifferentItemCount);
        assert_eq!((diff[0].expected.as_str(), diff[0].actual.as_str()), ("2", "1"));
    }

    #[test]
    fn long_values_are_abbreviated() {
        let mut expected = DataSet::new();
        expected.put(Attribute::new(
            tags::PIXEL_DATA,
            VR::OB,
            PrimitiveValue::U8(C::from_vec(vec![1; 64])),
        ));
        let mut actual = DataSet::new();
        actual.put(Attribute::new(
            tags::PIXEL_DATA,
            VR::OB,
            PrimitiveValue::U8(C::from_vec(vec![2; 80])),
        ));
        let diff = expected.compare(&actual);
        assert_eq!(diff[0].expected, "<64 bytes>");
        assert_eq!(diff[0].actual, "<80 bytes>");
    }
}
