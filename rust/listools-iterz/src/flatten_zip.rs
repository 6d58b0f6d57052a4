//! Zipping the fully flattened members of a nested list.

use listools_common::{Result, error::Error, verify_arg};
use listools_flatten::Nested;

use crate::{
    policy::TerminationPolicy,
    zip::{CyclingZip, PolicyZip, zip_with_policy},
};

/// Flattens every member of `members` into a one-dimensional list.
///
/// # Errors
///
/// - Invalid argument if `members` is empty.
/// - Type mismatch if some member is an atomic item rather than a list.
pub fn flatten_members<T: Clone>(members: &[Nested<T>]) -> Result<Vec<Vec<T>>> {
    verify_arg!(members, !members.is_empty());
    members
        .iter()
        .enumerate()
        .map(|(index, member)| match member {
            Nested::List(_) => Ok(member.flatten()),
            Nested::Item(_) => {
                log::debug!("flatten_zip: member #{index} is not a list");
                Err(Error::type_mismatch(format!("members[{index}]"), "list"))
            }
        })
        .collect()
}

/// Flattens every member completely, then zips the flattened members under
/// `policy`.
///
/// The flattened members, not the originals, determine the tuple count.
pub fn flatten_zip_with_policy<T: Clone>(
    members: &[Nested<T>],
    policy: TerminationPolicy,
    default: Option<T>,
) -> Result<PolicyZip<Vec<T>, T>> {
    zip_with_policy(flatten_members(members)?, policy, default)
}

/// Flattens every member completely, then zips them with the `Cycle` policy.
///
/// ```
/// use listools_flatten::nested;
/// use listools_iterz::flatten_zip_cycle;
///
/// let members = nested![[1, 2], [4, [5, 6, 7], 8]];
/// let tuples: Vec<_> = flatten_zip_cycle(members.as_list().unwrap()).unwrap().collect();
/// assert_eq!(tuples, vec![vec![1, 4], vec![2, 5], vec![1, 6], vec![2, 7], vec![1, 8]]);
/// ```
pub fn flatten_zip_cycle<T: Clone>(members: &[Nested<T>]) -> Result<CyclingZip<Vec<T>, T>> {
    CyclingZip::new(flatten_members(members)?, TerminationPolicy::Cycle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use listools_common::error::ErrorKind;
    use listools_flatten::nested;

    #[test]
    fn test_flatten_zip_cycle() {
        let members = nested![[1, 2], [4, [5, 6, 7], 8]];
        let tuples = flatten_zip_cycle(members.as_list().unwrap()).unwrap().collect_vec();
        assert_eq!(
            tuples,
            vec![vec![1, 4], vec![2, 5], vec![1, 6], vec![2, 7], vec![1, 8]]
        );
    }

    #[test]
    fn test_flatten_zip_syzygy() {
        let members = nested![[[1], [2]], [3, [4, [5]]]];
        let zip = flatten_zip_with_policy(
            members.as_list().unwrap(),
            TerminationPolicy::Syzygy,
            None,
        )
        .unwrap();
        assert_eq!(zip.total(), Some(6));
        let tuples = zip.collect_vec();
        assert_eq!(tuples.len(), 6);
        assert_eq!(tuples[0], vec![Some(1), Some(3)]);
        assert_eq!(tuples[5], vec![Some(2), Some(5)]);
    }

    #[test]
    fn test_flatten_zip_padded() {
        let members = nested![["a"], [["b", "c"]]];
        let tuples = flatten_zip_with_policy(
            members.as_list().unwrap(),
            TerminationPolicy::PadShortest,
            Some("-"),
        )
        .unwrap()
        .collect_vec();
        assert_eq!(
            tuples,
            vec![vec![Some("a"), Some("b")], vec![Some("-"), Some("c")]]
        );
    }

    #[test]
    fn test_member_not_a_list() {
        let members = nested![[1, 2], 3];
        let err = flatten_zip_cycle(members.as_list().unwrap()).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::TypeMismatch { .. }));
    }

    #[test]
    fn test_member_flattens_to_empty() {
        let members: Nested<i32> = nested![[1], [[], [[]]]];
        let err = flatten_zip_cycle(members.as_list().unwrap()).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::EmptySequence { index: 1 }));
    }

    #[test]
    fn test_no_members() {
        let err = flatten_members::<u8>(&[]).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
    }
}
