use listools_common::Result;
use listools_flatten::Nested;

use crate::{
    flatten_zip::flatten_zip_with_policy,
    policy::TerminationPolicy,
    zip::{PolicyZip, zip_with_policy},
};

/// Zip configuration: the termination policy and the padding value.
///
/// The default configuration is the `Cycle` policy with no padding value.
///
/// ```
/// use listools_iterz::{TerminationPolicy, ZipOptions};
///
/// let tuples: Vec<_> = ZipOptions::new(TerminationPolicy::PadShortest)
///     .with_default(0)
///     .zip([vec![1, 2, 3], vec![4]])
///     .unwrap()
///     .collect();
/// assert_eq!(
///     tuples,
///     vec![vec![Some(1), Some(4)], vec![Some(2), Some(0)], vec![Some(3), Some(0)]]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipOptions<T> {
    policy: TerminationPolicy,
    default: Option<T>,
}

impl<T> Default for ZipOptions<T> {
    fn default() -> Self {
        ZipOptions {
            policy: TerminationPolicy::default(),
            default: None,
        }
    }
}

impl<T: Clone> ZipOptions<T> {
    pub fn new(policy: TerminationPolicy) -> ZipOptions<T> {
        ZipOptions {
            policy,
            default: None,
        }
    }

    /// Sets the value padded in for members that ran out. Only the
    /// `PadShortest` policy uses it.
    pub fn with_default(mut self, default: T) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_policy(mut self, policy: TerminationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> TerminationPolicy {
        self.policy
    }

    pub fn default_value(&self) -> Option<&T> {
        self.default.as_ref()
    }

    /// Zips `members` under this configuration.
    pub fn zip<S>(self, members: impl IntoIterator<Item = S>) -> Result<PolicyZip<S, T>>
    where
        S: AsRef<[T]>,
    {
        zip_with_policy(members, self.policy, self.default)
    }

    /// Flattens every member of `members`, then zips them under this
    /// configuration.
    pub fn flatten_zip(self, members: &[Nested<T>]) -> Result<PolicyZip<Vec<T>, T>> {
        flatten_zip_with_policy(members, self.policy, self.default)
    }
}
