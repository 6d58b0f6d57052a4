//! Zipping several finite sequences under a [`TerminationPolicy`].
//!
//! # Provided iterators
//!
//! - [`CyclingZip`]: `Cycle`, `InfiniteCycle` and `Syzygy` policies; yields `Vec<T>`.
//! - [`PaddedZip`]: `PadShortest` policy; yields `Vec<Option<T>>`, with members
//!   that ran out contributing the configured default (`None` unless set).
//! - [`FilledZip`]: `PadShortest` with a concrete fill value; yields `Vec<T>`.
//! - [`PolicyZip`]: runtime-selected policy; yields `Vec<Option<T>>`.
//!
//! Every iterator owns its position counter. Tuples are produced at positions
//! `0, 1, 2, ...` and list member 0 first. Restarting means calling the
//! constructor again.

use std::{iter::FusedIterator, marker::PhantomData};

use listools_common::{Result, verify_arg};

use crate::{
    cycle_accessor::{CycleAccessor, offset_mod},
    policy::TerminationPolicy,
};

/// Creates a zip that cycles shorter members until the longest one is
/// exhausted; yields `max(len)` tuples.
///
/// # Errors
///
/// Fails if `members` is empty or if any member is empty.
pub fn zip_cycle<S, T>(members: impl IntoIterator<Item = S>) -> Result<CyclingZip<S, T>>
where
    S: AsRef<[T]>,
    T: Clone,
{
    CyclingZip::new(members, TerminationPolicy::Cycle)
}

/// Creates a zip that cycles every member indefinitely.
///
/// # Errors
///
/// Fails if `members` is empty or if any member is empty.
pub fn zip_inf_cycle<S, T>(members: impl IntoIterator<Item = S>) -> Result<CyclingZip<S, T>>
where
    S: AsRef<[T]>,
    T: Clone,
{
    CyclingZip::new(members, TerminationPolicy::InfiniteCycle)
}

/// Creates a zip that cycles every member until all of them are exhausted at
/// the same time; yields `lcm(len)` tuples, after which the next tuple would
/// equal the first one.
///
/// # Errors
///
/// Fails if `members` is empty, if any member is empty, or if the syzygy
/// point overflows `usize`.
pub fn zip_syzygy<S, T>(members: impl IntoIterator<Item = S>) -> Result<CyclingZip<S, T>>
where
    S: AsRef<[T]>,
    T: Clone,
{
    CyclingZip::new(members, TerminationPolicy::Syzygy)
}

/// Creates a zip that runs until the longest member is exhausted; members
/// that ran out yield `None`.
///
/// Empty members are allowed; a group of only empty members yields no tuples.
///
/// # Errors
///
/// Fails if `members` is empty.
pub fn zip_longest<S, T>(members: impl IntoIterator<Item = S>) -> Result<PaddedZip<S, T>>
where
    S: AsRef<[T]>,
    T: Clone,
{
    PaddedZip::new(members, None)
}

/// Alias of [`zip_longest`].
pub fn zip_each<S, T>(members: impl IntoIterator<Item = S>) -> Result<PaddedZip<S, T>>
where
    S: AsRef<[T]>,
    T: Clone,
{
    zip_longest(members)
}

/// Like [`zip_longest`], but members that ran out yield `default`.
pub fn zip_longest_with<S, T>(
    members: impl IntoIterator<Item = S>,
    default: T,
) -> Result<FilledZip<S, T>>
where
    S: AsRef<[T]>,
    T: Clone,
{
    Ok(FilledZip {
        inner: PaddedZip::new(members, None)?,
        fill: default,
    })
}

/// Creates a zip under a runtime-selected `policy`.
///
/// `default` is the value padded in by `PadShortest`; it is ignored by the
/// cycling policies, whose components are always `Some`.
///
/// # Errors
///
/// See [`TerminationPolicy::tuple_count`].
pub fn zip_with_policy<S, T>(
    members: impl IntoIterator<Item = S>,
    policy: TerminationPolicy,
    default: Option<T>,
) -> Result<PolicyZip<S, T>>
where
    S: AsRef<[T]>,
    T: Clone,
{
    if policy.is_cyclic() {
        CyclingZip::new(members, policy).map(PolicyZip::Cycling)
    } else {
        PaddedZip::new(members, default).map(PolicyZip::Padded)
    }
}

fn resolve_tuple_count(policy: TerminationPolicy, lengths: &[usize]) -> Result<Option<usize>> {
    match policy.tuple_count(lengths) {
        Ok(total) => {
            log::debug!("zip {policy}: member lengths {lengths:?}, tuple count {total:?}");
            Ok(total)
        }
        Err(e) => {
            log::debug!("zip {policy}: rejected member lengths {lengths:?}: {e}");
            Err(e)
        }
    }
}

/// Iterator over tuples of members read with modulo indexing.
///
/// Created by [`zip_cycle`], [`zip_inf_cycle`] and [`zip_syzygy`].
#[derive(Debug, Clone)]
pub struct CyclingZip<S, T> {
    members: Vec<CycleAccessor<S, T>>,
    policy: TerminationPolicy,
    /// Index of the next component in each member, always in `0..len_j`.
    cursors: Vec<usize>,
    /// Position of the next tuple; reduced modulo `period` when unbounded.
    position: usize,
    /// Number of tuples to yield; `None` for an unbounded zip.
    total: Option<usize>,
    /// `lcm(len_j)` of an unbounded zip, if it fits in `usize`.
    period: Option<usize>,
}

impl<S, T> CyclingZip<S, T>
where
    S: AsRef<[T]>,
    T: Clone,
{
    /// Creates a zip over `members` under a cycling `policy`.
    ///
    /// `PadShortest` is rejected as an invalid argument; use [`PaddedZip`]
    /// for it.
    pub fn new(members: impl IntoIterator<Item = S>, policy: TerminationPolicy) -> Result<Self> {
        verify_arg!(policy, policy.is_cyclic());
        let members: Vec<S> = members.into_iter().collect();
        let lengths: Vec<usize> = members.iter().map(|m| m.as_ref().len()).collect();
        let total = resolve_tuple_count(policy, &lengths)?;
        let period = match total {
            Some(_) => None,
            None => listools_maths::list_lcm(&lengths).ok(),
        };
        let members = members
            .into_iter()
            .enumerate()
            .map(|(index, member)| CycleAccessor::for_member(member, index))
            .collect::<Result<Vec<_>>>()?;
        Ok(CyclingZip {
            cursors: vec![0; members.len()],
            members,
            policy,
            position: 0,
            total,
            period,
        })
    }

    /// Returns the tuple at an arbitrary `position`: component `j` is
    /// `member_j[position mod len_j]`.
    ///
    /// This does not move the iterator.
    pub fn tuple_at(&self, position: usize) -> Vec<T> {
        self.members
            .iter()
            .map(|member| member.get(position).clone())
            .collect()
    }

    pub fn policy(&self) -> TerminationPolicy {
        self.policy
    }

    /// Position of the next tuple to be yielded.
    ///
    /// For an unbounded zip this is reduced modulo `lcm(len_j)`, the point
    /// after which the tuples repeat.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of tuples, or `None` for an unbounded zip.
    pub fn total(&self) -> Option<usize> {
        self.total
    }

    pub fn member_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().map(CycleAccessor::len)
    }

    fn advance(&mut self, n: usize) {
        for (member, cursor) in self.members.iter().zip(self.cursors.iter_mut()) {
            *cursor = member.advance(*cursor, n);
        }
        self.position = match (self.total, self.period) {
            (Some(total), _) => self.position.saturating_add(n).min(total),
            (None, Some(period)) => offset_mod(self.position, n, period),
            (None, None) => self.position.saturating_add(n),
        };
    }
}

impl<S, T> Iterator for CyclingZip<S, T>
where
    S: AsRef<[T]>,
    T: Clone,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.total.is_some_and(|total| self.position >= total) {
            return None;
        }
        let tuple = self
            .members
            .iter()
            .zip(&self.cursors)
            .map(|(member, &cursor)| member.get(cursor).clone())
            .collect();
        self.advance(1);
        Some(tuple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.total {
            Some(total) => {
                let remaining = total.saturating_sub(self.position);
                (remaining, Some(remaining))
            }
            None => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.advance(n);
        self.next()
    }
}

impl<S, T> FusedIterator for CyclingZip<S, T>
where
    S: AsRef<[T]>,
    T: Clone,
{
}

/// Iterator over tuples of members read by direct index, padding members
/// that ran out.
///
/// Created by [`zip_longest`] / [`zip_each`]; yields `max(len)` tuples.
#[derive(Debug, Clone)]
pub struct PaddedZip<S, T> {
    members: Vec<S>,
    default: Option<T>,
    /// Position of the next tuple.
    position: usize,
    total: usize,
    _t: PhantomData<fn() -> T>,
}

impl<S, T> PaddedZip<S, T>
where
    S: AsRef<[T]>,
    T: Clone,
{
    /// Creates a padded zip; components past the end of their member are
    /// `default.clone()`.
    pub fn new(members: impl IntoIterator<Item = S>, default: Option<T>) -> Result<Self> {
        let members: Vec<S> = members.into_iter().collect();
        verify_arg!(members, !members.is_empty());
        let lengths: Vec<usize> = members.iter().map(|m| m.as_ref().len()).collect();
        let total = resolve_tuple_count(TerminationPolicy::PadShortest, &lengths)?.unwrap_or(0);
        Ok(PaddedZip {
            members,
            default,
            position: 0,
            total,
            _t: PhantomData,
        })
    }

    /// Returns the tuple at `position`: component `j` is `Some(member_j[position])`
    /// if `position < len_j`, else the default.
    pub fn tuple_at(&self, position: usize) -> Vec<Option<T>> {
        self.members
            .iter()
            .map(|member| {
                member
                    .as_ref()
                    .get(position)
                    .cloned()
                    .or_else(|| self.default.clone())
            })
            .collect()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

impl<S, T> Iterator for PaddedZip<S, T>
where
    S: AsRef<[T]>,
    T: Clone,
{
    type Item = Vec<Option<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.total {
            return None;
        }
        let tuple = self.tuple_at(self.position);
        self.position += 1;
        Some(tuple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.position;
        (remaining, Some(remaining))
    }
}

impl<S, T> ExactSizeIterator for PaddedZip<S, T>
where
    S: AsRef<[T]>,
    T: Clone,
{
}

impl<S, T> FusedIterator for PaddedZip<S, T>
where
    S: AsRef<[T]>,
    T: Clone,
{
}

/// A [`PaddedZip`] that substitutes a fill value for every missing component.
///
/// Created by [`zip_longest_with`].
#[derive(Debug, Clone)]
pub struct FilledZip<S, T> {
    inner: PaddedZip<S, T>,
    fill: T,
}

impl<S, T> Iterator for FilledZip<S, T>
where
    S: AsRef<[T]>,
    T: Clone,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let tuple = self.inner.next()?;
        Some(
            tuple
                .into_iter()
                .map(|component| component.unwrap_or_else(|| self.fill.clone()))
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S, T> ExactSizeIterator for FilledZip<S, T>
where
    S: AsRef<[T]>,
    T: Clone,
{
}

impl<S, T> FusedIterator for FilledZip<S, T>
where
    S: AsRef<[T]>,
    T: Clone,
{
}

/// Zip iterator for a policy chosen at runtime.
///
/// Components are `Option<T>` so that every policy shares one item type;
/// the cycling variants always yield `Some`.
#[derive(Debug, Clone)]
pub enum PolicyZip<S, T> {
    Cycling(CyclingZip<S, T>),
    Padded(PaddedZip<S, T>),
}

impl<S, T> PolicyZip<S, T>
where
    S: AsRef<[T]>,
    T: Clone,
{
    pub fn policy(&self) -> TerminationPolicy {
        match self {
            PolicyZip::Cycling(zip) => zip.policy(),
            PolicyZip::Padded(_) => TerminationPolicy::PadShortest,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            PolicyZip::Cycling(zip) => zip.position(),
            PolicyZip::Padded(zip) => zip.position(),
        }
    }

    /// Total number of tuples, or `None` for an unbounded zip.
    pub fn total(&self) -> Option<usize> {
        match self {
            PolicyZip::Cycling(zip) => zip.total(),
            PolicyZip::Padded(zip) => Some(zip.total()),
        }
    }
}

impl<S, T> Iterator for PolicyZip<S, T>
where
    S: AsRef<[T]>,
    T: Clone,
{
    type Item = Vec<Option<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            PolicyZip::Cycling(zip) => zip
                .next()
                .map(|tuple| tuple.into_iter().map(Some).collect()),
            PolicyZip::Padded(zip) => zip.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            PolicyZip::Cycling(zip) => zip.size_hint(),
            PolicyZip::Padded(zip) => zip.size_hint(),
        }
    }
}

impl<S, T> FusedIterator for PolicyZip<S, T>
where
    S: AsRef<[T]>,
    T: Clone,
{
}
