/// Returns the length of the shortest period of `items`.
///
/// A period `p` is accepted when `items[n] == items[n + p]` for every valid
/// `n`, so a trailing partial cycle still counts as periodic. With
/// `ignore_partial_cycles`, the shortest period must also divide the length;
/// otherwise the list is treated as aperiodic. An aperiodic list has a
/// period equal to its length.
///
/// ```
/// use listools_listutils::period_len;
///
/// assert_eq!(period_len(&[1, 2, 3, 1, 2, 3, 1], false), 3);
/// assert_eq!(period_len(&[1, 2, 3, 1, 2, 3, 1], true), 7);
/// ```
pub fn period_len<T: PartialEq>(items: &[T], ignore_partial_cycles: bool) -> usize {
    let len = items.len();
    let period = (1..len)
        .find(|&period| items.iter().zip(&items[period..]).all(|(a, b)| a == b))
        .unwrap_or(len);
    if ignore_partial_cycles && period != 0 && len % period != 0 {
        log::debug!("period_len: partial cycle of period {period} in {len} items");
        return len;
    }
    period
}
