use listools_common::{Result, error::Error, verify_arg};

/// Selects how many tuples a zip yields and how members shorter than that
/// count are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TerminationPolicy {
    /// Yields `max(len)` tuples; every member is read at `i mod len`, so
    /// shorter members restart from index 0.
    #[default]
    Cycle,
    /// Same index mapping as `Cycle`, but never terminates.
    InfiniteCycle,
    /// Yields `lcm(len)` tuples: the first position at which every member is
    /// back at its starting index, i.e. where the first tuple would repeat.
    Syzygy,
    /// Yields `max(len)` tuples; a member shorter than the current position
    /// yields the configured default instead of wrapping around.
    PadShortest,
}

/// Convert a string name to a TerminationPolicy enum variant.
impl TryFrom<&str> for TerminationPolicy {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        match name {
            "cycle" => Ok(TerminationPolicy::Cycle),
            "inf-cycle" => Ok(TerminationPolicy::InfiniteCycle),
            "syzygy" => Ok(TerminationPolicy::Syzygy),
            "pad-shortest" | "longest" | "each" => Ok(TerminationPolicy::PadShortest),
            _ => Err(Error::invalid_arg(
                "name",
                format!("Unrecognized termination policy: {name}"),
            )),
        }
    }
}

impl TerminationPolicy {
    /// Get the name of the policy as a static string.
    pub const fn name(&self) -> &'static str {
        match self {
            TerminationPolicy::Cycle => "cycle",
            TerminationPolicy::InfiniteCycle => "inf-cycle",
            TerminationPolicy::Syzygy => "syzygy",
            TerminationPolicy::PadShortest => "pad-shortest",
        }
    }

    /// Whether members are read with modulo indexing (and therefore must be
    /// non-empty).
    pub const fn is_cyclic(&self) -> bool {
        !matches!(self, TerminationPolicy::PadShortest)
    }

    /// Whether the zip terminates on its own.
    pub const fn is_bounded(&self) -> bool {
        !matches!(self, TerminationPolicy::InfiniteCycle)
    }

    /// Number of tuples a zip over members of the given `lengths` yields, or
    /// `None` if it is unbounded.
    ///
    /// # Errors
    ///
    /// - Invalid argument if `lengths` is empty.
    /// - Empty sequence if the policy is cyclic and some length is 0.
    /// - Arithmetic overflow if the syzygy point does not fit in `usize`.
    pub fn tuple_count(&self, lengths: &[usize]) -> Result<Option<usize>> {
        verify_arg!(lengths, !lengths.is_empty());
        if self.is_cyclic() {
            if let Some(index) = lengths.iter().position(|&len| len == 0) {
                return Err(Error::empty_sequence(index));
            }
        }
        let longest = lengths.iter().copied().max().unwrap_or(0);
        match self {
            TerminationPolicy::Cycle | TerminationPolicy::PadShortest => Ok(Some(longest)),
            TerminationPolicy::InfiniteCycle => Ok(None),
            TerminationPolicy::Syzygy => listools_maths::list_lcm(lengths).map(Some),
        }
    }
}

impl std::fmt::Display for TerminationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
