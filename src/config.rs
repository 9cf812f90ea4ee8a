//! Engine configuration.

use crate::geometry::Slice;

/// Set of slices, stored as a bitmask indexed by [`Slice::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliceSet(u16);

impl SliceSet {
    pub const EMPTY: Self = Self(0);

    /// All nine slices.
    pub const ALL: Self = Self((1 << Slice::ALL.len()) - 1);

    /// Everything except `S`, whose color handling is kept as an identity
    /// and is off unless asked for.
    pub const DEFAULT: Self = Self::ALL.without(Slice::S);

    pub const fn with(self, slice: Slice) -> Self {
        Self(self.0 | (1 << slice.index()))
    }

    pub const fn without(self, slice: Slice) -> Self {
        Self(self.0 & !(1 << slice.index()))
    }

    pub const fn contains(self, slice: Slice) -> bool {
        self.0 & (1 << slice.index()) != 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in [`Slice::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Slice> {
        Slice::ALL.into_iter().filter(move |&slice| self.contains(slice))
    }
}

impl Default for SliceSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromIterator<Slice> for SliceSet {
    fn from_iter<I: IntoIterator<Item = Slice>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, SliceSet::with)
    }
}

/// Options fixed for the lifetime of a cube, kept across resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Slices the engine accepts moves on and scrambles with.
    pub enabled_slices: SliceSet,
    /// Check after staging each move that no two pieces share a position.
    pub verify_invariants: bool,
}

impl EngineConfig {
    pub fn with_slice_enabled(mut self, slice: Slice, enabled: bool) -> Self {
        self.enabled_slices = if enabled {
            self.enabled_slices.with(slice)
        } else {
            self.enabled_slices.without(slice)
        };
        self
    }

    pub fn with_invariant_checks(mut self, verify: bool) -> Self {
        self.verify_invariants = verify;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            enabled_slices: SliceSet::DEFAULT,
            verify_invariants: cfg!(debug_assertions),
        }
    }
}
