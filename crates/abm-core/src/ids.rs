//! Strongly typed, zero-cost handles for scheduled entities.
//!
//! Agents are compared by identity, never by value, so every agent lives in
//! an arena and is referred to by its `AgentId`.  Occupancy grids and the
//! schedule's live/staging sets hold these handles, not the agents
//! themselves.  Handles are never reused within one `Sim`, so a stale handle
//! can only miss, never alias a newer agent.

use std::fmt;

/// Generate a typed handle wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as an arena index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }
    };
}

typed_id! {
    /// Handle of an agent in the schedule's arena.
    pub struct AgentId(u32);
}

typed_id! {
    /// Position of a helper in the schedule's ordered helper list.
    pub struct HelperId(u32);
}
