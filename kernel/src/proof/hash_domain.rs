//! Typed domain separators for [`super::hash::canonical_hash`].
//!
//! Every digest in the workspace selects a domain from [`HashDomain`], so a
//! graph snapshot and a search result with identical bytes can never collide.

/// Declares `HashDomain`, `as_bytes()`, `ALL`, and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator.
        ///
        /// Every variant maps to a unique, null-terminated byte string used as
        /// a SHA-256 prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    /// Road graph snapshot (adjacency + heuristic table).
    GraphSnapshot => b"PATHLAB::GRAPH_SNAPSHOT::V1\0",

    /// Deterministic projection of one `SearchResult` (timing excluded).
    SearchResult => b"PATHLAB::SEARCH_RESULT::V1\0",

    /// Digest basis of a multi-algorithm comparison report.
    ComparisonReport => b"PATHLAB::COMPARISON_REPORT::V1\0",
}
