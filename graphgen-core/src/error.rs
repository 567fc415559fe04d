//! Error types for the graphgen core library.
//!
//! Usage errors (bad vertex counts, out-of-range sources) and resource errors
//! (graph storage that cannot be allocated) share one enum so callers can
//! branch on a stable code. Disconnected graphs are not errors; they surface
//! as [`crate::Distance::Unreachable`] values instead.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced while building, generating, or traversing a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A graph must contain at least one vertex.
    #[error("vertex count must be at least 1 (got {got})")]
    InvalidVertexCount {
        /// The vertex count supplied by the caller.
        got: usize,
    },
    /// A traversal was rooted at a vertex the graph does not contain.
    #[error("source vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    SourceOutOfRange {
        /// The requested source vertex.
        vertex: usize,
        /// Number of vertices in the traversed graph.
        vertex_count: usize,
    },
    /// Storage for the adjacency matrix could not be reserved.
    #[error("cannot allocate adjacency storage for {vertex_count} vertices")]
    AllocationFailed {
        /// Vertex count whose `n * n` matrix could not be allocated.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A graph must contain at least one vertex.
        InvalidVertexCount => InvalidVertexCount { .. } => "GRAPH_INVALID_VERTEX_COUNT",
        /// A traversal was rooted at a vertex the graph does not contain.
        SourceOutOfRange => SourceOutOfRange { .. } => "GRAPH_SOURCE_OUT_OF_RANGE",
        /// Storage for the adjacency matrix could not be reserved.
        AllocationFailed => AllocationFailed { .. } => "GRAPH_ALLOCATION_FAILED",
    }
}

impl GraphError {
    /// Returns `true` for errors caused by invalid caller input rather than
    /// resource exhaustion.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::GraphError;
    ///
    /// assert!(GraphError::InvalidVertexCount { got: 0 }.is_usage_error());
    /// assert!(!GraphError::AllocationFailed { vertex_count: 70_000 }.is_usage_error());
    /// ```
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidVertexCount { .. } | Self::SourceOutOfRange { .. }
        )
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
