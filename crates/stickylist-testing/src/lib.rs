//! Testing utilities and harness for Stickylist

pub mod fixture;
pub mod vec_context;

pub use fixture::*;
pub use vec_context::*;

pub mod prelude {
    pub use crate::fixture::{FixtureItem, FixtureKind, TableFixture};
    pub use crate::vec_context::{CommitLog, VecLayoutContext};
}
