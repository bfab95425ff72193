//! Pure transformations: contract checks, config merging, and interceptor
//! stage resolution. Nothing in this module performs I/O.

pub(crate) mod contract;
pub(crate) mod merge;
pub(crate) mod stages;
