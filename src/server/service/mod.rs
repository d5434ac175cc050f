//! Order desk logic, free of any HTTP concern.

pub(crate) mod accumulator;
pub(crate) mod catalog;
pub(crate) mod submission;
