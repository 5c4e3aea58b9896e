//! Core building blocks: parse-or-zero argument conversion and the integer
//! arithmetic primitives. These are internal primitives consumed by the
//! high-level `api` module.
pub mod arith;
pub mod parse;
