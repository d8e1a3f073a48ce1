//! Front matter tests
//!
//! Header extraction through the public API and its placement in serialized output.

mod header;
