//! Property-based tests for catalog invariants
//!
//! These tests generate arbitrary movies and check that the registries and
//! the reports keep their invariants over all of them.

mod domain_invariants;
mod generators;
mod report_invariants;
