//! Architectural storage tests.
