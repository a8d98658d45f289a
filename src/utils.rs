//! Utility macros used across the library tests
