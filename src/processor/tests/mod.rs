//! Integration tests for the processor module
//!
//! Exercises the complete load → infer → statistics pipeline on temporary files.
