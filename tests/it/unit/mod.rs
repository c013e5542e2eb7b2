//! Unit tests for the ipl editor.

mod hit_testing_tests;
