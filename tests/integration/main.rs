//! Integration tests

mod display_test;
mod e2e_test;
mod ladder_test;
