//! Unit test modules.

mod body_test;
mod evaluator_test;
mod heart_rate_test;
mod zones_test;
