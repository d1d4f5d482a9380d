//! Unit test modules.

mod daily_load_test;
mod parser_test;
mod smoothing_test;
mod status_test;
