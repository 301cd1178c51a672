mod support;

mod client_tests;
mod loader_tests;
