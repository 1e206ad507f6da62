mod form_tests;
mod query_tests;
mod routing_tests;
