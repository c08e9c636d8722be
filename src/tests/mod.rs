
mod cli_context_tests;
mod filter_builder_tests;
