mod loader_mode_tests;
mod urql_codegen_config_tests;
