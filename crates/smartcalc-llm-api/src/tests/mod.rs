mod client_format_tests;
mod model_config_tests;
