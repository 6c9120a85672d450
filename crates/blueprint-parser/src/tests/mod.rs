mod lexer_property_tests;
mod parser_tests;
mod utils;
