pub mod date_parser;
