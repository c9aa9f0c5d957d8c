pub mod command_parser;
pub mod description;
pub mod table;
pub mod xpath_parser;

pub use command_parser::{parse, CommandParser};
pub use description::{Parsed, ParsedDescription};
pub use table::PatternTable;
pub use xpath_parser::parse_xpath;
