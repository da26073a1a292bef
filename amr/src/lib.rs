// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate fnv;
extern crate regex;
#[macro_use]
extern crate log;
#[macro_use]
extern crate error_chain;

pub mod errors;
pub mod graph;
pub mod parser;
pub mod reader;
pub mod prelude;
