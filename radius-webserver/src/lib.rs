#![recursion_limit = "128"]

#[macro_use]
extern crate log;

mod web;

pub use web::{run, Cfg};
