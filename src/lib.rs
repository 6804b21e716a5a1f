// error_chain macro can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use(lazy_static)]
extern crate lazy_static;

pub mod annotation;
pub mod args;
pub mod commands;
pub mod common;
pub mod constants;
pub mod design;
pub mod enzyme;
pub mod errors;
pub mod iupac;
pub mod messages;
pub mod pam;
pub mod progress;
pub mod scan;
pub mod score;
pub mod sequence;
pub mod strand;
pub mod table;

pub use crate::design::{design, Design};
pub use crate::enzyme::Enzyme;
pub use crate::scan::Site;
