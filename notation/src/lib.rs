// print to stderr only when built with the 'debug' feature
macro_rules! debug {
    ($($args:tt)*) => (if cfg!(feature="debug") { eprintln!($($args)*); })
}

pub use lexers::{Bracket, NotationToken};

pub use catalog::{constant, lookup, OperatorSpec, CATALOG};
pub use error::EvalErr;
pub use notations::Notation;
pub use observer::{Action, Observer, Silent};
pub use convert::{convert, infix_to_postfix, infix_to_prefix, postfix_to_infix, prefix_to_infix};

mod catalog;
mod error;
mod notations;
mod observer;
mod convert;

pub mod infix;
pub mod prefix;
pub mod postfix;

#[cfg(test)]
mod postfix_test;
#[cfg(test)]
mod convert_test;
