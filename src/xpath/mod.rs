pub mod literal;

pub use literal::{decode_concat_args, escape, unescape};
