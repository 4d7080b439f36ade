#![doc = include_str!("../README.md")]
//! ## Modules
//!
//! * [`ast`]: syntax tree nodes
//! * [`parse`]: parsers producing those nodes
//! * [`verify`]: comparing parse results against expectations (feature `harness`)
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

pub use toyfront_combinators::*;

pub mod ast;
pub mod parse;

#[cfg(feature = "harness")]
pub mod verify;

#[cfg(test)]
#[ctor::ctor]
fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}
