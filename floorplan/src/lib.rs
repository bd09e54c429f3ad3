pub mod compact;
pub mod composition;
pub mod config;
pub mod emit;
pub mod error;
pub mod partition;
pub mod pblock;

#[cfg(test)]
mod testutil;
