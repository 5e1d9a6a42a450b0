pub mod contact;
mod client;

pub use client::*;
