#![cfg_attr(feature = "no-std", no_std)]

pub mod fill;
pub mod payload;
pub mod types;
