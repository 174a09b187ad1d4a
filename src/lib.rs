#![forbid(unsafe_code)]

pub mod errors;
pub mod exports;
pub mod model;
pub mod rewards;
