pub use self::{scheme::*, tx_type::*};

pub mod constants;
mod scheme;
mod tx_type;

#[cfg(test)]
pub(crate) use self::scheme::tests as fixtures;
