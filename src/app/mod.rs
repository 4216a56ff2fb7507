//! 应用层

pub mod inventory;
pub mod router;
