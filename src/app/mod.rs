//! 业务模块，按领域划分 model / handler / service

pub mod category;
pub mod order;
pub mod product;
