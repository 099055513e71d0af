pub mod batch;
pub mod normalize;
pub mod transfer;
