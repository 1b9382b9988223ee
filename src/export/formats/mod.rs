pub mod counts;
pub mod pfm;
