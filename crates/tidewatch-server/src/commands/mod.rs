pub mod digest;
pub mod feeds;
pub mod quiz;
pub mod serve;
