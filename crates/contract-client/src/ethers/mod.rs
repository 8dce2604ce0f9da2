pub mod lottery;
pub mod provider;
