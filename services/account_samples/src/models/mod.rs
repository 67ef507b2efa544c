pub mod account;
pub mod merchant_info;
mod uint64;
