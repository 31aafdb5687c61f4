pub mod capture;
pub mod shared;
