pub mod export;
pub mod preprocess;
pub mod session;
