pub mod build;
pub mod designs;
pub mod make;
