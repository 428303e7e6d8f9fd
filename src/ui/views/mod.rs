pub mod build;
pub mod dispatch;
