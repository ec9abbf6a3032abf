pub mod board;
pub mod health;
pub mod init;
pub mod list;
