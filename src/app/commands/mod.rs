pub mod init;
pub mod show;
