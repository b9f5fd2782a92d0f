pub mod dump;
pub mod export;
pub mod init;
pub mod scan;
