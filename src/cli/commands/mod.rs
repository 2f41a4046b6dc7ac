mod command_result;
pub mod init;
pub mod pot;

pub use command_result::*;
