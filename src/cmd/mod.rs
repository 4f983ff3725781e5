mod export;
mod init;
mod show;

pub use export::export;
pub use init::init;
pub use show::show;
