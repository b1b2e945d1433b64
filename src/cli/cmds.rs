pub mod drink;
pub mod goal;
pub mod history;
pub mod init;
pub mod plot;
pub mod reset;
pub mod root;
pub mod status;
