pub mod browser;
pub mod gitconfig;
pub mod mangle;
pub mod remote;
