pub mod support;

mod errors;
mod folders;
mod init;
mod orphan;
mod random;
mod status;
mod toggle;
