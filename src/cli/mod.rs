pub mod commands;
pub mod printer;
