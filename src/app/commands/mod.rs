pub mod cgi;
pub mod command;
pub mod doctor;
pub mod generate;
pub mod install;
pub mod screens;
