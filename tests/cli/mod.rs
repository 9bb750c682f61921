mod cgi_contract;
mod command_contract;
mod config_contract;
mod doctor_contract;
mod install_contract;
mod screens_contract;
