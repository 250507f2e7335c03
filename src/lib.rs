pub mod config;
pub mod error;
pub mod io_struct;
pub mod logging;
pub mod relay;
pub mod server;
pub mod upstream;
pub mod validator;
