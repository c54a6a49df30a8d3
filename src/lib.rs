pub mod config;
pub mod date_key;
pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod model;
pub mod rapidapi;
pub mod sns;
