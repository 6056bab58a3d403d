pub mod db;
pub mod upload;
pub mod utils;
