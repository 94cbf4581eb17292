pub mod catalog;
pub mod config;
pub mod country;
pub mod export;
pub mod fetch;
pub mod harmonize;
pub mod index;
pub mod observation;
pub mod output;
