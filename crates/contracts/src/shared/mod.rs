pub mod error;
pub mod filter;
pub mod localization;
pub mod translations;
