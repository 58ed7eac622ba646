pub mod catalog;
pub mod purchase;
pub mod quote;
