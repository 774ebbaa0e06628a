pub mod assigner;
pub mod error;
pub mod form;
pub mod grade;
pub mod output;
pub mod parser;
