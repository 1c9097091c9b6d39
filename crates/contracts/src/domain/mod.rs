pub mod a001_person;
pub mod common;
