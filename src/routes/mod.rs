pub mod awd;
pub mod carbon;
pub mod field;
pub mod fusion;
pub mod indices;
pub mod report;
