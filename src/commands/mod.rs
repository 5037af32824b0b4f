pub mod categories;
pub mod day;
pub mod delete;
pub mod edit;
pub mod login;
pub mod month;
pub mod new;
