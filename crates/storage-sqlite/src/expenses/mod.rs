mod model;
mod repository;

pub use model::ExpenseEntryDB;
pub use repository::ExpenseRepository;
