//! Income module - sale and deposit entries.

mod income_constants;
mod income_model;
mod income_service;
mod income_traits;



pub use income_constants::*;
pub use income_model::{IncomeEntry, IncomeEntryUpdate, NewIncomeEntry};
pub use income_service::IncomeService;
pub use income_traits::{IncomeRepositoryTrait, IncomeServiceTrait};
