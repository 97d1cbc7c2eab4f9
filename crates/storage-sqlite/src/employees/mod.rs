mod model;
mod repository;

pub use model::EmployeeDB;
pub use repository::EmployeeRepository;
