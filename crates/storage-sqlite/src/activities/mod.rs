mod model;
mod repository;

pub use model::ActivityDB;
pub use repository::ActivityRepository;
