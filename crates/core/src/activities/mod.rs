//! Audit activity feed - domain models, services, and traits.

mod activities_constants;
mod activities_model;
mod activities_service;
mod activities_traits;

pub use activities_constants::*;
pub use activities_model::{Activity, NewActivity};
pub use activities_service::ActivityService;
pub use activities_traits::{ActivityRepositoryTrait, ActivityServiceTrait};
