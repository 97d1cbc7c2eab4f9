mod model;
mod repository;

pub use model::{ReceivableDB, ReceivablePaymentDB};
pub use repository::ReceivableRepository;
