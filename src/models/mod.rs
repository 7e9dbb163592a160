pub mod customer;
pub mod store;
pub mod training;

pub use customer::{Customer, CustomerRef, format_name};
pub use store::{Record, RecordSet};
pub use training::{RecordId, Training};
