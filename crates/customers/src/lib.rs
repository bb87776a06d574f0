//! Customer records as read from the `customers` collection.

pub mod customer;

pub use customer::{ContactInfo, CustomerRecord};
