//! Order records as read from the `orders` collection.

pub mod order;

pub use order::{OrderLine, OrderRecord, OrderStatus};
