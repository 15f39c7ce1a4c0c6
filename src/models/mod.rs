mod order;
mod product;

pub use order::Order;
pub use product::Product;
