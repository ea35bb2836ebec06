pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::product;
pub use outbound::repositories;
