//! Entities, schema registry and store connection for the directory.

pub mod errors;
pub mod db;
pub mod schema;
pub mod resource;

pub mod country;
pub mod zone;
pub mod service_center;
pub mod product;
pub mod product_type;
pub mod gauge;
pub mod color;
pub mod user;
pub mod user_country;

#[cfg(test)]
mod tests;
