pub mod admin;
pub mod auth;
pub mod cart;
pub mod content;
pub mod custom_requests;
pub mod orders;
pub mod products;
