pub mod api;
pub mod hostaway;
pub mod normalization;
pub mod reviews;
pub mod tracing;

pub mod util {
    pub mod env;
}
