// API module for the flex-reviews HTTP server
// Serves the review dashboard front-end

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;

pub use server::ApiServer;
