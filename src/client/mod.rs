pub mod app;
pub mod components;
pub mod router;
pub mod routes;
pub mod store;

#[cfg(test)]
pub(crate) mod test_util;

pub use app::App;
