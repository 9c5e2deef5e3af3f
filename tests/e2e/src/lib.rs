//! Browser and HTTP end-to-end helpers for the landing page server.

pub mod browser;
pub mod test_server;
