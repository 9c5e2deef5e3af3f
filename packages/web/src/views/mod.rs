mod home;
pub use home::Home;

mod legal;
pub use legal::{Cgv, Mentions};

mod demo;
pub use demo::Demo;
