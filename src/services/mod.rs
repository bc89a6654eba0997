pub mod demo;
pub mod query;
pub mod render;

pub use demo::DemoService;
pub use query::QueryService;
pub use render::ListRenderer;
