mod app;
pub mod views;
pub mod widgets;

pub use app::LifeMapApp;
