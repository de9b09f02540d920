pub mod camera;
pub mod picking;
pub mod scene;
pub mod ui;

pub use scene::run;
