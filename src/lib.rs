pub mod catalog;
pub mod configuration;
pub mod notification;
pub mod simulation;
pub mod visualization;

pub use catalog::bodies::{BodyClass, BodyDescriptor, PLANETS, SUN};
pub use configuration::config::ViewerConfig;
pub use notification::completion::{BlockCompletion, CompletionPayload, SettleNotifier};
pub use simulation::scenario::SolarSystem;
pub use simulation::selection::Selection;
pub use simulation::states::{BodyState, Controls, KinematicState, NVec3};
pub use visualization::run;
