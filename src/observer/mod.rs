pub mod experience;
pub mod registry;

pub use experience::{ExperienceObserver, XpCalculator};
pub use registry::{FightObserver, FinishedFight, ObserverRegistry};
