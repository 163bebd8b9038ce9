//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area of the viewer.
//! Use cases orchestrate the domain functions across the infrastructure ports.

pub mod catalog;
pub mod creatures;
pub mod inspect;
pub mod session;
pub mod theme;
pub mod zone;

// Re-export main types
pub use catalog::{LoadCatalog, LoadedCatalog};
pub use creatures::AggregateCreatures;
pub use inspect::{CreatureDetail, InspectCreature};
pub use session::{NavigationToken, Session, SessionState};
pub use theme::ThemePreference;
pub use zone::{ListZones, OpenZone, ReturnToOverview, SetVersion, ZoneError, ZoneUseCases, ZoneView};
