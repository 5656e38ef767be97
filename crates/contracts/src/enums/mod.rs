pub mod carpet_category;
pub mod language;
pub mod material_kind;
pub mod room_scenario;

pub use carpet_category::CarpetCategory;
pub use language::Language;
pub use material_kind::MaterialKind;
pub use room_scenario::RoomScenario;
