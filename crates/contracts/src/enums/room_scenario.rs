use serde::{Deserialize, Serialize};

/// Сценарий использования (помещение)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoomScenario {
    LivingRoom,
    Bedroom,
    Entryway,
}

impl RoomScenario {
    /// Получить код сценария (он же ключ перевода)
    pub fn code(&self) -> &'static str {
        match self {
            RoomScenario::LivingRoom => "livingRoom",
            RoomScenario::Bedroom => "bedroom",
            RoomScenario::Entryway => "entryway",
        }
    }

    pub fn all() -> [RoomScenario; 3] {
        [
            RoomScenario::LivingRoom,
            RoomScenario::Bedroom,
            RoomScenario::Entryway,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "livingRoom" => Some(RoomScenario::LivingRoom),
            "bedroom" => Some(RoomScenario::Bedroom),
            "entryway" => Some(RoomScenario::Entryway),
            _ => None,
        }
    }
}
