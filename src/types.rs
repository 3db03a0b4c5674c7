use serde::Serialize;

pub const NODE_ROW_WIDTH: usize = 6;
pub const STATE_ROW_WIDTH: usize = 5;

/// Node row: address, rest url, nickname, timestamp, last seen, fleet state icon.
pub type NodeRow = [String; NODE_ROW_WIDTH];

/// State row: nickname, symbol, color hex, color name, updated.
pub type StateRow = [String; STATE_ROW_WIDTH];

// The store has no fleet state icon column yet; every node row carries this.
pub const FLEET_STATE_ICON_PLACEHOLDER: &str = "?";

/// Fleet state a node was last seen reporting.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FleetStateNickname {
    #[default]
    Unknown,
    Known(String),
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ColorDescriptor {
    pub hex: String,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fleet_state_nickname_serializes_as_tag() {
        assert_eq!(
            serde_json::to_value(FleetStateNickname::Unknown).unwrap(),
            serde_json::json!("unknown")
        );
        assert_eq!(
            serde_json::to_value(FleetStateNickname::Known("Teal Club".to_string())).unwrap(),
            serde_json::json!({"known": "Teal Club"})
        );
    }
}
