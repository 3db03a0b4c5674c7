use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::error::{check_column, RowMismatch};
use crate::node::NICKNAME_LEN;
use crate::random::{random_char, random_string, ASCII_LETTERS, HEX_DIGITS, PUNCTUATION};
use crate::timestamp::{rfc2822, TimestampFormat};
use crate::types::{ColorDescriptor, StateRow};

pub const COLORS: [&str; 7] = ["red", "green", "yellow", "blue", "black", "brown", "purple"];

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StateRecord {
    pub nickname: String,
    /// Color and symbol the fleet state is drawn with.
    pub metadata: (ColorDescriptor, String),
    pub updated: DateTime<Utc>,
}

impl StateRecord {
    pub fn symbol(&self) -> &str {
        &self.metadata.1
    }

    pub fn color_hex(&self) -> &str {
        &self.metadata.0.hex
    }

    pub fn color(&self) -> &str {
        &self.metadata.0.color
    }
}

#[derive(Clone, Debug)]
pub struct StateSpec {
    pub nickname: String,
    pub symbol: String,
    pub color_hex: String,
    pub color: String,
    pub updated: DateTime<Utc>,
}

impl Default for StateSpec {
    fn default() -> Self {
        Self {
            nickname: "Blue Knight Teal Club".to_string(),
            symbol: "♣".to_string(),
            color_hex: "#1E65F3".to_string(),
            color: "blue".to_string(),
            updated: Utc::now(),
        }
    }
}

pub fn create_state(spec: StateSpec) -> StateRecord {
    debug!(nickname = %spec.nickname, color = %spec.color, "created mock fleet state");
    StateRecord {
        nickname: spec.nickname,
        metadata: (
            ColorDescriptor {
                hex: spec.color_hex,
                color: spec.color,
            },
            spec.symbol,
        ),
        updated: spec.updated,
    }
}

pub fn create_random_state() -> StateRecord {
    create_random_state_with(&mut rand::thread_rng())
}

pub fn create_random_state_with<R: Rng>(rng: &mut R) -> StateRecord {
    let nickname = random_string(rng, ASCII_LETTERS, NICKNAME_LEN);
    let minutes_ago = rng.gen_range(0..59);
    let symbol = random_char(rng, PUNCTUATION).to_string();
    let color_hex = format!("#{}", random_string(rng, HEX_DIGITS, 6));
    let color = COLORS[rng.gen_range(0..COLORS.len())].to_string();

    create_state(StateSpec {
        nickname,
        symbol,
        color_hex,
        color,
        updated: Utc::now() - Duration::minutes(minutes_ago),
    })
}

pub fn state_to_row(state: &StateRecord) -> StateRow {
    [
        state.nickname.clone(),
        state.symbol().to_string(),
        state.color_hex().to_string(),
        state.color().to_string(),
        rfc2822(&state.updated),
    ]
}

/// Check a stored row against its state, reading `updated` as RFC-3339.
///
/// Rows from [`state_to_row`] carry RFC-2822 and so fail here on the `updated`
/// column; use [`verify_state_row_as`] with [`TimestampFormat::Rfc2822`] to
/// check those.
pub fn verify_state_row(state: &StateRecord, row: &StateRow) -> Result<(), RowMismatch> {
    verify_state_row_as(state, row, TimestampFormat::Rfc3339)
}

pub fn verify_state_row_as(
    state: &StateRecord,
    row: &StateRow,
    updated_format: TimestampFormat,
) -> Result<(), RowMismatch> {
    check_column(0, "nickname", "nickname matches", &state.nickname, &row[0])?;
    check_column(1, "symbol", "symbol matches", state.symbol(), &row[1])?;
    check_column(2, "color_hex", "color hex matches", state.color_hex(), &row[2])?;
    check_column(3, "color", "color matches", state.color(), &row[3])?;
    check_column(
        4,
        "updated",
        "updated timestamp matches",
        &updated_format.render(&state.updated),
        &row[4],
    )?;
    Ok(())
}

#[track_caller]
pub fn assert_state_row_matches(state: &StateRecord, row: &StateRow, updated_format: TimestampFormat) {
    if let Err(mismatch) = verify_state_row_as(state, row, updated_format) {
        panic!("{}", mismatch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn updated() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 3, 14, 15, 9, 26).unwrap() + Duration::milliseconds(535)
    }

    #[test]
    fn default_state_row() {
        let state = create_state(StateSpec {
            updated: updated(),
            ..StateSpec::default()
        });
        assert_eq!(
            state_to_row(&state),
            [
                "Blue Knight Teal Club".to_string(),
                "♣".to_string(),
                "#1E65F3".to_string(),
                "blue".to_string(),
                "Sun, 14 Mar 2021 15:09:26 GMT".to_string(),
            ]
        );
    }

    #[test]
    fn metadata_holds_one_pair() {
        let state = create_state(StateSpec::default());
        assert_eq!(
            state.metadata,
            (
                ColorDescriptor {
                    hex: "#1E65F3".to_string(),
                    color: "blue".to_string()
                },
                "♣".to_string()
            )
        );
    }

    #[test]
    fn rfc2822_row_fails_rfc3339_check() {
        let state = create_state(StateSpec {
            updated: updated(),
            ..StateSpec::default()
        });
        let row = state_to_row(&state);

        let mismatch = verify_state_row(&state, &row).unwrap_err();
        assert_eq!(mismatch.column, 4);
        assert_eq!(mismatch.expected, "2021-03-14T15:09:26.5Z");
        assert_eq!(mismatch.actual, "Sun, 14 Mar 2021 15:09:26 GMT");

        assert!(verify_state_row_as(&state, &row, TimestampFormat::Rfc2822).is_ok());
    }

    #[test]
    fn rfc3339_row_passes_default_check() {
        let state = create_state(StateSpec {
            updated: updated(),
            ..StateSpec::default()
        });
        let mut row = state_to_row(&state);
        row[4] = "2021-03-14T15:09:26.5Z".to_string();
        assert!(verify_state_row(&state, &row).is_ok());
    }

    #[test]
    #[should_panic(expected = "color hex matches")]
    fn assert_panics_on_color_hex() {
        let state = create_state(StateSpec::default());
        let mut row = state_to_row(&state);
        row[2] = "#1e65f3".to_string();
        assert_state_row_matches(&state, &row, TimestampFormat::Rfc2822);
    }

    #[test]
    fn random_state_fields() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..32 {
            let before = Utc::now();
            let state = create_random_state_with(&mut rng);
            assert_eq!(state.nickname.len(), NICKNAME_LEN);
            assert!(state.nickname.chars().all(|c| c.is_ascii_alphabetic()));
            assert_eq!(state.symbol().len(), 1);
            assert!(state.symbol().chars().all(|c| c.is_ascii_punctuation()));
            assert_eq!(state.color_hex().len(), 7);
            assert!(state.color_hex().starts_with('#'));
            assert!(state.color_hex()[1..].chars().all(|c| c.is_ascii_hexdigit()));
            assert!(COLORS.contains(&state.color()));
            assert!(state.updated <= Utc::now());
            assert!(before - state.updated <= Duration::minutes(58));
        }
        let row = state_to_row(&create_random_state());
        assert!(COLORS.contains(&row[3].as_str()));
    }
}
