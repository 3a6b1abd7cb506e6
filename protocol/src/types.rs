use heapless::String;
use serde::{Deserialize, Serialize};

/// An enumeration representing the possible reasons for a system boot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "no-std", derive(defmt::Format))]
pub enum BootReason {
    Normal,
    WatchdogTimeout,
    WatchdogForced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "no-std", derive(defmt::Format))]
pub struct SystemInformation {
    pub git_revision: String<20>,
    pub last_boot_reason: BootReason,
    pub uptime_milliseconds: u64,
}

/// A single pass over the sensors, produced fresh each cycle.
///
/// Climate and distance values are absent when the underlying sensor did not
/// respond within its timing window.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "no-std", derive(defmt::Format))]
pub struct SensorReading {
    pub temperature: Option<f32>,
    pub humidity: Option<f32>,
    pub light_level: u16,
    pub distance_cm: Option<f32>,
}

/// Desired state of a single indicator output, as supplied by the collector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "no-std", derive(defmt::Format))]
pub struct IndicatorState {
    #[serde(rename = "ledNumber")]
    pub led_number: u8,
    pub on: bool,
}

/// One of the three physical indicator outputs.
///
/// The collector addresses indicators by number; anything outside 1..=3 does
/// not map to an output and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "no-std", derive(defmt::Format))]
pub enum Indicator {
    One,
    Two,
    Three,
}

impl Indicator {
    pub fn index(self) -> usize {
        match self {
            Indicator::One => 0,
            Indicator::Two => 1,
            Indicator::Three => 2,
        }
    }
}

impl TryFrom<u8> for Indicator {
    type Error = ();

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Indicator::One),
            2 => Ok(Indicator::Two),
            3 => Ok(Indicator::Three),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(states: &[IndicatorState], levels: &mut [bool; 3]) {
        for state in states {
            if let Ok(indicator) = Indicator::try_from(state.led_number) {
                levels[indicator.index()] = state.on;
            }
        }
    }

    #[test]
    fn indicator_numbers_map_to_outputs() {
        assert_eq!(Indicator::try_from(1), Ok(Indicator::One));
        assert_eq!(Indicator::try_from(2), Ok(Indicator::Two));
        assert_eq!(Indicator::try_from(3), Ok(Indicator::Three));
    }

    #[test]
    fn indicator_numbers_outside_range_are_rejected() {
        assert_eq!(Indicator::try_from(0), Err(()));
        assert_eq!(Indicator::try_from(4), Err(()));
        assert_eq!(Indicator::try_from(9), Err(()));
    }

    #[test]
    fn unrecognised_numbers_do_not_affect_recognised_ones() {
        let states = [
            IndicatorState {
                led_number: 2,
                on: true,
            },
            IndicatorState {
                led_number: 9,
                on: true,
            },
        ];

        let mut levels = [false; 3];
        apply(&states, &mut levels);

        assert_eq!(levels, [false, true, false]);
    }

    #[test]
    fn applying_the_same_states_twice_is_idempotent() {
        let states = [
            IndicatorState {
                led_number: 1,
                on: true,
            },
            IndicatorState {
                led_number: 3,
                on: false,
            },
        ];

        let mut levels = [false, true, true];
        apply(&states, &mut levels);
        let after_once = levels;

        apply(&states, &mut levels);
        assert_eq!(levels, after_once);
    }

    #[test]
    fn led_states_document_from_collector_parses() {
        let body = br#"[{"ledNumber":2,"on":true},{"ledNumber":9,"on":true}]"#;
        let (states, _) =
            serde_json_core::from_slice::<heapless::Vec<IndicatorState, 8>>(body).unwrap();

        assert_eq!(states.len(), 2);
        assert_eq!(states[0].led_number, 2);
        assert!(states[0].on);
        assert_eq!(states[1].led_number, 9);
        assert!(Indicator::try_from(states[1].led_number).is_err());
    }
}
