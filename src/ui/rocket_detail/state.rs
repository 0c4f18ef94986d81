//! State for the rocket detail screen.

use crate::model::Rocket;
use crate::ui::mvi::ScreenState;

/// Unit system used for the parameter tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn toggled(self) -> Self {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RocketDetailState {
    pub rocket: Rocket,
    pub units: UnitSystem,
}

impl ScreenState for RocketDetailState {}

impl RocketDetailState {
    pub fn new(rocket: Rocket) -> Self {
        Self {
            rocket,
            units: UnitSystem::default(),
        }
    }

    /// Height, diameter and mass as `(label, value)` in the current units.
    pub fn parameters(&self) -> [(&'static str, String); 3] {
        let rocket = &self.rocket;
        match self.units {
            UnitSystem::Metric => [
                ("height", rocket.height.formatted_meters()),
                ("diameter", rocket.diameter.formatted_meters()),
                ("mass", rocket.mass.formatted_tons()),
            ],
            UnitSystem::Imperial => [
                ("height", rocket.height.formatted_feet()),
                ("diameter", rocket.diameter.formatted_feet()),
                ("mass", rocket.mass.formatted_kilopounds()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixture_rockets;

    #[test]
    fn metric_parameters() {
        let state = RocketDetailState::new(fixture_rockets().remove(1));
        assert_eq!(
            state.parameters(),
            [
                ("height", "70m".to_string()),
                ("diameter", "4m".to_string()),
                ("mass", "549t".to_string()),
            ]
        );
    }

    #[test]
    fn imperial_parameters() {
        let mut state = RocketDetailState::new(fixture_rockets().remove(1));
        state.units = UnitSystem::Imperial;
        assert_eq!(
            state.parameters(),
            [
                ("height", "230ft".to_string()),
                ("diameter", "12ft".to_string()),
                ("mass", "1208klb".to_string()),
            ]
        );
    }
}
