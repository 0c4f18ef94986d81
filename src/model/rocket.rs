use serde::{Deserialize, Serialize};

use super::lenient;

/// One record of the `/v3/rockets` endpoint.
///
/// Equality is by `id` only: two snapshots of the same rocket compare equal
/// even when a later fetch changed its figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rocket {
    pub id: u32,
    pub active: bool,
    pub stages: u32,
    pub boosters: u32,
    pub cost_per_launch: f64,
    pub success_rate_pct: f64,
    pub first_flight: String,
    pub country: String,
    pub company: String,
    pub height: Dimensions,
    pub diameter: Dimensions,
    pub mass: Mass,
    pub payload_weights: Vec<PayloadWeight>,
    pub first_stage: FirstStage,
    pub second_stage: SecondStage,
    pub engines: Engines,
    pub landing_legs: LandingLegs,
    pub flickr_images: Vec<String>,
    pub wikipedia: String,
    pub description: String,
    pub rocket_id: String,
    pub rocket_name: String,
    pub rocket_type: String,
}

impl PartialEq for Rocket {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub meters: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub feet: Option<f64>,
}

impl Dimensions {
    pub fn formatted_meters(&self) -> String {
        match self.meters {
            Some(meters) => format!("{:.0}m", meters.round()),
            None => "?".to_string(),
        }
    }

    pub fn formatted_feet(&self) -> String {
        match self.feet {
            Some(feet) => format!("{:.0}ft", feet.round()),
            None => "?".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mass {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub kg: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub lb: Option<f64>,
}

impl Mass {
    /// Metric tons, rounded.
    pub fn formatted_tons(&self) -> String {
        match self.kg {
            Some(kg) => format!("{:.0}t", (kg * 0.001).round()),
            None => "?".to_string(),
        }
    }

    /// Thousands of pounds, rounded.
    pub fn formatted_kilopounds(&self) -> String {
        match self.lb {
            Some(lb) => format!("{:.0}klb", (lb * 0.001).round()),
            None => "?".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadWeight {
    pub id: String,
    pub name: String,
    pub kg: f64,
    pub lb: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thrust {
    #[serde(rename = "kN")]
    pub kn: u32,
    pub lbf: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstStage {
    pub reusable: bool,
    pub engines: u32,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub fuel_amount_tons: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub burn_time_sec: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub thrust_sea_level: Option<Thrust>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub thrust_vacuum: Option<Thrust>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondStage {
    pub reusable: bool,
    pub engines: u32,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub fuel_amount_tons: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub burn_time_sec: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub thrust: Option<Thrust>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub payloads: Option<PayloadOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadOptions {
    #[serde(default, rename = "option_1", deserialize_with = "lenient::optional")]
    pub option1: Option<String>,
    #[serde(default, rename = "option_2", deserialize_with = "lenient::optional")]
    pub option2: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub composite_fairing: Option<CompositeFairing>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeFairing {
    pub height: Dimensions,
    pub diameter: Dimensions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engines {
    pub number: u32,
    #[serde(rename = "type")]
    pub engine_type: String,
    pub version: String,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub layout: Option<String>,
    pub isp: Isp,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub engine_loss_max: Option<f64>,
    #[serde(rename = "propellant_1")]
    pub propellant1: String,
    #[serde(rename = "propellant_2")]
    pub propellant2: String,
    pub thrust_sea_level: Thrust,
    pub thrust_vacuum: Thrust,
    pub thrust_to_weight: f64,
}

/// Specific impulse in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Isp {
    pub sea_level: f64,
    pub vacuum: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingLegs {
    pub number: u32,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub material: Option<String>,
}

/// Display helpers shared by both stage descriptors.
pub trait RocketStage {
    fn reusable(&self) -> bool;
    fn engines(&self) -> u32;
    fn fuel_amount_tons(&self) -> Option<f64>;
    fn burn_time_sec(&self) -> Option<f64>;

    fn formatted_reusability(&self) -> String {
        if self.reusable() {
            "Reusable".to_string()
        } else {
            "Not reusable".to_string()
        }
    }

    fn formatted_engines(&self) -> String {
        format!("{} engines", self.engines())
    }

    fn formatted_fuel_amount(&self) -> String {
        match self.fuel_amount_tons() {
            Some(tons) => format!("{:.0} tons of fuel", tons.round()),
            None => "Unknown fuel".to_string(),
        }
    }

    fn formatted_burn_time(&self) -> String {
        match self.burn_time_sec() {
            Some(secs) => format!("{:.0} seconds burn time", secs.round()),
            None => "Unknown burn time".to_string(),
        }
    }
}

impl RocketStage for FirstStage {
    fn reusable(&self) -> bool {
        self.reusable
    }

    fn engines(&self) -> u32 {
        self.engines
    }

    fn fuel_amount_tons(&self) -> Option<f64> {
        self.fuel_amount_tons
    }

    fn burn_time_sec(&self) -> Option<f64> {
        self.burn_time_sec
    }
}

impl RocketStage for SecondStage {
    fn reusable(&self) -> bool {
        self.reusable
    }

    fn engines(&self) -> u32 {
        self.engines
    }

    fn fuel_amount_tons(&self) -> Option<f64> {
        self.fuel_amount_tons
    }

    fn burn_time_sec(&self) -> Option<f64> {
        self.burn_time_sec
    }
}

#[cfg(test)]
pub(crate) fn fixture_rockets() -> Vec<Rocket> {
    serde_json::from_str(include_str!("../../tests/fixtures/rockets.json"))
        .expect("fixture must decode")
}
