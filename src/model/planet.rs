use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub diameter: i32,
    pub rotation_period: i32,
    pub orbital_period: i32,
    pub population: Option<i64>,
    pub climate: String,
    pub terrain: Option<String>,
}

/// Request body for creating or replacing a planet.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SavePlanetDto {
    pub name: String,
    pub description: String,
    pub diameter: i32,
    pub rotation_period: i32,
    pub orbital_period: i32,
    #[serde(default)]
    pub population: Option<i64>,
    pub climate: String,
    #[serde(default)]
    pub terrain: Option<String>,
}
