use crate::server::{data::vehicle::VehicleRepository, model::vehicle::SaveVehicleParam};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;

fn save_param(name: &str) -> SaveVehicleParam {
    SaveVehicleParam {
        name: name.to_string(),
        description: "Repulsorlift speeder".to_string(),
        model_name: "X-34".to_string(),
        vehicle_class: "repulsorcraft".to_string(),
        manufacturer: "SoroSuub Corporation".to_string(),
        length: 3,
        crew: 1,
        cargo_capacity: 5,
    }
}
