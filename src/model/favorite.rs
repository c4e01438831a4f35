use serde::{Deserialize, Serialize};

/// A favorite as emitted over the wire.
///
/// Serializes to exactly `{id, user_id, type, <target>_id}`: the `type` tag and the
/// single target id key come from the flattened `FavoriteTargetDto`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    #[serde(flatten)]
    pub target: FavoriteTargetDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum FavoriteTargetDto {
    #[serde(rename = "characters")]
    Character { char_id: i32 },
    #[serde(rename = "planets")]
    Planet { planet_id: i32 },
    #[serde(rename = "vehicles")]
    Vehicle { vehicle_id: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests a planet favorite serializes with only the planet key.
    ///
    /// Expected: `{id, user_id, type: "planets", planet_id}` and nothing else
    #[test]
    fn serializes_planet_favorite_with_single_target_key() {
        let dto = FavoriteDto {
            id: 7,
            user_id: 1,
            target: FavoriteTargetDto::Planet { planet_id: 5 },
        };

        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(
            value,
            json!({ "id": 7, "user_id": 1, "type": "planets", "planet_id": 5 })
        );
    }

    /// Tests every variant emits exactly four keys with one target id key.
    ///
    /// Expected: one of char_id / planet_id / vehicle_id per favorite, never two
    #[test]
    fn never_emits_more_than_one_target_key() {
        let targets = [
            (FavoriteTargetDto::Character { char_id: 1 }, "characters", "char_id"),
            (FavoriteTargetDto::Planet { planet_id: 2 }, "planets", "planet_id"),
            (FavoriteTargetDto::Vehicle { vehicle_id: 3 }, "vehicles", "vehicle_id"),
        ];

        for (target, tag, key) in targets {
            let value = serde_json::to_value(FavoriteDto {
                id: 1,
                user_id: 1,
                target,
            })
            .unwrap();
            let object = value.as_object().unwrap();

            assert_eq!(object.len(), 4);
            assert_eq!(object["type"], tag);
            assert!(object.contains_key(key));

            let target_keys = ["char_id", "planet_id", "vehicle_id"]
                .iter()
                .filter(|k| object.contains_key(**k))
                .count();
            assert_eq!(target_keys, 1);
        }
    }

    /// Tests a favorite can be read back from its wire form.
    ///
    /// Expected: Ok with the vehicle variant
    #[test]
    fn deserializes_tagged_favorite() {
        let dto: FavoriteDto = serde_json::from_value(json!({
            "id": 3,
            "user_id": 9,
            "type": "vehicles",
            "vehicle_id": 14
        }))
        .unwrap();

        assert_eq!(dto.target, FavoriteTargetDto::Vehicle { vehicle_id: 14 });
        assert_eq!(dto.user_id, 9);
    }
}
