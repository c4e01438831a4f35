//! Favorite domain models and parameters.
//!
//! A favorite links a user to exactly one character, planet or vehicle. The
//! database stores this as a type tag plus three nullable target columns; here it is
//! a `FavoriteTarget` sum type so a favorite can never point at two targets or none.

use std::{fmt, str::FromStr};

use crate::{
    model::favorite::{FavoriteDto, FavoriteTargetDto},
    server::error::{favorite::FavoriteError, internal::InternalError, AppError},
};

/// The closed set of entity kinds a favorite can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteKind {
    Character,
    Planet,
    Vehicle,
}

impl FavoriteKind {
    pub const ALL: [FavoriteKind; 3] = [Self::Character, Self::Planet, Self::Vehicle];

    /// Type tag stored in the `type` column and emitted as `type` in JSON.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Character => "characters",
            Self::Planet => "planets",
            Self::Vehicle => "vehicles",
        }
    }

    /// Human readable singular name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Planet => "Planet",
            Self::Vehicle => "Vehicle",
        }
    }

    /// Looks up a kind by its stored type tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Parses the `{kind}` segment of `/favorites/{kind}/{target_id}`.
///
/// Accepts the stored tags plus `people`, the collection name characters are served
/// under.
impl FromStr for FavoriteKind {
    type Err = FavoriteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "people" => Ok(Self::Character),
            other => Self::from_tag(other).ok_or_else(|| FavoriteError::InvalidKind(s.to_string())),
        }
    }
}

/// The single entity a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
    Character(i32),
    Planet(i32),
    Vehicle(i32),
}

impl FavoriteTarget {
    pub fn new(kind: FavoriteKind, target_id: i32) -> Self {
        match kind {
            FavoriteKind::Character => Self::Character(target_id),
            FavoriteKind::Planet => Self::Planet(target_id),
            FavoriteKind::Vehicle => Self::Vehicle(target_id),
        }
    }

    pub fn kind(&self) -> FavoriteKind {
        match self {
            Self::Character(_) => FavoriteKind::Character,
            Self::Planet(_) => FavoriteKind::Planet,
            Self::Vehicle(_) => FavoriteKind::Vehicle,
        }
    }

    pub fn id(&self) -> i32 {
        match *self {
            Self::Character(id) | Self::Planet(id) | Self::Vehicle(id) => id,
        }
    }

    /// Splits the target into the `(char_id, planet_id, vehicle_id)` column values.
    ///
    /// Exactly one element is `Some`.
    pub fn columns(&self) -> (Option<i32>, Option<i32>, Option<i32>) {
        match *self {
            Self::Character(id) => (Some(id), None, None),
            Self::Planet(id) => (None, Some(id), None),
            Self::Vehicle(id) => (None, None, Some(id)),
        }
    }

    pub fn into_dto(self) -> FavoriteTargetDto {
        match self {
            Self::Character(char_id) => FavoriteTargetDto::Character { char_id },
            Self::Planet(planet_id) => FavoriteTargetDto::Planet { planet_id },
            Self::Vehicle(vehicle_id) => FavoriteTargetDto::Vehicle { vehicle_id },
        }
    }
}

/// A user's saved reference to one character, planet or vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub target: FavoriteTarget,
}

impl Favorite {
    /// Converts an entity model to the favorite domain model.
    ///
    /// The row must carry a known type tag and have exactly the matching target
    /// column populated.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The converted favorite domain model
    /// - `Err(AppError::InternalErr(UnknownFavoriteKind))` - Tag outside the known set
    /// - `Err(AppError::InternalErr(MissingFavoriteTarget))` - Target columns disagree with the tag
    pub fn from_entity(entity: entity::favorite::Model) -> Result<Self, AppError> {
        let Some(kind) = FavoriteKind::from_tag(&entity.kind) else {
            return Err(InternalError::UnknownFavoriteKind {
                favorite_id: entity.id,
                tag: entity.kind,
            }
            .into());
        };

        let target_id = match (kind, entity.char_id, entity.planet_id, entity.vehicle_id) {
            (FavoriteKind::Character, Some(id), None, None)
            | (FavoriteKind::Planet, None, Some(id), None)
            | (FavoriteKind::Vehicle, None, None, Some(id)) => id,
            _ => {
                return Err(InternalError::MissingFavoriteTarget {
                    favorite_id: entity.id,
                    tag: entity.kind,
                }
                .into())
            }
        };

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            target: FavoriteTarget::new(kind, target_id),
        })
    }

    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            user_id: self.user_id,
            target: self.target.into_dto(),
        }
    }
}

/// Parameters identifying a favorite by owner and target.
///
/// Used both to add a favorite and to locate the one to remove.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FavoriteParam {
    /// ID of the user owning the favorite.
    pub user_id: i32,
    /// The favorited entity.
    pub target: FavoriteTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(kind: &str, ids: (Option<i32>, Option<i32>, Option<i32>)) -> entity::favorite::Model {
        entity::favorite::Model {
            id: 1,
            user_id: 2,
            kind: kind.to_string(),
            char_id: ids.0,
            planet_id: ids.1,
            vehicle_id: ids.2,
        }
    }

    #[test]
    fn parses_route_kinds() {
        assert_eq!("people".parse::<FavoriteKind>(), Ok(FavoriteKind::Character));
        assert_eq!("characters".parse::<FavoriteKind>(), Ok(FavoriteKind::Character));
        assert_eq!("planets".parse::<FavoriteKind>(), Ok(FavoriteKind::Planet));
        assert_eq!("vehicles".parse::<FavoriteKind>(), Ok(FavoriteKind::Vehicle));
    }

    #[test]
    fn rejects_unknown_route_kind() {
        assert_eq!(
            "starships".parse::<FavoriteKind>(),
            Err(FavoriteError::InvalidKind("starships".to_string()))
        );
        // Tags are case sensitive
        assert!("Planets".parse::<FavoriteKind>().is_err());
    }

    #[test]
    fn target_columns_populate_only_matching_kind() {
        for kind in FavoriteKind::ALL {
            let target = FavoriteTarget::new(kind, 42);
            let (char_id, planet_id, vehicle_id) = target.columns();
            let populated = [char_id, planet_id, vehicle_id]
                .iter()
                .filter(|c| c.is_some())
                .count();

            assert_eq!(populated, 1);
            assert_eq!(target.kind(), kind);
            assert_eq!(target.id(), 42);
        }
    }

    #[test]
    fn converts_well_formed_row() {
        let favorite = Favorite::from_entity(row("planets", (None, Some(5), None))).unwrap();

        assert_eq!(favorite.user_id, 2);
        assert_eq!(favorite.target, FavoriteTarget::Planet(5));
    }

    #[test]
    fn rejects_row_with_unknown_tag() {
        let result = Favorite::from_entity(row("starships", (Some(1), None, None)));

        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::UnknownFavoriteKind { .. }))
        ));
    }

    #[test]
    fn rejects_row_with_mismatched_target() {
        // Tag says planet but only the character column is set
        let result = Favorite::from_entity(row("planets", (Some(1), None, None)));
        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::MissingFavoriteTarget { .. }))
        ));

        // Two targets populated
        let result = Favorite::from_entity(row("planets", (Some(1), Some(2), None)));
        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::MissingFavoriteTarget { .. }))
        ));
    }
}
