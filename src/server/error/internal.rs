use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored favorite carries a type tag outside the known set.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Favorite {favorite_id} has unknown type tag '{tag}'")]
    UnknownFavoriteKind {
        /// ID of the offending favorite row
        favorite_id: i32,
        /// The stored tag
        tag: String,
    },

    /// A stored favorite's target column does not match its type tag.
    ///
    /// Either the column selected by the tag is null or another target
    /// column is populated as well.
    #[error("Favorite {favorite_id} of type '{tag}' does not have exactly its matching target set")]
    MissingFavoriteTarget {
        /// ID of the offending favorite row
        favorite_id: i32,
        /// The stored tag
        tag: String,
    },

    /// A stored password is not in `salt$digest` form.
    #[error("Stored password for user {user_id} is not a valid digest")]
    MalformedPasswordDigest {
        /// ID of the user whose password column is malformed
        user_id: i32,
    },
}
