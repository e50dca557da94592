use thiserror::Error;

/// Why a single catalog entry was refused by the builder.
///
/// A rejected entry is skipped; the rest of the catalog still builds.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("catalog entry has an empty name")]
    EmptyName,
    #[error("duplicate body name `{0}`")]
    DuplicateName(String),
    #[error("`{name}`: orbit radius must be positive, got {value}")]
    NonPositiveOrbitRadius { name: String, value: f32 },
    #[error("`{name}`: body radius must be positive, got {value}")]
    NonPositiveBodyRadius { name: String, value: f32 },
    #[error("`{name}`: rotation speed must be finite and >= 0, got {value}")]
    InvalidRotationSpeed { name: String, value: f32 },
    #[error("`{0}`: neither a colour nor a texture was given")]
    MissingSurface(String),
}

/// Errors surfaced when loading catalogs or configuration from JSON.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_body() {
        let err = CatalogError::NonPositiveBodyRadius { name: "Vulcan".into(), value: -1.0 };
        assert!(err.to_string().contains("Vulcan"));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn json_errors_convert() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
