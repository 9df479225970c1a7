/// Reasons a set of site options cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid `site` URL `{value}`: {reason}")]
    InvalidSite { value: String, reason: String },

    #[error("invalid `{field}` value `{value}`, expected one of: {}", .expected.join(", "))]
    InvalidEnum {
        field: &'static str,
        value: String,
        expected: &'static [&'static str],
    },

    #[error("invalid `base` `{value}`, expected a path starting and ending with `/`")]
    InvalidBase { value: String },

    #[error("unknown field `{field}`")]
    UnknownField { field: String },
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
