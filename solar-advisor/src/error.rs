use thiserror::Error;

/// Failures talking to the text-generation service or interpreting its reply.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("no API key configured (set the {0} environment variable)")]
    MissingApiKey(String),
    #[error("request to the AI service failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("AI service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("AI service returned no text")]
    EmptyResponse,
    #[error("AI service returned invalid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),
    #[error("received incomplete or malformed data from AI for {report}: missing '{section}'")]
    IncompleteResponse {
        report: &'static str,
        section: &'static str,
    },
    #[error("AI response does not match the {report} schema: {source}")]
    SchemaMismatch {
        report: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Problems with a single form field or a whole form.
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("invalid value '{value}' for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} {reason}")]
    OutOfRange {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
