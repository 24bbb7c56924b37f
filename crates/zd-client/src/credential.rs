//! Authentication material for the HTTP transport.
//!
//! Secrets are redacted in Debug output to prevent accidental exposure in logs.

/// How requests are authenticated against a Zendesk account.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Basic authentication with an agent's email and password.
    Basic { email: String, password: String },
    /// Basic authentication with `{email}/token` and an API token.
    ApiToken { email: String, token: String },
    /// OAuth access token sent as a bearer token.
    Bearer(String),
}

impl Credential {
    /// Email and password credential.
    pub fn basic(email: impl Into<String>, password: impl Into<String>) -> Self {
        Credential::Basic {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Email and API token credential.
    pub fn api_token(email: impl Into<String>, token: impl Into<String>) -> Self {
        Credential::ApiToken {
            email: email.into(),
            token: token.into(),
        }
    }

    /// OAuth bearer credential.
    pub fn bearer(token: impl Into<String>) -> Self {
        Credential::Bearer(token.into())
    }

    /// Returns true if none of the secret parts are empty.
    pub fn is_valid(&self) -> bool {
        match self {
            Credential::Basic { email, password } => !email.is_empty() && !password.is_empty(),
            Credential::ApiToken { email, token } => !email.is_empty() && !token.is_empty(),
            Credential::Bearer(token) => !token.is_empty(),
        }
    }

    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Credential::Basic { email, password } => request.basic_auth(email, Some(password)),
            Credential::ApiToken { email, token } => {
                request.basic_auth(format!("{email}/token"), Some(token))
            }
            Credential::Bearer(token) => request.bearer_auth(token),
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::Basic { email, .. } => f
                .debug_struct("Basic")
                .field("email", email)
                .field("password", &"[REDACTED]")
                .finish(),
            Credential::ApiToken { email, .. } => f
                .debug_struct("ApiToken")
                .field("email", email)
                .field("token", &"[REDACTED]")
                .finish(),
            Credential::Bearer(_) => f.debug_tuple("Bearer").field(&"[REDACTED]").finish(),
        }
    }
}
