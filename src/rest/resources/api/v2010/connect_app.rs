//! Connect Apps: third-party applications authorized against an account.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, Params};
use crate::config::Domain;
use crate::rest::{build_path, Endpoint, Fetcher, Updater};

const INSTANCE_PATH: &str = "/2010-04-01/Accounts/{AccountSid}/ConnectApps/{Sid}.json";

/// An access level a Connect App may request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectAppPermission {
    GetAll,
    PostAll,
    #[serde(other)]
    Unknown,
}

impl ConnectAppPermission {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GetAll => "get-all",
            Self::PostAll => "post-all",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ConnectAppPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Connect App.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ConnectApp {
    /// The unique identifier of the app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// The SID of the account that owns the app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,

    /// The URL users are sent to after authorizing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorize_redirect_url: Option<String>,

    /// The company that built the app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// The HTTP method used to request `deauthorize_callback_url`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deauthorize_callback_method: Option<String>,

    /// The URL requested when a user deauthorizes the app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deauthorize_callback_url: Option<String>,

    /// A description shown to authorizing users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A human-readable name for the app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,

    /// The public homepage of the app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage_url: Option<String>,

    /// The access the app requests.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<ConnectAppPermission>,

    /// The URI of the app, relative to the API host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl ConnectApp {
    #[must_use]
    pub fn fetch(account_sid: impl Into<String>, sid: impl Into<String>) -> ConnectAppFetcher {
        ConnectAppFetcher {
            account_sid: account_sid.into(),
            sid: sid.into(),
        }
    }

    #[must_use]
    pub fn update(account_sid: impl Into<String>, sid: impl Into<String>) -> ConnectAppUpdater {
        ConnectAppUpdater {
            account_sid: account_sid.into(),
            sid: sid.into(),
            ..ConnectAppUpdater::default()
        }
    }
}

fn instance_path(account_sid: &str, sid: &str) -> String {
    build_path(INSTANCE_PATH, &[("AccountSid", account_sid), ("Sid", sid)])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectAppFetcher {
    account_sid: String,
    sid: String,
}

impl Endpoint for ConnectAppFetcher {
    const RESOURCE: &'static str = "ConnectApp";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        instance_path(&self.account_sid, &self.sid)
    }
}

impl Fetcher for ConnectAppFetcher {
    type Record = ConnectApp;
}

/// Updates a Connect App.
///
/// Every field is optional and only sent when set. `Permissions` is
/// multi-valued: each permission becomes its own form entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectAppUpdater {
    account_sid: String,
    sid: String,
    authorize_redirect_url: Option<String>,
    company_name: Option<String>,
    deauthorize_callback_method: Option<HttpMethod>,
    deauthorize_callback_url: Option<String>,
    description: Option<String>,
    friendly_name: Option<String>,
    homepage_url: Option<String>,
    permissions: Option<Vec<ConnectAppPermission>>,
}

impl ConnectAppUpdater {
    #[must_use]
    pub fn authorize_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.authorize_redirect_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn deauthorize_callback_method(mut self, method: HttpMethod) -> Self {
        self.deauthorize_callback_method = Some(method);
        self
    }

    #[must_use]
    pub fn deauthorize_callback_url(mut self, url: impl Into<String>) -> Self {
        self.deauthorize_callback_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn friendly_name(mut self, name: impl Into<String>) -> Self {
        self.friendly_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn homepage_url(mut self, url: impl Into<String>) -> Self {
        self.homepage_url = Some(url.into());
        self
    }

    /// Replaces the requested permissions.
    #[must_use]
    pub fn permissions(mut self, permissions: impl IntoIterator<Item = ConnectAppPermission>) -> Self {
        self.permissions = Some(permissions.into_iter().collect());
        self
    }
}

impl Endpoint for ConnectAppUpdater {
    const RESOURCE: &'static str = "ConnectApp";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        instance_path(&self.account_sid, &self.sid)
    }
}

impl Updater for ConnectAppUpdater {
    type Record = ConnectApp;

    fn form_params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("AuthorizeRedirectUrl", self.authorize_redirect_url.as_deref());
        params.push_opt("CompanyName", self.company_name.as_deref());
        params.push_opt("DeauthorizeCallbackMethod", self.deauthorize_callback_method);
        params.push_opt("DeauthorizeCallbackUrl", self.deauthorize_callback_url.as_deref());
        params.push_opt("Description", self.description.as_deref());
        params.push_opt("FriendlyName", self.friendly_name.as_deref());
        params.push_opt("HomepageUrl", self.homepage_url.as_deref());
        if let Some(permissions) = &self.permissions {
            params.push_all("Permissions", permissions.iter());
        }
        params
    }
}
