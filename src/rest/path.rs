//! Path building for REST resources.
//!
//! Resource paths are templates with `{name}` placeholders for identifiers:
//!
//! - `/2010-04-01/Accounts/{AccountSid}/Recordings/{Sid}.json`
//! - `/v1/Workspaces/{WorkspaceSid}/Workers/{Sid}`
//!
//! Identifier values are percent-encoded so that a value can never add path
//! segments or a query string.
//!
//! # Example
//!
//! ```rust
//! use twilio_api::rest::build_path;
//!
//! let path = build_path(
//!     "/v1/Trunks/{TrunkSid}/PhoneNumbers/{Sid}",
//!     &[("TrunkSid", "TK123"), ("Sid", "PN456")],
//! );
//! assert_eq!(path, "/v1/Trunks/TK123/PhoneNumbers/PN456");
//! ```

/// Interpolates identifier values into a path template.
///
/// Placeholders without a matching value are left in place.
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &urlencoding::encode(value));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_template_interpolation_multiple_ids() {
        let path = build_path(
            "/2010-04-01/Accounts/{AccountSid}/Calls/{CallSid}/Notifications/{Sid}.json",
            &[("AccountSid", "AC1"), ("CallSid", "CA2"), ("Sid", "NO3")],
        );
        assert_eq!(path, "/2010-04-01/Accounts/AC1/Calls/CA2/Notifications/NO3.json");
    }

    #[test]
    fn test_build_path_encodes_values() {
        let path = build_path("/v1/Workspaces/{Sid}", &[("Sid", "WS/../x?y")]);
        assert_eq!(path, "/v1/Workspaces/WS%2F..%2Fx%3Fy");
    }

    #[test]
    fn test_build_path_handles_missing_ids() {
        let path = build_path("/v1/Trunks/{TrunkSid}/CredentialLists/{Sid}", &[("Sid", "CL1")]);
        assert_eq!(path, "/v1/Trunks/{TrunkSid}/CredentialLists/CL1");
    }
}
