//! Immutable installation request.

use serde::Deserialize;
use thiserror::Error;

use quarry_platform::{Arch, Family, arch};

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("package name must not be empty")]
    EmptyName,

    #[error("package URI '{0}' is not absolute")]
    RelativeUri(String),

    #[error("package URI '{0}' does not end in a file name")]
    NoFileName(String),

    #[error(transparent)]
    Platform(#[from] quarry_platform::Error),
}

/// One package installation, as handed over by the harness configuration.
///
/// Immutable once constructed. Platform and architecture default to the
/// ambient host values; hosts override them for cross-platform installs.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawRequest")]
pub struct InstallRequest {
    package_name: String,
    package_uri: String,
    platform: Family,
    arch: Arch,
}

#[derive(Debug, Deserialize)]
struct RawRequest {
    package_name: String,
    package_uri: String,
    #[serde(default)]
    platform: Option<Family>,
    #[serde(default)]
    arch: Option<Arch>,
}

impl TryFrom<RawRequest> for InstallRequest {
    type Error = RequestError;

    fn try_from(raw: RawRequest) -> Result<Self, Self::Error> {
        let platform = match raw.platform {
            Some(platform) => platform,
            None => Family::current()?,
        };
        let arch = raw.arch.unwrap_or_else(arch::detect);
        InstallRequest::for_platform(raw.package_name, raw.package_uri, platform, arch)
    }
}

impl InstallRequest {
    /// Build a request for the ambient host platform.
    pub fn new(
        package_name: impl Into<String>,
        package_uri: impl Into<String>,
    ) -> Result<Self, RequestError> {
        Self::for_platform(package_name, package_uri, Family::current()?, arch::detect())
    }

    /// Build a request for an explicit platform and architecture.
    pub fn for_platform(
        package_name: impl Into<String>,
        package_uri: impl Into<String>,
        platform: Family,
        arch: Arch,
    ) -> Result<Self, RequestError> {
        let package_name = package_name.into();
        let package_uri = package_uri.into();

        if package_name.trim().is_empty() {
            return Err(RequestError::EmptyName);
        }
        validate_uri(&package_uri)?;

        Ok(Self {
            package_name,
            package_uri,
            platform,
            arch,
        })
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn package_uri(&self) -> &str {
        &self.package_uri
    }

    pub fn platform(&self) -> Family {
        self.platform
    }

    pub fn arch(&self) -> Arch {
        self.arch
    }
}

/// The URI must be absolute and must end in a file name.
fn validate_uri(uri: &str) -> Result<(), RequestError> {
    let Some((scheme, rest)) = uri.split_once("://") else {
        return Err(RequestError::RelativeUri(uri.to_string()));
    };
    if scheme.is_empty() {
        return Err(RequestError::RelativeUri(uri.to_string()));
    }

    let path = rest.split(['?', '#']).next().unwrap_or(rest);
    match path.split_once('/') {
        Some((_, tail)) if !tail.is_empty() && !tail.ends_with('/') => Ok(()),
        _ => Err(RequestError::NoFileName(uri.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URI: &str = "https://repo.example.com/dist/any-package.1.0.0.tar.gz";

    #[test]
    fn valid_request_keeps_its_fields() {
        let request =
            InstallRequest::for_platform("any-package", URI, Family::Posix, Arch::X86_64).unwrap();
        assert_eq!(request.package_name(), "any-package");
        assert_eq!(request.package_uri(), URI);
        assert_eq!(request.platform(), Family::Posix);
        assert_eq!(request.arch(), Arch::X86_64);
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = InstallRequest::for_platform("  ", URI, Family::Posix, Arch::X86_64).unwrap_err();
        assert!(matches!(err, RequestError::EmptyName));
    }

    #[test]
    fn relative_uri_is_rejected() {
        let err =
            InstallRequest::for_platform("pkg", "dist/pkg.tar.gz", Family::Posix, Arch::X86_64)
                .unwrap_err();
        assert!(matches!(err, RequestError::RelativeUri(_)));
    }

    #[test]
    fn uri_without_file_name_is_rejected() {
        for uri in ["https://repo.example.com", "https://repo.example.com/dist/"] {
            let err = InstallRequest::for_platform("pkg", uri, Family::Posix, Arch::X86_64)
                .unwrap_err();
            assert!(matches!(err, RequestError::NoFileName(_)), "uri: {uri}");
        }
    }

    #[test]
    fn deserializes_with_explicit_platform() {
        let request: InstallRequest = serde_json::from_str(
            r#"{
                "package_name": "any-package",
                "package_uri": "https://repo.example.com/dist/any-package.1.0.0.tar.gz",
                "platform": "windows",
                "arch": "arm64"
            }"#,
        )
        .unwrap();
        assert_eq!(request.platform(), Family::Windows);
        assert_eq!(request.arch(), Arch::Arm64);
    }

    #[test]
    fn deserialization_validates() {
        let result: Result<InstallRequest, _> = serde_json::from_str(
            r#"{
                "package_name": "",
                "package_uri": "https://repo.example.com/pkg.zip",
                "platform": "posix",
                "arch": "x86_64"
            }"#,
        );
        assert!(result.is_err());
    }
}
