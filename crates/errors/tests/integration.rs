//! Integration tests for error types

#[cfg(test)]
mod tests {
    use lytc_errors::*;

    #[test]
    fn test_error_conversion() {
        let cfg_err = ConfigError::MissingField {
            section: "gcc".into(),
            field: "version".into(),
        };
        let err: Error = cfg_err.into();
        assert!(matches!(err, Error::Config(ConfigError::MissingField { .. })));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::MissingField {
            section: "nasm".into(),
            field: "repo".into(),
        };
        assert_eq!(err.to_string(), "missing required field: [nasm] repo");

        let err = ConfigError::ParseError {
            path: "packages.list".into(),
            line: 3,
            message: "expected `key = value`".into(),
        };
        assert_eq!(
            err.to_string(),
            "parse error in packages.list at line 3: expected `key = value`"
        );
    }

    #[test]
    fn test_user_facing_codes_and_hints() {
        let err: Error = ConfigError::NotFound {
            path: "/tmp/packages.list".into(),
        }
        .into();
        assert_eq!(err.user_code(), Some("config.not_found"));
        assert!(err.user_hint().is_some());

        let err: Error = PackageError::UnknownPackage {
            name: "llvm".into(),
        }
        .into();
        assert_eq!(err.user_code(), Some("package.unknown"));
        assert_eq!(err.user_message(), "unknown package: llvm");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::io_with_path(&io_err, "/opt/toolchain");
        assert!(matches!(
            err,
            Error::Io {
                kind: std::io::ErrorKind::PermissionDenied,
                ..
            }
        ));
        assert_eq!(err.user_message(), "denied (/opt/toolchain)");
        assert_eq!(err.user_code(), Some("error.io"));
    }

    #[test]
    fn test_error_clone() {
        let err = PackageError::NotInProfile {
            name: "dash".into(),
            profile: "minimal".into(),
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
