use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration field `{path}` is missing")]
    NotFound { path: String },

    #[error(
        "Configuration field `{path}` is of type `{actual_ty}`, but `{expected_ty}` was expected"
    )]
    TypeMismatch {
        path: String,
        expected_ty: &'static str,
        actual_ty: &'static str,
    },

    #[error("Configuration field `{path}` is out of range ({reason})")]
    OutOfRange { path: String, reason: String },
}

///
/// Read-only access to a configuration document.
///
/// Absent fields (including explicit nulls) are reported as `ConfigError::NotFound`,
/// which the `get_opt_*` helpers turn into `None`.
///
pub trait ConfigProvider: Send + Sync + 'static {
    fn get_str(&self, name: &str) -> Result<&str, ConfigError>;
    fn get_i64(&self, name: &str) -> Result<i64, ConfigError>;
    fn get_u64(&self, name: &str) -> Result<u64, ConfigError>;

    fn get_opt_str(&self, name: &str) -> Result<Option<&str>, ConfigError> {
        match self.get_str(name) {
            Ok(value) => Ok(Some(value)),
            Err(ConfigError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn get_opt_u64(&self, name: &str) -> Result<Option<u64>, ConfigError> {
        match self.get_u64(name) {
            Ok(value) => Ok(Some(value)),
            Err(ConfigError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
