mod config;

use std::path::Path;
use thiserror::Error;
use yaml_rust::{
    yaml::{Hash, Yaml},
    ScanError, YamlLoader,
};

pub use crate::config::{ConfigError, ConfigProvider};

#[derive(Error, Debug)]
pub enum YamlConfigProviderError {
    #[error("Failed to read configuration file `{path}`")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file")]
    ParseFailed {
        #[from]
        source: ScanError,
    },

    #[error("Invalid configuration format ({reason})")]
    InvalidFormat { reason: String },
}

const DOC_TYPE_REAL: &str = "real";
const DOC_TYPE_INTEGER: &str = "integer";
const DOC_TYPE_STRING: &str = "string";
const DOC_TYPE_BOOLEAN: &str = "boolean";
const DOC_TYPE_ARRAY: &str = "array";
const DOC_TYPE_DICT: &str = "dict";
const DOC_TYPE_ALIAS: &str = "alias";
const DOC_TYPE_NULL: &str = "null";
const DOC_TYPE_BAD_VALUE: &str = "bad value";

fn get_doc_type(doc: &Yaml) -> &'static str {
    match doc {
        Yaml::Real(_) => DOC_TYPE_REAL,
        Yaml::Integer(_) => DOC_TYPE_INTEGER,
        Yaml::String(_) => DOC_TYPE_STRING,
        Yaml::Boolean(_) => DOC_TYPE_BOOLEAN,
        Yaml::Array(_) => DOC_TYPE_ARRAY,
        Yaml::Hash(_) => DOC_TYPE_DICT,
        Yaml::Alias(_) => DOC_TYPE_ALIAS,
        Yaml::Null => DOC_TYPE_NULL,
        Yaml::BadValue => DOC_TYPE_BAD_VALUE,
    }
}

///
/// Provides configuration from a yaml document.
///
/// JSON is valid flow-style yaml, so JSON config files such as
/// `merchant-info.json` are loaded by the same provider.
///
pub struct YamlConfigProvider {
    inner: Hash,
}

impl YamlConfigProvider {
    pub fn new<P: AsRef<Path>>(file_path: P) -> Result<Self, YamlConfigProviderError> {
        let file_path = file_path.as_ref();
        let buf = std::fs::read_to_string(file_path).map_err(|source| {
            YamlConfigProviderError::ReadFailed {
                path: file_path.display().to_string(),
                source,
            }
        })?;

        Self::from_source(&buf)
    }

    pub fn from_source(source: &str) -> Result<Self, YamlConfigProviderError> {
        let mut yaml = YamlLoader::load_from_str(source)?;

        let doc = yaml
            .drain(..)
            .next()
            .ok_or_else(|| YamlConfigProviderError::InvalidFormat {
                reason: "no root object".into(),
            })?;

        let inner = match doc {
            Yaml::Hash(inner) => inner,
            other => {
                return Err(YamlConfigProviderError::InvalidFormat {
                    reason: format!("root is a {}, not a dict", get_doc_type(&other)),
                })
            }
        };

        Ok(Self { inner })
    }

    fn get_doc(&self, name: &str) -> Result<&Yaml, ConfigError> {
        match self.inner.get(&Yaml::String(name.to_string())) {
            None | Some(Yaml::Null) => Err(ConfigError::NotFound {
                path: get_path(name),
            }),
            Some(doc) => Ok(doc),
        }
    }
}

fn get_path(name: &str) -> String {
    format!("#/{}", name)
}

impl ConfigProvider for YamlConfigProvider {
    fn get_str(&self, name: &str) -> Result<&str, ConfigError> {
        let doc = self.get_doc(name)?;

        doc.as_str().ok_or_else(|| ConfigError::TypeMismatch {
            path: get_path(name),
            expected_ty: DOC_TYPE_STRING,
            actual_ty: get_doc_type(doc),
        })
    }

    fn get_i64(&self, name: &str) -> Result<i64, ConfigError> {
        let doc = self.get_doc(name)?;

        doc.as_i64().ok_or_else(|| ConfigError::TypeMismatch {
            path: get_path(name),
            expected_ty: DOC_TYPE_INTEGER,
            actual_ty: get_doc_type(doc),
        })
    }

    fn get_u64(&self, name: &str) -> Result<u64, ConfigError> {
        let value = self.get_i64(name)?;

        u64::try_from(value).map_err(|_| ConfigError::OutOfRange {
            path: get_path(name),
            reason: format!("{} is negative", value),
        })
    }
}
