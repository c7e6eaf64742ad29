//! Resource and DataSource descriptor shapes
//!
//! Provides:
//! - Resource: a named, typed configuration object ready for serialization
//! - DataSource: a JDBC connection source a converter turns into a Resource
//!
//! Both are plain values constructed immediately before a translation call;
//! nothing here holds state across calls or mutates its input.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{ConfigurationEntryType, TransactionSupport};

/// Ordered parameter mapping carried by resources and datasources.
///
/// Insertion order is preserved into the serialized fragment, so repeated
/// serialization of the same value is byte-identical.
pub type Parameters = IndexMap<String, String>;

/// A named, typed configuration object bound into a deployment descriptor.
///
/// Exactly one of `class_name` / `entry_type` is authoritative per instance:
/// an explicit implementation class takes precedence over the symbolic tag.
///
/// # Examples
///
/// ```
/// use jndio_core::entry::Resource;
/// use jndio_core::types::ConfigurationEntryType;
///
/// let resource = Resource::new("jdbc/Orders", ConfigurationEntryType::Datasource)
///     .with_parameter("user", "app")
///     .with_parameter("password", "secret");
///
/// assert_eq!(resource.declared_type().unwrap(), "javax.sql.DataSource");
/// assert_eq!(resource.parameters.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// JNDI-style name, unique within a descriptor (uniqueness is the
    /// caller's concern)
    pub name: String,

    /// Explicit driver/implementation class, preferred over `entry_type`
    /// when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Symbolic type tag, used when no explicit class is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<ConfigurationEntryType>,

    /// Configuration attributes, one serialized line per entry
    #[serde(default)]
    pub parameters: Parameters,
}

impl Resource {
    /// Create a resource with a symbolic type tag
    pub fn new(name: impl Into<String>, entry_type: ConfigurationEntryType) -> Self {
        Self {
            name: name.into(),
            class_name: None,
            entry_type: Some(entry_type),
            parameters: Parameters::new(),
        }
    }

    /// Create a resource with an explicit implementation class
    pub fn with_class(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_name: Some(class_name.into()),
            entry_type: None,
            parameters: Parameters::new(),
        }
    }

    /// Set the explicit implementation class
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Append a configuration parameter
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// The single type declaration for this resource: the explicit class
    /// when set, otherwise the symbolic tag.
    ///
    /// Fails when neither is present, since no valid type-declaring line
    /// could be emitted for such a resource.
    pub fn declared_type(&self) -> Result<&str> {
        if let Some(class_name) = self.class_name.as_deref() {
            return Ok(class_name);
        }
        self.entry_type
            .map(ConfigurationEntryType::as_str)
            .ok_or_else(|| Error::malformed_resource(&self.name))
    }
}

/// A JDBC connection source, pre-conversion.
///
/// Carries the identity fields a [`DataSourceConverter`] maps into a
/// [`Resource`]'s parameters, plus the two classification fields the
/// dispatch table reads: how the connection object is instantiated
/// (`connection_type`) and what transaction coordination is requested
/// (`transaction_support`).
///
/// [`DataSourceConverter`]: crate::convert::DataSourceConverter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    /// JNDI location the entry is bound to
    pub name: String,

    /// How the container must instantiate the underlying connection object
    pub connection_type: ConfigurationEntryType,

    /// Requested transaction coordination level
    #[serde(default)]
    pub transaction_support: TransactionSupport,

    /// JDBC driver class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_class: Option<String>,

    /// JDBC connection URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Database user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Database password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Extra driver properties, passed through to the generated parameters
    /// in insertion order
    #[serde(default)]
    pub connection_properties: Parameters,
}

impl DataSource {
    /// Create a datasource with the given connection-object classification
    pub fn new(name: impl Into<String>, connection_type: ConfigurationEntryType) -> Self {
        Self {
            name: name.into(),
            connection_type,
            transaction_support: TransactionSupport::default(),
            driver_class: None,
            url: None,
            username: None,
            password: None,
            connection_properties: Parameters::new(),
        }
    }

    /// Set the requested transaction coordination level
    pub fn with_transaction_support(mut self, support: TransactionSupport) -> Self {
        self.transaction_support = support;
        self
    }

    /// Set the JDBC driver class
    pub fn with_driver_class(mut self, driver_class: impl Into<String>) -> Self {
        self.driver_class = Some(driver_class.into());
        self
    }

    /// Set the JDBC connection URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the database credentials
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Append a passthrough driver property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.connection_properties.insert(key.into(), value.into());
        self
    }
}
