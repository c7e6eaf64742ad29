//! DataSource to Resource conversion
//!
//! A container backend never reads a [`DataSource`] directly; it asks a
//! converter for a [`Resource`] in the shape of a chosen
//! [`ConfigurationEntryType`] and serializes that. The trait seam lets tests
//! substitute a double for the converter.

use tracing::debug;

use crate::entry::{DataSource, Resource};
use crate::error::{Error, Result};
use crate::types::ConfigurationEntryType;

/// Maps a datasource plus a target classification into a generic resource.
///
/// Implementations must be stateless and reentrant: a builder may hold one
/// converter instance across many concurrent calls.
pub trait DataSourceConverter: Send + Sync {
    /// Convert `ds` into a resource shaped for `target`.
    ///
    /// `driver_property` names the generated parameter that carries the
    /// driver identifier (containers disagree on what to call it, so the
    /// backend passes its own literal).
    fn convert(
        &self,
        ds: &DataSource,
        target: ConfigurationEntryType,
        driver_property: &str,
    ) -> Result<Resource>;
}

/// Default converter.
///
/// Produces a resource whose symbolic tag is the target classification and
/// whose parameters are, in order: the driver identifier under
/// `driver_property`, `url`, `user`, `password` (each only when set on the
/// datasource), then every passthrough connection property in insertion
/// order.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardConverter;

impl StandardConverter {
    /// Create a new standard converter
    pub fn new() -> Self {
        Self
    }
}

impl DataSourceConverter for StandardConverter {
    fn convert(
        &self,
        ds: &DataSource,
        target: ConfigurationEntryType,
        driver_property: &str,
    ) -> Result<Resource> {
        if ds.name.is_empty() {
            return Err(Error::malformed_datasource("datasource name is empty"));
        }

        debug!(name = %ds.name, target = %target, "converting datasource to resource");

        let mut resource = Resource::new(&ds.name, target);

        if let Some(driver_class) = &ds.driver_class {
            resource = resource.with_parameter(driver_property, driver_class);
        }
        if let Some(url) = &ds.url {
            resource = resource.with_parameter("url", url);
        }
        if let Some(username) = &ds.username {
            resource = resource.with_parameter("user", username);
        }
        if let Some(password) = &ds.password {
            resource = resource.with_parameter("password", password);
        }
        for (key, value) in &ds.connection_properties {
            resource = resource.with_parameter(key, value);
        }

        Ok(resource)
    }
}
