//! Resin 2.x configuration entry builder
//!
//! Resin 2.x treats DataSources as plain Resources, declared in the
//! deployment descriptor as `<resource-ref>` blocks. The container can only
//! honor transactional semantics when the underlying connection object is
//! already XA-capable or a managed connection factory; asking for
//! transaction coordination on a driver-configured source is structurally
//! impossible for it, so those modes are rejected up front instead of
//! emitting markup that silently lacks the requested guarantees.

use tracing::debug;

use jndio_core::convert::{DataSourceConverter, StandardConverter};
use jndio_core::entry::{DataSource, Resource};
use jndio_core::markup::Element;
use jndio_core::types::{BuildMode, ConfigurationEntryType};

use crate::error::{Error, Result};

/// Rejection message for transaction modes Resin cannot wire.
pub const TRANSACTIONS_WITH_XA_OR_JCA_ONLY: &str =
    "Resin only supports transactions with an XADataSource or ManagedConnectionFactory object";

/// Name of the generated parameter carrying the driver identifier.
const DRIVER_PROPERTY: &str = "driver-name";

/// Builds deployment-descriptor entries for one container family.
///
/// `datasource_entry` is the capability table: the exhaustive match over
/// [`BuildMode`] states in one place which wiring modes the container
/// supports and which it rejects.
pub trait ConfigurationBuilder {
    /// Serialize an already-converted resource into descriptor markup.
    ///
    /// The fragment carries the resource name, exactly one type-declaring
    /// line (explicit class preferred over the symbolic tag), and one
    /// parameter line per entry in insertion order.
    fn configuration_entry(&self, resource: &Resource) -> Result<String>;

    /// Build the descriptor entry for a datasource under the given mode.
    fn datasource_entry(&self, ds: &DataSource, mode: BuildMode) -> Result<String>;

    /// Build the descriptor entry for a datasource, deriving the mode from
    /// the datasource's own declared fields.
    fn entry(&self, ds: &DataSource) -> Result<String> {
        self.datasource_entry(ds, BuildMode::classify(ds))
    }
}

/// Configuration entry builder for the Resin 2.x container family.
///
/// Holds the injected converter and nothing else; every call is a pure
/// computation over its arguments.
///
/// # Examples
///
/// ```
/// use jndio_core::prelude::*;
/// use jndio_resin::{ConfigurationBuilder, Resin2xConfigurationBuilder};
///
/// let builder = Resin2xConfigurationBuilder::new();
/// let ds = DataSource::new("jdbc/Orders", ConfigurationEntryType::Datasource)
///     .with_credentials("app", "secret");
///
/// let fragment = builder.datasource_entry(&ds, BuildMode::DriverNoTx).unwrap();
/// assert!(fragment.contains("<res-ref-name>jdbc/Orders</res-ref-name>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resin2xConfigurationBuilder<C = StandardConverter> {
    converter: C,
}

impl Resin2xConfigurationBuilder<StandardConverter> {
    /// Create a builder with the standard converter
    pub fn new() -> Self {
        Self {
            converter: StandardConverter::new(),
        }
    }
}

impl<C: DataSourceConverter> Resin2xConfigurationBuilder<C> {
    /// Create a builder with a custom converter
    pub fn with_converter(converter: C) -> Self {
        Self { converter }
    }

    /// Access the injected converter
    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Classify the datasource by its own connection type and serialize the
    /// converted resource. In Resin 2.x, DataSources are Resources.
    fn resin_entry(&self, ds: &DataSource) -> Result<String> {
        let target = if ds.connection_type == ConfigurationEntryType::XaDatasource {
            ConfigurationEntryType::XaDatasource
        } else {
            ConfigurationEntryType::Datasource
        };
        let resource = self.converter.convert(ds, target, DRIVER_PROPERTY)?;
        self.configuration_entry(&resource)
    }
}

impl<C: DataSourceConverter> ConfigurationBuilder for Resin2xConfigurationBuilder<C> {
    fn configuration_entry(&self, resource: &Resource) -> Result<String> {
        let mut element = Element::new("resource-ref")
            .child(Element::with_text("res-ref-name", &resource.name))
            .child(Element::with_text("res-type", resource.declared_type()?));

        for (key, value) in &resource.parameters {
            element = element.child(Element::new("init-param").attr(key, value));
        }

        Ok(element.render()?)
    }

    fn datasource_entry(&self, ds: &DataSource, mode: BuildMode) -> Result<String> {
        debug!(name = %ds.name, ?mode, "building Resin 2.x datasource entry");

        match mode {
            BuildMode::DriverNoTx => self.resin_entry(ds),
            BuildMode::DriverLocalTx | BuildMode::DriverXaTx => {
                debug!(name = %ds.name, ?mode, "rejecting transaction mode");
                Err(Error::unsupported_transaction_mode(
                    TRANSACTIONS_WITH_XA_OR_JCA_ONLY,
                ))
            }
            BuildMode::XaConfigured => {
                let resource =
                    self.converter
                        .convert(ds, ConfigurationEntryType::XaDatasource, DRIVER_PROPERTY)?;
                self.configuration_entry(&resource)
            }
        }
    }
}
