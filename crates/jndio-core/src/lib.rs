//! # jndio-core
//!
//! Container-agnostic model for generating application-server
//! deployment-descriptor resource entries.
//!
//! This crate carries the shapes every container backend shares:
//!
//! - **Resource / DataSource**: descriptor values, constructed by the caller
//!   immediately before a translation call
//! - **Classification tags**: entry types, transaction-support levels, and
//!   the build-mode dispatch table derived from them
//! - **Converter**: the trait seam mapping a DataSource into a Resource, plus
//!   the standard implementation
//! - **Markup**: a structured element tree rendered once at the end, with
//!   escaping and attribute-name validation
//!
//! Everything here is a pure computation over its arguments: no shared
//! mutable state, no I/O, no suspension points. Concurrent calls on
//! independent inputs are safe by construction.
//!
//! ## Quick Start
//!
//! ```
//! use jndio_core::prelude::*;
//!
//! let ds = DataSource::new("jdbc/Orders", ConfigurationEntryType::Datasource)
//!     .with_driver_class("org.postgresql.Driver")
//!     .with_url("jdbc:postgresql://db/orders")
//!     .with_credentials("app", "secret");
//!
//! let resource = StandardConverter
//!     .convert(&ds, ConfigurationEntryType::Datasource, "driver-name")
//!     .unwrap();
//! assert_eq!(resource.declared_type().unwrap(), "javax.sql.DataSource");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod convert;
pub mod entry;
pub mod error;
pub mod markup;
pub mod types;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::convert::{DataSourceConverter, StandardConverter};
    pub use crate::entry::{DataSource, Parameters, Resource};
    pub use crate::error::{Error, Result};
    pub use crate::markup::Element;
    pub use crate::types::{BuildMode, ConfigurationEntryType, TransactionSupport};
}

// Re-export commonly used items at crate root
pub use entry::{DataSource, Resource};
pub use error::{Error, Result};
pub use types::{BuildMode, ConfigurationEntryType, TransactionSupport};

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let _tag = ConfigurationEntryType::Datasource;
        let _support = TransactionSupport::default();
        let _ds = DataSource::new("jdbc/Test", ConfigurationEntryType::Datasource);
        let _converter = StandardConverter::new();
    }

    #[test]
    fn test_classify_through_prelude() {
        let ds = DataSource::new("jdbc/Test", ConfigurationEntryType::XaDatasource);
        assert_eq!(BuildMode::classify(&ds), BuildMode::XaConfigured);
    }
}
