//! # jndio-resin
//!
//! Deployment-descriptor entry builder for the Resin 2.x container family.
//!
//! Translates container-agnostic [`DataSource`] / [`Resource`] descriptions
//! from [`jndio_core`] into the `<resource-ref>` markup Resin 2.x expects,
//! rejecting transactional wiring modes the container cannot honor.
//!
//! ## Quick Start
//!
//! ```
//! use jndio_core::prelude::*;
//! use jndio_resin::{ConfigurationBuilder, Resin2xConfigurationBuilder};
//!
//! let builder = Resin2xConfigurationBuilder::new();
//!
//! let ds = DataSource::new("jdbc/Orders", ConfigurationEntryType::Datasource)
//!     .with_driver_class("org.postgresql.Driver")
//!     .with_url("jdbc:postgresql://db/orders")
//!     .with_credentials("app", "secret");
//!
//! let fragment = builder.entry(&ds).unwrap();
//! assert!(fragment.contains("<res-ref-name>jdbc/Orders</res-ref-name>"));
//! ```
//!
//! [`DataSource`]: jndio_core::DataSource
//! [`Resource`]: jndio_core::Resource

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod builder;
pub mod error;

pub use builder::{
    ConfigurationBuilder, Resin2xConfigurationBuilder, TRANSACTIONS_WITH_XA_OR_JCA_ONLY,
};
pub use error::{Error, Result};
