//! Classification tags for descriptor entries
//!
//! Provides:
//! - ConfigurationEntryType: how the container instantiates the underlying object
//! - TransactionSupport: the level of transaction coordination requested
//! - BuildMode: the dispatch table combining the two

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entry::DataSource;

/// Classification of a configuration entry.
///
/// The tag names the Java interface the container binds the entry to and
/// governs which conversion shape a [`DataSourceConverter`] produces.
///
/// [`DataSourceConverter`]: crate::convert::DataSourceConverter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfigurationEntryType {
    /// Plain pooled datasource (`javax.sql.DataSource`)
    #[serde(rename = "javax.sql.DataSource")]
    Datasource,
    /// Pooling-aware datasource (`javax.sql.ConnectionPoolDataSource`)
    #[serde(rename = "javax.sql.ConnectionPoolDataSource")]
    ConnectionPoolDatasource,
    /// XA-capable datasource (`javax.sql.XADataSource`)
    #[serde(rename = "javax.sql.XADataSource")]
    XaDatasource,
    /// JCA managed connection factory (`javax.resource.spi.ManagedConnectionFactory`)
    #[serde(rename = "javax.resource.spi.ManagedConnectionFactory")]
    ManagedConnectionFactory,
}

impl ConfigurationEntryType {
    /// Get the interface name the container binds this entry type to
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Datasource => "javax.sql.DataSource",
            Self::ConnectionPoolDatasource => "javax.sql.ConnectionPoolDataSource",
            Self::XaDatasource => "javax.sql.XADataSource",
            Self::ManagedConnectionFactory => "javax.resource.spi.ManagedConnectionFactory",
        }
    }

    /// Whether this entry type can take part in coordinated transactions
    #[inline]
    pub const fn is_transaction_capable(self) -> bool {
        matches!(self, Self::XaDatasource | Self::ManagedConnectionFactory)
    }
}

impl fmt::Display for ConfigurationEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigurationEntryType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "javax.sql.DataSource" => Ok(Self::Datasource),
            "javax.sql.ConnectionPoolDataSource" => Ok(Self::ConnectionPoolDatasource),
            "javax.sql.XADataSource" => Ok(Self::XaDatasource),
            "javax.resource.spi.ManagedConnectionFactory" => Ok(Self::ManagedConnectionFactory),
            other => Err(format!("unknown configuration entry type: {}", other)),
        }
    }
}

/// Level of transaction coordination requested around a datasource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransactionSupport {
    /// No transaction wrapping
    #[default]
    #[serde(rename = "NO_TRANSACTION")]
    NoTransaction,
    /// Local (single-resource) transaction wrapping
    #[serde(rename = "LOCAL_TRANSACTION")]
    LocalTransaction,
    /// Global (XA, two-phase) transaction wrapping
    #[serde(rename = "XA_TRANSACTION")]
    XaTransaction,
}

impl TransactionSupport {
    /// Get the canonical string form
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoTransaction => "NO_TRANSACTION",
            Self::LocalTransaction => "LOCAL_TRANSACTION",
            Self::XaTransaction => "XA_TRANSACTION",
        }
    }
}

impl fmt::Display for TransactionSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionSupport {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "NO_TRANSACTION" => Ok(Self::NoTransaction),
            "LOCAL_TRANSACTION" => Ok(Self::LocalTransaction),
            "XA_TRANSACTION" => Ok(Self::XaTransaction),
            other => Err(format!("unknown transaction support setting: {}", other)),
        }
    }
}

/// The four-way dispatch table for building a datasource entry.
///
/// A container backend matches on this exhaustively, which keeps its
/// capability table (which modes it supports, which it rejects) visible in
/// one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
    /// Driver-configured datasource, no transaction wrapping
    DriverNoTx,
    /// Driver-configured datasource, local transaction wrapping
    DriverLocalTx,
    /// Driver-configured datasource, global (XA) transaction wrapping
    DriverXaTx,
    /// Datasource backed by an XADataSource object, any transaction wrapping
    XaConfigured,
}

impl BuildMode {
    /// Derive the build mode from a datasource's own declared fields.
    ///
    /// An XA-backed connection object takes precedence over the requested
    /// transaction level; otherwise the transaction level selects among the
    /// driver-configured modes.
    pub fn classify(ds: &DataSource) -> Self {
        if ds.connection_type == ConfigurationEntryType::XaDatasource {
            return Self::XaConfigured;
        }
        match ds.transaction_support {
            TransactionSupport::NoTransaction => Self::DriverNoTx,
            TransactionSupport::LocalTransaction => Self::DriverLocalTx,
            TransactionSupport::XaTransaction => Self::DriverXaTx,
        }
    }

    /// Whether this mode requests any transaction coordination
    #[inline]
    pub const fn is_transactional(self) -> bool {
        !matches!(self, Self::DriverNoTx)
    }
}
