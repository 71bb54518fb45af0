//! Server level descriptions: status snapshots and discovery results.

use crate::backend::ConnectionType;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Status information reported by a server.
pub trait ServerInfo: fmt::Debug + Send + Sync {
    /// Backend that produced this information.
    fn connection_type(&self) -> ConnectionType;
}

/// A timestamped status poll result.
///
/// Fixed once constructed; refresh by taking a new snapshot.
#[derive(Debug, Clone, Default)]
pub struct ServerInfoSnapshot {
    /// Milliseconds since the Unix epoch
    msec: i64,
    info: Option<Arc<dyn ServerInfo>>,
}

impl ServerInfoSnapshot {
    pub fn new(msec: i64, info: Arc<dyn ServerInfo>) -> Self {
        Self {
            msec,
            info: Some(info),
        }
    }

    /// Snapshot stamped with the current wall clock time.
    pub fn now(info: Arc<dyn ServerInfo>) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO);
        Self::new(now.as_millis() as i64, info)
    }

    /// Milliseconds since the Unix epoch when the snapshot was taken.
    pub fn msec(&self) -> i64 {
        self.msec
    }

    /// The captured status information.
    pub fn info(&self) -> Option<&Arc<dyn ServerInfo>> {
        self.info.as_ref()
    }

    /// A snapshot is usable once it has a timestamp and a payload.
    pub fn is_valid(&self) -> bool {
        self.msec > 0 && self.info.is_some()
    }
}

/// Role of a discovered server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerType {
    Master,
    Slave,
}

/// Host name and port pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostAndPort {
    pub host: String,
    pub port: u16,
}

impl HostAndPort {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for HostAndPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// One server found while exploring a cluster or replication topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDiscoveryInfo {
    connection_type: ConnectionType,
    server_type: ServerType,
    /// True for the server the discovery was run against
    self_: bool,
    name: String,
    host: HostAndPort,
}

impl ServerDiscoveryInfo {
    pub fn new(connection_type: ConnectionType, server_type: ServerType, self_: bool) -> Self {
        Self {
            connection_type,
            server_type,
            self_,
            name: String::new(),
            host: HostAndPort::default(),
        }
    }

    pub fn connection_type(&self) -> ConnectionType {
        self.connection_type
    }

    pub fn server_type(&self) -> ServerType {
        self.server_type
    }

    pub fn is_self(&self) -> bool {
        self.self_
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn host(&self) -> &HostAndPort {
        &self.host
    }

    pub fn set_host(&mut self, host: HostAndPort) {
        self.host = host;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FakeInfo;

    impl ServerInfo for FakeInfo {
        fn connection_type(&self) -> ConnectionType {
            ConnectionType::Ssdb
        }
    }

    #[test]
    fn test_snapshot_validity() {
        assert!(!ServerInfoSnapshot::default().is_valid());
        assert!(!ServerInfoSnapshot::new(0, Arc::new(FakeInfo)).is_valid());
        assert!(ServerInfoSnapshot::new(1, Arc::new(FakeInfo)).is_valid());

        let snapshot = ServerInfoSnapshot::now(Arc::new(FakeInfo));
        assert!(snapshot.is_valid());
        assert_eq!(
            snapshot.info().map(|i| i.connection_type()),
            Some(ConnectionType::Ssdb)
        );
    }

    #[test]
    fn test_snapshot_accessors() {
        let info: Arc<dyn ServerInfo> = Arc::new(FakeInfo);
        let snapshot = ServerInfoSnapshot::new(1_700_000_000_000, Arc::clone(&info));

        assert_eq!(snapshot.msec(), 1_700_000_000_000);
        assert!(snapshot.info().is_some_and(|i| Arc::ptr_eq(i, &info)));
        assert!(ServerInfoSnapshot::default().info().is_none());
        assert_eq!(ServerInfoSnapshot::default().msec(), 0);
    }

    #[test]
    fn test_discovery_info() {
        let mut info = ServerDiscoveryInfo::new(ConnectionType::Redis, ServerType::Slave, false);
        info.set_name("replica-1");
        info.set_host(HostAndPort::new("10.0.0.2", 6380));

        assert_eq!(info.name(), "replica-1");
        assert_eq!(info.host().to_string(), "10.0.0.2:6380");
        assert_eq!(info.server_type(), ServerType::Slave);
        assert!(!info.is_self());
        assert_eq!(info.connection_type(), ConnectionType::Redis);
    }
}
