//! Host identity and clock adapters.

use std::net::{IpAddr, UdpSocket};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::ports::{HostIdentity, TimeSource};

// ============================================================================
// SystemHostIdentity - Hostname from the environment / kernel
// ============================================================================

/// Host identity resolved without network lookups, as `"hostname/ip"`.
///
/// The name comes from `HOSTNAME`, then `COMPUTERNAME`, then the kernel
/// hostname file. The address is the local end of the default route, found
/// by connecting an unbound UDP socket; no packet is sent and no DNS
/// resolution is attempted, so the lookup never hangs. Without a route the
/// bare hostname is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostIdentity;

impl SystemHostIdentity {
    /// Create a new system host identity.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl HostIdentity for SystemHostIdentity {
    fn host_identity(&self) -> Option<String> {
        let name = first_host_name(
            ["HOSTNAME", "COMPUTERNAME"]
                .iter()
                .map(|key| std::env::var(key).ok())
                .chain(std::iter::once_with(|| {
                    std::fs::read_to_string("/proc/sys/kernel/hostname").ok()
                })),
        );
        join_identity(name, route_address())
    }
}

/// First candidate that is non-empty once trimmed.
fn first_host_name(candidates: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(|name| name.trim().to_string())
        .find(|name| !name.is_empty())
}

/// Local address the OS would use for outbound traffic.
fn route_address() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    // TEST-NET-1: only used for route selection
    socket.connect("192.0.2.1:9").ok()?;
    socket.local_addr().ok().map(|addr| addr.ip())
}

fn join_identity(name: Option<String>, addr: Option<IpAddr>) -> Option<String> {
    let addr = addr.filter(|ip| !ip.is_unspecified() && !ip.is_loopback());
    match (name, addr) {
        (Some(name), Some(ip)) => Some(format!("{name}/{ip}")),
        (Some(name), None) => Some(name),
        (None, Some(ip)) => Some(ip.to_string()),
        (None, None) => None,
    }
}

/// Host identity fixed at construction, for tests and pinned deployments.
#[derive(Debug, Clone, Default)]
pub struct FixedHostIdentity {
    identity: Option<String>,
}

impl FixedHostIdentity {
    /// Always resolve to `identity`.
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: Some(identity.into()),
        }
    }

    /// Never resolve.
    pub fn unresolvable() -> Self {
        Self { identity: None }
    }
}

impl HostIdentity for FixedHostIdentity {
    fn host_identity(&self) -> Option<String> {
        self.identity.clone()
    }
}

// ============================================================================
// Time sources
// ============================================================================

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl SystemTimeSource {
    /// Create a new system time source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TimeSource for SystemTimeSource {
    fn now_millis(&self) -> u64 {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();

        duration.as_millis() as u64
    }
}

/// A time source that returns a fixed timestamp.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource {
    millis: u64,
}

impl FixedTimeSource {
    /// Create a fixed time source (milliseconds since the epoch).
    pub fn new(millis: u64) -> Self {
        Self { millis }
    }
}

impl TimeSource for FixedTimeSource {
    fn now_millis(&self) -> u64 {
        self.millis
    }
}
