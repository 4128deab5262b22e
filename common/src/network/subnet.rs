/// The subnets attached to one local interface, as CIDR strings.
///
/// Loopback and link-local addresses are excluded at capture time, so a
/// descriptor only ever carries probe-worthy ranges. Immutable once the
/// inventory scan finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetDescriptor {
    pub interface: String,
    pub ipv4: Vec<String>,
    pub ipv6: Vec<String>,
}

impl SubnetDescriptor {
    pub fn new(interface: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            ipv4: Vec::new(),
            ipv6: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ipv4.is_empty() && self.ipv6.is_empty()
    }
}
