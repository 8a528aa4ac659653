//! Registered default ports for well-known schemes.

/// Scheme to default-port table consulted during normalization.
///
/// A port equal to its scheme's registered default is elided from the
/// canonical form, so `http://example.com:80/` and `http://example.com/`
/// normalize identically. The table is a process-wide read-only constant.
pub const DEFAULT_PORTS: &[(&str, u16)] = &[
    ("ftp", 21),
    ("http", 80),
    ("https", 443),
    ("ws", 80),
    ("wss", 443),
];

/// Looks up the registered default port for a scheme.
///
/// Expects the scheme in its normalized (lower-case) form.
#[must_use]
pub fn default_port(scheme: &str) -> Option<u16> {
    DEFAULT_PORTS
        .iter()
        .find(|(name, _)| *name == scheme)
        .map(|&(_, port)| port)
}
