use rcgen::{Certificate, CertificateParams, DistinguishedName, DnType, IsCa, SanType};
use std::fs::File;
use std::io::Write;
use std::net::IpAddr;
use std::path::Path;
use tracing::debug;

use crate::error::{FixtureError, Result};

/// TLS identity attached to a mock node.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum NodeCertificate {
    Issued {
        cert_pem: String,
        key_pem: String,
    },
    /// Stand-in for tests that never touch TLS.
    #[default]
    Placeholder,
}

impl NodeCertificate {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, NodeCertificate::Placeholder)
    }
}

/// Anything that can hand a node a certificate for its host and address.
pub trait CertificateIssuer {
    fn issue(&self, host: &str, checksum_address: &str) -> Result<NodeCertificate>;
}

/// Issues a self-signed certificate with the host as SAN and the address as CN.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelfSignedIssuer;

impl CertificateIssuer for SelfSignedIssuer {
    fn issue(&self, host: &str, checksum_address: &str) -> Result<NodeCertificate> {
        let cert = Certificate::from_params(node_certificate_params(host, checksum_address))?;
        let cert_pem = cert.serialize_pem()?;
        let key_pem = cert.serialize_private_key_pem();

        debug!(host, checksum_address, "issued self-signed node certificate");
        Ok(NodeCertificate::Issued { cert_pem, key_pem })
    }
}

// Leaf certificate: host as SAN, address as CN, never a CA.
fn node_certificate_params(host: &str, checksum_address: &str) -> CertificateParams {
    let mut params = CertificateParams::new(Vec::<String>::new());
    params.subject_alt_names = vec![subject_alt_name(host)];
    let mut name = DistinguishedName::new();
    name.push(DnType::CommonName, checksum_address);
    params.distinguished_name = name;
    params.is_ca = IsCa::NoCa;
    params
}

fn subject_alt_name(host: &str) -> SanType {
    match host.parse::<IpAddr>() {
        Ok(ip) => SanType::IpAddress(ip),
        Err(_) => SanType::DnsName(host.to_string()),
    }
}

pub fn create_node_certificate(host: &str, checksum_address: &str) -> Result<NodeCertificate> {
    SelfSignedIssuer.issue(host, checksum_address)
}

/// Write an issued certificate and its key as PEM files.
pub fn write_certificate(
    certificate: &NodeCertificate,
    cert_out: &Path,
    key_out: &Path,
) -> Result<()> {
    let NodeCertificate::Issued { cert_pem, key_pem } = certificate else {
        return Err(FixtureError::PlaceholderCertificate);
    };

    File::create(cert_out)?.write_all(cert_pem.as_bytes())?;
    File::create(key_out)?.write_all(key_pem.as_bytes())?;

    Ok(())
}
