use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;
use std::net::Ipv4Addr;
use tracing::debug;

use crate::address::random_checksum_address;
use crate::certs::{CertificateIssuer, NodeCertificate, SelfSignedIssuer};
use crate::error::{check_column, Result, RowMismatch};
use crate::random::{random_string, ASCII_LETTERS};
use crate::timestamp::iso8601;
use crate::types::{FleetStateNickname, NodeRow, FLEET_STATE_ICON_PLACEHOLDER};

pub const REST_PORT: u16 = 9151;
pub const NICKNAME_LEN: usize = 25;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NodeRecord {
    pub address: String,
    pub worker_address: String,
    pub host: String,
    pub nickname: String,
    pub timestamp: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    #[serde(skip)]
    pub certificate: NodeCertificate,
    pub fleet_state_nickname_metadata: FleetStateNickname,
}

impl NodeRecord {
    pub fn rest_url(&self) -> String {
        format!("{}:{}", self.host, REST_PORT)
    }
}

/// Field overrides for [`create_node`]; anything left at default gets the stock test node.
#[derive(Clone, Debug)]
pub struct NodeSpec {
    pub address: String,
    pub host: String,
    pub nickname: String,
    pub worker_address: String,
    pub timestamp: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub fleet_state_nickname_metadata: FleetStateNickname,
    pub generate_certificate: bool,
}

impl Default for NodeSpec {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            address: "0x123456789".to_string(),
            host: "127.0.0.1".to_string(),
            nickname: "Blue Knight Teal Club".to_string(),
            worker_address: "0x987654321".to_string(),
            timestamp: now - Duration::days(4),
            last_seen: now,
            fleet_state_nickname_metadata: FleetStateNickname::Unknown,
            generate_certificate: false,
        }
    }
}

pub fn create_node(spec: NodeSpec) -> Result<NodeRecord> {
    create_node_with_issuer(spec, &SelfSignedIssuer)
}

/// Build a node, asking `issuer` for a certificate when `generate_certificate` is set.
/// Issuer errors are returned as-is.
pub fn create_node_with_issuer(spec: NodeSpec, issuer: &dyn CertificateIssuer) -> Result<NodeRecord> {
    let certificate = if spec.generate_certificate {
        issuer.issue(&spec.host, &spec.address)?
    } else {
        NodeCertificate::Placeholder
    };

    debug!(
        address = %spec.address,
        host = %spec.host,
        issued = !certificate.is_placeholder(),
        "created mock node"
    );

    Ok(NodeRecord {
        address: spec.address,
        worker_address: spec.worker_address,
        host: spec.host,
        nickname: spec.nickname,
        timestamp: spec.timestamp,
        last_seen: spec.last_seen,
        certificate,
        fleet_state_nickname_metadata: spec.fleet_state_nickname_metadata,
    })
}

pub fn create_random_node(generate_certificate: bool) -> Result<NodeRecord> {
    create_random_node_with(&mut rand::thread_rng(), generate_certificate)
}

pub fn create_random_node_with<R: Rng>(rng: &mut R, generate_certificate: bool) -> Result<NodeRecord> {
    let host = Ipv4Addr::from(rng.gen::<u32>()).to_string();
    let nickname = random_string(rng, ASCII_LETTERS, NICKNAME_LEN);
    let address = random_checksum_address(rng);
    let worker_address = random_checksum_address(rng);
    let hours_ago = rng.gen_range(0..10);
    let now = Utc::now();

    create_node(NodeSpec {
        address,
        host,
        nickname,
        worker_address,
        timestamp: now - Duration::hours(hours_ago),
        last_seen: now,
        fleet_state_nickname_metadata: FleetStateNickname::Unknown,
        generate_certificate,
    })
}

pub fn node_to_row(node: &NodeRecord) -> NodeRow {
    [
        node.address.clone(),
        node.rest_url(),
        node.nickname.clone(),
        iso8601(&node.timestamp),
        iso8601(&node.last_seen),
        FLEET_STATE_ICON_PLACEHOLDER.to_string(),
    ]
}

/// Check a stored row against the node it was written from, column by column.
pub fn verify_node_row(node: &NodeRecord, row: &NodeRow) -> std::result::Result<(), RowMismatch> {
    check_column(0, "address", "staker address matches", &node.address, &row[0])?;
    check_column(1, "rest_url", "rest url matches", &node.rest_url(), &row[1])?;
    check_column(2, "nickname", "nickname matches", &node.nickname, &row[2])?;
    check_column(3, "timestamp", "new now timestamp matches", &iso8601(&node.timestamp), &row[3])?;
    check_column(4, "last_seen", "last seen matches", &iso8601(&node.last_seen), &row[4])?;
    check_column(5, "fleet_state_icon", "fleet state icon matches", FLEET_STATE_ICON_PLACEHOLDER, &row[5])?;
    Ok(())
}

#[track_caller]
pub fn assert_node_row_matches(node: &NodeRecord, row: &NodeRow) {
    if let Err(mismatch) = verify_node_row(node, row) {
        panic!("{}", mismatch);
    }
}
