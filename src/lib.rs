//! Mock node and fleet state fixtures for tests of the node store.
//!
//! Records are built either from explicit [`NodeSpec`] / [`StateSpec`] overrides or
//! at random, projected to the store's row layout, and rows read back from the
//! store can be checked against the record they came from.

pub mod address;
pub mod certs;
pub mod error;
pub mod node;
mod random;
pub mod state;
pub mod timestamp;
pub mod types;

pub use address::{create_eth_address, is_checksum_address, to_checksum_address};
pub use certs::{create_node_certificate, CertificateIssuer, NodeCertificate, SelfSignedIssuer};
pub use error::{FixtureError, Result, RowMismatch};
pub use node::{
    assert_node_row_matches, create_node, create_node_with_issuer, create_random_node,
    create_random_node_with, node_to_row, verify_node_row, NodeRecord, NodeSpec,
};
pub use state::{
    assert_state_row_matches, create_random_state, create_random_state_with, create_state,
    state_to_row, verify_state_row, verify_state_row_as, StateRecord, StateSpec, COLORS,
};
pub use timestamp::TimestampFormat;
pub use types::{ColorDescriptor, FleetStateNickname, NodeRow, StateRow};
