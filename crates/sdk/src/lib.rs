//! TradeLink deployment SDK.
//!
//! # Overview
//!
//! Canonical binary encoding of TradeLink cross-chain trade messages, plus
//! the per-network address registry deployment flows read and write.
//!
//! Build an [`types::OfferV0`]/[`types::OfferV1`] or
//! [`types::FulfillV0`]/[`types::FulfillV1`] record, then
//! [`codec::encode`] it under an explicit [`types::ProtocolVersion`] for
//! submission to the execution contract on the destination chain. The two
//! wire generations are not compatible; the version tag exists so a record
//! can never be shipped under the wrong one.
//!
//! [`registry::Registry`] persists deployed contract addresses, one JSON
//! document per network, merged additively across deployments.
//!
//! See `./tests` for examples.
//!
//! # Limitations/follow-ups
//!
//! * Deployment transport (RPC, signing) stays outside this crate: a
//!   deployment flow obtains an address through its own tooling and records
//!   it here.
//!
//! * Leg validation is advisory, see [`types::OfferV0::validate`]; the
//!   execution contract remains the authority.

pub mod abi;
pub mod codec;
pub mod error;
pub mod registry;
pub mod types;

use alloy_primitives::{Address, address};

use crate::types::ChainSelector;

/// Deployment parameters of a chain TradeLink operates on.
///
/// Carries the per-network constants a TradeLink deployment needs: the CCIP
/// router the contract is constructed with, the chain selector remote
/// messages address it by, the LINK fee token and the CCIP test token pair.
#[derive(Clone, Debug)]
pub struct Chain {
    name: String,
    chain_id: u64,
    chain_selector: ChainSelector,
    router: Address,
    link_token: Address,
    ccip_bnm: Address,
    ccip_lnm: Address,
}

impl Chain {
    pub fn sepolia() -> Self {
        Self {
            name: "sepolia".to_string(),
            chain_id: 11155111,
            chain_selector: 16015286601757825753,
            router: address!("0xd0daae2231e9cb96b94c8512223533293c3693bf"),
            link_token: address!("0x779877A7B0D9E8603169DdbD7836e478b4624789"),
            ccip_bnm: address!("0xFd57b4ddBf88a4e07fF4e34C487b99af2Fe82a05"),
            ccip_lnm: address!("0x466D489b6d36E7E3b824ef491C225F5830E81cC1"),
        }
    }

    pub fn mumbai() -> Self {
        Self {
            name: "mumbai".to_string(),
            chain_id: 80001,
            chain_selector: 12532609583862916517,
            router: address!("0x70499c328e1e2a3c41108bd3730f6670a44595d1"),
            link_token: address!("0x326C977E6efc84E512bB9C30f76E30c160eD06FB"),
            ccip_bnm: address!("0xf1E3A5842EeEF51F2967b3F05D45DD4f4205FF40"),
            ccip_lnm: address!("0xc1c76a8c5bfde1be034bbcd930c668726e7c1987"),
        }
    }

    pub fn custom(
        name: String,
        chain_id: u64,
        chain_selector: ChainSelector,
        router: Address,
        link_token: Address,
        ccip_bnm: Address,
        ccip_lnm: Address,
    ) -> Self {
        Self { name, chain_id, chain_selector, router, link_token, ccip_bnm, ccip_lnm }
    }

    /// Network name, also the registry document key.
    pub fn name(&self) -> &str { &self.name }

    pub fn chain_id(&self) -> u64 { self.chain_id }

    /// Selector remote chains address this chain by.
    pub fn chain_selector(&self) -> ChainSelector { self.chain_selector }

    /// CCIP router the TradeLink contract is constructed with.
    pub fn router(&self) -> Address { self.router }

    pub fn link_token(&self) -> Address { self.link_token }

    /// CCIP burn-and-mint test token.
    pub fn ccip_bnm(&self) -> Address { self.ccip_bnm }

    /// CCIP lock-and-mint test token.
    pub fn ccip_lnm(&self) -> Address { self.ccip_lnm }
}
