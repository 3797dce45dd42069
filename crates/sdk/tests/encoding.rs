use alloy_primitives::{Address, U256, address, hex};
use alloy_sol_types::{SolValue, sol};
use tradelink_sdk::{
    codec,
    error::CodecError,
    types::{
        FulfillV0, FulfillV1, OfferV0, OfferV1, ProtocolVersion, TradeMessage,
        parse_chain_selector,
    },
};

sol! {
    struct OfferV0Tuple {
        address[] tokenIn;
        uint256[] tokenInAmount;
        uint64[] destSelectorTokenIn;
        address[] tokenOut;
        uint256[] tokenOutAmount;
        uint64[] destSelectorTokenOut;
        address[] nftIn;
        uint256[] nftInId;
        address[] nftOut;
        uint256[] nftOutId;
        address traderAddress;
        uint256 deadLine;
        uint256 fee;
        address feeAddress;
        bool isFulfill;
    }

    struct OfferV1Tuple {
        address[] tokenIn;
        uint256[] tokenInAmount;
        address[] nftIn;
        uint256[] nftInId;
        uint64 destSelectorOut;
        address[] tokenOut;
        uint256[] tokenOutAmount;
        address[] nftOut;
        uint256[] nftOutId;
        address ownerOfferAddress;
        address traderOfferAddress;
        uint256 deadLine;
        uint256 fee;
        address feeAddress;
        bool isSuccess;
    }

    struct FulfillV0Tuple {
        uint256 offerId;
        uint64 destChainSelector;
        address destChainAddress;
        address[] tokenIn;
        uint256[] tokenInAmount;
        uint64[] destSelectorTokenIn;
        address[] nftIn;
        uint256[] nftInId;
        address traderAddress;
        address feeAddress;
    }

    struct FulfillV1Tuple {
        uint256 offerId;
        uint64 destChainSelector;
        address destChainAddress;
        address[] tokenIn;
        uint256[] tokenInAmount;
        address[] nftIn;
        uint256[] nftInId;
        address feeAddress;
        address ownerFulfillAddress;
        address traderFulfillAddress;
        bool isBridge;
        bool isSuccess;
    }
}

const SEPOLIA_SELECTOR: u64 = 16015286601757825753;
const MUMBAI_SELECTOR: u64 = 12532609583862916517;

const USDT: Address = address!("0x42176584235C839Af270Ef97D65b36Bb1c19Bb6e");
const USDC: Address = address!("0x7AB0d0a961AC2440895Ea7128bB6ca37E219B377");
const NFT_IN: Address = address!("0x16bC29a24f74FB915f78eB7d2104684CaD3356b6");
const NFT_OUT: Address = address!("0x84d1242291dA9bd26613B86003aB48a696F5AB05");
const TRADER: Address = address!("0x15Df80761aE0bE9E814dC75F996690cf028C4B62");
const OWNER: Address = address!("0xCc6c3917df90E5c4504dc611816c3CDCE033D2F0");
const SEPOLIA_LINK: Address = address!("0x779877A7B0D9E8603169DdbD7836e478b4624789");
const MUMBAI_LINK: Address = address!("0x326C977E6efc84E512bB9C30f76E30c160eD06FB");

fn eth(whole: u64) -> U256 { U256::from(whole) * U256::from(10u64).pow(U256::from(18u64)) }

/// Single-leg token offer from Sepolia, no "out" or NFT legs.
fn simple_offer_v0() -> OfferV0 {
    OfferV0 {
        token_in: vec![USDT],
        token_in_amount: vec![eth(100)],
        dest_selector_token_in: vec![SEPOLIA_SELECTOR],
        trader_address: TRADER,
        deadline: U256::ZERO,
        fee: U256::from(85037537915939799u64),
        fee_address: SEPOLIA_LINK,
        is_fulfill: false,
        ..OfferV0::default()
    }
}

/// Token-for-token trade with an NFT on each side.
fn full_offer_v0() -> OfferV0 {
    OfferV0 {
        token_in: vec![USDT],
        token_in_amount: vec![eth(100)],
        dest_selector_token_in: vec![SEPOLIA_SELECTOR],
        token_out: vec![USDC],
        token_out_amount: vec![eth(30)],
        dest_selector_token_out: vec![MUMBAI_SELECTOR],
        nft_in: vec![NFT_IN],
        nft_in_id: vec![U256::from(1u64)],
        nft_out: vec![NFT_OUT],
        nft_out_id: vec![U256::from(2u64)],
        trader_address: TRADER,
        deadline: U256::ZERO,
        fee: U256::from(85037537915939799u64),
        fee_address: SEPOLIA_LINK,
        is_fulfill: false,
    }
}

fn offer_v1() -> OfferV1 {
    OfferV1 {
        token_in: vec![USDT],
        token_in_amount: vec![eth(100)],
        nft_in: vec![NFT_IN],
        nft_in_id: vec![U256::from(2u64)],
        dest_selector_out: MUMBAI_SELECTOR,
        token_out: vec![USDC],
        token_out_amount: vec![eth(30)],
        nft_out: vec![NFT_OUT],
        nft_out_id: vec![U256::from(2u64)],
        owner_offer_address: OWNER,
        trader_offer_address: TRADER,
        deadline: U256::ZERO,
        fee: U256::from(84942352680556055u64),
        fee_address: SEPOLIA_LINK,
        is_success: false,
    }
}

fn fulfill_v0() -> FulfillV0 {
    FulfillV0 {
        offer_id: U256::from(4u64),
        dest_chain_selector: SEPOLIA_SELECTOR,
        dest_chain_address: address!("0xBbaBAeAD83968D217237cB44a43e13eF1689749A"),
        token_in: vec![USDC],
        token_in_amount: vec![eth(30)],
        dest_selector_token_in: vec![MUMBAI_SELECTOR],
        nft_in: vec![NFT_OUT],
        nft_in_id: vec![U256::from(2u64)],
        trader_address: OWNER,
        fee_address: MUMBAI_LINK,
    }
}

fn fulfill_v1() -> FulfillV1 {
    FulfillV1 {
        offer_id: U256::from(1u64),
        dest_chain_selector: SEPOLIA_SELECTOR,
        dest_chain_address: address!("0xE3e914294fef9F2eFFC95979334Bf2292974D217"),
        token_in: vec![USDC],
        token_in_amount: vec![eth(30)],
        nft_in: vec![NFT_OUT],
        nft_in_id: vec![U256::from(2u64)],
        fee_address: MUMBAI_LINK,
        owner_fulfill_address: TRADER,
        trader_fulfill_address: OWNER,
        is_bridge: true,
        is_success: false,
    }
}

/// Expected bytes for [`simple_offer_v0`], laid out by hand: offset to the
/// tuple body, ten offset words, five static words, then the tail blocks in
/// field order.
const SIMPLE_OFFER_V0_GOLDEN: &str = concat!(
    "0000000000000000000000000000000000000000000000000000000000000020",
    "00000000000000000000000000000000000000000000000000000000000001e0",
    "0000000000000000000000000000000000000000000000000000000000000220",
    "0000000000000000000000000000000000000000000000000000000000000260",
    "00000000000000000000000000000000000000000000000000000000000002a0",
    "00000000000000000000000000000000000000000000000000000000000002c0",
    "00000000000000000000000000000000000000000000000000000000000002e0",
    "0000000000000000000000000000000000000000000000000000000000000300",
    "0000000000000000000000000000000000000000000000000000000000000320",
    "0000000000000000000000000000000000000000000000000000000000000340",
    "0000000000000000000000000000000000000000000000000000000000000360",
    "00000000000000000000000015df80761ae0be9e814dc75f996690cf028c4b62",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000000000000000000000000000000000012e1d30b00dabd7",
    "000000000000000000000000779877a7b0d9e8603169ddbd7836e478b4624789",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000001",
    "00000000000000000000000042176584235c839af270ef97d65b36bb1c19bb6e",
    "0000000000000000000000000000000000000000000000000000000000000001",
    "0000000000000000000000000000000000000000000000056bc75e2d63100000",
    "0000000000000000000000000000000000000000000000000000000000000001",
    "000000000000000000000000000000000000000000000000de41ba4fc9d91ad9",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
);

#[test]
fn offer_v0_matches_golden_vector() {
    let encoded = codec::encode(ProtocolVersion::V0, &simple_offer_v0().into()).unwrap();
    assert_eq!(encoded, hex::decode(SIMPLE_OFFER_V0_GOLDEN).unwrap());
}

#[test]
fn offer_v0_matches_reference_encoder() {
    let offer = full_offer_v0();
    let reference = OfferV0Tuple {
        tokenIn: offer.token_in.clone(),
        tokenInAmount: offer.token_in_amount.clone(),
        destSelectorTokenIn: offer.dest_selector_token_in.clone(),
        tokenOut: offer.token_out.clone(),
        tokenOutAmount: offer.token_out_amount.clone(),
        destSelectorTokenOut: offer.dest_selector_token_out.clone(),
        nftIn: offer.nft_in.clone(),
        nftInId: offer.nft_in_id.clone(),
        nftOut: offer.nft_out.clone(),
        nftOutId: offer.nft_out_id.clone(),
        traderAddress: offer.trader_address,
        deadLine: offer.deadline,
        fee: offer.fee,
        feeAddress: offer.fee_address,
        isFulfill: offer.is_fulfill,
    }
    .abi_encode();
    assert_eq!(offer.encode().unwrap(), reference);
}

#[test]
fn offer_v1_matches_reference_encoder() {
    let offer = offer_v1();
    let reference = OfferV1Tuple {
        tokenIn: offer.token_in.clone(),
        tokenInAmount: offer.token_in_amount.clone(),
        nftIn: offer.nft_in.clone(),
        nftInId: offer.nft_in_id.clone(),
        destSelectorOut: offer.dest_selector_out,
        tokenOut: offer.token_out.clone(),
        tokenOutAmount: offer.token_out_amount.clone(),
        nftOut: offer.nft_out.clone(),
        nftOutId: offer.nft_out_id.clone(),
        ownerOfferAddress: offer.owner_offer_address,
        traderOfferAddress: offer.trader_offer_address,
        deadLine: offer.deadline,
        fee: offer.fee,
        feeAddress: offer.fee_address,
        isSuccess: offer.is_success,
    }
    .abi_encode();
    assert_eq!(offer.encode().unwrap(), reference);
}

#[test]
fn fulfill_v0_matches_reference_encoder() {
    let fulfill = fulfill_v0();
    let reference = FulfillV0Tuple {
        offerId: fulfill.offer_id,
        destChainSelector: fulfill.dest_chain_selector,
        destChainAddress: fulfill.dest_chain_address,
        tokenIn: fulfill.token_in.clone(),
        tokenInAmount: fulfill.token_in_amount.clone(),
        destSelectorTokenIn: fulfill.dest_selector_token_in.clone(),
        nftIn: fulfill.nft_in.clone(),
        nftInId: fulfill.nft_in_id.clone(),
        traderAddress: fulfill.trader_address,
        feeAddress: fulfill.fee_address,
    }
    .abi_encode();
    assert_eq!(fulfill.encode().unwrap(), reference);
}

#[test]
fn fulfill_v1_matches_reference_encoder() {
    let fulfill = fulfill_v1();
    let reference = FulfillV1Tuple {
        offerId: fulfill.offer_id,
        destChainSelector: fulfill.dest_chain_selector,
        destChainAddress: fulfill.dest_chain_address,
        tokenIn: fulfill.token_in.clone(),
        tokenInAmount: fulfill.token_in_amount.clone(),
        nftIn: fulfill.nft_in.clone(),
        nftInId: fulfill.nft_in_id.clone(),
        feeAddress: fulfill.fee_address,
        ownerFulfillAddress: fulfill.owner_fulfill_address,
        traderFulfillAddress: fulfill.trader_fulfill_address,
        isBridge: fulfill.is_bridge,
        isSuccess: fulfill.is_success,
    }
    .abi_encode();
    assert_eq!(fulfill.encode().unwrap(), reference);
}

#[test]
fn encoding_is_deterministic() {
    let message: TradeMessage = full_offer_v0().into();
    assert_eq!(
        codec::encode(ProtocolVersion::V0, &message).unwrap(),
        codec::encode(ProtocolVersion::V0, &message).unwrap(),
    );
}

#[test]
fn all_messages_round_trip() {
    let messages: Vec<TradeMessage> = vec![
        simple_offer_v0().into(),
        full_offer_v0().into(),
        offer_v1().into(),
        fulfill_v0().into(),
        fulfill_v1().into(),
    ];
    for message in messages {
        let encoded = codec::encode(message.version(), &message).unwrap();
        let decoded = codec::decode(message.version(), message.kind(), &encoded).unwrap();
        assert_eq!(decoded, message);
        // Strict decoding means a decoded record re-encodes to the same bytes.
        assert_eq!(codec::encode(decoded.version(), &decoded).unwrap(), encoded);
    }
}

#[test]
fn empty_nft_legs_encode_as_zero_length_arrays() {
    let offer = simple_offer_v0();
    let encoded = offer.encode().unwrap();
    let decoded = OfferV0::decode(&encoded).unwrap();
    assert_eq!(decoded.nft_in, Vec::<Address>::new());
    assert_eq!(decoded.nft_in_id, Vec::<U256>::new());
}

#[test]
fn v1_record_under_v0_schema_is_rejected() {
    let message: TradeMessage = offer_v1().into();
    assert_eq!(
        codec::encode(ProtocolVersion::V0, &message),
        Err(CodecError::SchemaVersionMismatch {
            found: ProtocolVersion::V1,
            requested: ProtocolVersion::V0,
        }),
    );
}

#[test]
fn empty_selector_literal_is_rejected() {
    // JavaScript's `BigInt("")` is zero, so a hand-edited deployment config
    // can ship an empty selector without anyone noticing; here it must
    // surface as an error.
    assert_eq!(
        parse_chain_selector(""),
        Err(CodecError::InvalidIntegerLiteral(String::new())),
    );
}

#[test]
fn mismatched_legs_validate_as_error_but_still_encode() {
    let offer = OfferV0 {
        token_in: vec![USDT],
        token_in_amount: vec![],
        dest_selector_token_in: vec![SEPOLIA_SELECTOR],
        ..OfferV0::default()
    };
    assert_eq!(
        offer.validate(),
        Err(CodecError::LegLengthMismatch {
            field: "tokenIn",
            len: 1,
            companion: "tokenInAmount",
            companion_len: 0,
        }),
    );
    // The wire format itself admits the mismatch; the receiving contract is
    // the authority on rejecting it.
    assert!(offer.encode().is_ok());
}

#[test]
fn truncated_input_is_rejected() {
    let encoded = fulfill_v1().encode().unwrap();
    assert_eq!(
        FulfillV1::decode(&encoded[..encoded.len() - 32]),
        Err(CodecError::Truncated),
    );
}
