//! Randomized round trips through the operation wire format.

#![expect(unused_crate_dependencies, reason = "not every dep is used by every test crate")]

use num_bigint::BigUint;
use proptest::prelude::*;
use tzproto_codec::{Nat, decode_buf_exact, encode_to_vec};
use tzproto_keys::{Curve, PublicKey};
use tzproto_operation::{
    BranchId, ContractId, ContractScript, Delegation, Endorsement, Entrypoint, ManagerFields,
    Operation, OperationContents, Origination, PublicKeyHash, Revelation, Transaction,
    TransactionParameters,
};

fn arb_nat() -> impl Strategy<Value = Nat> {
    prop::collection::vec(any::<u8>(), 0..40).prop_map(|b| Nat::new(BigUint::from_bytes_be(&b)))
}

fn arb_curve() -> impl Strategy<Value = Curve> {
    prop_oneof![Just(Curve::Ed25519), Just(Curve::Secp256k1), Just(Curve::P256)]
}

fn arb_pkh() -> impl Strategy<Value = PublicKeyHash> {
    (arb_curve(), prop::array::uniform20(any::<u8>()))
        .prop_map(|(curve, hash)| PublicKeyHash::new(curve, hash))
}

fn arb_contract_id() -> impl Strategy<Value = ContractId> {
    prop_oneof![
        arb_pkh().prop_map(ContractId::Implicit),
        prop::array::uniform20(any::<u8>()).prop_map(ContractId::Originated),
    ]
}

fn arb_public_key() -> impl Strategy<Value = PublicKey> {
    prop_oneof![
        prop::array::uniform32(any::<u8>()).prop_map(PublicKey::Ed25519),
        (any::<[u8; 32]>(), any::<bool>()).prop_map(|(x, odd)| {
            let mut b = [0; 33];
            b[0] = if odd { 3 } else { 2 };
            b[1..].copy_from_slice(&x);
            PublicKey::Secp256k1(b)
        }),
    ]
}

fn arb_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..64)
}

fn arb_entrypoint() -> impl Strategy<Value = Entrypoint> {
    prop_oneof![
        Just(Entrypoint::Default),
        Just(Entrypoint::Root),
        Just(Entrypoint::Do),
        Just(Entrypoint::SetDelegate),
        Just(Entrypoint::RemoveDelegate),
        "[a-z_]{0,31}".prop_map(Entrypoint::Named),
    ]
}

fn arb_manager() -> impl Strategy<Value = ManagerFields> {
    (arb_pkh(), arb_nat(), arb_nat(), arb_nat(), arb_nat()).prop_map(
        |(source, fee, counter, gas_limit, storage_limit)| ManagerFields {
            source,
            fee,
            counter,
            gas_limit,
            storage_limit,
        },
    )
}

fn arb_contents() -> impl Strategy<Value = OperationContents> {
    prop_oneof![
        (arb_manager(), arb_public_key()).prop_map(|(manager, public_key)| {
            Revelation {
                manager,
                public_key,
            }
            .into()
        }),
        (
            arb_manager(),
            arb_nat(),
            arb_contract_id(),
            prop::option::of((arb_entrypoint(), arb_bytes()))
        )
            .prop_map(|(manager, amount, destination, params)| {
                Transaction {
                    manager,
                    amount,
                    destination,
                    parameters: params.map(|(ep, value)| {
                        TransactionParameters::new(ep, value).expect("test: params")
                    }),
                }
                .into()
            }),
        (
            arb_manager(),
            arb_nat(),
            prop::option::of(arb_pkh()),
            arb_bytes(),
            arb_bytes()
        )
            .prop_map(|(manager, balance, delegate, code, storage)| {
                Origination {
                    manager,
                    balance,
                    delegate,
                    script: ContractScript::new(code, storage).expect("test: script"),
                }
                .into()
            }),
        (arb_manager(), prop::option::of(arb_pkh()))
            .prop_map(|(manager, delegate)| Delegation { manager, delegate }.into()),
        any::<i32>().prop_map(|level| Endorsement { level }.into()),
    ]
}

proptest! {
    #[test]
    fn prop_operation_round_trip(
        branch in prop::array::uniform32(any::<u8>()),
        contents in prop::collection::vec(arb_contents(), 1..6),
    ) {
        let op = Operation::new(BranchId::new(branch), contents).expect("test: new");
        let buf = encode_to_vec(&op).expect("test: encode");
        let back = decode_buf_exact::<Operation>(&buf).expect("test: decode");
        prop_assert_eq!(back, op);
    }

    #[test]
    fn prop_truncation_inside_contents_fails(
        contents in prop::collection::vec(arb_contents(), 1..4),
        cut in any::<prop::sample::Index>(),
    ) {
        let mut bounds = vec![32];
        for c in &contents {
            let len = encode_to_vec(c).expect("test: encode contents").len();
            bounds.push(bounds[bounds.len() - 1] + len);
        }

        let op = Operation::new(BranchId::new([0; 32]), contents.clone()).expect("test: new");
        let buf = encode_to_vec(&op).expect("test: encode");
        prop_assert_eq!(buf.len(), bounds[bounds.len() - 1]);

        let cut = cut.index(buf.len());
        let res = decode_buf_exact::<Operation>(&buf[..cut]);
        match bounds.iter().position(|&b| b == cut) {
            // Cut on a boundary after at least one contents entry.
            Some(n) if n > 0 => {
                let back = res.expect("test: decode prefix");
                prop_assert_eq!(back.contents(), &contents[..n]);
            }
            _ => prop_assert!(res.is_err(), "cut at {} of {}", cut, buf.len()),
        }
    }
}
