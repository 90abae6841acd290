use swisc::subcommands::decode::{decode, describe};
use swisc_common::{
    U256,
    types::{LocalSigner, build_transaction},
};
use swisc_test::{RECIPIENT, TEST_PRIVATE_KEY};

#[test]
fn describe_replay_protected_transfer() {
    let tx = build_transaction(
        9,
        RECIPIENT.as_bytes(),
        U256::from(1_500_000_000_000_000_000u64),
        21_000,
        U256::from(20_000_000_000u64),
    )
    .unwrap()
    .with_chain_id(1)
    .unwrap();
    let signed = LocalSigner::from_slice(&TEST_PRIVATE_KEY)
        .unwrap()
        .sign_transaction(tx);

    let lines = describe(&signed).unwrap();
    assert!(lines.contains(&"from: 0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_owned()));
    assert!(lines.contains(&"to: 0x3CeD54309C06E0830607F8565B56C443708363d8".to_owned()));
    assert!(lines.contains(&"nonce: 9".to_owned()));
    assert!(lines.contains(&"value: 1.5 ETH".to_owned()));
    assert!(lines.contains(&"gasPrice: 20 gwei".to_owned()));
    assert!(lines.contains(&"chainId: 1".to_owned()));
    assert!(lines.contains(&format!("hash: {:#x}", signed.hash())));
}

#[test]
fn decode_accepts_the_eip155_example() {
    // Example from the EIP-155 text, signed with the 0x4646.. key.
    decode(
        "0xf86c098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a76400008025a028ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276a067cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83",
    )
    .unwrap();
}

#[test]
fn decode_rejects_tampered_signatures() {
    // Same example with v changed to an invalid value.
    assert!(
        decode(
            "0xf86c098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a76400008022a028ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276a067cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83",
        )
        .is_err()
    );
}
