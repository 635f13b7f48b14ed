//! End-to-end flow: raw selections through resolution, key derivation and
//! address assembly, pinned against fixed vectors.

use rand::rngs::StdRng;
use rand::SeedableRng;

use ton_wallet_manager::{
    assemble, resolve, SeedSource, Selection, StateInitDeriver, WalletError, WalletReport,
};

fn golden_phrase() -> String {
    let mut words = vec!["abandon"; 23];
    words.push("art");
    words.join(" ")
}

#[test]
fn golden_vector_end_to_end() {
    let selection = Selection {
        seed: SeedSource::Text(golden_phrase()),
        network: Some("mainnet".to_string()),
        version: Some("v4r2".to_string()),
        subwallet: None,
    };
    let config = resolve(selection, &mut StdRng::seed_from_u64(0)).unwrap();
    assert_eq!(config.subwallet_id, 698_983_191);

    let info = assemble(config, &StateInitDeriver).unwrap();
    assert_eq!(info.address, "EQCD3we7uJQa0HhV2Mep4IPGYtHtmf_5fEoiSaBx6nJZiOSH");

    let report = WalletReport::from(&info);
    assert_eq!(report.network, "Mainnet");
    assert_eq!(report.version, "V4R2");
    assert_eq!(
        report.public_key,
        "abbd2a1c784a6086850c172bcc7d56208e4dea0a51b9389ba21d174ff864c17a"
    );
    assert_eq!(
        report.private_key,
        "88965e4e6f686bad4be63761f4d8fa1cc682bccf11f8382bd281304d07b76edc\
         abbd2a1c784a6086850c172bcc7d56208e4dea0a51b9389ba21d174ff864c17a"
    );
}

#[test]
fn delimiter_style_does_not_change_the_wallet() {
    let commas = golden_phrase().replace(' ', ",");
    let run = |text: String| {
        let selection = Selection {
            seed: SeedSource::Text(text),
            network: None,
            version: None,
            subwallet: None,
        };
        let config = resolve(selection, &mut StdRng::seed_from_u64(0)).unwrap();
        assemble(config, &StateInitDeriver).unwrap().address
    };
    assert_eq!(run(golden_phrase()), run(commas));
}

#[test]
fn generated_wallets_are_reproducible_under_a_seeded_rng() {
    let run = || {
        let selection = Selection {
            seed: SeedSource::Generate,
            network: Some("testnet".to_string()),
            version: Some("v5r1final".to_string()),
            subwallet: None,
        };
        let config = resolve(selection, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(config.subwallet_id, 0);
        assemble(config, &StateInitDeriver).unwrap()
    };
    let a = run();
    let b = run();
    assert_eq!(a.address, b.address);
    assert_eq!(a.config.seed, b.config.seed);
}

#[test]
fn bad_selections_fail_before_any_assembly() {
    let base = |network: Option<&str>, version: Option<&str>| Selection {
        seed: SeedSource::Text(golden_phrase()),
        network: network.map(str::to_string),
        version: version.map(str::to_string),
        subwallet: None,
    };

    assert!(matches!(
        resolve(base(Some("moon"), None), &mut StdRng::seed_from_u64(0)),
        Err(WalletError::InvalidNetwork(_))
    ));
    assert!(matches!(
        resolve(base(None, Some("v9")), &mut StdRng::seed_from_u64(0)),
        Err(WalletError::InvalidVersion(_))
    ));
}
