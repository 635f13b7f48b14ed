use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use sha2::{Digest, Sha256};

use crate::config::WalletVersion;
use crate::error::WalletError;

const BOUNCEABLE_TAG: u8 = 0x11;
const BASECHAIN: u8 = 0x00;

/// External collaborator that turns key material plus a resolved version
/// config into a canonical wallet address string.
pub trait AddressDeriver {
    fn derive_address(
        &self,
        public_key: &[u8; 32],
        version: WalletVersion,
        subwallet_id: u32,
    ) -> Result<String, WalletError>;
}

/// Deterministic default deriver. The account ID is a SHA-256 over the
/// contract code tag and the initial-state parameters (subwallet ID, the V5
/// network global ID, the public key); the printed form is the standard
/// user-friendly frame: bounceable tag, workchain 0, account ID, CRC16
/// checksum, base64url — 48 characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct StateInitDeriver;

impl AddressDeriver for StateInitDeriver {
    fn derive_address(
        &self,
        public_key: &[u8; 32],
        version: WalletVersion,
        subwallet_id: u32,
    ) -> Result<String, WalletError> {
        // The V5 wallet ID field is signed 32-bit on-chain.
        if version.is_v5() && subwallet_id > i32::MAX as u32 {
            return Err(WalletError::AddressDerivation(format!(
                "subwallet ID {subwallet_id} does not fit the {} wallet ID field",
                version.name()
            )));
        }

        let mut hasher = Sha256::new();
        hasher.update(version.code_tag());
        hasher.update(subwallet_id.to_be_bytes());
        if let Some(global_id) = version.network_global_id() {
            hasher.update(global_id.to_be_bytes());
        }
        hasher.update(public_key);
        let account_id = hasher.finalize();

        let mut frame = [0u8; 36];
        frame[0] = BOUNCEABLE_TAG;
        frame[1] = BASECHAIN;
        frame[2..34].copy_from_slice(&account_id);
        let crc = crc16_xmodem(&frame[..34]);
        frame[34..].copy_from_slice(&crc.to_be_bytes());

        Ok(URL_SAFE_NO_PAD.encode(frame))
    }
}

fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAINNET_GLOBAL_ID, TESTNET_GLOBAL_ID};

    // Public key of the golden test phrase (23 x "abandon" + "art").
    fn golden_pubkey() -> [u8; 32] {
        let mut key = [0u8; 32];
        hex::decode_to_slice(
            "abbd2a1c784a6086850c172bcc7d56208e4dea0a51b9389ba21d174ff864c17a",
            &mut key,
        )
        .unwrap();
        key
    }

    #[test]
    fn crc16_xmodem_reference_values() {
        assert_eq!(crc16_xmodem(b""), 0x0000);
        assert_eq!(crc16_xmodem(b"123456789"), 0x31C3);
    }

    #[test]
    fn golden_addresses() {
        let deriver = StateInitDeriver;
        let pubkey = golden_pubkey();

        assert_eq!(
            deriver
                .derive_address(&pubkey, WalletVersion::V4R2, 698_983_191)
                .unwrap(),
            "EQCD3we7uJQa0HhV2Mep4IPGYtHtmf_5fEoiSaBx6nJZiOSH"
        );
        assert_eq!(
            deriver
                .derive_address(&pubkey, WalletVersion::V4R2, 42)
                .unwrap(),
            "EQCnzmwzSRREIHJo3vw4_sog4cx04tKgxSyNBtL-jGL2zndM"
        );
        assert_eq!(
            deriver
                .derive_address(
                    &pubkey,
                    WalletVersion::V5R1Final {
                        network_global_id: MAINNET_GLOBAL_ID
                    },
                    0
                )
                .unwrap(),
            "EQAzQ-b67Ulou373a6m3mFhKxZYebCmHPCgUu0WRbpqJic_a"
        );
        assert_eq!(
            deriver
                .derive_address(&pubkey, WalletVersion::V3R2, 698_983_191)
                .unwrap(),
            "EQDcmGxiyzaU80vACidkG6XLyqv1-PubGpGUaxCM-Nnpq8Rm"
        );
    }

    #[test]
    fn address_is_48_chars_and_deterministic() {
        let deriver = StateInitDeriver;
        let a = deriver
            .derive_address(&golden_pubkey(), WalletVersion::V4R2, 0)
            .unwrap();
        let b = deriver
            .derive_address(&golden_pubkey(), WalletVersion::V4R2, 0)
            .unwrap();
        assert_eq!(a.len(), 48);
        assert_eq!(a, b);
    }

    #[test]
    fn subwallet_and_version_change_the_address() {
        let deriver = StateInitDeriver;
        let pubkey = golden_pubkey();
        let base = deriver
            .derive_address(&pubkey, WalletVersion::V4R2, 0)
            .unwrap();
        assert_ne!(
            base,
            deriver
                .derive_address(&pubkey, WalletVersion::V4R2, 1)
                .unwrap()
        );
        assert_ne!(
            base,
            deriver
                .derive_address(&pubkey, WalletVersion::V4R1, 0)
                .unwrap()
        );
    }

    #[test]
    fn v5_addresses_differ_across_networks() {
        let deriver = StateInitDeriver;
        let pubkey = golden_pubkey();
        let main = deriver
            .derive_address(
                &pubkey,
                WalletVersion::V5R1Final {
                    network_global_id: MAINNET_GLOBAL_ID,
                },
                0,
            )
            .unwrap();
        let test = deriver
            .derive_address(
                &pubkey,
                WalletVersion::V5R1Final {
                    network_global_id: TESTNET_GLOBAL_ID,
                },
                0,
            )
            .unwrap();
        assert_ne!(main, test);
        assert_eq!(test, "EQArUE7mwdSD3R9aaDxvAS3Iy-17UcXSf7ouwf34p9uWV3mA");
    }

    #[test]
    fn v5_rejects_subwallet_ids_beyond_signed_range() {
        let deriver = StateInitDeriver;
        let result = deriver.derive_address(
            &golden_pubkey(),
            WalletVersion::V5R1Final {
                network_global_id: MAINNET_GLOBAL_ID,
            },
            i32::MAX as u32 + 1,
        );
        assert!(matches!(result, Err(WalletError::AddressDerivation(_))));

        // The same ID is fine for the V3/V4 family.
        assert!(deriver
            .derive_address(&golden_pubkey(), WalletVersion::V4R2, i32::MAX as u32 + 1)
            .is_ok());
    }
}
