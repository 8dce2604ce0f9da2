use crate::ProofError;
use ethers_core::types::U256;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// A big number as it appears in a proof file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawBigNumber {
    pub val: String,
    pub bitlen: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawVdfProof {
    pub v: Vec<RawBigNumber>,
    pub y: RawBigNumber,
}

/// A big number ready to be passed to the contract's `BigNumber` struct.
#[derive(Clone, PartialEq, Eq)]
pub struct PreparedBigNumber {
    pub val: Vec<u8>,
    pub bitlen: u64,
}

impl fmt::Debug for PreparedBigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreparedBigNumber")
            .field("val", &format!("0x{}", hex::encode(&self.val)))
            .field("bitlen", &self.bitlen)
            .finish()
    }
}

/// Largest bit length accepted from a proof file. VDF moduli are a few thousand bits.
pub const MAX_BIG_NUMBER_BITLEN: u64 = 1 << 16;

/// Right-pads `val` with zeros to the byte length implied by `bitlen`.
pub fn prepare_big_number(val: &str, bitlen: u64) -> Result<PreparedBigNumber, ProofError> {
    let digits = val
        .strip_prefix("0x")
        .or_else(|| val.strip_prefix("0X"))
        .unwrap_or(val);

    if bitlen > MAX_BIG_NUMBER_BITLEN {
        return Err(ProofError::BitlenTooLarge(bitlen, MAX_BIG_NUMBER_BITLEN));
    }
    let expected_digits = usize::try_from(bitlen.div_ceil(8) * 2)
        .map_err(|_| ProofError::BitlenTooLarge(bitlen, MAX_BIG_NUMBER_BITLEN))?;
    let mut padded = digits.to_string();
    if padded.len() < expected_digits {
        padded.push_str(&"0".repeat(expected_digits - padded.len()));
    }

    let bytes = hex::decode(&padded).map_err(|e| ProofError::InvalidHex(val.to_string(), e))?;

    Ok(PreparedBigNumber { val: bytes, bitlen })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VdfProof {
    pub v: Vec<PreparedBigNumber>,
    pub y: PreparedBigNumber,
}

impl VdfProof {
    pub fn from_raw(raw: &RawVdfProof) -> Result<VdfProof, ProofError> {
        let v = raw
            .v
            .iter()
            .map(|n| prepare_big_number(&n.val, n.bitlen))
            .collect::<Result<Vec<_>, _>>()?;
        let y = prepare_big_number(&raw.y.val, raw.y.bitlen)?;

        Ok(VdfProof { v, y })
    }

    pub fn from_file(path: &Path) -> Result<VdfProof, ProofError> {
        if !path.exists() {
            return Err(ProofError::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let raw: RawVdfProof = serde_json::from_str(&content)?;

        VdfProof::from_raw(&raw)
    }
}

/// Result of replaying a past game's VDF proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VdfVerification {
    pub calculated_numbers: [U256; 4],
    pub is_valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_prepare_pads_to_bitlen() {
        let prepared = prepare_big_number("0xabcd", 32).unwrap();
        assert_eq!(prepared.val, vec![0xab, 0xcd, 0x00, 0x00]);
        assert_eq!(prepared.bitlen, 32);

        // partial bytes round up
        let prepared = prepare_big_number("ff", 9).unwrap();
        assert_eq!(prepared.val, vec![0xff, 0x00]);
    }

    #[test]
    fn test_prepare_keeps_longer_values() {
        let prepared = prepare_big_number("0x0102030405", 16).unwrap();
        assert_eq!(prepared.val, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_prepare_rejects_bad_hex() {
        assert!(matches!(
            prepare_big_number("0xzz", 8),
            Err(ProofError::InvalidHex(..))
        ));
        assert!(matches!(
            prepare_big_number("0x123", 8),
            Err(ProofError::InvalidHex(..))
        ));
    }

    #[test]
    fn test_prepare_rejects_huge_bitlen() {
        for bitlen in [u64::MAX, u64::MAX - 3, 1 << 40, MAX_BIG_NUMBER_BITLEN + 1] {
            assert!(matches!(
                prepare_big_number("0x01", bitlen),
                Err(ProofError::BitlenTooLarge(b, _)) if b == bitlen
            ));
        }
        let prepared = prepare_big_number("0x01", MAX_BIG_NUMBER_BITLEN).unwrap();
        assert_eq!(prepared.val.len() as u64, MAX_BIG_NUMBER_BITLEN / 8);
    }

    #[test]
    fn test_proof_file_with_huge_bitlen() {
        let dir = env::temp_dir().join("eat_the_pie_huge_bitlen_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("proof.json");
        fs::write(
            &path,
            r#"{"y":{"val":"0x0a","bitlen":18446744073709551615},"v":[]}"#,
        )
        .unwrap();

        assert!(matches!(
            VdfProof::from_file(&path),
            Err(ProofError::BitlenTooLarge(..))
        ));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_proof_from_file() {
        let dir = env::temp_dir().join("eat_the_pie_proof_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("proof.json");
        fs::write(
            &path,
            r#"{"y":{"val":"0x0a","bitlen":16},"v":[{"val":"0x01","bitlen":8},{"val":"0x0203","bitlen":24}]}"#,
        )
        .unwrap();

        let proof = VdfProof::from_file(&path).unwrap();
        assert_eq!(proof.y.val, vec![0x0a, 0x00]);
        assert_eq!(proof.v.len(), 2);
        assert_eq!(proof.v[1].val, vec![0x02, 0x03, 0x00]);
        assert_eq!(proof.v[1].bitlen, 24);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_proof_file_errors() {
        let missing = env::temp_dir().join("eat_the_pie_no_such_proof.json");
        assert!(matches!(
            VdfProof::from_file(&missing),
            Err(ProofError::FileNotFound(_))
        ));

        let dir = env::temp_dir().join("eat_the_pie_bad_proof_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("proof.json");
        fs::write(&path, "{\"y\": 1}").unwrap();
        assert!(matches!(
            VdfProof::from_file(&path),
            Err(ProofError::BadFormat(_))
        ));
        fs::remove_dir_all(&dir).unwrap();
    }
}
