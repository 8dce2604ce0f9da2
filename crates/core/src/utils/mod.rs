use chrono::{Local, TimeZone};
use ethers_core::types::{Address, U256};

pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const WEI_PER_FIXED_UNIT: u64 = 100_000_000_000_000;
const FIXED_DECIMALS_SCALE: u64 = 10_000;

pub fn format_timestamp(secs: u64) -> String {
    i64::try_from(secs)
        .ok()
        .and_then(|secs| Local.timestamp_opt(secs, 0).single())
        .map(|t| t.format(DATE_TIME_FORMAT).to_string())
        .unwrap_or_else(|| secs.to_string())
}

pub fn address_to_string(address: Address) -> String {
    format!("{:?}", address)
}

/// Exact ether amount without trailing zeros, e.g. `0.01` or `1`.
pub fn format_ether(wei: U256) -> String {
    let formatted = ethers_core::utils::format_ether(wei);
    match formatted.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                whole.to_string()
            } else {
                format!("{}.{}", whole, fraction)
            }
        }
        None => formatted,
    }
}

/// Ether amount rounded half-up to 4 decimals.
pub fn format_eth_fixed(wei: U256) -> String {
    let unit = U256::from(WEI_PER_FIXED_UNIT);
    let rounded = wei.saturating_add(unit / 2) / unit;
    let scale = U256::from(FIXED_DECIMALS_SCALE);
    format!("{}.{:04}", rounded / scale, (rounded % scale).as_u64())
}

pub fn format_time_until_draw(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = secs % 86_400 / 3_600;
    let minutes = secs % 3_600 / 60;
    format!("{}d {}h {}m", days, hours, minutes)
}

pub fn u256_to_u64_saturating(x: U256) -> u64 {
    if x > U256::from(u64::MAX) {
        u64::MAX
    } else {
        x.as_u64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers_core::utils::parse_ether;

    #[test]
    fn test_format_ether_trims_zeros() {
        assert_eq!(format_ether(parse_ether("0.01").unwrap()), "0.01");
        assert_eq!(format_ether(parse_ether("1").unwrap()), "1");
        assert_eq!(format_ether(U256::zero()), "0");
        assert_eq!(format_ether(U256::from(1)), "0.000000000000000001");
    }

    #[test]
    fn test_format_eth_fixed() {
        assert_eq!(format_eth_fixed(U256::zero()), "0.0000");
        assert_eq!(format_eth_fixed(parse_ether("1.5").unwrap()), "1.5000");
        assert_eq!(format_eth_fixed(parse_ether("0.00005").unwrap()), "0.0001");
        assert_eq!(format_eth_fixed(parse_ether("0.00004").unwrap()), "0.0000");
        assert_eq!(format_eth_fixed(parse_ether("2.99996").unwrap()), "3.0000");
    }

    #[test]
    fn test_format_time_until_draw() {
        assert_eq!(format_time_until_draw(0), "0d 0h 0m");
        assert_eq!(format_time_until_draw(59), "0d 0h 0m");
        assert_eq!(format_time_until_draw(90_061), "1d 1h 1m");
        assert_eq!(format_time_until_draw(7 * 86_400 - 60), "6d 23h 59m");
    }

    #[test]
    fn test_u256_to_u64_saturating() {
        assert_eq!(u256_to_u64_saturating(U256::from(42)), 42);
        assert_eq!(u256_to_u64_saturating(U256::MAX), u64::MAX);
    }

    #[test]
    fn test_address_to_string() {
        let address: Address = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
            .parse()
            .unwrap();
        assert_eq!(
            address_to_string(address),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_format_timestamp_shape() {
        let formatted = format_timestamp(1_700_000_000);
        assert_eq!(formatted.len(), 19);
        assert_eq!(&formatted[4..5], "-");
    }
}
