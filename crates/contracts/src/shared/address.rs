//! Address helpers for mock data: studio lookup, generated customer
//! addresses and a rough distance estimate.
//!
//! Generated values are deterministic for a given seed so that a row keeps
//! the same address across re-renders.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static STUDIO_ADDRESSES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("PKC Laundries", "PKC Laundries, Road No. 5, Banjara Hills"),
        ("MagicKlean", "MagicKlean, Ayyappa Society, Madhapur"),
        ("Cleanovo", "Cleanovo, Kothaguda Cross Roads, Kondapur"),
        ("UClean", "UClean, KPHB Colony, Kukatpally"),
        ("Tumbledry", "Tumbledry, Sarath City Mall Road, Gachibowli"),
        ("Washmart", "Washmart, Road No. 36, Jubilee Hills"),
        ("We Washh", "We Washh, Ameerpet Metro Station Road, Ameerpet"),
        ("The Laundry Basket", "The Laundry Basket, HITEC City Main Road, Madhapur"),
        ("Laundry Express", "Laundry Express, Road No. 12, Banjara Hills"),
        ("Bhavani BAND BOX", "Bhavani BAND BOX, Khairatabad X Roads, Somajiguda"),
    ])
});

const PLOTS: [&str; 5] = ["7-1-397", "8-2-120", "9-3-456", "10-4-789", "11-5-234"];
const AREAS: [&str; 7] = [
    "Ameerpet",
    "Banjara Hills",
    "Jubilee Hills",
    "Madhapur",
    "Gachibowli",
    "HITEC City",
    "Kondapur",
];
const ROADS: [&str; 5] = ["Main Road", "Circle Road", "Junction Street", "Cross Road", "Highway"];

/// Known studio names, in display order
pub fn studio_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = STUDIO_ADDRESSES.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Address of a known studio
pub fn studio_address(studio: &str) -> Option<&'static str> {
    STUDIO_ADDRESSES.get(studio).copied()
}

/// Studio address, or a generic one built from the studio name
pub fn studio_address_or_default(studio: &str) -> String {
    studio_address(studio)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} Studio, Hyderabad", studio))
}

/// Stable 64-bit FNV-1a hash, used as a seed for generated values
pub fn seed_of(value: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in value.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    hash
}

/// A plausible Hyderabad street address derived from `seed`
pub fn generate_address(seed: &str) -> String {
    let h = seed_of(seed);
    let plot = PLOTS[(h % PLOTS.len() as u64) as usize];
    let area = AREAS[((h >> 8) % AREAS.len() as u64) as usize];
    let road = ROADS[((h >> 16) % ROADS.len() as u64) as usize];
    format!("{}, {}, {}, Hyderabad, India", plot, area, road)
}

/// A ten-digit Indian mobile number derived from `seed`
pub fn generate_phone(seed: &str) -> String {
    let number = 1_000_000_000 + seed_of(seed) % 9_000_000_000;
    format!("+91 {}", number)
}

/// Rough distance between two addresses, formatted as "x.y km".
///
/// There is no geocoding behind this; the figure only has to be stable
/// and within a city-sized range (1.0 to 15.9 km).
pub fn estimate_distance(from: &str, to: &str) -> String {
    let h = seed_of(from) ^ seed_of(to).rotate_left(17);
    let tenths = 10 + h % 150;
    format!("{}.{} km", tenths / 10, tenths % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_studio_lookup() {
        assert_eq!(
            studio_address("UClean"),
            Some("UClean, KPHB Colony, Kukatpally")
        );
        assert_eq!(studio_address("Nowhere"), None);
        assert_eq!(
            studio_address_or_default("Nowhere"),
            "Nowhere Studio, Hyderabad"
        );
    }

    #[test]
    fn test_generated_values_are_stable() {
        assert_eq!(generate_address("ORD-0001"), generate_address("ORD-0001"));
        assert!(generate_address("ORD-0001").ends_with("Hyderabad, India"));
        let phone = generate_phone("ORD-0001");
        assert!(phone.starts_with("+91 "));
        assert_eq!(phone.len(), "+91 ".len() + 10);
    }

    #[test]
    fn test_distance_range() {
        for seed in ["a", "b", "ORD-0007", "Cleanovo"] {
            let d = estimate_distance(seed, "UClean, KPHB Colony, Kukatpally");
            let km: f64 = d.trim_end_matches(" km").parse().unwrap();
            assert!((1.0..16.0).contains(&km), "{} out of range", d);
        }
    }
}
