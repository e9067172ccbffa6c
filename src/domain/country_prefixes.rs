//! International calling codes accepted for non-domestic numbers.

/// Calling code treated as domestic (United Kingdom).
pub const DOMESTIC_PREFIX: &str = "44";

/// Known international calling codes.
///
/// Entries overlap (`"1"` and `"1876"`) and lookup takes the first entry that
/// matches, so the order here decides which prefix is reported, not whether a
/// number is accepted.
pub const COUNTRY_PREFIXES: &[&str] = &[
    "1", "1242", "1246", "1264", "1268", "1284", "1340", "1345", "1441", "1473", "1649", "1664",
    "1670", "1671", "1684", "1721", "1758", "1767", "1784", "1787", "1809", "1829", "1849", "1868",
    "1869", "1876", "1939", "20", "211", "212", "213", "216", "218", "220", "221", "222", "223",
    "224", "225", "226", "227", "228", "229", "230", "231", "232", "233", "234", "235", "236",
    "237", "238", "239", "240", "241", "242", "243", "244", "245", "246", "247", "248", "249",
    "250", "251", "252", "253", "254", "255", "256", "257", "258", "260", "261", "262", "263",
    "264", "265", "266", "267", "268", "269", "27", "290", "291", "297", "298", "299", "30", "31",
    "32", "33", "34", "350", "351", "352", "353", "354", "355", "356", "357", "358", "359", "36",
    "370", "371", "372", "373", "374", "375", "376", "377", "378", "380", "381", "382", "383",
    "385", "386", "387", "389", "39", "40", "41", "420", "421", "423", "43", "44", "45", "46",
    "47", "48", "49", "500", "501", "502", "503", "504", "505", "506", "507", "508", "509", "51",
    "52", "53", "54", "55", "56", "57", "58", "590", "591", "592", "593", "594", "595", "596",
    "597", "598", "599", "60", "61", "62", "63", "64", "65", "66", "670", "672", "673", "674",
    "675", "676", "677", "678", "679", "680", "681", "682", "683", "685", "686", "687", "688",
    "689", "690", "691", "692", "7", "81", "82", "84", "850", "852", "853", "855", "856", "86",
    "880", "886", "90", "91", "92", "93", "94", "95", "960", "961", "962", "963", "964", "965",
    "966", "967", "968", "970", "971", "972", "973", "974", "975", "976", "977", "98", "992",
    "993", "994", "995", "996", "998",
];

/// First entry of [`COUNTRY_PREFIXES`] that `digits` starts with.
pub fn find_country_prefix(digits: &str) -> Option<&'static str> {
    COUNTRY_PREFIXES
        .iter()
        .copied()
        .find(|prefix| digits.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        // "1" precedes "1876" in the table.
        assert_eq!(find_country_prefix("18765550123"), Some("1"));
        assert_eq!(find_country_prefix("12025550104"), Some("1"));
    }

    #[test]
    fn test_multi_digit_prefix() {
        assert_eq!(find_country_prefix("35312345678"), Some("353"));
        assert_eq!(find_country_prefix("4915112345678"), Some("49"));
    }

    #[test]
    fn test_unknown_prefix() {
        assert_eq!(find_country_prefix("80012345678"), None);
        assert_eq!(find_country_prefix("2812345678"), None);
        assert_eq!(find_country_prefix(""), None);
    }

    #[test]
    fn test_domestic_prefix_is_listed() {
        assert!(COUNTRY_PREFIXES.contains(&DOMESTIC_PREFIX));
    }

    #[test]
    fn test_entries_are_digits() {
        for prefix in COUNTRY_PREFIXES {
            assert!(!prefix.is_empty());
            assert!(prefix.chars().all(|c| c.is_ascii_digit()), "{}", prefix);
        }
    }
}
