//! Common utility functions.

/// Converts string into unsigned number with bounds validation.
pub(crate) fn parse_digital_value(input: &str, min: u8, max: u8) -> Option<u8> {
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse::<u8>().ok().filter(|value| (min..=max).contains(value))
}

/// Converts string with mnemonic value representation into its index in `values`, ignoring case.
pub(crate) fn parse_string_value(input: &str, values: &[&str]) -> Option<u8> {
    if input.is_empty() {
        return None;
    }
    values
        .iter()
        .position(|value| value.eq_ignore_ascii_case(input))
        .map(|index| index as u8)
}
