use leptos::prelude::window;

pub fn alert(msg: impl AsRef<str>) {
    let _ = window().alert_with_message(msg.as_ref());
}

/// Converts a decimal display string into integer base units.
///
/// Text that doesn't parse as a decimal number (including the empty string a
/// cleared form holds) scales to 0 base units. The fractional part is
/// truncated, never rounded, past `decimals` digits; amounts too large for
/// `u64` saturate at `u64::MAX`. Exponent-form input (which `type="number"`
/// fields accept) is rendered to plain decimal first so the source and the
/// derived destination scale under the same interpretation.
pub fn parse_base_units(amount: impl AsRef<str>, decimals: impl Into<u32>) -> u64 {
    let amount = amount.as_ref();
    let decimals = decimals.into();

    if amount.contains(['e', 'E']) {
        return match amount.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => {
                parse_plain_decimal(&format!("{:.*}", decimals as usize, value), decimals)
            }
            _ => 0,
        };
    }

    parse_plain_decimal(amount, decimals)
}

fn parse_plain_decimal(amount: &str, decimals: u32) -> u64 {
    let factor = 10u128.pow(decimals);

    // Split by '.' to manually handle the fractional part
    let parts: Vec<&str> = amount.split('.').collect();
    let whole_part: u128 = parts[0].parse().unwrap_or(0);

    let fractional_part: u128 = if parts.len() > 1 {
        let mut decimal_str = parts[1].to_string();

        // Pad or truncate the fractional part to match the precision
        if decimal_str.len() > decimals as usize {
            decimal_str.truncate(decimals as usize);
        } else {
            decimal_str.push_str(&"0".repeat(decimals as usize - decimal_str.len()));
        }
        decimal_str.parse().unwrap_or(0)
    } else {
        0
    };

    let units = whole_part
        .saturating_mul(factor)
        .saturating_add(fractional_part);
    u64::try_from(units).unwrap_or(u64::MAX)
}
