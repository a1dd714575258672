//! Command implementations, one module per backend area.

pub mod auth;
pub mod dashboard;
pub mod invoice;
pub mod stock;
pub mod supplier;
pub mod users;

/// Render an amount held in smallest currency unit (cents) for display.
pub fn format_amount(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_amount_pads_cents() {
        assert_eq!(format_amount(0), "0.00");
        assert_eq!(format_amount(5), "0.05");
        assert_eq!(format_amount(1250), "12.50");
    }
}
