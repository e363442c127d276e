use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::lookup::TypeRef;

/// A recorded donation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: String,
    pub donor_name: String,
    #[serde(default)]
    pub donor_phone: Option<String>,
    /// Amount in whole rupiah; zero for in-kind donations.
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub donation_type: Option<TypeRef>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Donation {
    /// `Rp 1.250.000`
    pub fn formatted_amount(&self) -> String {
        format_rupiah(self.amount)
    }
}

/// Formats an amount with `.` thousands separators.
pub fn format_rupiah(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}Rp {grouped}")
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationPayload {
    pub donor_name: String,
    pub donor_phone: Option<String>,
    pub amount: i64,
    pub date: NaiveDate,
    pub donation_type_id: String,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(950), "Rp 950");
        assert_eq!(format_rupiah(1_250_000), "Rp 1.250.000");
        assert_eq!(format_rupiah(-12_000), "-Rp 12.000");
    }
}
