use chrono::NaiveDate;

/// Build the human-facing quote number: `NF-YYYYMMDD-XXX` where `XXX` is the
/// first three characters of the client name, uppercased.
///
/// Computed exactly once per persistence attempt and assigned to every field
/// that carries it, so the two copies can never straddle a date rollover.
pub fn quote_reference(date: NaiveDate, client_name: &str) -> String {
    let prefix: String = client_name.chars().take(3).collect::<String>().to_uppercase();
    format!("NF-{}-{}", date.format("%Y%m%d"), prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acme_reference() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 18).unwrap();
        assert_eq!(quote_reference(date, "Acme Ltd"), "NF-20250118-ACM");
    }

    #[test]
    fn test_short_client_name() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_eq!(quote_reference(date, "Jo"), "NF-20250602-JO");
        assert_eq!(quote_reference(date, ""), "NF-20250602-");
    }

    #[test]
    fn test_lowercase_names_are_uppercased() {
        let date = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        assert_eq!(quote_reference(date, "devries media"), "NF-20261231-DEV");
    }
}
