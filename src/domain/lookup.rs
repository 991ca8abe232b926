//! Duty path: resolve a selection to one record and price the duty.

use super::entities::{DutyOutcome, DutyQuote, DutySelection, TariffRecord};

/// First record whose key equals the selection exactly.
pub fn find_match<'a>(
    records: &'a [TariffRecord],
    product: &str,
    country: &str,
    description: &str,
) -> Option<&'a TariffRecord> {
    records
        .iter()
        .find(|record| record.matches(product, country, description))
}

/// `tariff_percent / 100 * invoice_value`, unrounded.
///
/// Negative or non-finite inputs count as zero so the result is never negative.
pub fn compute_duty(tariff_percent: f64, invoice_value: f64) -> f64 {
    let tariff_percent = non_negative(tariff_percent);
    let invoice_value = non_negative(invoice_value);
    (tariff_percent / 100.0) * invoice_value
}

pub fn estimate_duty(records: &[TariffRecord], selection: &DutySelection) -> DutyOutcome {
    let Some(record) = find_match(
        records,
        &selection.product,
        &selection.country,
        &selection.description,
    ) else {
        tracing::debug!(
            product = %selection.product,
            country = %selection.country,
            description = %selection.description,
            "no tariff record for selection"
        );
        return DutyOutcome::NotFound;
    };

    let invoice_value = non_negative(selection.invoice_value);
    DutyOutcome::Found(DutyQuote {
        hs_code: record.hs_code.clone(),
        product: record.product.clone(),
        description: record.description.clone(),
        destination: record.destination.clone(),
        tariff_percent: record.tariff_percent,
        invoice_value,
        estimated_duty: compute_duty(record.tariff_percent, invoice_value),
    })
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn dataset() -> Vec<TariffRecord> {
        let rows = [
            ("mobile phone", "United States", "Smartphone, 5G", "8517.13.0000", 0.0),
            ("mobile phone", "India", "Smartphone, 5G", "8517.13.00", 20.0),
            ("plastic chair", "Germany", "Stackable garden chair", "9401.79.00", 5.6),
            ("plastic chair", "Germany", "Office chair, swivel", "9401.31.00", 0.0),
            ("cotton t-shirt", "Japan", "Knitted cotton T-shirt", "6109.10", 7.4),
        ];
        rows.iter()
            .map(|(product, destination, description, hs_code, tariff)| TariffRecord {
                product: product.to_string(),
                destination: destination.to_string(),
                description: description.to_string(),
                hs_code: hs_code.to_string(),
                tariff_percent: *tariff,
            })
            .collect()
    }

    #[test]
    fn every_record_finds_itself() {
        let records = dataset();
        for record in &records {
            let found = find_match(&records, &record.product, &record.destination, &record.description);
            assert_eq!(found, Some(record));
        }
    }

    #[test]
    fn unknown_or_case_shifted_selection_is_not_found() {
        let records = dataset();
        assert!(find_match(&records, "mobile phone", "Germany", "Smartphone, 5G").is_none());
        assert!(find_match(&records, "Mobile Phone", "India", "Smartphone, 5G").is_none());
        assert!(find_match(&records, "mobile phone ", "India", "Smartphone, 5G").is_none());
        assert!(find_match(&[], "mobile phone", "India", "Smartphone, 5G").is_none());
    }

    #[test]
    fn first_match_wins_on_duplicates() {
        let mut records = dataset();
        let mut duplicate = records[1].clone();
        duplicate.tariff_percent = 99.0;
        records.push(duplicate);
        let found = find_match(&records, "mobile phone", "India", "Smartphone, 5G").unwrap();
        assert_eq!(found.tariff_percent, 20.0);
    }

    #[test]
    fn duty_formula() {
        assert!(approx(compute_duty(10.0, 1000.0), 100.0));
        assert_eq!(compute_duty(0.0, 500.0), 0.0);
        assert_eq!(compute_duty(25.0, 0.0), 0.0);
        assert!(approx(compute_duty(5.6, 250.0), 14.0));
    }

    #[test]
    fn duty_never_negative() {
        assert_eq!(compute_duty(10.0, -50.0), 0.0);
        assert_eq!(compute_duty(10.0, f64::NAN), 0.0);
        assert_eq!(compute_duty(-3.0, 100.0), 0.0);
    }

    #[test]
    fn estimate_duty_builds_quote() {
        let records = dataset();
        let selection = DutySelection {
            product: "mobile phone".into(),
            country: "India".into(),
            description: "Smartphone, 5G".into(),
            invoice_value: 1000.0,
        };
        let outcome = estimate_duty(&records, &selection);
        let quote = outcome.quote().expect("match");
        assert_eq!(quote.hs_code, "8517.13.00");
        assert_eq!(quote.destination, "India");
        assert_eq!(quote.tariff_percent, 20.0);
        assert!(approx(quote.estimated_duty, 200.0));

        // identical inputs, identical outputs
        assert_eq!(estimate_duty(&records, &selection), outcome);
    }

    #[test]
    fn estimate_duty_reports_not_found() {
        let records = dataset();
        let selection = DutySelection {
            product: "plastic chair".into(),
            country: "Japan".into(),
            description: "Stackable garden chair".into(),
            invoice_value: 10.0,
        };
        assert_eq!(estimate_duty(&records, &selection), DutyOutcome::NotFound);
        assert!(!estimate_duty(&records, &selection).is_found());
    }
}
