//! Payment line parsing.
//!
//! The payment line carries a free-text description, the billing period as
//! two dates and the amount, all on one line with no labels.

use tracing::trace;

use super::{AmountExtractor, DateExtractor, FieldExtractor};
use crate::models::config::MoneyPolicy;
use crate::models::record::PaymentLineItem;

/// Split one payment line into description, period and amount.
///
/// The first date becomes `from`, the second `until`, the first amount
/// `amount`; anything not found is an empty string. The description is the
/// line with every date and amount removed.
pub fn parse_payment_line(line: &str, policy: MoneyPolicy) -> PaymentLineItem {
    let dates = DateExtractor::new().extract_all(line);
    let amounts = AmountExtractor::new().with_policy(policy).extract_all(line);

    let mut spans: Vec<(usize, usize)> = dates
        .iter()
        .chain(amounts.iter())
        .filter_map(|m| m.position)
        .collect();
    spans.sort_unstable();

    let description = remove_spans(line, &spans).trim().to_string();

    let item = PaymentLineItem {
        description,
        from: dates.first().map(|m| m.value.clone()).unwrap_or_default(),
        until: dates.get(1).map(|m| m.value.clone()).unwrap_or_default(),
        amount: amounts.first().map(|m| m.value.clone()).unwrap_or_default(),
    };
    trace!(
        "Payment line: {} dates, {} amounts -> {:?}",
        dates.len(),
        amounts.len(),
        item
    );

    item
}

/// `text` without the byte ranges in `spans` (sorted by start). Overlapping
/// ranges are merged.
fn remove_spans(text: &str, spans: &[(usize, usize)]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for &(start, end) in spans {
        if start > cursor {
            out.push_str(&text[cursor..start]);
        }
        cursor = cursor.max(end);
    }
    out.push_str(&text[cursor..]);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_dates_one_amount() {
        let item = parse_payment_line(
            "Cloud hosting Feb 1, 2024 Feb 29, 2024 USD 1,250.00",
            MoneyPolicy::UsdOrDollar,
        );

        assert_eq!(
            item,
            PaymentLineItem {
                description: "Cloud hosting".to_string(),
                from: "Feb 1, 2024".to_string(),
                until: "Feb 29, 2024".to_string(),
                amount: "USD 1,250.00".to_string(),
            }
        );
    }

    #[test]
    fn test_no_dates() {
        let item = parse_payment_line("Support retainer $300.00", MoneyPolicy::UsdOrDollar);

        assert_eq!(item.description, "Support retainer");
        assert_eq!(item.from, "");
        assert_eq!(item.until, "");
        assert_eq!(item.amount, "$300.00");
    }

    #[test]
    fn test_no_amount() {
        let item = parse_payment_line("Setup fee Jan 5, 2024", MoneyPolicy::UsdOrDollar);

        assert_eq!(item.description, "Setup fee");
        assert_eq!(item.from, "Jan 5, 2024");
        assert_eq!(item.until, "");
        assert_eq!(item.amount, "");
    }

    #[test]
    fn test_policy_changes_amount() {
        let line = "Consulting Mar 1, 2024 Mar 31, 2024 $980.00";

        let item = parse_payment_line(line, MoneyPolicy::UsdOnly);
        assert_eq!(item.amount, "");
        assert_eq!(item.description, "Consulting   $980.00");

        let item = parse_payment_line(line, MoneyPolicy::UsdOrDollar);
        assert_eq!(item.amount, "$980.00");
        assert_eq!(item.description, "Consulting");
    }

    #[test]
    fn test_every_amount_removed_from_description() {
        let item = parse_payment_line("Licence USD 10.00 discount $2.00", MoneyPolicy::UsdOrDollar);
        assert_eq!(item.amount, "USD 10.00");
        assert_eq!(item.description, "Licence  discount");
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(parse_payment_line("", MoneyPolicy::UsdOrDollar), PaymentLineItem::default());
    }

    #[test]
    fn test_remove_spans_merges_overlaps() {
        assert_eq!(remove_spans("abcdefgh", &[(1, 4), (2, 6)]), "agh");
    }
}
