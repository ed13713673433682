use crate::domain::{Denomination, Item};

/// Amounts first, largest to smallest (ties keep list order), then labels in
/// list order.
pub fn sort_for_display(items: &[Item]) -> Vec<&Item> {
    let (mut amounts, labels): (Vec<&Item>, Vec<&Item>) = items
        .iter()
        .partition(|item| matches!(item.value, Denomination::Amount(_)));

    amounts.sort_by_key(|item| match item.value {
        Denomination::Amount(value) => std::cmp::Reverse(value),
        Denomination::Label(_) => std::cmp::Reverse(i64::MIN),
    });

    amounts.extend(labels);
    amounts
}

pub fn format_display(value: &Denomination) -> String {
    match value {
        Denomination::Amount(amount) => format!("${}", amount),
        Denomination::Label(label) => label.as_str().to_string(),
    }
}
