/// Format a rupee amount the way the en-IN locale does, without decimals:
/// `₹25,00,000`, `-₹5,00,000`.
pub fn format_inr(value: f64) -> String {
    if !value.is_finite() {
        return "₹—".to_string();
    }
    let rounded = value.round();
    let grouped = format_indian_number(rounded.abs());
    if rounded < 0.0 {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Whole number with Indian digit grouping: the last three digits, then groups of two.
pub fn format_indian_number(value: f64) -> String {
    let digits = format!("{:.0}", value.abs().round());
    let sign = if value.round() < 0.0 { "-" } else { "" };

    if digits.len() <= 3 {
        return format!("{}{}", sign, digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{}{},{}", sign, groups.join(","), tail)
}
