//! Display helpers for dollar amounts.

/// `$1,234,567`: rounded to whole dollars with thousands separators.
pub fn usd_whole(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// `$2.00/kg`
pub fn usd_per_kg(value: f64) -> String {
    format!("${value:.2}/kg")
}
