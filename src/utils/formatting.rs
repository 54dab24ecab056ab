//! Compact renderings used by one-line summaries.

/// Render values in Python tuple notation: `()`, `(3,)`, `(3, 2)`.
pub fn format_tuple<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: std::fmt::Display,
{
    let parts: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    match parts.len() {
        1 => format!("({},)", parts[0]),
        _ => format!("({})", parts.join(", ")),
    }
}

/// Human-scale byte count with a leading space, e.g. `" 3.81MB"`.
pub fn format_mem(nbytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1_048_576;

    if nbytes >= MIB {
        format!(" {:.2}MB", nbytes as f64 / MIB as f64)
    } else if nbytes >= KIB {
        format!(" {:.1}KB", nbytes as f64 / KIB as f64)
    } else {
        format!(" {}B", nbytes)
    }
}
