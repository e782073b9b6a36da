//! Month naming for the vertical axis.

/// Full English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name of a zero-indexed month (0 = January). `None` past December.
pub fn month_name(index: usize) -> Option<&'static str> {
    MONTH_NAMES.get(index).copied()
}
