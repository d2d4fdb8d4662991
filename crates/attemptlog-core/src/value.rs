//! String forms of logged values
//!
//! Summary lines carry the "string form" of a result or fallback. `LogValue`
//! defines that form: `()` and `None` render as empty text, sequences render
//! as `[a, b]`, sensitive values render redacted, and anything with a
//! `Display` impl can opt in through [`impl_log_value_via_display!`].

use attemptlog_core_types::{Sensitive, REDACTED};

/// Text form of a value as it appears in a log line
pub trait LogValue {
    fn log_text(&self) -> String;
}

/// Implement [`LogValue`] for one or more types using their `Display` impl
///
/// ```
/// use attemptlog_core::{impl_log_value_via_display, LogValue};
///
/// struct UserId(u32);
///
/// impl std::fmt::Display for UserId {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "user-{}", self.0)
///     }
/// }
///
/// impl_log_value_via_display!(UserId);
///
/// assert_eq!(UserId(7).log_text(), "user-7");
/// ```
#[macro_export]
macro_rules! impl_log_value_via_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::value::LogValue for $ty {
                fn log_text(&self) -> ::std::string::String {
                    ::std::string::ToString::to_string(self)
                }
            }
        )+
    };
}

crate::impl_log_value_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl LogValue for () {
    fn log_text(&self) -> String {
        String::new()
    }
}

impl<T: LogValue + ?Sized> LogValue for &T {
    fn log_text(&self) -> String {
        (**self).log_text()
    }
}

impl<T: LogValue + ?Sized> LogValue for Box<T> {
    fn log_text(&self) -> String {
        (**self).log_text()
    }
}

impl<T: LogValue> LogValue for Option<T> {
    fn log_text(&self) -> String {
        self.as_ref().map(LogValue::log_text).unwrap_or_default()
    }
}

impl<T: LogValue> LogValue for [T] {
    fn log_text(&self) -> String {
        let items: Vec<String> = self.iter().map(LogValue::log_text).collect();
        format!("[{}]", items.join(", "))
    }
}

impl<T: LogValue> LogValue for Vec<T> {
    fn log_text(&self) -> String {
        self.as_slice().log_text()
    }
}

impl<T> LogValue for Sensitive<T> {
    fn log_text(&self) -> String {
        REDACTED.to_string()
    }
}

/// Keep at most `limit` characters of `text`
///
/// Cuts on character boundaries, so multi-byte text never splits mid-char.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
