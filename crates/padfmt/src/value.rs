//! Argument stringification.

/// A value that can be rendered as text for placeholder substitution.
///
/// Text-like values are used verbatim; the numeric implementations go
/// through their canonical decimal form. Implement this for your own
/// types to pass them as template arguments:
///
/// ```
/// use padfmt::{format, ToText};
///
/// struct Celsius(f64);
///
/// impl ToText for Celsius {
///     fn to_text(&self) -> String {
///         format!("{}°C", self.0)
///     }
/// }
///
/// assert_eq!(format("outside: {}", &[&Celsius(21.5)]), "outside: 21.5°C");
/// ```
pub trait ToText {
    /// Returns the text inserted in place of a `{}` placeholder.
    fn to_text(&self) -> String;
}

impl ToText for str {
    fn to_text(&self) -> String {
        self.to_owned()
    }
}

impl ToText for String {
    fn to_text(&self) -> String {
        self.clone()
    }
}

impl ToText for char {
    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl ToText for bool {
    fn to_text(&self) -> String {
        self.to_string()
    }
}

macro_rules! impl_to_text_decimal {
    ($($ty:ty),* $(,)?) => {
        $(impl ToText for $ty {
            fn to_text(&self) -> String {
                self.to_string()
            }
        })*
    };
}

impl_to_text_decimal!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl<T: ToText + ?Sized> ToText for &T {
    fn to_text(&self) -> String {
        (**self).to_text()
    }
}
