use padfmt::{format, format_with, padfmt, Error, Formatter, ToText};

#[test]
fn plain_templates_pass_through() {
    assert_eq!(format("no directives here", &[]), "no directives here");
}

#[test]
fn normal_padding_with_custom_pad() {
    assert_eq!(format_with('*', "a%3b", &[]), "a***b");
}

#[test]
fn smart_padding_grows_but_never_shrinks() {
    assert_eq!(format("%.3Hi.%", &[]), "Hi ");
    assert_eq!(format("%.2Hi.%", &[]), "Hi");
}

#[test]
fn placeholders_and_argument_counts() {
    assert_eq!(format("{} and {}", &[&1, &"two"]), "1 and two");
    // A third argument is ignored; a third placeholder stays literal.
    assert_eq!(format("{} and {}", &[&1, &"two", &3]), "1 and two");
    assert_eq!(format("{}, {}, {}", &[&1, &"two"]), "1, two, {}");
}

#[test]
fn unterminated_section_empties_the_output() {
    assert_eq!(format("before %.5Hi after", &[]), "");
}

#[test]
fn unterminated_section_is_an_error_in_checked_mode() {
    let err = Formatter::try_new("before %.5Hi after", &[]).unwrap_err();
    assert_eq!(err, Error::UnterminatedPadding { offset: 7 });
}

#[test]
fn substitution_feeds_smart_padding() {
    // The section's content is measured after the value lands in it.
    assert_eq!(format("%.4{}.%", &[&"ab"]), "ab  ");
    assert_eq!(format_with('#', "%.4{}.%", &[&"abcdef"]), "abcdef");
}

#[test]
fn macro_covers_both_call_shapes() {
    assert_eq!(padfmt!("{} and {}", 1, "two"), "1 and two");
    assert_eq!(padfmt!('*'; "a%3b"), "a***b");
    assert_eq!(padfmt!('*'; "%.4{}.%", "ab"), "ab**");
}

#[test]
fn formatter_is_single_shot_but_readable_twice() {
    let f = Formatter::with_pad('.', "%.6{}.%", &[&"log"]);
    assert_eq!(f.as_str(), "log...");
    assert_eq!(f.to_string(), "log...");
    assert_eq!(f.into_string(), "log...");
}

struct Celsius(f64);

impl ToText for Celsius {
    fn to_text(&self) -> String {
        std::format!("{}C", self.0)
    }
}

#[test]
fn custom_argument_kinds() {
    assert_eq!(format("outside: {}", &[&Celsius(21.5)]), "outside: 21.5C");
    assert_eq!(padfmt!("outside: {}", Celsius(-4.0)), "outside: -4C");
}
