use super::*;

/// Every character advances 10 px.
fn fixed(_: char) -> f32 {
    10.0
}

#[test]
fn fitting_titles_are_kept() {
    assert_eq!(fit_title("Tab 1", 50.0, "…", fixed), "Tab 1");
    assert_eq!(fit_title("", 0.0, "…", fixed), "");
}

#[test]
fn long_titles_end_in_an_ellipsis_within_the_width() {
    let fitted = fit_title("abcdefghij", 60.0, "…", fixed);
    assert_eq!(fitted, "abcde…");
    assert!(fitted.chars().map(fixed).sum::<f32>() <= 60.0);
}

#[test]
fn trailing_space_is_dropped_before_the_ellipsis() {
    assert_eq!(fit_title("ab cdef", 40.0, "…", fixed), "ab…");
}

#[test]
fn ascii_ellipsis_is_used_when_given() {
    assert_eq!(fit_title("abcdefghij", 60.0, "...", fixed), "abc...");
}

#[test]
fn nothing_is_drawn_when_even_the_ellipsis_does_not_fit() {
    assert_eq!(fit_title("abcdef", 5.0, "…", fixed), "");
    assert_eq!(fit_title("abcdef", 0.0, "…", fixed), "");
}

#[test]
fn proportional_advances_are_respected() {
    let advance = |c: char| if c == 'W' { 20.0 } else { 5.0 };
    assert_eq!(fit_title("WWWiii", 50.0, "…", advance), "WW…");
    assert_eq!(fit_title("iiiiWW", 50.0, "…", advance), "iiiiW…");
}
