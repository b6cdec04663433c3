use super::*;

#[test]
fn avatar_initial_uppercases_first_letter() {
    assert_eq!(avatar_initial("ada"), "A");
    assert_eq!(avatar_initial("  bob"), "B");
}

#[test]
fn avatar_initial_handles_multibyte() {
    assert_eq!(avatar_initial("élodie"), "É");
}

#[test]
fn avatar_initial_falls_back_for_blank_names() {
    assert_eq!(avatar_initial(""), "?");
    assert_eq!(avatar_initial("   "), "?");
}
