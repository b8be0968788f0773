use engagement_layout::wrap::*;

#[test]
fn wraps_joint_press_conference() {
    assert_eq!(
        wrap_words("Joint Press Conference With ROK", 15),
        vec!["Joint Press", "Conference With", "ROK"]
    );
    assert_eq!(
        wrap_text("Joint Press Conference With ROK", 15),
        "Joint Press\nConference With\nROK"
    );
}

#[test]
fn long_word_keeps_its_own_line() {
    assert_eq!(
        wrap_words("Visit Camp Humphreys-Pyeongtaek today", 10),
        vec!["Visit Camp", "Humphreys-Pyeongtaek", "today"]
    );
}

#[test]
fn collapses_whitespace() {
    assert_eq!(wrap_words("  a\t b \n c  ", 80), vec!["a b c"]);
    assert!(wrap_words("   ", 10).is_empty());
}

#[test]
fn counts_characters_not_bytes() {
    assert_eq!(wrap_words("한국 방문 행사", 5), vec!["한국 방문", "행사"]);
}
