use folio_wasm::typed::{Tick, TypedConfig, Typewriter};

fn writer(strings: &[&str], looped: bool, smart_backspace: bool) -> Typewriter {
    Typewriter::new(TypedConfig {
        strings: strings.iter().map(|s| s.to_string()).collect(),
        looped,
        smart_backspace,
        ..TypedConfig::default()
    })
    .expect("strings")
}

fn tick(text: &str, next: Option<u32>) -> Tick {
    Tick {
        text: text.to_string(),
        next_in_ms: next,
    }
}

#[test]
fn nothing_to_type() {
    assert!(Typewriter::new(TypedConfig::default()).is_none());
}

#[test]
fn types_holds_and_backspaces_to_the_shared_prefix() {
    let mut w = writer(&["ab", "ac"], true, true);
    assert_eq!(w.tick(), tick("a", Some(40)));
    assert_eq!(w.tick(), tick("ab", Some(1100)));
    assert_eq!(w.tick(), tick("a", Some(40)));
    assert_eq!(w.tick(), tick("ac", Some(1100)));
    // the last string clears completely before looping back
    assert_eq!(w.tick(), tick("a", Some(22)));
    assert_eq!(w.tick(), tick("", Some(40)));
    assert_eq!(w.tick(), tick("a", Some(40)));
    assert_eq!(w.tick(), tick("ab", Some(1100)));
}

#[test]
fn single_looped_string_is_retyped() {
    let mut w = writer(&["ab"], true, true);
    assert_eq!(w.tick(), tick("a", Some(40)));
    assert_eq!(w.tick(), tick("ab", Some(1100)));
    assert_eq!(w.tick(), tick("a", Some(22)));
    assert_eq!(w.tick(), tick("", Some(40)));
    assert_eq!(w.tick(), tick("a", Some(40)));
    assert_eq!(w.tick(), tick("ab", Some(1100)));
}

#[test]
fn plain_backspace_clears_everything() {
    let mut w = writer(&["ab", "cd"], true, false);
    w.tick();
    w.tick();
    assert_eq!(w.tick(), tick("a", Some(22)));
    assert_eq!(w.tick(), tick("", Some(40)));
    assert_eq!(w.tick(), tick("c", Some(40)));
}

#[test]
fn markup_and_entities_appear_whole() {
    let mut w = writer(&["<b>x</b>&amp;"], false, true);
    assert_eq!(w.tick().text, "<b>");
    assert_eq!(w.tick().text, "<b>x");
    assert_eq!(w.tick().text, "<b>x</b>");
    assert_eq!(w.tick(), tick("<b>x</b>&amp;", None));
    assert_eq!(w.tick(), tick("<b>x</b>&amp;", None));
}

#[test]
fn multibyte_text_is_split_on_char_boundaries() {
    let mut w = writer(&["مرحبا"], false, true);
    let last = loop {
        let t = w.tick();
        if t.next_in_ms.is_none() {
            break t.text;
        }
    };
    assert_eq!(last, "مرحبا");
}

#[test]
fn config_from_markup_attribute() {
    let bare = TypedConfig::from_json(r#"["one", "two"]"#).unwrap();
    assert_eq!(bare.strings, vec!["one", "two"]);
    assert!(bare.looped);
    assert_eq!(bare.type_speed_ms, 40);

    let full = TypedConfig::from_json(r#"{"strings": ["x"], "loop": false, "typeSpeedMs": 10}"#)
        .unwrap();
    assert!(!full.looped);
    assert_eq!(full.type_speed_ms, 10);
    assert_eq!(full.back_delay_ms, 1100);

    assert!(TypedConfig::from_json("oops").is_err());
}
