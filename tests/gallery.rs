use folio_wasm::gallery::{wrap_index, Action, Effect, Gallery, Key, Phase};

fn gallery(n: usize) -> Gallery {
    Gallery::new((0..n).map(|i| format!("img-{i}.png")).collect()).expect("non-empty")
}

#[test]
fn empty_image_list_has_no_gallery() {
    assert!(Gallery::new(Vec::new()).is_none());
}

#[test]
fn set_current_always_lands_in_range() {
    for n in 1..=7usize {
        let mut g = gallery(n);
        for i in -50i64..50 {
            let idx = g.set_current(i);
            assert!(idx < n, "n={n} i={i} idx={idx}");
            assert_eq!(idx, g.current());
        }
    }
}

#[test]
fn set_current_is_periodic_in_the_image_count() {
    let n = 5usize;
    let mut g = gallery(n);
    for i in -12i64..12 {
        let base = g.set_current(i);
        for k in -4i64..=4 {
            assert_eq!(g.set_current(i + k * n as i64), base, "i={i} k={k}");
        }
    }
}

#[test]
fn extreme_positions_do_not_overflow() {
    let mut g = gallery(3);
    assert_eq!(g.set_current(i64::MIN), wrap_index(i64::MIN, 3));
    assert_eq!(g.set_current(i64::MAX), wrap_index(i64::MAX, 3));
    g.set_current(2);
    assert!(matches!(g.apply(Action::Advance(i64::MAX)), Effect::Show { .. }));
    assert!(g.current() < 3);
    g.apply(Action::Advance(i64::MIN));
    assert!(g.current() < 3);
}

#[test]
fn selecting_a_thumbnail_marks_exactly_that_one() {
    let mut g = gallery(4);
    for idx in [3usize, 0, 2, 1] {
        let effect = g.apply(Action::Select(idx as i64));
        assert_eq!(
            effect,
            Effect::Show {
                index: idx,
                lightbox: false
            }
        );
        assert_eq!(g.current(), idx);
        let active: Vec<usize> = (0..g.len()).filter(|&i| g.is_active(i)).collect();
        assert_eq!(active, vec![idx]);
    }
}

#[test]
fn prev_and_next_wrap_around() {
    let mut g = gallery(3);
    g.apply(Action::Advance(-1));
    assert_eq!(g.current(), 2);
    g.apply(Action::Advance(1));
    assert_eq!(g.current(), 0);
    assert_eq!(g.current_image(), "img-0.png");
}

#[test]
fn open_and_close_are_idempotent() {
    let mut g = gallery(2);
    assert_eq!(g.apply(Action::Close), Effect::None);
    assert_eq!(g.phase(), Phase::Browsing);

    assert_eq!(g.apply(Action::Open), Effect::OpenLightbox { index: 0 });
    assert_eq!(g.apply(Action::Open), Effect::None);
    assert!(g.is_open());

    assert_eq!(g.apply(Action::Close), Effect::CloseLightbox);
    assert_eq!(g.apply(Action::Close), Effect::None);
    assert_eq!(g.phase(), Phase::Browsing);
    assert_eq!(g.current(), 0);
}

#[test]
fn lightbox_opens_on_the_current_image() {
    let mut g = gallery(4);
    g.apply(Action::Select(2));
    assert_eq!(g.apply(Action::Open), Effect::OpenLightbox { index: 2 });
}

#[test]
fn navigation_inside_the_lightbox_updates_the_enlarged_image() {
    let mut g = gallery(3);
    g.apply(Action::Open);
    assert_eq!(
        g.apply(Action::Advance(1)),
        Effect::Show {
            index: 1,
            lightbox: true
        }
    );
    assert!(g.is_open());
}

#[test]
fn escape_closes_the_lightbox() {
    let mut g = gallery(2);
    g.apply(Action::Open);
    assert_eq!(g.apply(Action::Key(Key::Escape)), Effect::CloseLightbox);
    assert!(!g.is_open());
}

#[test]
fn arrow_right_steps_back_and_arrow_left_steps_forward() {
    let mut g = Gallery::new(vec!["a.png".into(), "b.png".into()]).unwrap();
    g.apply(Action::Open);

    // ArrowRight applies -1: (0 - 1 + 2) % 2 == 1
    assert_eq!(
        g.apply(Action::Key(Key::from_name("ArrowRight"))),
        Effect::Show {
            index: 1,
            lightbox: true
        }
    );
    assert_eq!(g.current(), 1);

    let mut g = gallery(3);
    g.apply(Action::Open);
    g.apply(Action::Key(Key::ArrowLeft));
    assert_eq!(g.current(), 1);
    g.apply(Action::Key(Key::ArrowRight));
    g.apply(Action::Key(Key::ArrowRight));
    assert_eq!(g.current(), 2);
}

#[test]
fn keys_are_ignored_while_browsing() {
    let mut g = gallery(3);
    for key in [Key::Escape, Key::ArrowLeft, Key::ArrowRight, Key::Other] {
        assert_eq!(g.apply(Action::Key(key)), Effect::None);
    }
    assert_eq!(g.current(), 0);
    assert_eq!(g.phase(), Phase::Browsing);
}

#[test]
fn unknown_keys_do_nothing_in_the_lightbox() {
    let mut g = gallery(3);
    g.apply(Action::Open);
    assert_eq!(g.apply(Action::Key(Key::from_name("Enter"))), Effect::None);
    assert!(g.is_open());
}
