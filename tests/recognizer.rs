use p_recognizer::{ClassifyResult, Listeners, Recognizer, Stroke};
use std::cell::Cell;
use std::rc::Rc;

fn diagonal() -> Vec<Stroke> {
    vec![vec![(0.0, 0.0), (100.0, 100.0)]]
}

fn letter_n() -> Vec<Stroke> {
    vec![vec![(0.0, 100.0), (0.0, 0.0), (100.0, 100.0), (100.0, 0.0)]]
}

fn letter_x() -> Vec<Stroke> {
    vec![
        vec![(0.0, 0.0), (100.0, 100.0)],
        vec![(100.0, 0.0), (0.0, 100.0)],
    ]
}

fn square() -> Vec<Stroke> {
    vec![vec![
        (0.0, 0.0),
        (100.0, 0.0),
        (100.0, 100.0),
        (0.0, 100.0),
        (0.0, 0.0),
    ]]
}

fn gallery() -> Recognizer {
    let mut recognizer = Recognizer::new();
    recognizer.add_template("line", &diagonal()).unwrap();
    recognizer.add_template("N", &letter_n()).unwrap();
    recognizer.add_template("X", &letter_x()).unwrap();
    recognizer.add_template("square", &square()).unwrap();
    recognizer
}

fn transform(strokes: &[Stroke], scale: f32, dx: f32, dy: f32) -> Vec<Stroke> {
    strokes
        .iter()
        .map(|s| s.iter().map(|&(x, y)| (x * scale + dx, y * scale + dy)).collect())
        .collect()
}

fn assert_same_result(a: &ClassifyResult, b: &ClassifyResult) {
    match (a.matched(), b.matched()) {
        (Some((name_a, score_a)), Some((name_b, score_b))) => {
            assert_eq!(name_a, name_b);
            assert!((score_a - score_b).abs() < 1e-3, "{} vs {}", score_a, score_b);
        }
        _ => assert_eq!(a, b),
    }
}

/// A hand-drawn looking N: uneven sampling and a bit of wobble
fn sloppy_n() -> Vec<Stroke> {
    vec![vec![
        (2.0, 98.0),
        (1.0, 60.0),
        (0.0, 3.0),
        (30.0, 35.0),
        (70.0, 72.0),
        (98.0, 101.0),
        (99.0, 40.0),
        (101.0, 1.0),
    ]]
}

#[test]
fn parallel_line_matches_line() {
    let mut recognizer = Recognizer::new();
    recognizer
        .add_template("line", &[vec![(0.0, 0.0), (100.0, 0.0)]])
        .unwrap();
    let result = recognizer
        .classify(&[vec![(0.0, 10.0), (100.0, 10.0)]])
        .unwrap();
    let (name, score) = result.matched().unwrap();
    assert_eq!(name, "line");
    assert!(score > 0.99, "score {}", score);
}

#[test]
fn straight_stroke_prefers_line_over_zig_zag() {
    let query = vec![vec![(10.0, 20.0), (35.0, 45.0), (60.0, 70.0)]];

    let result = gallery().classify(&query).unwrap();
    let (name, line_score) = result.matched().unwrap();
    assert_eq!(name, "line");

    let mut only_n = Recognizer::new();
    only_n.add_template("N", &letter_n()).unwrap();
    match only_n.classify(&query).unwrap() {
        ClassifyResult::Match { score, .. } => assert!(line_score > score),
        other => assert_eq!(other, ClassifyResult::NoConfidentMatch),
    }
}

#[test]
fn sloppy_gesture_finds_its_template() {
    let result = gallery().classify(&sloppy_n()).unwrap();
    assert_eq!(result.matched().map(|(name, _)| name), Some("N"));
}

#[test]
fn stroke_order_and_direction_do_not_matter() {
    let reversed: Vec<Stroke> = letter_x()
        .into_iter()
        .rev()
        .map(|s| s.into_iter().rev().collect())
        .collect();
    let result = gallery().classify(&reversed).unwrap();
    assert_eq!(result.matched().map(|(name, _)| name), Some("X"));
}

#[test]
fn classification_is_scale_invariant() {
    let recognizer = gallery();
    let base = recognizer.classify(&sloppy_n()).unwrap();
    for factor in [0.01, 0.5, 3.7, 250.0] {
        let scaled = recognizer
            .classify(&transform(&sloppy_n(), factor, 0.0, 0.0))
            .unwrap();
        assert_same_result(&base, &scaled);
    }
}

#[test]
fn classification_is_translation_invariant() {
    let recognizer = gallery();
    let base = recognizer.classify(&sloppy_n()).unwrap();
    for (dx, dy) in [(10.0, 0.0), (-250.0, 40.0), (1000.0, -1000.0)] {
        let moved = recognizer
            .classify(&transform(&sloppy_n(), 1.0, dx, dy))
            .unwrap();
        assert_same_result(&base, &moved);
    }
}

#[test]
fn verbatim_template_scores_one() {
    for strokes in [diagonal(), letter_n(), letter_x(), square()] {
        let mut recognizer = Recognizer::new();
        recognizer.add_template("self", &strokes).unwrap();
        let result = recognizer.classify(&strokes).unwrap();
        let (_, score) = result.matched().unwrap();
        assert!((score - 1.0).abs() < 1e-6, "score {}", score);
    }
}

#[test]
fn empty_gallery_and_short_strokes() {
    let recognizer = Recognizer::new();
    assert_eq!(
        recognizer.classify(&diagonal()),
        Ok(ClassifyResult::NoTemplates)
    );
    assert_eq!(
        gallery().classify(&[vec![(4.0, 4.0)]]),
        Ok(ClassifyResult::InsufficientInput)
    );
}

#[test]
fn classification_can_run_concurrently() {
    let recognizer = gallery();
    let expected = recognizer.classify(&sloppy_n()).unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| recognizer.classify(&sloppy_n()).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn listeners_receive_the_score() {
    let recognizer = gallery();
    let mut listeners = Listeners::new();
    let received = Rc::new(Cell::new(None));
    let sink = received.clone();
    listeners.on("N", move |score| sink.set(Some(score)));
    listeners.on("X", |_| panic!("X should not be notified"));

    let result = recognizer.classify(&sloppy_n()).unwrap();
    assert_eq!(listeners.dispatch(&result), 1);
    assert_eq!(received.get(), result.matched().map(|(_, score)| score));
}
