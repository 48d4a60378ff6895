use serde_json::json;

use cartree::decision_tree::{
    examples,
    partition,
    find_best_split,
    generate_candidate_questions,
    unique_candidate_questions,
};
use cartree::prelude::*;


fn int_rows(rows: &[&[i64]]) -> Vec<Vec<Value>> {
    rows.iter()
        .map(|row| row.iter().copied().map(Value::from).collect())
        .collect()
}


fn int_labels(labels: &[i64]) -> Vec<Label> {
    labels.iter().copied().map(Label::from).collect()
}


#[test]
fn question_kind_follows_the_value() {
    let q = Question::new(2, &Value::from(3));
    assert_eq!(q, Question::Discrete { column: 2, value: Label::Int(3) });

    let q = Question::new(0, &Value::from("red"));
    assert_eq!(q, Question::Discrete { column: 0, value: Label::from("red") });

    let q = Question::new(1, &Value::from(2.5));
    assert_eq!(q, Question::Continuous { column: 1, threshold: 2.5 });
    assert_eq!(q.column(), 1);
}


#[test]
fn question_from_json() {
    let q = Question::try_new(0, &json!(1.5)).unwrap();
    assert_eq!(q, Question::Continuous { column: 0, threshold: 1.5 });

    let q = Question::try_new(0, &json!(4)).unwrap();
    assert_eq!(q, Question::Discrete { column: 0, value: Label::Int(4) });

    for value in [json!(null), json!(true), json!([1]), json!({"a": 1})] {
        let err = Question::try_new(0, &value).unwrap_err();
        assert!(
            matches!(err, CartError::UnsupportedValueType(_)),
            "{value} gave {err:?}"
        );
    }
}


#[test]
fn check_answer() {
    let lt = Question::Continuous { column: 0, threshold: 2.0 };
    assert!(lt.check_answer(&Value::from(1.5)));
    assert!(!lt.check_answer(&Value::from(2.0)));
    assert!(lt.check_answer(&Value::from(1)));
    assert!(!lt.check_answer(&Value::from(3)));
    assert!(!lt.check_answer(&Value::from("1.0")));

    let eq = Question::Discrete { column: 0, value: Label::Int(2) };
    assert!(eq.check_answer(&Value::from(2)));
    assert!(eq.check_answer(&Value::from(2.0)));
    assert!(!eq.check_answer(&Value::from(3)));
    assert!(!eq.check_answer(&Value::from("2")));

    let token = Question::Discrete { column: 1, value: Label::from("a") };
    assert!(token.check_answer(&Value::from("a")));
    assert!(!token.check_answer(&Value::from("b")));
    assert!(!token.check_answer(&Value::from(0)));

    // A row is checked at the question's column.
    assert!(token.check_row(&[Value::from(0), Value::from("a")]));
    assert!(!token.check_row(&[Value::from("a")]));
}


#[test]
fn questions_display_like_predicates() {
    let lt = Question::Continuous { column: 3, threshold: 1.0 };
    assert_eq!(lt.to_string(), "f3 < 1.0");

    let eq = Question::Discrete { column: 0, value: Label::from("x") };
    assert_eq!(eq.to_string(), "f0 = x");
}


#[test]
fn one_candidate_per_cell() {
    let rows = int_rows(&[&[1, 1], &[0, 1], &[0, 0]]);

    let questions = generate_candidate_questions(&rows);
    assert_eq!(questions.len(), 6);
    assert_eq!(questions[0], Question::new(0, &Value::from(1)));
    assert_eq!(questions[3], Question::new(1, &Value::from(1)));

    let unique = unique_candidate_questions(&rows);
    let expected = vec![
        Question::new(0, &Value::from(1)),
        Question::new(1, &Value::from(1)),
        Question::new(0, &Value::from(0)),
        Question::new(1, &Value::from(0)),
    ];
    assert_eq!(unique, expected);

    let no_rows: Vec<Vec<Value>> = Vec::new();
    assert!(generate_candidate_questions(&no_rows).is_empty());
}


#[test]
fn partition_keeps_the_order() {
    let rows = int_rows(&[&[0, 5], &[1, 6], &[0, 7], &[1, 8], &[0, 9]]);
    let ys = int_labels(&[10, 11, 12, 13, 14]);
    let all = examples(&rows, &ys).unwrap();

    let question = Question::new(0, &Value::from(0));
    let (yes, no) = partition(&question, &all);

    let yes = yes.into_iter().map(|(_, y)| y.clone()).collect::<Vec<_>>();
    let no = no.into_iter().map(|(_, y)| y.clone()).collect::<Vec<_>>();
    assert_eq!(yes, int_labels(&[10, 12, 14]));
    assert_eq!(no, int_labels(&[11, 13]));

    let err = examples(&rows, &ys[..2]).unwrap_err();
    assert!(matches!(err, CartError::DimensionMismatch { .. }), "{err:?}");
}


#[test]
fn best_split_keeps_the_first_maximum() {
    let rows = int_rows(&[&[1, 1], &[0, 1], &[0, 0], &[1, 0]]);
    let ys = int_labels(&[1, 0, 0, 0]);
    let all = examples(&rows, &ys).unwrap();

    let best = find_best_split(&all, false).unwrap();
    assert_eq!(best.question, Question::new(0, &Value::from(1)));
    assert_eq!(best.yes.len(), 2);
    assert_eq!(best.no.len(), 2);
    // 0.375 - (0.5 * 0.5 + 0.5 * 0.0)
    assert!((best.gain - 0.125).abs() < 1e-12, "gain = {}", best.gain);

    let dedup = find_best_split(&all, true).unwrap();
    assert_eq!(dedup.question, best.question);
    assert_eq!(dedup.gain, best.gain);
}


#[test]
fn best_split_of_pure_labels_has_no_gain() {
    let rows = int_rows(&[&[1, 2], &[3, 4]]);
    let ys = int_labels(&[6, 6]);
    let all = examples(&rows, &ys).unwrap();

    let best = find_best_split(&all, false).unwrap();
    assert_eq!(best.gain, 0.0);
}


#[test]
fn best_split_needs_examples_and_features() {
    let err = find_best_split(&[], false).unwrap_err();
    assert!(matches!(err, CartError::EmptyInput(_)), "{err:?}");

    let rows = int_rows(&[&[], &[]]);
    let ys = int_labels(&[0, 1]);
    let all = examples(&rows, &ys).unwrap();
    let err = find_best_split(&all, false).unwrap_err();
    assert!(matches!(err, CartError::EmptyInput(_)), "{err:?}");
}
