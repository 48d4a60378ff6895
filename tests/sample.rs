use polars::prelude::*;

use cartree::prelude::*;
use cartree::prelude::Label;


#[test]
fn from_csv() {
    let mut path = std::env::current_dir().unwrap();
    path.push("tests/dataset/toy.csv");

    let sample = SampleReader::default()
        .file(path)
        .has_header(true)
        .target_feature("class")
        .read()
        .unwrap();

    assert_eq!(sample.shape(), (7, 3));
    assert_eq!(sample.feature_names(), &["x", "y", "color"]);

    let (x, y) = sample.at(1).unwrap();
    assert_eq!(x, &[Value::from(14.0), Value::from(8.0), Value::from("blue")]);
    assert_eq!(y, &Label::from(1));


    let mut tree = DecisionTree::default();
    tree.fit_sample(&sample).unwrap();
    let predictions = tree.predict_all(sample.rows()).unwrap();
    assert_eq!(predictions, sample.target());
}


#[test]
fn reader_needs_a_file_and_a_target() {
    let err = SampleReader::<&str, &str>::new()
        .target_feature("class")
        .read()
        .unwrap_err();
    assert!(matches!(err, CartError::MissingParameter("file")), "{err:?}");

    let err = SampleReader::<&str, &str>::new()
        .file("tests/dataset/toy.csv")
        .read()
        .unwrap_err();
    assert!(
        matches!(err, CartError::MissingParameter("target_feature")),
        "{err:?}"
    );
}


#[test]
fn from_dataframe() {
    let s1 = Series::new("x", &[10.0, 14.0, 15.0, 5.0, 3.0,  8.0, 12.0]);
    let s2 = Series::new("y", &[ 5_i32, 8, 3, 1, 9, 13, 11]);
    let s3 = Series::new("shade", &["a", "b", "a", "c", "b", "a", "c"]);
    let df = DataFrame::new(vec![s1, s2, s3]).unwrap();
    let target = Series::new("class", &["pos", "pos", "pos", "neg", "neg", "neg", "neg"]);

    let sample = Sample::from_dataframe(df, target).unwrap();
    assert_eq!(sample.shape(), (7, 3));
    assert_eq!(sample.feature_names(), &["x", "y", "shade"]);
    assert_eq!(
        sample.rows()[3],
        vec![Value::from(5.0), Value::from(1), Value::from("c")],
    );
    assert_eq!(sample.target()[3], Label::from("neg"));


    let mut tree = DecisionTree::default();
    tree.fit_sample(&sample).unwrap();
    assert_eq!(tree.predict_all(sample.rows()).unwrap(), sample.target());
}


#[test]
fn from_dataframe_rejects_unsupported_values() {
    let flags = Series::new("flag", &[true, false]);
    let df = DataFrame::new(vec![flags]).unwrap();
    let target = Series::new("class", &[0_i64, 1]);
    let err = Sample::from_dataframe(df, target).unwrap_err();
    assert!(matches!(err, CartError::UnsupportedValueType(_)), "{err:?}");


    let missing = Series::new("x", &[Some(1.0), None]);
    let df = DataFrame::new(vec![missing]).unwrap();
    let target = Series::new("class", &[0_i64, 1]);
    let err = Sample::from_dataframe(df, target).unwrap_err();
    assert!(matches!(err, CartError::UnsupportedValueType(_)), "{err:?}");


    let x = Series::new("x", &[1.0, 2.0]);
    let df = DataFrame::new(vec![x]).unwrap();
    let target = Series::new("class", &[0.0, 1.0]);
    let err = Sample::from_dataframe(df, target).unwrap_err();
    assert!(matches!(err, CartError::UnsupportedValueType(_)), "{err:?}");
}


#[test]
fn from_json() {
    let json = r#"{
        "data": [[1, "a", 2.5], [0, "b", 0.5], [1, "b", 1.5]],
        "target": ["yes", "no", "no"],
        "feature_names": ["n", "letter", "size"]
    }"#;

    let sample = Sample::from_json(json.as_bytes()).unwrap();
    assert_eq!(sample.shape(), (3, 3));
    assert_eq!(sample.feature_names(), &["n", "letter", "size"]);
    assert_eq!(
        sample.rows()[0],
        vec![Value::from(1), Value::from("a"), Value::from(2.5)],
    );

    let mut tree = DecisionTree::default();
    tree.fit_sample(&sample).unwrap();
    assert_eq!(tree.predict_all(sample.rows()).unwrap(), sample.target());

    let predictions = tree.predict_all(sample.rows()).unwrap();
    let text = serde_json::to_string(&predictions).unwrap();
    assert_eq!(text, r#"["yes","no","no"]"#);
}


#[test]
fn from_json_rejects_invalid_documents() {
    let json = r#"{"data": [[1, null]], "target": [0]}"#;
    let err = Sample::from_json(json.as_bytes()).unwrap_err();
    assert!(matches!(err, CartError::UnsupportedValueType(_)), "{err:?}");

    let json = r#"{"data": [[1]], "target": [0.5]}"#;
    let err = Sample::from_json(json.as_bytes()).unwrap_err();
    assert!(matches!(err, CartError::UnsupportedValueType(_)), "{err:?}");

    let json = r#"{"data": [[1]]}"#;
    let err = Sample::from_json(json.as_bytes()).unwrap_err();
    assert!(matches!(err, CartError::Json(_)), "{err:?}");

    let json = r#"{"data": [[1], [2, 3]], "target": [0, 1]}"#;
    let err = Sample::from_json(json.as_bytes()).unwrap_err();
    assert!(
        matches!(err, CartError::FeatureCountMismatch { row: 1, .. }),
        "{err:?}"
    );
}


#[test]
fn new_checks_the_shape() {
    let rows = vec![vec![Value::from(1)], vec![Value::from(2)]];
    let err = Sample::new(rows.clone(), vec![Label::from(0)]).unwrap_err();
    assert!(matches!(err, CartError::DimensionMismatch { .. }), "{err:?}");

    let sample = Sample::new(rows, vec![Label::from(0), Label::from(1)])
        .unwrap();
    assert_eq!(sample.feature_names(), &["Feat. [1]"]);

    let err = sample.with_feature_names(vec!["a", "b"]).unwrap_err();
    assert!(matches!(err, CartError::FeatureCountMismatch { .. }), "{err:?}");
}
