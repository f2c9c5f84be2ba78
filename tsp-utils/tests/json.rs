use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Write;
use tsp_utils::*;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Sample {
    zeta: usize,
    alpha: Vec<usize>,
    mid: Option<f64>,
}

#[test]
fn test_jsonify_sorts_keys() {
    let value = json!({"b": 1, "a": {"d": 2, "c": [{"z": 0, "y": 1}]}});
    assert_eq!(
        jsonify(&value).unwrap(),
        r#"{"a":{"c":[{"y":1,"z":0}],"d":2},"b":1}"#
    );
}

#[test]
fn test_jsonify_struct_is_stable() {
    let sample = Sample {
        zeta: 3,
        alpha: vec![0, 2, 1],
        mid: None,
    };
    assert_eq!(
        jsonify(&sample).unwrap(),
        r#"{"alpha":[0,2,1],"mid":null,"zeta":3}"#
    );
}

#[test]
fn test_compress_obj() {
    let sample = Sample {
        zeta: 7,
        alpha: (0..64).collect(),
        mid: Some(1.5),
    };
    let compressed = compress_obj(&sample).unwrap();
    let restored: Sample = decompress_obj(&compressed).unwrap();
    assert_eq!(restored, sample);
}

#[test]
fn test_read_json_arg_passes_literal_through() {
    assert_eq!(read_json_arg("[[0,1],[1,0]]").unwrap(), "[[0,1],[1,0]]");
    let rows: Vec<Vec<u32>> = load_json_arg("[[0,1],[1,0]]").unwrap();
    assert_eq!(rows, vec![vec![0, 1], vec![1, 0]]);
}

#[test]
fn test_load_json_arg_reads_file() {
    let path = std::env::temp_dir().join(format!("tsp-utils-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"{\"zeta\":1,\"alpha\":[],\"mid\":2.0}").unwrap();
    drop(file);

    let sample: Sample = load_json_arg(path.to_str().unwrap()).unwrap();
    assert_eq!(
        sample,
        Sample {
            zeta: 1,
            alpha: vec![],
            mid: Some(2.0)
        }
    );
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_json_arg_missing_file() {
    let missing = load_json_arg::<Sample>("/definitely/not/here.json");
    assert!(missing.is_err());
}

#[test]
fn test_load_json_arg_invalid_json() {
    assert!(load_json_arg::<Sample>("{not json").is_err());
}
