use std::fs;
use std::path::PathBuf;

use densglobe_grid::{
    BaseSpec, CompareOp, DatasetOrigin, DerivedSpec, GridError, HueRange, ValueRange, load_all,
};

const MEN: &str = "\
ncols 2
nrows 2
xllcorner 0
yllcorner 0
cellsize 1
NODATA_value -9999
1 2
3 4
";

const WOMEN: &str = "\
ncols 2
nrows 2
xllcorner 0
yllcorner 0
cellsize 1
NODATA_value -9999
4 3
2 1
";

fn bases() -> Vec<BaseSpec> {
    vec![
        BaseSpec {
            name: "men".into(),
            hue_range: HueRange::new(0.7, 0.3),
            path: PathBuf::from("male.asc"),
        },
        BaseSpec {
            name: "women".into(),
            hue_range: HueRange::new(0.9, 1.1),
            path: PathBuf::from("female.asc"),
        },
    ]
}

fn derived() -> Vec<DerivedSpec> {
    vec![
        DerivedSpec {
            name: ">50% men".into(),
            hue_range: HueRange::new(0.6, 1.1),
            base: "men".into(),
            other: "women".into(),
            op: CompareOp::Excess,
        },
        DerivedSpec {
            name: ">50% women".into(),
            hue_range: HueRange::new(0.0, 0.4),
            base: "women".into(),
            other: "men".into(),
            op: CompareOp::Excess,
        },
    ]
}

#[test]
fn loads_bases_and_derives_excess_sets() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("male.asc"), MEN).unwrap();
    fs::write(dir.path().join("female.asc"), WOMEN).unwrap();

    let all = load_all(&bases(), &derived(), dir.path()).unwrap();
    let names: Vec<&str> = all.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["men", "women", ">50% men", ">50% women"]);

    let excess_men = &all[2].dataset;
    assert_eq!(excess_men.row(0), &[Some(0.0), Some(0.0)]);
    assert_eq!(excess_men.row(1), &[Some(1.0), Some(3.0)]);
    assert_eq!(excess_men.range(), Some(ValueRange { min: 0.0, max: 3.0 }));
    assert!(matches!(all[3].origin, DatasetOrigin::Derived { .. }));
    assert!(matches!(all[0].origin, DatasetOrigin::Loaded { .. }));
}

#[test]
fn one_failed_base_aborts_everything() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("male.asc"), MEN).unwrap();

    let err = load_all(&bases(), &derived(), dir.path()).unwrap_err();
    assert!(matches!(err.root(), GridError::Io { .. }));
}

#[test]
fn mismatched_base_shapes_fail_before_diffing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("male.asc"), MEN).unwrap();
    fs::write(dir.path().join("female.asc"), "NODATA_value -9999\n1 2 3\n").unwrap();

    let err = load_all(&bases(), &derived(), dir.path()).unwrap_err();
    assert!(matches!(err.root(), GridError::Incompatible { .. }));
}

#[test]
fn unknown_derived_reference_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("male.asc"), MEN).unwrap();
    fs::write(dir.path().join("female.asc"), WOMEN).unwrap();
    let mut d = derived();
    d[0].other = "children".into();

    let err = load_all(&bases(), &d, dir.path()).unwrap_err();
    match err.root() {
        GridError::UnknownDataset { name } => assert_eq!(name, "children"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("male.asc"), "NODATA_value -9999\n").unwrap();
    fs::write(dir.path().join("female.asc"), WOMEN).unwrap();

    let err = load_all(&bases(), &[], dir.path()).unwrap_err();
    assert!(matches!(err.root(), GridError::Empty));
}
