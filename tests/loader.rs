use std::path::PathBuf;

use terralens::{load_csv, LoadError};

const HEADER: &str = "id,loc_id,geo_lat,geo_lon,emb_x,emb_y,timestamp,cat_a,cat_b,cat_c,num_a,num_b";

fn write_temp_csv(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("terralens-loader-{name}-{}.csv", std::process::id()));
    std::fs::write(&path, body).expect("temp csv must be writable");
    path
}

#[test]
fn rows_are_sorted_ascending_by_timestamp() {
    let body = format!(
        "{HEADER}\n\
         p2,l2,44.1,-103.1,0.2,0.2,2023-06-01,forest,north,tier1,1.0,2.0\n\
         p1,l1,44.0,-103.0,0.1,0.1,2023-01-01,mine,south,tier2,3.0,4.0\n\
         p3,l3,44.2,-103.2,0.3,0.3,2023-09-01,water,east,tier3,5.0,6.0\n"
    );
    let path = write_temp_csv("sort", &body);
    let dataset = load_csv(&path).expect("well-formed csv loads");
    std::fs::remove_file(&path).ok();

    let ids: Vec<&str> = dataset.points().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["p1", "p2", "p3"]);
}

#[test]
fn malformed_numeric_fields_become_nan_sentinels() {
    let body = format!(
        "{HEADER}\n\
         p1,l1,not-a-number,,0.1,0.1,2023-01-01,mine,south,tier2,oops,4.0\n"
    );
    let path = write_temp_csv("nan", &body);
    let dataset = load_csv(&path).expect("malformed numerics must not abort the load");
    std::fs::remove_file(&path).ok();

    assert_eq!(dataset.len(), 1);
    let p = &dataset.points()[0];
    assert!(p.geo_lat.is_nan(), "unparseable latitude becomes NaN");
    assert!(p.geo_lon.is_nan(), "missing longitude becomes NaN");
    assert!(p.num_a.is_nan());
    assert_eq!(p.num_b, 4.0);
}

#[test]
fn rows_without_usable_timestamps_are_dropped() {
    let body = format!(
        "{HEADER}\n\
         p1,l1,44.0,-103.0,0.1,0.1,garbage,mine,south,tier2,3.0,4.0\n\
         p2,l2,44.1,-103.1,0.2,0.2,2023-06-01,forest,north,tier1,1.0,2.0\n"
    );
    let path = write_temp_csv("droprow", &body);
    let dataset = load_csv(&path).expect("one bad row must not fail the load");
    std::fs::remove_file(&path).ok();

    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.points()[0].id, "p2");
}

#[test]
fn header_only_file_yields_an_empty_dataset_not_an_error() {
    let path = write_temp_csv("empty", &format!("{HEADER}\n"));
    let dataset = load_csv(&path).expect("no rows is not an error");
    std::fs::remove_file(&path).ok();
    assert!(dataset.is_empty());
    assert!(dataset.time_span().is_none());
}

#[test]
fn missing_column_is_reported_by_name() {
    let body = "id,loc_id,geo_lat,geo_lon,emb_x,emb_y,cat_a,cat_b,cat_c,num_a,num_b\n";
    let path = write_temp_csv("missingcol", body);
    let err = load_csv(&path).expect_err("a header without `timestamp` must fail");
    std::fs::remove_file(&path).ok();
    match err {
        LoadError::MissingColumn(name) => assert_eq!(name, "timestamp"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn header_columns_may_appear_in_any_order() {
    let body = "timestamp,id,loc_id,geo_lon,geo_lat,emb_y,emb_x,cat_c,cat_b,cat_a,num_b,num_a\n\
                2023-03-01,p1,l1,-103.0,44.0,0.2,0.1,tier1,north,mine,2.0,1.0\n";
    let path = write_temp_csv("reorder", body);
    let dataset = load_csv(&path).expect("column order must not matter");
    std::fs::remove_file(&path).ok();

    let p = &dataset.points()[0];
    assert_eq!(p.geo_lat, 44.0);
    assert_eq!(p.geo_lon, -103.0);
    assert_eq!(p.emb_x, 0.1);
    assert_eq!(p.cat_a, "mine");
    assert_eq!(p.num_a, 1.0);
}
