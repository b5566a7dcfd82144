use sales_prep::{loader, pipeline, storage};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_fixtures(dir: &Path) {
    let mut train = String::from("id,date,store_nbr,family,sales,onpromotion\n");
    let mut id = 0;
    for day in 1..=10 {
        for (store, family) in [(1, "AUTOMOTIVE"), (1, "BEVERAGES"), (2, "AUTOMOTIVE")] {
            train.push_str(&format!(
                "{id},2017-07-{day:02},{store},{family},{}.0,0\n",
                day * store
            ));
            id += 1;
        }
    }
    fs::write(dir.join(loader::TRAIN_FILE), train).unwrap();

    fs::write(
        dir.join(loader::TEST_FILE),
        "id,date,store_nbr,family,onpromotion\n\
         100,2017-07-11,1,AUTOMOTIVE,2\n\
         101,2017-07-11,2,BOOKS,0\n",
    )
    .unwrap();

    fs::write(
        dir.join(loader::STORES_FILE),
        "store_nbr,city,state,type,cluster\n\
         1,Quito,Pichincha,D,13\n\
         2,Guayaquil,Guayas,A,1\n",
    )
    .unwrap();

    fs::write(
        dir.join(loader::HOLIDAYS_FILE),
        "date,type,locale,locale_name,description,transferred,notes\n\
         2017-07-03,Holiday,National,Ecuador,Fiesta,False,x\n\
         2017-07-03,Additional,National,Ecuador,Fiesta-1,False,y\n\
         2017-07-04,Holiday,Local,Quito,Fundacion,True,z\n",
    )
    .unwrap();

    fs::write(
        dir.join(loader::OIL_FILE),
        "date,dcoilwtico\n\
         2017-07-01,\n\
         2017-07-02,45.5\n\
         2017-07-03,\n\
         2017-07-04,46.0\n",
    )
    .unwrap();

    fs::write(
        dir.join(loader::TRANSACTIONS_FILE),
        "date,store_nbr,transactions\n\
         2017-07-01,1,1000\n\
         2017-07-01,1,50\n\
         2017-07-01,2,800\n",
    )
    .unwrap();
}

#[test]
fn pipeline_smoke() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    let raw = loader::load_all_tables_from_folder(dir.path()).unwrap();
    let holiday_cols: Vec<String> = raw.holidays.get_column_names().iter().map(|n| n.to_string()).collect();
    assert_eq!(
        holiday_cols,
        vec!["date", "type", "locale", "locale_name", "description", "transferred"]
    );

    let pipeline::Prepared { mut train, mut test } = pipeline::prepare(&raw).unwrap();

    assert_eq!(train.height(), 30);
    assert_eq!(test.height(), 2);
    assert_eq!(train.get_column_names(), test.get_column_names());
    assert!(train.column("family_BEVERAGES").is_ok());
    assert!(test.column("family_BOOKS").is_err());
    assert!(train.column("city_Quito").is_ok());
    assert_eq!(train.column("dcoilwtico").unwrap().f64().unwrap().get(0), Some(45.5));
    assert_eq!(train.column("transactions").unwrap().i64().unwrap().get(0), Some(1050));

    let holidays: Vec<Option<i32>> = train
        .column("is_holiday")
        .unwrap()
        .i32()
        .unwrap()
        .into_iter()
        .take(4)
        .collect();
    assert_eq!(holidays, vec![None, None, Some(1), Some(0)]);

    let out = dir.path().join("out");
    let (train_path, test_path) = storage::write_prepared(&out, &mut train, &mut test).unwrap();
    let read = storage::read_parquet(&train_path).unwrap();
    assert_eq!(read.shape(), train.shape());
    assert_eq!(storage::read_parquet(&test_path).unwrap().height(), 2);
}

#[test]
fn missing_input_is_fatal() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());
    fs::remove_file(dir.path().join(loader::OIL_FILE)).unwrap();
    let err = loader::load_all_tables_from_folder(dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains(loader::OIL_FILE));
}
