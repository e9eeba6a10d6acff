//! Properties that must hold for every option configuration

use assertdiff::{CsvAssert, CsvOptions, JsonAssert, JsonOptions, Order, Table};

fn csv_configurations() -> Vec<CsvOptions> {
    let mut configurations = Vec::new();
    for row_order in [Order::Include, Order::Ignore] {
        for column_order in [Order::Include, Order::Ignore] {
            for has_header in [true, false] {
                configurations.push(
                    CsvOptions::builder()
                        .with_row_order(row_order)
                        .with_column_order(column_order)
                        .with_header(has_header)
                        .build()
                        .unwrap(),
                );
            }
        }
    }
    configurations
}

fn json_configurations() -> Vec<JsonOptions> {
    let mut configurations = Vec::new();
    for array_order in [Order::Include, Order::Ignore] {
        for case_insensitive in [true, false] {
            configurations.push(
                JsonOptions::builder()
                    .with_array_order(array_order)
                    .with_case_insensitive_keys(case_insensitive)
                    .ignore_node("skip")
                    .build()
                    .unwrap(),
            );
        }
    }
    configurations
}

#[test]
fn test_table_reflexivity() {
    let tables = [
        "id;name;price\n1;Apple;1.50\n2;Banana;0.75\n3;Cherry;2.00",
        "a\n1",
        "x;y\n;\n;",
        "a;b\n1;2\n1;2",
    ];
    for options in csv_configurations() {
        let checker = CsvAssert::new(options);
        for table in tables {
            assert!(
                checker.equal(table, table).is_ok(),
                "{:?} should equal itself under {}",
                table,
                checker.options().summary()
            );
        }
    }
}

#[test]
fn test_json_reflexivity() {
    let documents = [
        "",
        "null",
        "42",
        r#""text""#,
        "[]",
        r#"[1,"1",true,null,{"a":[2,1]}]"#,
        r#"{"orders":[{"id":2,"skip":true},{"id":1}],"total":3.5}"#,
        r#"[[3,1],[2]]"#,
    ];
    for options in json_configurations() {
        let checker = JsonAssert::new(options);
        for document in documents {
            assert!(
                checker.equal(document, document).is_ok(),
                "{:?} should equal itself under {}",
                document,
                checker.options().summary()
            );
        }
    }
}

#[test]
fn test_table_round_trip() {
    let sources = [
        ("id;name\n1;Apple\n2;Banana\n", CsvOptions::default()),
        ("a\n1\n\n", CsvOptions::default()),
        ("a;b\n1;2\n;", CsvOptions::default()),
        (
            "1,2,3\r\n4,5,6",
            CsvOptions::builder()
                .with_separator(",")
                .with_header(false)
                .build()
                .unwrap(),
        ),
        (
            "a\tb||1\t2||3\t4",
            CsvOptions::builder()
                .with_separator("\t")
                .with_row_terminator("||")
                .build()
                .unwrap(),
        ),
    ];

    for (text, options) in sources {
        let table = Table::load(text, &options).unwrap();
        let reloaded = Table::load(&table.render(&options), &options).unwrap();
        assert_eq!(table.headers(), reloaded.headers());
        assert_eq!(table.row_count(), reloaded.row_count());
        assert_eq!(table.column_count(), reloaded.column_count());
    }
}
