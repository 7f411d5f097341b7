use column_collect::{
    can_parse_logical, collect_logical, ColumnBuffer, ColumnWriter, Error, InferOptions,
    LogicalCollector, Token, TriState, TypeGuesser,
};
use std::thread;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Splits one line of comma-separated fields into cell tokens.
fn tokenize(line: &str) -> Vec<Token<'_>> {
    line.split(',')
        .map(|field| match field {
            "" => Token::Empty,
            "NA" => Token::Missing,
            text => Token::from(text),
        })
        .collect()
}

#[test]
fn test_end_to_end_column() {
    let tokens = [
        Token::from("T"),
        Token::from("FALSE"),
        Token::Missing,
        Token::from("TRUE"),
        Token::from("x"),
    ];

    let column = collect_logical(tokens, 5).unwrap();
    assert_eq!(
        column,
        vec![
            TriState::True,
            TriState::False,
            TriState::Missing,
            TriState::True,
            TriState::False
        ]
    );
}

#[test]
fn test_probe_examples() {
    assert!(can_parse_logical("TRUE"));
    assert!(!can_parse_logical("true"));
    assert!(!can_parse_logical("1"));
}

#[test]
fn test_probe_then_commit() {
    init_tracing();
    let source = "T,F,,NA,TRUE,FALSE";
    let samples: Vec<&str> = source.split(',').collect();

    let guesser = TypeGuesser::new(InferOptions::new())
        .with_collector::<LogicalCollector>()
        .with_probe("character", |_| true);
    let column_type = guesser.commit(&samples).unwrap();
    assert_eq!(column_type, "logical");

    let tokens = tokenize(source);
    let column = collect_logical(tokens.iter().copied(), tokens.len()).unwrap();
    assert_eq!(
        column,
        vec![
            TriState::True,
            TriState::False,
            TriState::Missing,
            TriState::Missing,
            TriState::True,
            TriState::False
        ]
    );
}

#[test]
fn test_multiple_columns() {
    let lines = ["T,FALSE", "TRUE,", "F,T"];
    let rows = lines.len();
    let mut first = ColumnBuffer::with_rows(rows);
    let mut second = ColumnBuffer::with_rows(rows);

    {
        let mut writers = [
            ColumnWriter::<LogicalCollector, _>::new(&mut first, 0),
            ColumnWriter::<LogicalCollector, _>::new(&mut second, 1),
        ];
        for (row, line) in lines.iter().enumerate() {
            for (writer, token) in writers.iter_mut().zip(tokenize(line)) {
                writer.set_value(row, &token).unwrap();
            }
        }
    }

    assert_eq!(
        first.finish().unwrap(),
        vec![TriState::True, TriState::True, TriState::False]
    );
    assert_eq!(
        second.finish().unwrap(),
        vec![TriState::False, TriState::Missing, TriState::True]
    );
}

#[test]
fn test_end_of_input_aborts_column() {
    init_tracing();
    let mut column = ColumnBuffer::with_rows(3);
    let mut writer = ColumnWriter::<LogicalCollector, _>::new(&mut column, 2);

    let err = writer
        .fill(0, [Token::from("T"), Token::EndOfInput, Token::from("T")])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parse error at row 1, column 2: unexpected end of input, expected a logical value"
    );
    assert!(err.is_desync());

    assert_eq!(column.get(1), None);
    assert!(matches!(
        column.finish(),
        Err(Error::IncompleteColumn {
            first_unwritten: 1,
            ..
        })
    ));
}

#[test]
fn test_parallel_fill_disjoint_rows() {
    let source: Vec<String> = (0..1000)
        .map(|i| match i % 4 {
            0 => "T".to_string(),
            1 => "FALSE".to_string(),
            2 => String::new(),
            _ => "TRUE".to_string(),
        })
        .collect();

    let mut column = ColumnBuffer::with_rows(source.len());
    thread::scope(|scope| {
        for slice in column.partition(128) {
            let source = &source;
            scope.spawn(move || {
                let start = slice.offset();
                let end = start + slice.len();
                let tokens = source[start..end].iter().map(|text| {
                    if text.is_empty() {
                        Token::Empty
                    } else {
                        Token::from(text.as_str())
                    }
                });
                let mut writer = ColumnWriter::<LogicalCollector, _>::new(slice, 0);
                writer.fill(start, tokens).unwrap();
            });
        }
    });

    let values = column.finish().unwrap();
    assert_eq!(values.len(), 1000);
    for (i, value) in values.iter().enumerate() {
        let expected = match i % 4 {
            0 | 3 => TriState::True,
            1 => TriState::False,
            _ => TriState::Missing,
        };
        assert_eq!(*value, expected, "row {}", i);
    }
}

#[test]
fn test_column_serializes_to_json() {
    let column = collect_logical(tokenize("T,,x"), 3).unwrap();
    let json = serde_json::to_string(&column).unwrap();
    assert_eq!(json, "[true,null,false]");
}
