//! Parser tests: the embedded spec parses totally, and malformed or
//! non-contiguous input fails loudly instead of dropping rows.

use hpackgen::{parse_table, ParseError, Row, STATIC_TABLE_LEN, STATIC_TABLE_SPEC};

/// The canonical input yields exactly 61 rows, indices 1..=61, no gaps.
#[test]
fn parse_builtin_yields_61_contiguous_rows() {
    let rows = parse_table(STATIC_TABLE_SPEC).unwrap();
    assert_eq!(rows.len(), STATIC_TABLE_LEN);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.index as usize, i + 1);
        assert!(!row.name.is_empty());
    }

    assert_eq!(
        rows[0],
        Row {
            index: 1,
            name: ":authority".to_string(),
            value: String::new(),
        }
    );
    assert_eq!(rows[1].name, ":method");
    assert_eq!(rows[1].value, "GET");
    assert_eq!(rows[15].name, "accept-encoding");
    assert_eq!(rows[15].value, "gzip, deflate");
    assert_eq!(rows[60].name, "www-authenticate");
    assert_eq!(rows[60].value, "");
}

/// A missing third column and a bare trailing delimiter both mean "no value".
#[test]
fn parser_value_defaults_to_empty() {
    let rows = parse_table("1\t:authority").unwrap();
    assert_eq!(rows[0].value, "");

    let rows = parse_table("1\t:authority\t").unwrap();
    assert_eq!(rows[0].value, "");
}

/// Trailing whitespace is stripped; blank lines are skipped.
#[test]
fn parser_tolerates_blank_lines_and_trailing_whitespace() {
    let rows = parse_table("\n1\t:method\tGET   \n\n2\t:path\t/\n").unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].value, "GET");
    assert_eq!(rows[1].value, "/");
}

/// A line that does not match the row shape fails the whole parse.
#[test]
fn parser_malformed_row_is_fatal() {
    let err = parse_table("1\t:authority\t\nnot a row\n").unwrap_err();
    match err {
        ParseError::MalformedRow { line, text } => {
            assert_eq!(line, 2);
            assert_eq!(text, "not a row");
        }
        other => panic!("expected MalformedRow, got: {other}"),
    }

    // Non-numeric index.
    assert!(parse_table("x\t:authority").is_err());
    // Empty name.
    assert!(parse_table("1\t\tGET").is_err());
    // A fourth field means a delimiter inside the value.
    assert!(parse_table("1\tname\tval\tmore").is_err());
}

/// Index gaps and duplicates break the contiguous 1,2,3,... sequence.
#[test]
fn parser_non_contiguous_index_is_fatal() {
    let err = parse_table("1\ta\t\n3\tb\t\n").unwrap_err();
    match err {
        ParseError::NonContiguousIndex {
            line,
            expected,
            found,
        } => {
            assert_eq!(line, 2);
            assert_eq!(expected, 2);
            assert_eq!(found, 3);
        }
        other => panic!("expected NonContiguousIndex, got: {other}"),
    }

    // Duplicate index is the same failure.
    assert!(parse_table("1\ta\t\n1\tb\t\n").is_err());
    // So is starting anywhere but 1.
    assert!(parse_table("2\ta\t\n").is_err());
}
