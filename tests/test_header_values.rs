use std::time::Duration;

use actix_header::{
    advance_past_list_separator, are_equal_by, check_valid_token, contains_token,
    escape_as_quoted_string, find_directive_seconds, format_i64, get_quality, lexer,
    remove_quotes, set_quality, InplaceStringBuilder, Param, ParamList, Parameters,
};

/// Builds a `Cache-Control` value the way a typed header would.
fn cache_control(directives: &[(&str, Option<i64>)]) -> String {
    let values: Vec<_> = directives
        .iter()
        .map(|(_, secs)| secs.map(format_i64))
        .collect();

    let mut buf = InplaceStringBuilder::new();

    for (idx, ((name, _), value)) in directives.iter().zip(&values).enumerate() {
        if idx > 0 {
            buf.reserve(2).unwrap();
        }

        buf.reserve(name.len()).unwrap();

        if let Some(value) = value {
            buf.reserve(1 + value.len()).unwrap();
        }
    }

    for (idx, ((name, _), value)) in directives.iter().zip(&values).enumerate() {
        if idx > 0 {
            buf.append(", ").unwrap();
        }

        check_valid_token(name).unwrap();
        buf.append(name).unwrap();

        if let Some(value) = value {
            buf.append_char('=').unwrap();
            buf.append(value).unwrap();
        }
    }

    buf.finish().unwrap()
}

#[test]
fn cache_control_round_trip() {
    let _ = env_logger::try_init();

    let value = cache_control(&[
        ("public", None),
        ("max-age", Some(3600)),
        ("no-transform", None),
    ]);
    assert_eq!(value, "public, max-age=3600, no-transform");

    let lines = [value.as_str()];
    assert!(contains_token(&lines, "no-transform"));
    assert!(contains_token(&lines, "PUBLIC"));
    assert!(!contains_token(&lines, "private"));
    assert_eq!(
        find_directive_seconds(&lines, "max-age"),
        Some(Duration::from_secs(3600))
    );
}

#[test]
fn split_list_elements() {
    let line = "gzip;q=1.0, , identity; q=0.5,br";
    let mut idx = 0;
    let mut elements = Vec::new();

    while idx < line.len() {
        let len = lexer::token_len(line, idx);
        elements.push(&line[idx..idx + len]);

        // skip parameters up to the next separator
        let rest = line[idx + len..].find(',').map_or(line.len(), |pos| idx + len + pos);
        let (next, found) = advance_past_list_separator(line, rest, true);

        if !found {
            break;
        }

        idx = next;
    }

    assert_eq!(elements, ["gzip", "identity", "br"]);
}

#[test]
fn quality_on_parsed_parameters() {
    let mut params: ParamList = vec![Param::new("charset", "\"utf-8\""), Param::new("Q", "0,5")]
        .into_iter()
        .collect();

    // comma separated decimals are never accepted
    assert_eq!(get_quality(&params), None);
    assert_eq!(remove_quotes(params.find("charset").unwrap()), "utf-8");

    set_quality(&mut params, Some(0.5)).unwrap();
    assert_eq!(params.to_string(), "charset=\"utf-8\"; Q=0.5");
    assert_eq!(get_quality(&params), Some(0.5));
}

#[test]
fn parameter_sets_compare_case_insensitively() {
    let escaped = escape_as_quoted_string("a \"b\"").unwrap();

    let x = vec![Param::new("title", escaped.clone()), Param::new("level", "1")];
    let y = vec![Param::new("LEVEL", "1"), Param::new("Title", escaped)];
    let z = vec![Param::new("LEVEL", "1"), Param::new("level", "1")];

    let eq = |a: &Param, b: &Param| a.name.eq_ignore_ascii_case(&b.name) && a.value == b.value;

    assert!(are_equal_by(Some(&x[..]), Some(&y[..]), eq));
    assert!(!are_equal_by(Some(&x[..]), Some(&z[..]), eq));
}
