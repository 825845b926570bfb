use headmap::Headers;

#[test]
fn test_transport_read_then_serialize() {
    // A transport reads wire lines and adds each occurrence, producing one
    // case-insensitive container per message.
    let block = "\
        Set-Cookie: a=1\r\n\
        set-cookie: b=2\r\n\
        Content-Length: 10\r\n";
    let headers = Headers::parse_block(block);

    let entries: Vec<(String, Vec<Option<String>>)> = headers
        .iter()
        .map(|(name, values)| (name.unwrap().to_string(), values.to_vec()))
        .collect();
    assert_eq!(
        entries,
        vec![
            (
                "Content-Length".to_string(),
                vec![Some("10".to_string())]
            ),
            (
                "Set-Cookie".to_string(),
                vec![Some("a=1".to_string()), Some("b=2".to_string())]
            ),
        ]
    );
    assert_eq!(headers.get_first("SET-COOKIE"), Some("a=1"));

    assert_eq!(
        headers.stringify(),
        "Content-Length: 10\r\nSet-Cookie: a=1\r\nSet-Cookie: b=2\r\n"
    );
}

#[test]
fn test_merging_two_messages_keeps_receiver_values_first() {
    let mut base = Headers::parse_block("Via: proxy-a\r\nHost: example.com\r\n");
    let forwarded = Headers::parse_block("VIA: proxy-b\r\nAccept: */*\r\n");

    base.put_all(&forwarded);

    assert_eq!(
        base.get("via").unwrap(),
        &[Some("proxy-a".to_string()), Some("proxy-b".to_string())]
    );
    assert_eq!(base.get_first("accept"), Some("*/*"));
    assert_eq!(base.len(), 3);
}

#[test]
fn test_null_entries_survive_serialization_rules() {
    let mut headers = Headers::case_insensitive();
    headers.add(None, "held but never written");
    headers.add("X-Trace", None);
    headers.add("X-Trace", "abc");

    // The null name is a legal key and sorts ahead of every other entry.
    assert_eq!(headers.get_first(None), Some("held but never written"));
    assert_eq!(headers.iter().next().unwrap().0, None);

    // On the wire: null name skipped, null value emitted as a bare name line.
    assert_eq!(headers.stringify(), "X-Trace\r\nX-Trace: abc\r\n");
}
