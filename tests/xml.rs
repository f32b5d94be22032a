use chrono::TimeZone;
use chrono::Utc;
use indexmap::IndexMap;
use quick_xml::events::Event;
use quick_xml::Reader;
use rand::Rng;
use recfmt::{Formatter, Generator, Level, LogRecord, SourceLocation, Thrown, XmlFormatter, XmlGenerator};
use std::io;
use std::sync::Arc;
use std::thread;

/// Parses `xml` and returns the number of top-level elements, asserting the
/// document is balanced and every root is named `record`.
fn root_elements(xml: &str) -> usize {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut roots = 0usize;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => {
                if depth == 0 {
                    assert_eq!(e.name().as_ref(), b"record");
                    roots += 1;
                }
                depth += 1;
            }
            Event::End(_) => depth -= 1,
            Event::Empty(_) => {
                if depth == 0 {
                    roots += 1;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    assert_eq!(depth, 0, "unbalanced document: {}", xml);
    roots
}

/// Returns the unescaped text content of the first `name` element.
fn element_text(xml: &str, name: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    let mut inside = false;
    let mut found = false;
    let mut text = String::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if !found && e.name().as_ref() == name.as_bytes() => {
                inside = true;
                found = true;
            }
            Event::End(e) if inside && e.name().as_ref() == name.as_bytes() => {
                inside = false;
            }
            Event::Text(t) if inside => text.push_str(&t.unescape().unwrap()),
            Event::Eof => break,
            _ => {}
        }
    }
    if found {
        Some(text)
    } else {
        None
    }
}

/// Removes the layout whitespace the indenting writer inserts: line breaks
/// plus the indentation at the start of each line.
fn strip_layout(pretty: &str) -> String {
    pretty.lines().map(str::trim_start).collect()
}

/// Runs one generator through `begin`, the given adds, and `build`.
fn generate<F>(add: F) -> String
where
    F: FnOnce(&mut XmlGenerator) -> io::Result<()>,
{
    let mut gen = XmlGenerator::new(false);
    gen.begin().unwrap();
    add(&mut gen).unwrap();
    gen.build().unwrap()
}

#[test]
fn golden_minimal_record() {
    let record = LogRecord::new(Level::INFO, "com.example.Service", "service started")
        .with_sequence(7)
        .with_timestamp(Utc.with_ymd_and_hms(2026, 8, 27, 10, 30, 0).unwrap())
        .with_thread_name("main");

    let xml = XmlFormatter::new(false).format(&record).unwrap();

    assert_eq!(
        xml,
        "<record>\
         <sequence>7</sequence>\
         <timestamp>2026-08-27T10:30:00+00:00</timestamp>\
         <level>INFO</level>\
         <loggerName>com.example.Service</loggerName>\
         <threadName>main</threadName>\
         <message>service started</message>\
         <parameters/>\
         <mdc/>\
         <ndc/>\
         </record>"
    );
}

#[test]
fn compact_output_is_one_well_formed_record() {
    let mut mdc = IndexMap::new();
    mdc.insert("request".to_owned(), Some("12".to_owned()));
    let record = LogRecord::new(Level::ERROR, "com.example", "failed")
        .with_parameters(vec![Some("x".to_owned()), None])
        .with_mdc(mdc)
        .with_thrown(Thrown::new("boom").with_frame("C", "m", Some(1)));

    let xml = XmlFormatter::new(false).format(&record).unwrap();

    assert_eq!(root_elements(&xml), 1);
    assert!(!xml.contains('\n'));
}

#[test]
fn absent_null_and_empty_are_three_distinct_outputs() {
    let absent = generate(|gen| gen.add_array::<String>("k", "e", None).map(drop));
    assert_eq!(absent, "<record><k/></record>");

    let null_slot = generate(|gen| {
        gen.add_array("k", "e", Some(&[None::<String>][..])).map(drop)
    });
    assert_eq!(null_slot, "<record><k><e/></k></record>");

    let empty_slot = generate(|gen| {
        gen.add_array("k", "e", Some(&[Some(String::new())][..])).map(drop)
    });
    assert_eq!(empty_slot, "<record><k><e></e></k></record>");
}

#[test]
fn null_scalar_and_empty_scalar_differ() {
    let null_scalar = generate(|gen| gen.add::<str>("k", None).map(drop));
    assert_eq!(null_scalar, "<record><k/></record>");

    let empty_scalar = generate(|gen| gen.add("k", Some("")).map(drop));
    assert_eq!(empty_scalar, "<record><k></k></record>");
}

#[test]
fn mapping_preserves_insertion_order() {
    let mut entries = IndexMap::new();
    entries.insert("a".to_owned(), Some("1".to_owned()));
    entries.insert("b".to_owned(), Some("2".to_owned()));
    let out = generate(|gen| gen.add_map("k", Some(&entries)).map(drop));
    assert_eq!(out, "<record><k><a>1</a><b>2</b></k></record>");

    // Not sorted: reverse-alphabetical insertion stays reverse-alphabetical.
    let mut reversed = IndexMap::new();
    reversed.insert("z".to_owned(), Some("26".to_owned()));
    reversed.insert("a".to_owned(), Some("1".to_owned()));
    let out = generate(|gen| gen.add_map("k", Some(&reversed)).map(drop));
    assert_eq!(out, "<record><k><z>26</z><a>1</a></k></record>");
}

#[test]
fn stack_trace_golden_output() {
    let thrown = Thrown::new("boom").with_frame("C", "m", Some(42));
    let out = generate(|gen| gen.add_stack_trace(&thrown).map(drop));
    assert_eq!(
        out,
        "<record><EXCEPTION>\
         <EXCEPTION_MESSAGE>boom</EXCEPTION_MESSAGE>\
         <EXCEPTION_FRAME>\
         <EXCEPTION_FRAME_CLASS>C</EXCEPTION_FRAME_CLASS>\
         <EXCEPTION_FRAME_METHOD>m</EXCEPTION_FRAME_METHOD>\
         <EXCEPTION_FRAME_LINE>42</EXCEPTION_FRAME_LINE>\
         </EXCEPTION_FRAME>\
         </EXCEPTION></record>"
    );
}

#[test]
fn unknown_line_number_is_omitted_entirely() {
    let thrown = Thrown::new("boom").with_frame("C", "m", None);
    let out = generate(|gen| gen.add_stack_trace(&thrown).map(drop));
    assert!(!out.contains("EXCEPTION_FRAME_LINE"));
    assert!(out.contains("<EXCEPTION_FRAME_METHOD>m</EXCEPTION_FRAME_METHOD>"));
}

#[test]
fn missing_exception_message_is_an_empty_element() {
    let thrown = Thrown::without_message();
    let out = generate(|gen| gen.add_stack_trace(&thrown).map(drop));
    assert!(out.contains("<EXCEPTION_MESSAGE/>"));
}

#[test]
fn cause_chain_recurses_under_caused_by() {
    let thrown = Thrown::new("request failed")
        .with_frame("Gateway", "send", Some(10))
        .caused_by(Thrown::new("disk failure").with_frame("Disk", "read", Some(3)));
    let out = generate(|gen| gen.add_stack_trace(&thrown).map(drop));

    assert!(out.contains(
        "<EXCEPTION_CAUSED_BY><EXCEPTION><EXCEPTION_MESSAGE>disk failure</EXCEPTION_MESSAGE>"
    ));
    assert_eq!(root_elements(&out), 1);
}

#[test]
fn reserved_characters_escape_and_reparse() {
    let original = r#"a<b>&c "quoted" 'single'"#;
    let record = LogRecord::new(Level::INFO, "com.example", original);
    let xml = XmlFormatter::new(false).format(&record).unwrap();

    assert!(xml.contains("&lt;"));
    assert!(xml.contains("&amp;"));
    assert_eq!(element_text(&xml, "message").as_deref(), Some(original));
}

#[test]
fn pretty_and_compact_agree_modulo_layout() {
    let mut mdc = IndexMap::new();
    mdc.insert("user".to_owned(), Some("alice".to_owned()));
    mdc.insert("request".to_owned(), None);
    let record = LogRecord::new(Level::WARN, "com.example.Gateway", "upstream timeout")
        .with_parameters(vec![Some("500ms".to_owned()), None])
        .with_mdc(mdc)
        .with_ndc("request-7")
        .with_source(
            SourceLocation::new("com.example.Gateway", "proxy")
                .with_file_name("Gateway.java")
                .with_line(118),
        )
        .with_thrown(
            Thrown::new("timed out")
                .with_frame("com.example.Gateway", "proxy", Some(118))
                .with_frame("com.example.Http", "call", None)
                .caused_by(Thrown::without_message()),
        );

    let formatter = XmlFormatter::new(true);
    let compact = formatter.format(&record).unwrap();
    formatter.set_pretty_print(true);
    let pretty = formatter.format(&record).unwrap();

    assert_ne!(compact, pretty);
    assert_eq!(strip_layout(&pretty), compact);
    assert_eq!(root_elements(&pretty), 1);
}

#[test]
fn details_flag_controls_source_fields() {
    let record = LogRecord::new(Level::INFO, "com.example", "here").with_source(
        SourceLocation::new("com.example.App", "run")
            .with_file_name("App.java")
            .with_line(12),
    );

    let without = XmlFormatter::new(false).format(&record).unwrap();
    assert!(!without.contains("sourceClassName"));

    let with = XmlFormatter::new(true).format(&record).unwrap();
    assert!(with.contains("<sourceClassName>com.example.App</sourceClassName>"));
    assert!(with.contains("<sourceFileName>App.java</sourceFileName>"));
    assert!(with.contains("<sourceMethodName>run</sourceMethodName>"));
    assert!(with.contains("<sourceLineNumber>12</sourceLineNumber>"));
}

#[test]
fn pretty_print_defaults_off_and_toggles() {
    let formatter = XmlFormatter::new(false);
    assert!(!formatter.is_pretty_print());
    formatter.set_pretty_print(true);
    assert!(formatter.is_pretty_print());
    formatter.set_pretty_print(false);
    assert!(!formatter.is_pretty_print());
}

#[test]
fn concurrent_formatting_is_isolated() {
    let formatter = Arc::new(XmlFormatter::new(false));

    let mut handles = Vec::new();
    for worker in 0..8u32 {
        let formatter = Arc::clone(&formatter);
        handles.push(thread::spawn(move || {
            let mut rng = rand::thread_rng();
            let mut outputs = Vec::new();
            for i in 0..125u32 {
                let payload: u64 = rng.gen();
                let message = format!("msg-{}-{}-{}", worker, i, payload);
                let record = LogRecord::new(Level::INFO, "stress", message.clone());
                let xml = formatter.format(&record).unwrap();
                outputs.push((message, xml));
            }
            outputs
        }));
    }

    let mut total = 0;
    for handle in handles {
        for (message, xml) in handle.join().unwrap() {
            total += 1;
            assert_eq!(root_elements(&xml), 1);
            assert_eq!(element_text(&xml, "message").as_deref(), Some(message.as_str()));
        }
    }
    assert_eq!(total, 1000);
}

#[test]
#[should_panic(expected = "before `begin`")]
fn add_before_begin_panics() {
    let mut gen = XmlGenerator::new(false);
    let _ = gen.add("k", Some("v"));
}

#[test]
#[should_panic(expected = "`begin` called twice")]
fn begin_twice_panics() {
    let mut gen = XmlGenerator::new(false);
    gen.begin().unwrap();
    let _ = gen.begin();
}

#[test]
#[should_panic(expected = "open elements")]
fn build_without_begin_panics() {
    let gen = XmlGenerator::new(false);
    let _ = gen.build();
}
