#[cfg(test)]
mod rendering_tests {
    use std::collections::BTreeMap;

    use crate::{dump, Dump, DumpOptions};

    #[derive(Dump)]
    struct Point {
        pub x: i32,
        pub y: i32,
    }

    #[derive(Dump)]
    enum Color {
        Red,
        Green,
        Blue = 7,
    }

    #[derive(Dump)]
    enum Figure {
        Circle { radius: f64 },
        Square(f64),
    }

    #[derive(Dump)]
    struct Note {
        pub text: String,
        pub separator: char,
    }

    fn options() -> DumpOptions {
        DumpOptions::default()
    }

    #[test]
    fn test_scalar_renders_on_one_line() {
        assert_eq!(dump(&42i32, &options(), "answer"), "i32 answer = 42");
        assert_eq!(dump(&true, &options(), "ready"), "bool ready = true");
        assert_eq!(dump(&2.5f64, &options(), "ratio"), "f64 ratio = 2.5");
    }

    #[test]
    fn test_strings_and_chars_are_quoted() {
        let greeting = "hi".to_string();
        assert_eq!(dump(&greeting, &options(), "greeting"), "String greeting = \"hi\"");
        assert_eq!(dump(&'x', &options(), "initial"), "char initial = 'x'");
    }

    #[test]
    fn test_null_uses_placeholder() {
        let missing: Option<i32> = None;
        assert_eq!(dump(&missing, &options(), "missing"), "i32 missing = (null)");

        let present = Some(5u8);
        assert_eq!(dump(&present, &options(), "present"), "u8 present = 5");
    }

    #[test]
    fn test_sequence_lists_indexed_items() {
        let numbers = vec![1, 2, 3];
        assert_eq!(
            dump(&numbers, &options(), "numbers"),
            "Vec<i32> numbers [3]\n  [0] 1\n  [1] 2\n  [2] 3"
        );
    }

    #[test]
    fn test_null_items_use_placeholder() {
        let v = vec![Some(1), None, Some(3)];
        assert_eq!(
            dump(&v, &options(), "v"),
            "Vec<Option<i32>> v [3]\n  [0] 1\n  [1] (null)\n  [2] 3"
        );
    }

    #[test]
    fn test_line_breaks_are_escaped_in_quotes() {
        let note = Note {
            text: "line1\nline2\r".to_string(),
            separator: '\n',
        };
        assert_eq!(
            dump(&note, &options(), "note"),
            "Note note\n{\n  String text = \"line1\\nline2\\r\"\n  char separator = '\\n'\n}"
        );
    }

    #[test]
    fn test_empty_sequence_is_header_only() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(dump(&empty, &options(), "empty"), "Vec<i32> empty [0]");
    }

    #[test]
    fn test_dictionary_entries_are_key_value_pairs() {
        let mut map = BTreeMap::new();
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);
        assert_eq!(
            dump(&map, &options(), "map"),
            "BTreeMap<String, i32> map [2]\n  [0] [\"a\", 1]\n  [1] [\"b\", 2]"
        );
    }

    #[test]
    fn test_composite_wraps_members_in_braces() {
        let origin = Point { x: 0, y: -1 };
        assert_eq!(
            dump(&origin, &options(), "origin"),
            "Point origin\n{\n  i32 x = 0\n  i32 y = -1\n}"
        );
    }

    #[test]
    fn test_without_title_members_are_only_indented() {
        let origin = Point { x: 0, y: 0 };
        let options = options().with_title(false);
        assert_eq!(
            dump(&origin, &options, "origin"),
            "Point origin\n  i32 x = 0\n  i32 y = 0"
        );
    }

    #[test]
    fn test_nested_composite_hangs_under_index() {
        let points = vec![Point { x: 1, y: 2 }];
        assert_eq!(
            dump(&points, &options(), "points"),
            "Vec<Point> points [1]\n  [0] Point\n    {\n      i32 x = 1\n      i32 y = 2\n    }"
        );
    }

    #[test]
    fn test_fieldless_enum_shows_name_and_code() {
        assert_eq!(dump(&Color::Green, &options(), "color"), "Color color = Green (1)");
        assert_eq!(dump(&Color::Blue, &options(), "color"), "Color color = Blue (7)");
        assert_eq!(dump(&Color::Red, &options(), ""), "Color = Red (0)");
    }

    #[test]
    fn test_data_enum_is_named_after_variant() {
        let circle = Figure::Circle { radius: 1.5 };
        assert_eq!(
            dump(&circle, &options(), "figure"),
            "Figure::Circle figure\n{\n  f64 radius = 1.5\n}"
        );

        let square = Figure::Square(2.0);
        assert_eq!(
            dump(&square, &options(), "figure"),
            "Figure::Square figure\n{\n  f64 0 = 2\n}"
        );
    }

    #[test]
    fn test_culture_changes_decimal_separator() {
        let options = options().with_culture(crate::Culture::from_name("de-DE").unwrap());
        assert_eq!(dump(&1.5f64, &options, "ratio"), "f64 ratio = 1,5");
        assert_eq!(dump(&15i64, &options, "count"), "i64 count = 15");
    }

    #[test]
    fn test_dump_macro_names_after_expression() {
        let origin = Point { x: 3, y: 4 };
        let text = crate::dump!(origin.x);
        assert_eq!(text, "i32 origin.x = 3");
    }

    #[test]
    fn test_colors_only_add_escapes() {
        let origin = Point { x: 1, y: 2 };
        let plain = dump(&origin, &options(), "origin");
        let colored = dump(&origin, &options().with_colors(true), "origin");

        assert_ne!(plain, colored);
        assert_eq!(console::strip_ansi_codes(&colored), plain);
    }

    #[test]
    fn test_dumping_twice_is_identical() {
        let points = vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }];
        let first = dump(&points, &options(), "points");
        let second = dump(&points, &options(), "points");
        assert_eq!(first, second);
    }
}

#[cfg(test)]
mod depth_tests {
    use crate::{dump, Dump, DumpOptions};

    #[derive(Dump)]
    struct Point {
        pub x: i32,
        pub y: i32,
    }

    #[derive(Dump)]
    struct Line {
        pub start: Point,
        pub end: Point,
    }

    #[derive(Dump)]
    struct Node {
        pub value: u32,
        pub next: Option<Box<Node>>,
    }

    fn chain(length: u32) -> Node {
        (1..length).rev().fold(
            Node {
                value: length,
                next: None,
            },
            |next, value| Node {
                value,
                next: Some(Box::new(next)),
            },
        )
    }

    #[test]
    fn test_zero_depth_collapses_composite() {
        let origin = Point { x: 0, y: 0 };
        let options = DumpOptions::default().with_max_depth(0);
        assert_eq!(dump(&origin, &options, "origin"), "Point origin = ...");
    }

    #[test]
    fn test_zero_depth_still_prints_scalars() {
        let options = DumpOptions::default().with_max_depth(0);
        assert_eq!(dump(&5u8, &options, "count"), "u8 count = 5");
    }

    #[test]
    fn test_depth_one_collapses_collection() {
        let options = DumpOptions::default().with_max_depth(1);
        assert_eq!(dump(&vec![1, 2], &options, "numbers"), "Vec<i32> numbers [2]\n  ...");
    }

    #[test]
    fn test_depth_budget_shrinks_per_level() {
        let line = Line {
            start: Point { x: 0, y: 0 },
            end: Point { x: 1, y: 1 },
        };
        let options = DumpOptions::default().with_max_depth(2);
        assert_eq!(
            dump(&line, &options, "line"),
            "Line line\n{\n  Point start = ...\n  Point end = ...\n}"
        );
    }

    #[test]
    fn test_long_chain_is_bounded() {
        let head = chain(50);
        let options = DumpOptions::default().with_max_depth(3);
        let text = dump(&head, &options, "head");

        assert!(text.contains("u32 value = 1"));
        assert!(text.contains("u32 value = 2"));
        assert!(text.contains("Node next = ..."));
        assert!(!text.contains("u32 value = 3"));
    }
}

#[cfg(test)]
mod member_tests {
    use std::marker::PhantomData;

    use crate::{dump, Dump, DumpOptions};

    #[derive(Dump)]
    #[dump(property(masked, private))]
    #[dump(property(ratio, fallible))]
    #[dump(property(label))]
    struct Account {
        pub owner: String,
        pin: u16,
        #[dump(skip)]
        #[allow(dead_code)]
        secret: Vec<u8>,
        #[dump(rename = "kind")]
        pub account_type: String,
        pub audit: AuditTrail,
        pub marker: PhantomData<u8>,
    }

    impl Account {
        fn masked(&self) -> String {
            "****".to_string()
        }

        fn ratio(&self) -> Result<f64, String> {
            Err("division by zero".to_string())
        }

        fn label(&self) -> String {
            format!("{} ({})", self.owner, self.pin)
        }
    }

    #[derive(Dump)]
    #[dump(skip)]
    struct AuditTrail {
        #[allow(dead_code)]
        pub entries: Vec<String>,
    }

    fn account() -> Account {
        Account {
            owner: "ann".to_string(),
            pin: 1234,
            secret: vec![1, 2, 3],
            account_type: "savings".to_string(),
            audit: AuditTrail {
                entries: vec!["opened".to_string()],
            },
            marker: PhantomData,
        }
    }

    #[test]
    fn test_default_shows_public_fields_and_properties() {
        let text = dump(&account(), &DumpOptions::default(), "account");
        assert_eq!(
            text,
            "Account account\n{\n  String owner = \"ann\"\n  String kind = \"savings\"\n  f64 ratio = (unable to get value : division by zero)\n  String label = \"ann (1234)\"\n}"
        );
    }

    #[test]
    fn test_private_members_need_their_switches() {
        let options = DumpOptions::default().with_everything();
        let text = dump(&account(), &options, "account");
        assert!(text.contains("u16 pin = 1234"));
        assert!(text.contains("String masked = \"****\""));
    }

    #[test]
    fn test_excluded_members_never_appear() {
        let options = DumpOptions::default().with_everything();
        let text = dump(&account(), &options, "account");
        assert!(!text.contains("secret"));
        assert!(!text.contains("audit"));
        assert!(!text.contains("marker"));
    }

    #[test]
    fn test_excluded_type_renders_empty() {
        let audit = AuditTrail {
            entries: vec!["opened".to_string()],
        };
        assert_eq!(dump(&audit, &DumpOptions::default(), "audit"), "");
    }

    #[test]
    fn test_excluded_items_are_not_counted() {
        let trails = vec![
            AuditTrail { entries: vec![] },
            AuditTrail { entries: vec![] },
        ];
        assert_eq!(
            dump(&trails, &DumpOptions::default(), "trails"),
            "Vec<AuditTrail> trails [0]"
        );
    }

    #[test]
    fn test_no_selected_members_gives_empty_braces() {
        let options = DumpOptions::default()
            .with_public_fields(false)
            .with_public_properties(false);
        assert_eq!(dump(&account(), &options, "account"), "Account account\n{\n}");
    }
}

#[cfg(test)]
mod custom_dump_tests {
    use crate::{dump, Dump, DumpOptions};

    #[derive(Dump)]
    #[dump(with = "render_money")]
    struct Money {
        cents: i64,
    }

    fn render_money(money: &Money) -> String {
        format!("Money = {}.{:02}", money.cents / 100, money.cents % 100)
    }

    #[derive(Dump)]
    struct Invoice {
        pub total: Money,
    }

    #[test]
    fn test_custom_fragment_is_used_verbatim() {
        let price = Money { cents: 1999 };
        assert_eq!(dump(&price, &DumpOptions::default(), "price"), "Money = 19.99");
    }

    #[test]
    fn test_custom_fragment_nests_under_owner() {
        let invoice = Invoice {
            total: Money { cents: 500 },
        };
        assert_eq!(
            dump(&invoice, &DumpOptions::default(), "invoice"),
            "Invoice invoice\n{\n  Money = 5.00\n}"
        );
    }

    #[test]
    fn test_depth_check_precedes_custom_fragment() {
        let price = Money { cents: 1 };
        let options = DumpOptions::default().with_max_depth(1);
        assert_eq!(dump(&price, &options, "price"), "Money price = ...");
    }
}

#[cfg(test)]
mod box_tests {
    use crate::renderer::text_box::MockBoxRenderer;
    use crate::{Dump, DumpOptions, Dumper};

    #[derive(Dump)]
    struct Point {
        pub x: i32,
        pub y: i32,
    }

    #[test]
    fn test_box_receives_title_body_and_width() {
        let mut boxer = MockBoxRenderer::new();
        boxer
            .expect_render()
            .withf(|title, body, width| {
                title == "Point origin"
                    && body == "Point origin\n{\n  i32 x = 0\n  i32 y = 0\n}"
                    && *width == 40
            })
            .times(1)
            .return_const("boxed".to_string());

        let options = DumpOptions::default().with_box_width(40);
        let dumper = Dumper::with_box_renderer(options, boxer);
        assert_eq!(dumper.dump_box(&Point { x: 0, y: 0 }, "origin"), "boxed");
    }

    #[test]
    fn test_box_title_is_empty_without_title() {
        let mut boxer = MockBoxRenderer::new();
        boxer
            .expect_render()
            .withf(|title, _body, _width| title.is_empty())
            .times(1)
            .return_const(String::new());

        let options = DumpOptions::default().with_title(false);
        Dumper::with_box_renderer(options, boxer).dump_box(&1u8, "count");
    }

    #[test]
    fn test_line_box_frames_dump() {
        let dumper = Dumper::new(DumpOptions::default().with_box_width(24));
        let framed = dumper.dump_box(&7u8, "count");
        let lines: Vec<&str> = framed.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("┌─ u8 count ─"));
        assert_eq!(lines[1], "│ u8 count = 7        │");
        assert!(lines[2].starts_with('└'));
        assert!(lines.iter().all(|line| line.chars().count() == 24));
    }
}

#[cfg(test)]
mod sink_tests {
    use crate::{Dump, DumpOptions, Dumper, WriterSink};

    #[derive(Dump)]
    struct Point {
        pub x: i32,
    }

    #[test]
    fn test_dump_to_writes_text() {
        let dumper = Dumper::new(DumpOptions::default());
        let mut sink = WriterSink::new(Vec::new());
        dumper.dump_to(&mut sink, &Point { x: 9 }, "point").unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "Point point\n{\n  i32 x = 9\n}\n");
    }
}
