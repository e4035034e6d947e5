use pretty_assertions::assert_eq;
use search_filter::Error;

include!("common/alumni.rs");

#[test]
fn test_equality() {
    assert_eq!(vec!["Elena Ilie", "Anna Smith"], find("city=Berlin"));
    assert_eq!(vec!["Elena Ilie", "Anna Smith"], find("city equals Berlin"));
    assert_eq!(vec!["Elena Ilie", "Anna Smith"], find("city === 'Berlin'"));
}

#[test]
fn test_equality_predicate() {
    assert_eq!(
        Ok(Predicate::filter("address.city", Comparison::Exact, "Berlin")),
        search_filter().search("city=Berlin")
    );
}

#[test]
fn test_unmapped_field() {
    let err = find_err("x=1");
    assert_eq!(Error::UnknownField("x".into()), err.cause);
}

#[test]
fn test_deterministic() {
    let query = "Elena (city = Berlin xor class > 2013) nand employer :: acme";
    assert_eq!(
        search_filter().search(query),
        search_filter().search(query)
    );
}

#[test]
fn test_de_morgan() {
    let clauses = [
        "city = Berlin",
        "college: 2",
        "class >= 2014",
        "employer contains acme",
        "Elena",
    ];

    for a in clauses {
        for b in clauses {
            assert_eq!(
                find(&format!("not ({a} and {b})")),
                find(&format!("(not {a}) or (not {b})")),
                "{a} / {b}"
            );
            assert_eq!(
                find(&format!("not ({a} or {b})")),
                find(&format!("!({a}) & !({b})")),
                "{a} / {b}"
            );
        }
    }
}

#[test]
fn test_free_text() {
    let search = SearchFilter::new(Vec::<(String, String)>::new(), ["givenName", "familyName"]);
    let records = vec![
        alumnus(&[("givenName", "Elena"), ("familyName", "Ilie")]),
        alumnus(&[("givenName", "Bob"), ("familyName", "Jones")]),
    ];

    assert_eq!(
        vec!["Elena Ilie"],
        names(search.apply(&records, "Elena").unwrap())
    );
    for query in ["bob", "BOB", "Bob"] {
        assert_eq!(
            vec!["Bob Jones"],
            names(search.apply(&records, query).unwrap())
        );
    }
}

#[test]
fn test_free_text_words() {
    assert_eq!(vec!["Elena Petrova"], find(r#""elena petrova""#));
    assert_eq!(vec!["Elena Petrova"], find("elena bremen"));
    assert_eq!(Vec::<String>::new(), find("elena smith"));
}

#[test]
fn test_implicit_and() {
    assert_eq!(vec!["Elena Ilie"], find("Elena college: 1"));
}

#[test]
fn test_empty() {
    for query in ["", "   ", "()", r#""""#] {
        let err = find_err(query);
        assert_eq!("Empty search", err.message(), "{query:?}");
        assert_eq!(Error::EmptySearch, err.cause);
    }
}

#[test]
fn test_equality_is_textual() {
    let search = SearchFilter::new([("name", "givenName"), ("zip", "familyName")], ["givenName"]);
    let records = vec![
        alumnus(&[("givenName", "Nan"), ("familyName", "01")]),
        alumnus(&[("givenName", "Bob"), ("familyName", "1")]),
        alumnus(&[("givenName", "inf"), ("familyName", "1.0")]),
    ];
    let find = |query| names(search.apply(&records, query).unwrap());

    assert_eq!(vec!["Nan 01"], find("name = Nan"));
    assert_eq!(vec!["Bob 1", "inf 1.0"], find("name != Nan"));
    assert_eq!(vec!["inf 1.0"], find("name = inf"));
    assert_eq!(vec!["Bob 1"], find("zip = 1"));
    assert_eq!(vec!["Nan 01", "Bob 1", "inf 1.0"], find("zip <= 1"));
}

#[test]
fn test_negation_complement() {
    let equal = find("city=Berlin");
    let not_equal = find("city!=Berlin");

    assert_eq!(vec!["Bob Jones", "Elena Petrova"], not_equal);
    assert_eq!(
        alumni().len(),
        equal.len() + not_equal.len(),
        "{equal:?} / {not_equal:?}"
    );
    assert!(equal.iter().all(|name| !not_equal.contains(name)));
}

#[test]
fn test_connectives() {
    assert_eq!(
        vec!["Elena Ilie", "Elena Petrova", "Anna Smith"],
        find("city = Berlin || Elena")
    );
    assert_eq!(vec!["Elena Ilie"], find("city = Berlin * Elena"));
    assert_eq!(
        vec!["Elena Petrova", "Anna Smith"],
        find("city = Berlin ^ Elena")
    );
    assert_eq!(
        vec!["Bob Jones", "Elena Petrova", "Anna Smith"],
        find("city = Berlin !& Elena")
    );
    assert_eq!(vec!["Bob Jones"], find("~Elena ~Anna"));
}

#[test]
fn test_precedence() {
    // and binds tighter than or
    assert_eq!(
        vec!["Bob Jones", "Anna Smith"],
        find("Bob or Anna and city = Berlin")
    );
    assert_eq!(
        vec!["Anna Smith"],
        find("(Bob or Anna) and city = Berlin")
    );
}

#[test]
fn test_ordering() {
    assert_eq!(vec!["Bob Jones", "Elena Petrova"], find("class > 2012"));
    assert_eq!(vec!["Bob Jones", "Elena Petrova"], find("class => 2014"));
    assert_eq!(vec!["Elena Ilie", "Anna Smith"], find("class < 2014"));
    assert_eq!(
        vec!["Elena Ilie", "Bob Jones", "Anna Smith"],
        find("class =< 2014")
    );
    assert_eq!(
        vec!["Elena Ilie", "Anna Smith"],
        find("class less than 2013")
    );
    assert_eq!(
        vec!["Bob Jones", "Elena Petrova"],
        find("class greater than or equal 2014")
    );
}

#[test]
fn test_contains() {
    assert_eq!(vec!["Elena Ilie", "Anna Smith"], find("employer :: ACME"));
    assert_eq!(vec!["Anna Smith"], find(r#"employer contains "acme res""#));
}

#[test]
fn test_matches() {
    assert_eq!(vec!["Bob Jones", "Elena Petrova"], find("city @ '^Br'"));
    assert_eq!(vec!["Elena Ilie", "Anna Smith"], find("city unicorn 'lin$'"));
    assert_eq!(Vec::<String>::new(), find("city matches '^br'"));

    let err = find_err("city matches '('");
    assert!(
        err.message().starts_with("Invalid regular expression ("),
        "{err}"
    );
}

#[test]
fn test_keyword_as_text() {
    let search = SearchFilter::new(Vec::<(String, String)>::new(), ["title"]);
    let records = vec![
        alumnus(&[("givenName", "A"), ("familyName", "1"), ("title", "Rock and Roll")]),
        alumnus(&[("givenName", "B"), ("familyName", "2"), ("title", "Rock")]),
    ];

    assert_eq!(
        vec!["A 1"],
        names(search.apply(&records, r#"rock "and""#).unwrap())
    );
    assert!(search.search("rock and").is_err());
}

#[test]
fn test_syntax_error() {
    for query in ["city =", "and", "Elena or", "(Elena", "Elena, Bob", "not"] {
        let err = find_err(query);
        assert_eq!("Unable to understand search", err.message(), "{query:?}");
        assert!(matches!(err.cause, Error::Syntax(_)), "{query:?}: {err:?}");
    }
}

#[test]
fn test_unknown_operator() {
    let err = find_err("city <> Berlin");
    assert_eq!("Unknown binary operator <>", err.message());
}

#[test]
fn test_type_mismatch() {
    let err = find_err("(city = Berlin or Bob) = Bremen");
    assert_eq!(
        "Cannot use operator = on ((city = Berlin) or Bob) and Bremen",
        err.message()
    );
}

#[test]
fn test_nesting_limit() {
    let not = |levels: usize| format!("{}Elena", "not ".repeat(levels));
    let groups = |levels: usize| format!("{}Elena{}", "(".repeat(levels), ")".repeat(levels));

    for query in [not(1_000), not(20_000), groups(1_000)] {
        let err = find_err(&query);
        assert_eq!(Error::TooDeep(64), err.cause);
        assert_eq!(
            "Search is nested too deeply, at most 64 levels are allowed",
            err.message()
        );
    }

    assert_eq!(vec!["Bob Jones", "Anna Smith"], find(&not(61)));
    assert_eq!(vec!["Elena Ilie", "Elena Petrova"], find(&groups(30)));

    let chain = ["Elena", "Bob", "Anna"].repeat(20).join(" or ");
    assert_eq!(
        vec!["Elena Ilie", "Bob Jones", "Elena Petrova", "Anna Smith"],
        find(&chain)
    );
}

#[test]
fn test_no_free_text() {
    let search = SearchFilter::new([("city", "address.city")], Vec::<String>::new());

    assert!(search.search("city = Berlin").is_ok());
    assert_eq!(
        "Free-text search is not available",
        search.search("Berlin").unwrap_err().message()
    );
}

#[test]
fn test_sigils() {
    let search = SearchFilter::new(
        Vec::<(String, String)>::new(),
        ["^givenName", "=familyName"],
    );
    let alumni = alumni();

    assert_eq!(
        vec!["Elena Ilie", "Elena Petrova"],
        names(search.apply(&alumni, "el").unwrap())
    );
    assert_eq!(
        Vec::<String>::new(),
        names(search.apply(&alumni, "len").unwrap())
    );
    assert_eq!(
        vec!["Bob Jones"],
        names(search.apply(&alumni, "JONES").unwrap())
    );
    assert_eq!(
        Vec::<String>::new(),
        names(search.apply(&alumni, "jon").unwrap())
    );
}

#[test]
fn test_shared_between_threads() {
    let search = std::sync::Arc::new(search_filter());

    let handles = (0..4)
        .map(|_| {
            let search = search.clone();
            std::thread::spawn(move || search.search("Elena college: 1"))
        })
        .collect::<Vec<_>>();

    let expected = search.search("Elena college: 1");
    for handle in handles {
        assert_eq!(expected, handle.join().unwrap());
    }
}
