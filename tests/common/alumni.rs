use search_filter::prelude::*;
use std::collections::BTreeMap;

type Alumnus = BTreeMap<&'static str, &'static str>;

fn alumnus(entries: &[(&'static str, &'static str)]) -> Alumnus {
    entries.iter().copied().collect()
}

fn alumni() -> Vec<Alumnus> {
    vec![
        alumnus(&[
            ("givenName", "Elena"),
            ("familyName", "Ilie"),
            ("address.city", "Berlin"),
            ("jacobs.college", "1"),
            ("jacobs.graduation", "2012"),
            ("job.employer", "Acme"),
        ]),
        alumnus(&[
            ("givenName", "Bob"),
            ("familyName", "Jones"),
            ("address.city", "Bremen"),
            ("jacobs.college", "2"),
            ("jacobs.graduation", "2014"),
            ("job.employer", "Globex"),
        ]),
        alumnus(&[
            ("givenName", "Elena"),
            ("familyName", "Petrova"),
            ("address.city", "Bremen"),
            ("jacobs.college", "2"),
            ("jacobs.graduation", "2016"),
            ("job.employer", "Initech"),
        ]),
        alumnus(&[
            ("givenName", "Anna"),
            ("familyName", "Smith"),
            ("address.city", "Berlin"),
            ("jacobs.college", "1"),
            ("jacobs.graduation", "2012"),
            ("job.employer", "Acme Research"),
        ]),
    ]
}

fn search_filter() -> SearchFilter {
    SearchConfig::new()
        .field("city", "address.city")
        .field("college", "jacobs.college")
        .field("class", "jacobs.graduation")
        .field("employer", "job.employer")
        .plain_search_field("givenName")
        .plain_search_field("familyName")
        .plain_search_field("address.city")
        .into()
}

fn names<'a>(found: impl IntoIterator<Item = &'a Alumnus>) -> Vec<String> {
    found
        .into_iter()
        .map(|alumnus| format!("{} {}", alumnus["givenName"], alumnus["familyName"]))
        .collect()
}

/// Names of the alumni found by a query, in fixture order.
fn find(query: &str) -> Vec<String> {
    let alumni = alumni();
    let found = search_filter()
        .apply(&alumni, query)
        .unwrap_or_else(|err| panic!("{query:?} failed: {err}"));
    names(found)
}

fn find_err(query: &str) -> ParsingError {
    match search_filter().search(query) {
        Ok(predicate) => panic!("{query:?} should fail, was: {predicate}"),
        Err(err) => err,
    }
}
