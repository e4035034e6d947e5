use search_filter::{mir, parser, SearchConfig, SearchFilter};

fn main() {
    env_logger::init();

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    println!("Input: '{query}'");

    let node = parser::parse(&query).expect("Failed to parse into HIR");
    println!("\nHIR:\n{node:#?}");
    let expression = mir::Expression::resolve(node).expect("Failed to resolve into MIR");
    println!("\nMIR:\n{expression}");

    let search: SearchFilter = SearchConfig::new()
        .field("city", "address.city")
        .field("country", "address.country")
        .field("class", "jacobs.graduation")
        .field("college", "jacobs.college")
        .field("employer", "job.employer")
        .plain_search_field("givenName")
        .plain_search_field("familyName")
        .plain_search_field("address.city")
        .into();

    match search.search(&query) {
        Ok(predicate) => println!("\nLIR:\n{predicate}\n\n{predicate:#?}"),
        Err(err) => println!("\nError: {err}"),
    }
}
