
use crate::config::GeneratorConfig;
use crate::schema::read_schema;
use crate::symbols::SymbolTable;

/// Parse a schema fragment and build its symbol table with the default
/// configuration.
fn fixture_table(xsd: &str) -> SymbolTable {
    let schema = read_schema(xsd.as_bytes()).expect("fixture schema must parse");
    SymbolTable::build(std::slice::from_ref(&schema), &GeneratorConfig::default())
}
