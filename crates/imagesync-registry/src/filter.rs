//! Compound directory filter construction.

use crate::template::ResolvedFilter;

/// Builds `(&(objectClass=<class>)(<clause>)...)` from a resolved check list.
#[must_use]
pub fn compound_filter(object_class: &str, resolved: &ResolvedFilter) -> String {
    let mut filter = format!("(&(objectClass={object_class})");
    for clause in resolved.clauses() {
        filter.push('(');
        filter.push_str(clause);
        filter.push(')');
    }
    filter.push(')');
    filter
}
