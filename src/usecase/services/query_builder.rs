use crate::domain::entities::criteria::{FilterCriterion, SortCriterion};
use crate::domain::entities::query::QueryState;

/// Builds the GET url for one page of the entity set.
///
/// Parameters come out in a fixed order: `$count`, `$filter`, `$orderby`,
/// `$top`, `$skip`. `$filter` and `$orderby` are left out when there is
/// nothing to send. Filter values are quoted but not escaped, so a value with
/// a `'` in it yields an expression the service will reject.
pub fn build_query_url(base_url: &str, state: &QueryState) -> String {
    let base = base_url.trim_end_matches(['?', '&']);
    let separator = if base.contains('?') { '&' } else { '?' };

    let mut params = vec!["$count=true".to_string()];

    if !state.filters.is_empty() {
        let expression = state
            .filters
            .iter()
            .map(FilterCriterion::clause)
            .collect::<Vec<_>>()
            .join(" and ");
        params.push(format!("$filter={}", urlencoding::encode(&expression)));
    }

    if !state.sorts.is_empty() {
        let ordering = state
            .sorts
            .iter()
            .map(SortCriterion::clause)
            .collect::<Vec<_>>()
            .join(",");
        params.push(format!("$orderby={}", urlencoding::encode(&ordering)));
    }

    params.push(format!("$top={}", state.page_size()));
    params.push(format!("$skip={}", state.offset()));

    format!("{base}{separator}{}", params.join("&"))
}
