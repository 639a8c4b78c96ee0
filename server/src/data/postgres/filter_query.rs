//! Dynamic filter-matching query builder
//!
//! Assembles the single parameterized statement behind the
//! `filter_products` endpoint: a base category predicate plus one `EXISTS`
//! predicate per resolved filter option. Values only ever travel through
//! numbered placeholders; the SQL text never embeds caller input.

use crate::data::types::ResolvedOption;

/// Columns selected for the product summary result
const SUMMARY_COLUMNS: &str = "p.id, p.name, p.description, p.price::text AS price, p.featured";

/// Accumulating parameterized query selecting products of one category,
/// narrowed by zero or more filter options.
#[derive(Debug, Clone)]
pub struct FilteredProductQuery {
    sql: String,
    params: Vec<i64>,
}

impl FilteredProductQuery {
    /// Base query: every product associated with `category_id`
    pub fn for_category(category_id: i64) -> Self {
        let sql = format!(
            "SELECT {} FROM products p \
             INNER JOIN product_categories pc ON p.id = pc.product_id \
             WHERE pc.category_id = $1",
            SUMMARY_COLUMNS
        );
        Self {
            sql,
            params: vec![category_id],
        }
    }

    /// Narrow the result to products matching one resolved option
    ///
    /// Appends an independent `AND EXISTS` predicate pinned to the option id,
    /// the base category, and the option's owning filter. Each call narrows
    /// (never widens) the result set.
    pub fn and_option(&mut self, option: ResolvedOption) {
        let category_id = self.params[0];
        let n = self.params.len();
        self.sql.push_str(&format!(
            " AND EXISTS (SELECT 1 FROM filter_options fo \
             INNER JOIN filter_categories fc ON fo.filter_id = fc.filter_id \
             WHERE fo.id = ${} AND fc.category_id = ${} AND fo.filter_id = ${})",
            n + 1,
            n + 2,
            n + 3
        ));
        self.params.push(option.option_id);
        self.params.push(category_id);
        self.params.push(option.filter_id);
    }

    /// Number of `EXISTS` predicates appended so far
    pub fn constraint_count(&self) -> usize {
        (self.params.len() - 1) / 3
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[i64] {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(option_id: i64, filter_id: i64) -> ResolvedOption {
        ResolvedOption {
            option_id,
            filter_id,
        }
    }

    #[test]
    fn base_query_selects_category_products() {
        let query = FilteredProductQuery::for_category(5);

        assert_eq!(
            query.sql(),
            "SELECT p.id, p.name, p.description, p.price::text AS price, p.featured \
             FROM products p \
             INNER JOIN product_categories pc ON p.id = pc.product_id \
             WHERE pc.category_id = $1"
        );
        assert_eq!(query.params(), &[5]);
        assert_eq!(query.constraint_count(), 0);
    }

    #[test]
    fn one_option_appends_one_exists_predicate() {
        let mut query = FilteredProductQuery::for_category(5);
        query.and_option(option(11, 3));

        assert!(query.sql().ends_with(
            " AND EXISTS (SELECT 1 FROM filter_options fo \
             INNER JOIN filter_categories fc ON fo.filter_id = fc.filter_id \
             WHERE fo.id = $2 AND fc.category_id = $3 AND fo.filter_id = $4)"
        ));
        assert_eq!(query.params(), &[5, 11, 5, 3]);
        assert_eq!(query.constraint_count(), 1);
    }

    #[test]
    fn params_follow_option_category_filter_order() {
        let mut query = FilteredProductQuery::for_category(5);
        query.and_option(option(11, 3));
        query.and_option(option(27, 8));

        // Triples in input order: (option_id, category_id, filter_id)
        assert_eq!(query.params(), &[5, 11, 5, 3, 27, 5, 8]);
        assert_eq!(query.constraint_count(), 2);
    }

    #[test]
    fn placeholder_numbering_is_sequential() {
        let mut query = FilteredProductQuery::for_category(9);
        query.and_option(option(1, 2));
        query.and_option(option(3, 4));

        for n in 1..=7 {
            assert!(
                query.sql().contains(&format!("${}", n)),
                "missing placeholder ${}",
                n
            );
        }
        assert!(!query.sql().contains("$8"));
    }

    #[test]
    fn each_option_narrows_with_an_and_conjunction() {
        let mut query = FilteredProductQuery::for_category(5);
        for i in 0..4 {
            query.and_option(option(100 + i, 10 + i));
        }

        assert_eq!(query.sql().matches(" AND EXISTS ").count(), 4);
        assert_eq!(query.params().len(), 1 + 4 * 3);
    }

    #[test]
    fn duplicate_options_are_not_deduplicated() {
        let mut query = FilteredProductQuery::for_category(5);
        query.and_option(option(11, 3));
        query.and_option(option(11, 3));

        assert_eq!(query.constraint_count(), 2);
        assert_eq!(query.params(), &[5, 11, 5, 3, 11, 5, 3]);
    }

    #[test]
    fn sql_text_never_embeds_parameter_values() {
        // Structural injection safety: ids flow through placeholders only,
        // so the text is identical regardless of the bound values.
        let mut a = FilteredProductQuery::for_category(1);
        a.and_option(option(2, 3));
        let mut b = FilteredProductQuery::for_category(999);
        b.and_option(option(-7, 404));

        assert_eq!(a.sql(), b.sql());
        assert_ne!(a.params(), b.params());
    }
}
