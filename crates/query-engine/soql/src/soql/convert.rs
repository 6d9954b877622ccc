//! Convert a SOQL AST to a low-level SOQL string.

use super::ast::*;
use super::string::SOQL;

impl Select {
    pub fn to_soql(&self, soql: &mut SOQL) {
        soql.append_syntax("SELECT ");

        self.select_list.to_soql(soql);

        soql.append_syntax(" FROM ");
        self.from.to_soql(soql);

        self.where_.to_soql(soql);

        self.order_by.to_soql(soql);

        self.limit.to_soql(soql);
    }
}

impl SelectList {
    pub fn to_soql(&self, soql: &mut SOQL) {
        let SelectList(references) = self;
        for (index, reference) in references.iter().enumerate() {
            reference.to_soql(soql);
            if index < (references.len() - 1) {
                soql.append_syntax(", ");
            }
        }
    }
}

impl ObjectName {
    pub fn to_soql(&self, soql: &mut SOQL) {
        let ObjectName(name) = self;
        soql.append_identifier(name);
    }
}

impl ColumnReference {
    pub fn to_soql(&self, soql: &mut SOQL) {
        for hop in &self.path {
            soql.append_identifier(hop);
            soql.append_syntax(".");
        }
        soql.append_identifier(&self.name);
    }
}

impl Where {
    /// Each condition is rendered independently; the clauses are joined as
    /// `(c1) AND (c2)` so compound operators bind per condition.
    pub fn to_soql(&self, soql: &mut SOQL) {
        let Where(conditions) = self;
        if !conditions.is_empty() {
            soql.append_syntax(" WHERE (");
            for (index, condition) in conditions.iter().enumerate() {
                condition.to_soql(soql);
                if index < (conditions.len() - 1) {
                    soql.append_syntax(") AND (");
                }
            }
            soql.append_syntax(")");
        }
    }
}

impl Expression {
    pub fn to_soql(&self, soql: &mut SOQL) {
        match &self {
            Expression::BinaryOperator {
                target,
                operator,
                value,
            } => {
                target.to_soql(soql);
                operator.to_soql(soql);
                value.to_soql(soql);
            }
            Expression::BinaryArrayOperator {
                target,
                operator,
                values,
            } => {
                target.to_soql(soql);
                operator.to_soql(soql);
                soql.append_syntax("(");
                for (index, value) in values.iter().enumerate() {
                    value.to_soql(soql);
                    if index < (values.len() - 1) {
                        soql.append_syntax(", ");
                    }
                }
                soql.append_syntax(")");
            }
            Expression::RawOperator { target, rest } => {
                target.to_soql(soql);
                soql.append_syntax(" ");
                soql.append_syntax(rest);
            }
        }
    }
}

impl BinaryOperator {
    pub fn to_soql(&self, soql: &mut SOQL) {
        match self {
            BinaryOperator::Equals => soql.append_syntax(" = "),
            BinaryOperator::NotEquals => soql.append_syntax(" != "),
            BinaryOperator::GreaterThan => soql.append_syntax(" > "),
            BinaryOperator::GreaterThanOrEqualTo => soql.append_syntax(" >= "),
            BinaryOperator::LessThan => soql.append_syntax(" < "),
            BinaryOperator::LessThanOrEqualTo => soql.append_syntax(" <= "),
            BinaryOperator::Like => soql.append_syntax(" LIKE "),
        }
    }
}

impl BinaryArrayOperator {
    pub fn to_soql(&self, soql: &mut SOQL) {
        match self {
            BinaryArrayOperator::In => soql.append_syntax(" IN "),
            BinaryArrayOperator::NotIn => soql.append_syntax(" NOT IN "),
        }
    }
}

impl Value {
    pub fn to_soql(&self, soql: &mut SOQL) {
        match &self {
            Value::Null => soql.append_syntax("NULL"),
            Value::Bool(true) => soql.append_syntax("true"),
            Value::Bool(false) => soql.append_syntax("false"),
            Value::Int(i) => soql.append_syntax(&i.to_string()),
            Value::Float(f) => soql.append_syntax(&f.to_string()),
            Value::String(s) => soql.append_string_literal(s),
            Value::Array(items) => {
                soql.append_syntax("(");
                for (index, item) in items.iter().enumerate() {
                    item.to_soql(soql);
                    if index < (items.len() - 1) {
                        soql.append_syntax(", ");
                    }
                }
                soql.append_syntax(")");
            }
        }
    }
}

impl OrderBy {
    pub fn to_soql(&self, soql: &mut SOQL) {
        if let Some(element) = &self.element {
            soql.append_syntax(" ORDER BY ");
            element.to_soql(soql);
        }
    }
}

impl OrderByElement {
    pub fn to_soql(&self, soql: &mut SOQL) {
        self.target.to_soql(soql);
        self.direction.to_soql(soql);
    }
}

impl OrderByDirection {
    pub fn to_soql(&self, soql: &mut SOQL) {
        match self {
            OrderByDirection::Asc => soql.append_syntax(" ASC"),
            OrderByDirection::Desc => soql.append_syntax(" DESC"),
        }
    }
}

impl Limit {
    pub fn to_soql(&self, soql: &mut SOQL) {
        match self.limit {
            None => (),
            Some(limit) => {
                soql.append_syntax(" LIMIT ");
                soql.append_syntax(&limit.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::soql::ast::*;
    use crate::soql::helpers;
    use crate::soql::string::SOQL;

    fn render(value: &Value) -> String {
        let mut soql = SOQL::new();
        value.to_soql(&mut soql);
        soql.soql
    }

    #[test]
    fn renders_scalar_literals() {
        assert_eq!(render(&Value::Null), "NULL");
        assert_eq!(render(&Value::Bool(true)), "true");
        assert_eq!(render(&Value::Int(-7)), "-7");
        assert_eq!(render(&Value::Float(2.5)), "2.5");
        assert_eq!(render(&Value::String("O'Brien".to_string())), r"'O\'Brien'");
    }

    #[test]
    fn renders_collections_recursively() {
        let nested = Value::Array(vec![
            Value::Int(1),
            Value::Array(vec![Value::String("a".to_string()), Value::Null]),
        ]);
        assert_eq!(render(&nested), "(1, ('a', NULL))");
    }

    #[test]
    fn a_limit_of_zero_is_rendered() {
        let select = helpers::simple_select(
            vec![ColumnReference {
                path: vec![],
                name: "Name".to_string(),
            }],
            ObjectName("Account".to_string()),
        );

        let mut with_zero = select.clone();
        with_zero.limit = Limit { limit: Some(0) };
        assert_eq!(
            helpers::select_to_soql(&with_zero).soql,
            "SELECT Name FROM Account LIMIT 0"
        );
        assert_eq!(
            helpers::select_to_soql(&select).soql,
            "SELECT Name FROM Account"
        );
    }

    #[test]
    fn conditions_are_parenthesized_per_clause() {
        let mut select = helpers::simple_select(
            vec![ColumnReference {
                path: vec![],
                name: "Name".to_string(),
            }],
            ObjectName("Account".to_string()),
        );
        select.where_ = Where(vec![
            Expression::BinaryOperator {
                target: ColumnReference {
                    path: vec![],
                    name: "Name".to_string(),
                },
                operator: BinaryOperator::Like,
                value: Value::String("Ab%".to_string()),
            },
            Expression::BinaryArrayOperator {
                target: ColumnReference {
                    path: vec![],
                    name: "Rating".to_string(),
                },
                operator: BinaryArrayOperator::NotIn,
                values: vec![Value::String("Cold".to_string())],
            },
        ]);
        assert_eq!(
            helpers::select_to_soql(&select).soql,
            "SELECT Name FROM Account WHERE (Name LIKE 'Ab%') AND (Rating NOT IN ('Cold'))"
        );
    }

    #[test]
    fn paths_render_dot_joined() {
        let reference = ColumnReference {
            path: vec!["Contact".to_string(), "Account".to_string()],
            name: "Name".to_string(),
        };
        let mut soql = SOQL::new();
        reference.to_soql(&mut soql);
        assert_eq!(soql.soql, "Contact.Account.Name");
    }
}
