//! Builds a single `SET` update from an arbitrary JSON field map.
//!
//! Caller-supplied attribute names may be DynamoDB reserved words (`name`,
//! `status`, `year`, ...) or contain characters that are illegal in an
//! expression, so neither names nor values are ever written into the
//! expression text. Each field gets a positional pair of placeholders
//! (`#f0` / `:v0`, `#f1` / `:v1`, ...) and the literals travel in the two
//! alias maps.

use crate::error::StudentError;
use crate::types::{Record, STUDENT_ID};
use serde_json::Value;
use std::collections::HashMap;

/// One `#name = :value` assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetClause {
    pub name_alias: String,
    pub value_alias: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartialUpdate {
    pub clauses: Vec<SetClause>,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, Value>,
}

impl PartialUpdate {
    /// Every field except `student_id`, in submission order
    pub fn from_fields(fields: &Record) -> Result<Self, StudentError> {
        let mut clauses = Vec::new();
        let mut names = HashMap::new();
        let mut values = HashMap::new();

        for (index, (field, value)) in fields
            .iter()
            .filter(|(field, _)| field.as_str() != STUDENT_ID)
            .enumerate()
        {
            let name_alias = format!("#f{}", index);
            let value_alias = format!(":v{}", index);

            names.insert(name_alias.clone(), field.clone());
            values.insert(value_alias.clone(), value.clone());
            clauses.push(SetClause {
                name_alias,
                value_alias,
            });
        }

        if clauses.is_empty() {
            return Err(StudentError::NoFields);
        }

        Ok(Self {
            clauses,
            names,
            values,
        })
    }

    /// `SET #f0 = :v0, #f1 = :v1`
    pub fn expression(&self) -> String {
        let assignments: Vec<String> = self
            .clauses
            .iter()
            .map(|clause| format!("{} = {}", clause.name_alias, clause.value_alias))
            .collect();
        format!("SET {}", assignments.join(", "))
    }

    /// Literal attribute names in clause order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.clauses
            .iter()
            .filter_map(|clause| self.names.get(&clause.name_alias).map(String::as_str))
    }

    /// (attribute name, value) pairs in clause order
    pub fn assignments(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.clauses.iter().filter_map(|clause| {
            let name = self.names.get(&clause.name_alias)?;
            let value = self.values.get(&clause.value_alias)?;
            Some((name.as_str(), value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn drops_student_id_and_aliases_the_rest() {
        let update = PartialUpdate::from_fields(&record(json!({
            "student_id": "123",
            "name": "John",
            "course": "X",
        })))
        .unwrap();

        assert_eq!(update.expression(), "SET #f0 = :v0, #f1 = :v1");
        assert_eq!(update.names["#f0"], "name");
        assert_eq!(update.names["#f1"], "course");
        assert_eq!(update.values[":v0"], json!("John"));
        assert_eq!(update.values[":v1"], json!("X"));
        assert!(!update.names.values().any(|name| name == STUDENT_ID));
    }

    #[test]
    fn key_position_does_not_shift_aliases() {
        let update = PartialUpdate::from_fields(&record(json!({
            "course": "X",
            "student_id": "123",
            "year": 2,
        })))
        .unwrap();

        assert_eq!(update.field_names().collect::<Vec<_>>(), vec!["course", "year"]);
        assert_eq!(update.expression(), "SET #f0 = :v0, #f1 = :v1");
    }

    #[test]
    fn reserved_words_and_odd_names_stay_out_of_expression() {
        let update = PartialUpdate::from_fields(&record(json!({
            "student_id": "1",
            "status": "active",
            "first name": "Ada",
            "a.b": true,
        })))
        .unwrap();

        let expression = update.expression();
        for field in ["status", "first name", "a.b"] {
            assert!(!expression.contains(field), "{field} leaked into {expression}");
        }
        assert_eq!(update.names.len(), 3);
        assert_eq!(update.values.len(), 3);
    }

    #[test]
    fn aliases_are_unique() {
        let fields = record(json!({
            "student_id": "1",
            "a": 1, "_a": 2, "#a": 3, "a_": 4, ":a": 5,
        }));
        let update = PartialUpdate::from_fields(&fields).unwrap();

        let name_aliases: HashSet<_> = update.clauses.iter().map(|c| &c.name_alias).collect();
        let value_aliases: HashSet<_> = update.clauses.iter().map(|c| &c.value_alias).collect();
        assert_eq!(name_aliases.len(), 5);
        assert_eq!(value_aliases.len(), 5);
        assert_eq!(update.names.len(), 5);
        assert_eq!(update.values.len(), 5);
    }

    #[test]
    fn values_pass_through_unchanged() {
        let nested = json!({"grades": [90, 85.5], "meta": {"active": true, "note": null}});
        let mut fields = record(nested.clone());
        fields.insert(STUDENT_ID.to_string(), json!("7"));

        let update = PartialUpdate::from_fields(&fields).unwrap();
        let rebuilt: Record = update
            .assignments()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();
        assert_eq!(Value::Object(rebuilt), nested);
    }

    #[test]
    fn only_key_is_rejected() {
        let err = PartialUpdate::from_fields(&record(json!({"student_id": "123"}))).unwrap_err();
        assert_eq!(err, StudentError::NoFields);

        let err = PartialUpdate::from_fields(&Record::new()).unwrap_err();
        assert_eq!(err, StudentError::NoFields);
    }
}
