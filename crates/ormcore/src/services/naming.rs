//! Built-in naming strategies.
//!
//! | Name          | Tables        | Columns       |
//! |---------------|---------------|---------------|
//! | `underscore`  | `book_tag`    | `created_at`  |
//! | `entity_case` | `BookTag`     | `createdAt`   |
//! | `mongo`       | `bookTag`     | `createdAt`   |

use crate::core::traits::NamingStrategy;

/// Snake-case table and column names. Default for SQL platforms.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnderscoreNamingStrategy;

impl NamingStrategy for UnderscoreNamingStrategy {
    fn class_to_table_name(&self, entity_name: &str) -> String {
        to_snake_case(entity_name)
    }

    fn property_to_column_name(&self, property_name: &str) -> String {
        to_snake_case(property_name)
    }

    fn join_table_name(&self, source_entity: &str, _target_entity: &str, property: &str) -> String {
        format!(
            "{}_{}",
            self.class_to_table_name(source_entity),
            self.property_to_column_name(property)
        )
    }

    fn join_key_column_name(&self, entity_name: &str, referenced_column: Option<&str>) -> String {
        format!(
            "{}_{}",
            self.class_to_table_name(entity_name),
            referenced_column.map_or_else(|| self.reference_column_name(), to_snake_case)
        )
    }
}

/// Names kept exactly as declared on the entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityCaseNamingStrategy;

impl NamingStrategy for EntityCaseNamingStrategy {
    fn class_to_table_name(&self, entity_name: &str) -> String {
        entity_name.to_string()
    }

    fn property_to_column_name(&self, property_name: &str) -> String {
        property_name.to_string()
    }

    fn join_table_name(&self, source_entity: &str, _target_entity: &str, property: &str) -> String {
        format!("{}_{}", source_entity, upper_first(property))
    }

    fn join_key_column_name(&self, entity_name: &str, referenced_column: Option<&str>) -> String {
        let referenced = referenced_column.map_or_else(|| self.reference_column_name(), String::from);
        format!("{}{}", lower_first(entity_name), upper_first(&referenced))
    }
}

/// Collection names in camel case and `_id` primary keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoNamingStrategy;

impl NamingStrategy for MongoNamingStrategy {
    fn class_to_table_name(&self, entity_name: &str) -> String {
        lower_first(entity_name)
    }

    fn property_to_column_name(&self, property_name: &str) -> String {
        property_name.to_string()
    }

    fn reference_column_name(&self) -> String {
        "_id".to_string()
    }

    fn join_table_name(&self, source_entity: &str, target_entity: &str, property: &str) -> String {
        format!(
            "{}_{}_{}",
            self.class_to_table_name(source_entity),
            property,
            self.class_to_table_name(target_entity)
        )
    }

    fn join_key_column_name(&self, entity_name: &str, _referenced_column: Option<&str>) -> String {
        lower_first(entity_name)
    }
}

/// `BookTag` -> `book_tag`, `HTTPServer` -> `http_server`.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(char::is_lowercase),
                _ => false,
            };
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
