use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{Field, Kind, WireShape};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ParentRelation {
    Father,
    Mother,
    Guardian,
    Other,
}

impl std::fmt::Display for ParentRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ParentRelation::Father => "father",
            ParentRelation::Mother => "mother",
            ParentRelation::Guardian => "guardian",
            ParentRelation::Other => "other",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Parent {
    pub id: i32,
    pub user_id: i32,
    pub relation: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertParent {
    pub user_id: i32,
    pub relation: ParentRelation,
}

impl WireShape for InsertParent {
    const FIELDS: &'static [Field] = &[
        Field::required("userId", Kind::Int),
        Field::required("relation", Kind::Text),
    ];
}

#[cfg(test)]
mod tests {
    use super::{InsertParent, ParentRelation};

    #[test]
    fn guardian_and_other_are_accepted() {
        let insert: InsertParent =
            serde_json::from_value(serde_json::json!({ "userId": 7, "relation": "guardian" }))
                .unwrap();
        assert_eq!(insert.relation, ParentRelation::Guardian);
        assert_eq!(ParentRelation::Other.to_string(), "other");
    }
}
