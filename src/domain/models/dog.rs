use serde::{Deserialize, Serialize};

/// A dog record as stored. The id is assigned by storage on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dog {
    id: i32,
    name: String,
    color: String,
    tail_length: i32,
    weight: i32,
}

impl Dog {
    /// Reconstitutes from persisted data (used by adapters).
    pub fn reconstitute(
        id: i32,
        name: String,
        color: String,
        tail_length: i32,
        weight: i32,
    ) -> Self {
        Self {
            id,
            name,
            color,
            tail_length,
            weight,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn tail_length(&self) -> i32 {
        self.tail_length
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }
}

/// A dog that has been accepted for insertion but not yet committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDog {
    name: String,
    color: String,
    tail_length: i32,
    weight: i32,
}

impl NewDog {
    pub fn new(name: String, color: String, tail_length: i32, weight: i32) -> Self {
        Self {
            name,
            color,
            tail_length,
            weight,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn tail_length(&self) -> i32 {
        self.tail_length
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Attaches the storage-assigned id.
    pub fn into_dog(self, id: i32) -> Dog {
        Dog {
            id,
            name: self.name,
            color: self.color,
            tail_length: self.tail_length,
            weight: self.weight,
        }
    }
}
