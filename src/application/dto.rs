use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{Dog, DomainError, NewDog};

pub const NAME_MAX_LENGTH: usize = 100;
pub const COLOR_MAX_LENGTH: usize = 100;

/// Transfer shape of a dog at the API boundary. Used as the create payload and
/// as the list / get-by-id response; it never carries the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DogDto {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub color: String,

    #[serde(default)]
    pub tail_length: i32,

    #[serde(default)]
    pub weight: i32,
}

impl DogDto {
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        tail_length: i32,
        weight: i32,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            tail_length,
            weight,
        }
    }

    /// Checks every field and reports all failures in one
    /// [`DomainError::InvalidInput`].
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut problems = Vec::new();

        if self.name.trim().is_empty() {
            problems.push("Dog name is required.".to_string());
        } else if self.name.chars().count() > NAME_MAX_LENGTH {
            problems.push(format!(
                "Dog name must be between 1 and {} characters.",
                NAME_MAX_LENGTH
            ));
        }

        if self.color.trim().is_empty() {
            problems.push("Color is required.".to_string());
        } else if self.color.chars().count() > COLOR_MAX_LENGTH {
            problems.push(format!(
                "Color must be at most {} characters.",
                COLOR_MAX_LENGTH
            ));
        }

        if self.tail_length < 0 {
            problems.push("Tail length cannot be a negative number.".to_string());
        }

        if self.weight < 0 {
            problems.push("Weight must be a positive number.".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(DomainError::invalid_input(problems.join(" ")))
        }
    }

    pub fn into_new_dog(self) -> NewDog {
        NewDog::new(self.name, self.color, self.tail_length, self.weight)
    }
}

impl From<Dog> for DogDto {
    fn from(dog: Dog) -> Self {
        Self::from(&dog)
    }
}

impl From<&Dog> for DogDto {
    fn from(dog: &Dog) -> Self {
        Self {
            name: dog.name().to_string(),
            color: dog.color().to_string(),
            tail_length: dog.tail_length(),
            weight: dog.weight(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dto_passes() {
        let dto = DogDto::new("Doggy", "red", 173, 33);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_zero_tail_and_weight_are_allowed() {
        let dto = DogDto::new("Doggy", "red", 0, 0);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        for name in ["", "   "] {
            let err = DogDto::new(name, "red", 1, 1).validate().unwrap_err();
            assert!(err.is_invalid_input());
            assert!(err.message().contains("Dog name is required."));
        }
    }

    #[test]
    fn test_name_length_counts_characters() {
        let exactly = "ж".repeat(NAME_MAX_LENGTH);
        assert!(DogDto::new(exactly, "red", 1, 1).validate().is_ok());

        let too_long = "a".repeat(NAME_MAX_LENGTH + 1);
        assert!(DogDto::new(too_long, "red", 1, 1).validate().is_err());
    }

    #[test]
    fn test_color_length_is_limited() {
        let exactly = "b".repeat(COLOR_MAX_LENGTH);
        assert!(DogDto::new("Rex", exactly, 1, 1).validate().is_ok());

        let too_long = "b".repeat(COLOR_MAX_LENGTH + 1);
        let err = DogDto::new("Rex", too_long, 1, 1).validate().unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.message(), "Color must be at most 100 characters.");
    }

    #[test]
    fn test_all_problems_are_reported() {
        let err = DogDto::new("", "", -1, -2).validate().unwrap_err();
        let message = err.message();

        assert!(message.contains("Dog name is required."));
        assert!(message.contains("Color is required."));
        assert!(message.contains("Tail length cannot be a negative number."));
        assert!(message.contains("Weight must be a positive number."));
    }

    #[test]
    fn test_deserialize_missing_and_null_fields() {
        let dto: DogDto = serde_json::from_str(r#"{"name": null, "weight": 5}"#).unwrap();

        assert_eq!(dto.name, "");
        assert_eq!(dto.color, "");
        assert_eq!(dto.tail_length, 0);
        assert_eq!(dto.weight, 5);
    }

    #[test]
    fn test_serializes_camel_case_without_id() {
        let dog = Dog::reconstitute(3, "Neo".to_string(), "red".to_string(), 22, 32);
        let json = serde_json::to_value(DogDto::from(&dog)).unwrap();

        assert_eq!(json["tailLength"], 22);
        assert!(json.get("id").is_none());
    }
}
