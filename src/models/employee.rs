use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

/// Employee record as held by the upstream service.
///
/// The `employee_` prefixed keys are the upstream wire names and are also what
/// this API hands back to its own callers.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Employee {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "employee_name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "employee_salary", deserialize_with = "null_as_default")]
    pub salary: i32,
    #[serde(rename = "employee_age", deserialize_with = "null_as_default")]
    pub age: i32,
    #[serde(rename = "employee_email", deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(rename = "employee_title", deserialize_with = "null_as_default")]
    pub title: String,
}

// Upstream may send `null` for any field; one such record must not sink the whole list.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct EmployeeList {
    #[serde(default)]
    pub data: Vec<Employee>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct EmployeeResponse {
    #[serde(default)]
    pub data: Employee,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DeleteEmployeeInput {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DeleteResponse {
    #[serde(default, alias = "data")]
    pub flag: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CreateEmployeeRequest {
    #[validate(custom(function = "validate_not_blank", message = "Employee Name cannot be empty"))]
    pub name: String,
    #[validate(range(min = 1, message = "Salary of Employee should be greater than 0"))]
    pub salary: i32,
    #[validate(range(min = 16, max = 75, message = "Age must be between 16 and 75"))]
    pub age: i32,
    #[validate(custom(function = "validate_not_blank", message = "Title cannot be empty"))]
    pub title: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn employee_uses_upstream_field_names() {
        let employee: Employee = serde_json::from_value(json!({
            "id": "4a3a170b-22cd-4ac2-aad1-9bb5b34a1507",
            "employee_name": "Tiger Nixon",
            "employee_salary": 320800,
            "employee_age": 61,
            "employee_title": "Vice Chair Executive Principal of Chief Operations Implementation Specialist",
            "employee_email": "tnixon@company.com",
            "unexpected": true
        }))
        .unwrap();

        assert_eq!(employee.name, "Tiger Nixon");
        assert_eq!(employee.salary, 320800);

        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(value["employee_name"], "Tiger Nixon");
        assert_eq!(value["employee_email"], "tnixon@company.com");
        assert!(value.get("name").is_none());
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let list: EmployeeList = serde_json::from_value(json!({
            "data": [
                { "id": "1", "employee_name": "John Doe", "employee_salary": null, "employee_age": null,
                  "employee_title": null, "employee_email": null },
                { "id": "2", "employee_name": "Jane Austin", "employee_salary": 2000 }
            ],
            "status": "ok"
        }))
        .unwrap();

        assert_eq!(list.data.len(), 2);
        assert_eq!(list.data[0].salary, 0);
        assert_eq!(list.data[0].age, 0);
        assert_eq!(list.data[0].title, "");
        assert_eq!(list.data[1].salary, 2000);
    }

    #[test]
    fn create_request_rejects_unknown_keys() {
        let result: Result<CreateEmployeeRequest, _> = serde_json::from_value(json!({
            "name": "Ada", "salary": 3000, "age": 36, "title": "Dev", "bogus": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn delete_response_accepts_data_flag() {
        let resp: DeleteResponse =
            serde_json::from_value(json!({ "data": true, "status": "Successfully processed request." }))
                .unwrap();
        assert_eq!(resp.flag, Some(true));
    }

    #[test]
    fn create_request_rules() {
        let valid = CreateEmployeeRequest {
            name: "Jane Austin".into(),
            salary: 2000,
            age: 40,
            title: "Developer".into(),
        };
        assert!(valid.validate().is_ok());

        let invalid = CreateEmployeeRequest {
            name: "   ".into(),
            salary: 0,
            age: 76,
            title: "".into(),
        };
        let errors = invalid.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 4);
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("salary"));
        assert!(fields.contains_key("age"));
        assert!(fields.contains_key("title"));
    }

    #[test]
    fn age_bounds_are_inclusive() {
        for age in [16, 75] {
            let req = CreateEmployeeRequest {
                name: "A".into(),
                salary: 1,
                age,
                title: "T".into(),
            };
            assert!(req.validate().is_ok(), "age {age} should pass");
        }
    }
}
