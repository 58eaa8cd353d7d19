use std::sync::Arc;

use log::{debug, error};
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::client::{ClientError, EmployeeClient};
use crate::errors::AppError;
use crate::models::employee::{CreateEmployeeRequest, Employee};

const CONNECT_FAILED: &str = "Failed to connect to employee service";
const UNEXPECTED: &str = "An unexpected error occurred";
const TOP_EARNERS: usize = 10;

/// Search, ranking and create validation over the upstream employee list.
///
/// Nothing is cached: every call goes back to the upstream service.
#[derive(Clone)]
pub struct EmployeeService {
    client: Arc<dyn EmployeeClient>,
}

impl EmployeeService {
    pub fn new(client: Arc<dyn EmployeeClient>) -> Self {
        Self { client }
    }

    pub async fn get_all_employees(&self) -> Result<Vec<Employee>, AppError> {
        debug!("Fetching all employees");
        match self.client.list_all().await {
            Ok(list) => {
                debug!("Fetched {} employees", list.data.len());
                Ok(list.data)
            }
            Err(err) => {
                error!("Listing employees failed: {}", err);
                Err(map_client_error(err, "Employees List Not Found".to_string()))
            }
        }
    }

    pub async fn get_employees_by_name_search(&self, query: &str) -> Result<Vec<Employee>, AppError> {
        debug!("Searching employees by name: {}", query);
        let needle = query.to_lowercase();
        let matches: Vec<Employee> = self
            .get_all_employees()
            .await?
            .into_iter()
            .filter(|employee| employee.name.to_lowercase().contains(&needle))
            .collect();

        if matches.is_empty() {
            error!("Employee with name {} not found", query);
            return Err(AppError::NotFound(format!("Employee with name {} not found", query)));
        }
        debug!("Found {} employees matching '{}'", matches.len(), query);
        Ok(matches)
    }

    pub async fn get_employee_by_id(&self, id: &str) -> Result<Employee, AppError> {
        debug!("Fetching employee with ID: {}", id);
        match self.client.get_by_id(id).await {
            Ok(resp) => Ok(resp.data),
            Err(err) => {
                error!("Fetching employee {} failed: {}", id, err);
                Err(map_client_error(err, format!("Employee with ID {} not found", id)))
            }
        }
    }

    pub async fn get_highest_salary_of_employees(&self) -> Result<i32, AppError> {
        debug!("Fetching highest salary of employees");
        let highest = self
            .get_all_employees()
            .await?
            .iter()
            .map(|employee| employee.salary)
            .max();

        match highest {
            Some(salary) => {
                debug!("Highest salary found: {}", salary);
                Ok(salary)
            }
            None => {
                error!("Highest salary not found");
                Err(AppError::NotFound("Employee with highest salary not found".to_string()))
            }
        }
    }

    pub async fn get_top_ten_highest_earning_employee_names(&self) -> Result<Vec<String>, AppError> {
        debug!("Fetching top {} highest earning employees", TOP_EARNERS);
        let mut employees = self.get_all_employees().await?;
        if employees.is_empty() {
            error!("Top 10 highest earning employee list not found");
            return Err(AppError::NotFound(
                "Top 10 highest earning employee list not found".to_string(),
            ));
        }

        // Stable sort: ties keep upstream order.
        employees.sort_by(|a, b| b.salary.cmp(&a.salary));
        let names: Vec<String> = employees
            .into_iter()
            .take(TOP_EARNERS)
            .map(|employee| employee.name)
            .collect();
        debug!("Top highest earning employees: {:?}", names);
        Ok(names)
    }

    /// Deletes by resolving the id to a name first; returns that name.
    pub async fn delete_employee(&self, id: &str) -> Result<String, AppError> {
        debug!("Deleting employee with ID: {}", id);
        let employee = self.get_employee_by_id(id).await?;
        let rejected = || AppError::BadRequest(format!("Failed to delete the Employee Record {}", id));

        match self.client.delete_by_name(&employee.name).await {
            Ok(resp) if resp.flag == Some(false) => {
                error!("Upstream refused to delete employee {}", id);
                Err(rejected())
            }
            Ok(_) => {
                debug!("Deleted employee with ID {}", id);
                Ok(employee.name)
            }
            Err(ClientError::Status(status)) => {
                error!("Failed to delete employee {}: upstream status {}", id, status);
                Err(rejected())
            }
            Err(ClientError::Connect(msg)) => {
                error!("Failed to delete employee {}: {}", id, msg);
                Err(AppError::ServiceUnavailable(CONNECT_FAILED.to_string()))
            }
            Err(ClientError::Other(msg)) => {
                error!("Failed to delete employee {}: {}", id, msg);
                Err(AppError::InternalServerError(UNEXPECTED.to_string()))
            }
        }
    }

    pub async fn create_employee(&self, input: Value) -> Result<Employee, AppError> {
        debug!("Creating employee");
        let request: CreateEmployeeRequest = serde_json::from_value(input).map_err(|err| {
            error!("Invalid employee input: {}", err);
            AppError::BadRequest(format!("Invalid Employee Input: {}", err))
        })?;

        if let Err(errors) = request.validate() {
            error!("Validation failed");
            return Err(AppError::BadRequest(format!(
                "Validation failed:- {}",
                violation_messages(&errors)
            )));
        }

        match self.client.create(&request).await {
            Ok(resp) => {
                debug!("Created employee with ID {}", resp.data.id);
                Ok(resp.data)
            }
            Err(ClientError::Connect(msg)) => {
                error!("Creating employee failed: {}", msg);
                Err(AppError::ServiceUnavailable(CONNECT_FAILED.to_string()))
            }
            Err(err) => {
                error!("Creating employee failed: {}", err);
                Err(AppError::InternalServerError(UNEXPECTED.to_string()))
            }
        }
    }
}

fn map_client_error(err: ClientError, not_found: String) -> AppError {
    match err {
        ClientError::Status(_) => AppError::NotFound(not_found),
        ClientError::Connect(_) => AppError::ServiceUnavailable(CONNECT_FAILED.to_string()),
        ClientError::Other(_) => AppError::InternalServerError(UNEXPECTED.to_string()),
    }
}

/// Every violated rule, ordered by field name, as `msg; msg; `.
fn violation_messages(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    let mut out = String::new();
    for (field, violations) in fields {
        for violation in violations {
            match &violation.message {
                Some(msg) => out.push_str(msg),
                None => out.push_str(&format!("{} is invalid", field)),
            }
            out.push_str("; ");
        }
    }
    out
}
