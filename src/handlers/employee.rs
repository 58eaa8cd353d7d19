use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::errors::AppError;
use crate::services::employee::EmployeeService;

pub const EMPLOYEE_SCOPE: &str = "/api/v1/employee";

/// Mounts every employee route. Literal paths go before `/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(EMPLOYEE_SCOPE)
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::BadRequest(format!("Invalid Employee Input: {}", err)).into()
            }))
            .service(
                web::resource("")
                    .route(web::get().to(get_all_employees))
                    .route(web::post().to(create_employee)),
            )
            .service(web::resource("/search/{search}").route(web::get().to(search_employees)))
            .service(web::resource("/highestSalary").route(web::get().to(get_highest_salary)))
            .service(
                web::resource("/topTenHighestEarningEmployeesName")
                    .route(web::get().to(get_top_ten_highest_earning_names)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_employee_by_id))
                    .route(web::delete().to(delete_employee)),
            ),
    );
}

pub async fn get_all_employees(service: web::Data<EmployeeService>) -> Result<HttpResponse, AppError> {
    let employees = service.get_all_employees().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn search_employees(
    service: web::Data<EmployeeService>,
    search: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let employees = service.get_employees_by_name_search(&search).await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee_by_id(
    service: web::Data<EmployeeService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let employee = service.get_employee_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn get_highest_salary(service: web::Data<EmployeeService>) -> Result<HttpResponse, AppError> {
    let salary = service.get_highest_salary_of_employees().await?;
    Ok(HttpResponse::Ok().json(salary))
}

pub async fn get_top_ten_highest_earning_names(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    let names = service.get_top_ten_highest_earning_employee_names().await?;
    Ok(HttpResponse::Ok().json(names))
}

pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let name = service.delete_employee(&id).await?;
    Ok(HttpResponse::Ok().body(name))
}

pub async fn create_employee(
    service: web::Data<EmployeeService>,
    input: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let employee = service.create_employee(input.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}
