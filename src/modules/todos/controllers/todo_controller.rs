use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::core::pagination::{link_header, PageRequest};
use crate::modules::todos::models::Todo;
use crate::modules::todos::services::todo_service::TodoService;

const BASE_PATH: &str = "/api/to-dos";

fn location(todo: &Todo) -> Result<String, AppError> {
    let id = todo
        .id
        .ok_or_else(|| AppError::internal("persisted toDo has no id"))?;
    Ok(format!("{BASE_PATH}/{id}"))
}

/// Create a new ToDo
/// POST /api/to-dos
pub async fn create_todo(
    service: web::Data<Arc<TodoService>>,
    request: web::Json<Todo>,
) -> Result<HttpResponse, AppError> {
    let todo = service.create(request.into_inner()).await?;

    tracing::debug!(id = todo.id, "created toDo");

    Ok(HttpResponse::Created()
        .insert_header(("Location", location(&todo)?))
        .json(todo))
}

/// Upsert a ToDo
/// PUT /api/to-dos
///
/// A body without an id falls through to the create path and answers 201,
/// matching the storage provider's upsert semantics.
pub async fn update_todo(
    service: web::Data<Arc<TodoService>>,
    request: web::Json<Todo>,
) -> Result<HttpResponse, AppError> {
    let outcome = service.update(request.into_inner()).await?;

    if outcome.created {
        Ok(HttpResponse::Created()
            .insert_header(("Location", location(&outcome.todo)?))
            .json(outcome.todo))
    } else {
        Ok(HttpResponse::Ok().json(outcome.todo))
    }
}

/// List ToDos, paginated
/// GET /api/to-dos?page&size&sort
pub async fn list_todos(
    service: web::Data<Arc<TodoService>>,
    query: web::Query<PageRequest>,
) -> Result<HttpResponse, AppError> {
    let request = query.into_inner();
    let page = service.list(&request).await?;

    Ok(HttpResponse::Ok()
        .insert_header(("X-Total-Count", page.total.to_string()))
        .insert_header(("Link", link_header(BASE_PATH, &request, page.total)))
        .json(page.items))
}

/// Get a ToDo by id
/// GET /api/to-dos/{id}
pub async fn get_todo(
    service: web::Data<Arc<TodoService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let todo = service.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(todo))
}

/// Delete a ToDo by id
/// DELETE /api/to-dos/{id}
///
/// Always answers 200; deleting an id that does not exist is not an error.
pub async fn delete_todo(
    service: web::Data<Arc<TodoService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    service.delete(id).await?;

    tracing::debug!(id, "deleted toDo");

    Ok(HttpResponse::Ok().finish())
}

/// Configure ToDo routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/to-dos")
            .route("", web::post().to(create_todo))
            .route("", web::put().to(update_todo))
            .route("", web::get().to(list_todos))
            .route("/{id}", web::get().to(get_todo))
            .route("/{id}", web::delete().to(delete_todo)),
    );
}
