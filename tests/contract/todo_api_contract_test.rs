// Contract tests for the ToDo API wire format.
//
// These validate the JSON shapes exchanged over HTTP:
// - create requests carry no id
// - responses expose all four entity fields under their camelCase names
// - validation failures carry a machine-readable code and the offending field

use hip_todo::modules::todos::Todo;
use serde_json::json;

#[test]
fn test_create_request_schema() {
    let request = json!({
        "name": "A",
        "description": "A",
        "creationDate": "1970-01-01"
    });

    assert!(request.get("id").is_none(), "create requests must not carry an id");
    assert!(request["name"].is_string());
    assert!(request["description"].is_string());
    assert!(request["creationDate"].is_string());

    // The body must deserialize into the entity
    let todo: Todo = serde_json::from_value(request).unwrap();
    assert!(todo.id.is_none());
    assert_eq!(todo.name.as_deref(), Some("A"));
}

#[test]
fn test_todo_response_schema() {
    let response = json!({
        "id": 1,
        "name": "AAAAAAAAAA",
        "description": "AAAAAAAAAA",
        "creationDate": "1970-01-01"
    });

    assert!(response.get("id").is_some(), "response must include 'id'");
    assert!(response["id"].is_i64(), "id must be numeric");
    assert!(response.get("name").is_some(), "response must include 'name'");
    assert!(
        response.get("description").is_some(),
        "response must include 'description'"
    );
    assert!(
        response.get("creationDate").is_some(),
        "response must include 'creationDate'"
    );
}

#[test]
fn test_all_fields_are_optional_on_the_wire() {
    let todo: Todo = serde_json::from_str("{}").unwrap();
    assert!(todo.id.is_none());
    assert!(todo.name.is_none());
    assert!(todo.description.is_none());
    assert!(todo.creation_date.is_none());
}

#[test]
fn test_serialized_entity_matches_response_schema() {
    let todo = Todo::default()
        .id(1)
        .name("AAAAAAAAAA")
        .description("AAAAAAAAAA")
        .creation_date(chrono::NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());

    let value = serde_json::to_value(&todo).unwrap();
    assert_eq!(value["id"], 1);
    assert_eq!(value["name"], "AAAAAAAAAA");
    assert_eq!(value["description"], "AAAAAAAAAA");
    assert_eq!(value["creationDate"], "1970-01-01");
}

#[test]
fn test_validation_error_schema() {
    let response = json!({
        "error": {
            "code": "idexists",
            "field": "id",
            "message": "A new toDo cannot already have an id"
        }
    });

    let error = &response["error"];
    assert_eq!(error["code"], "idexists");
    assert_eq!(error["field"], "id");
    assert!(error["message"].is_string());
}
