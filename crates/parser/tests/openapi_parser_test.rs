//! Integration test for OpenAPI parsing and filtering

use apitab_parser::{apply_filters, validate_spec, DocumentParser, FilterRules, SchemaOrRef};

const PETSTORE_JSON: &str = r##"{
    "openapi": "3.0.3",
    "info": {
        "title": "Petstore",
        "version": "1.0.0"
    },
    "paths": {
        "/pets": {
            "get": {
                "operationId": "listPets",
                "parameters": [
                    {
                        "name": "limit",
                        "in": "query",
                        "required": false,
                        "schema": {
                            "type": "integer",
                            "format": "int32",
                            "minimum": 1,
                            "maximum": 100
                        }
                    }
                ],
                "responses": {
                    "200": {
                        "description": "A paged array of pets",
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "array",
                                    "items": {
                                        "$ref": "#/components/schemas/Pet"
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "post": {
                "operationId": "createPet",
                "requestBody": {
                    "required": true,
                    "content": {
                        "application/json": {
                            "schema": {
                                "$ref": "#/components/schemas/Pet"
                            }
                        }
                    }
                },
                "responses": {
                    "201": {
                        "description": "Created"
                    }
                }
            }
        },
        "/pets/{petId}": {
            "get": {
                "operationId": "showPetById",
                "parameters": [
                    {
                        "name": "petId",
                        "in": "path",
                        "required": true,
                        "schema": {
                            "type": "string"
                        }
                    }
                ],
                "responses": {
                    "200": {
                        "description": "A single pet",
                        "content": {
                            "application/json": {
                                "schema": {
                                    "$ref": "#/components/schemas/Pet"
                                }
                            }
                        }
                    }
                }
            }
        }
    },
    "components": {
        "schemas": {
            "Pet": {
                "type": "object",
                "required": ["id", "name"],
                "properties": {
                    "id": {
                        "type": "integer",
                        "format": "int64"
                    },
                    "name": {
                        "type": "string"
                    },
                    "tag": {
                        "$ref": "#/components/schemas/Tag"
                    }
                }
            },
            "Tag": {
                "type": "object",
                "properties": {
                    "label": {
                        "type": "string"
                    }
                }
            }
        }
    }
}"##;

#[test]
fn test_parse_petstore_document() {
    let parser = DocumentParser::from_source(PETSTORE_JSON).unwrap();
    let spec = parser.spec();

    assert_eq!(spec.openapi, "3.0.3");
    assert_eq!(spec.info.title, "Petstore");
    assert_eq!(spec.paths.len(), 2);

    // Declaration order is preserved.
    let paths: Vec<&String> = spec.paths.keys().collect();
    assert_eq!(paths, vec!["/pets", "/pets/{petId}"]);

    let list_pets = spec.paths["/pets"].get.as_ref().unwrap();
    assert_eq!(list_pets.operation_id.as_deref(), Some("listPets"));
    assert_eq!(list_pets.parameters.len(), 1);
    assert!(list_pets.responses.contains_key("200"));

    let components = spec.components.as_ref().unwrap();
    assert_eq!(components.schemas.len(), 2);
    match &components.schemas["Pet"] {
        SchemaOrRef::Schema(pet) => {
            assert_eq!(pet.schema_type.as_deref(), Some("object"));
            assert_eq!(pet.required, vec!["id", "name"]);
            assert!(matches!(
                pet.properties["tag"],
                SchemaOrRef::Reference { .. }
            ));
        }
        other => panic!("expected inline schema, got {:?}", other),
    }
}

#[test]
fn test_validate_petstore_document() {
    let spec = DocumentParser::from_source(PETSTORE_JSON).unwrap().into_spec();
    assert!(validate_spec(&spec).is_ok());
}

#[test]
fn test_filter_petstore_to_single_endpoint() {
    let spec = DocumentParser::from_source(PETSTORE_JSON).unwrap().into_spec();
    let rules = FilterRules {
        path: Some("/pets".to_string()),
        method: Some("post".to_string()),
    };

    let filtered = apply_filters(&spec, &rules).unwrap();
    assert_eq!(filtered.paths.len(), 1);

    let item = &filtered.paths["/pets"];
    assert!(item.post.is_some());
    assert!(item.get.is_none());

    // Components survive filtering; the flattener still needs them.
    assert!(filtered.components.is_some());
}
