//! End-to-end flattening over a realistic document

use apitab_flattener::{
    build_request_body_table, build_request_params_table, build_response_body_table,
};
use apitab_parser::DocumentParser;

const ORDERS_JSON: &str = r##"{
    "openapi": "3.0.3",
    "info": {
        "title": "Orders",
        "version": "1.0.0"
    },
    "paths": {
        "/orders": {
            "post": {
                "operationId": "createOrder",
                "parameters": [
                    {
                        "name": "X-Request-Id",
                        "in": "header",
                        "required": true,
                        "schema": {
                            "type": "string",
                            "format": "uuid"
                        }
                    }
                ],
                "requestBody": {
                    "required": true,
                    "content": {
                        "application/json": {
                            "schema": {
                                "$ref": "#/components/schemas/OrderRequest"
                            }
                        }
                    }
                },
                "responses": {
                    "201": {
                        "description": "Created",
                        "content": {
                            "application/json": {
                                "schema": {
                                    "$ref": "#/components/schemas/Order"
                                }
                            }
                        }
                    },
                    "400": {
                        "description": "Bad request",
                        "content": {
                            "application/problem+json": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "detail": {
                                            "type": "string"
                                        }
                                    }
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
            "OrderRequest": {
                "type": "object",
                "required": ["customer", "lines"],
                "properties": {
                    "customer": {
                        "$ref": "#/components/schemas/Customer"
                    },
                    "lines": {
                        "type": "array",
                        "minItems": 1,
                        "items": {
                            "$ref": "#/components/schemas/OrderLine"
                        }
                    },
                    "note": {
                        "type": "string",
                        "maxLength": 200
                    }
                }
            },
            "Customer": {
                "$ref": "#/components/schemas/CustomerV2"
            },
            "CustomerV2": {
                "type": "object",
                "required": ["email"],
                "properties": {
                    "email": {
                        "type": "string",
                        "format": "email"
                    }
                }
            },
            "OrderLine": {
                "type": "object",
                "required": ["sku"],
                "properties": {
                    "sku": {
                        "type": "string",
                        "pattern": "^[A-Z0-9-]+$"
                    },
                    "quantity": {
                        "type": "integer",
                        "minimum": 1
                    }
                }
            },
            "Order": {
                "type": "object",
                "required": ["id"],
                "properties": {
                    "id": {
                        "type": "string",
                        "format": "uuid"
                    },
                    "kinds": {
                        "type": "array",
                        "items": {
                            "type": "string",
                            "enum": ["standard", "express"]
                        }
                    }
                }
            }
        }
    }
}"##;

#[test]
fn test_order_endpoint_tables() {
    let spec = DocumentParser::from_source(ORDERS_JSON).unwrap().into_spec();

    let params = build_request_params_table(&spec);
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].name, "X-Request-Id");
    assert_eq!(params[0].expected, "string(uuid)");
    assert!(params[0].mandatory);

    let request = build_request_body_table(&spec);
    let request_cells: Vec<(String, String, bool, String)> = request
        .iter()
        .map(|r| (r.path.clone(), r.property.clone(), r.mandatory, r.expected.clone()))
        .collect();
    assert_eq!(
        request_cells,
        vec![
            // Customer resolves through a reference chain to CustomerV2.
            (
                "/customer".to_string(),
                "email".to_string(),
                true,
                "string(email)".to_string()
            ),
            // minItems=1 guarantees a line exists, but only the line
            // schema's own required list decides each field.
            (
                "/lines[0]".to_string(),
                "sku".to_string(),
                true,
                "string pattern=^[A-Z0-9-]+$".to_string()
            ),
            (
                "/lines[0]".to_string(),
                "quantity".to_string(),
                false,
                "integer min=1".to_string()
            ),
            (
                "".to_string(),
                "note".to_string(),
                false,
                "string maxLen=200".to_string()
            ),
        ]
    );

    let response = build_response_body_table(&spec);
    let response_cells: Vec<(String, String, String)> = response
        .iter()
        .map(|r| (r.status.clone(), r.body.path.clone(), r.body.property.clone()))
        .collect();
    assert_eq!(
        response_cells,
        vec![
            ("201".to_string(), "".to_string(), "id".to_string()),
            // Responses emit explicit item rows for primitive arrays.
            ("201".to_string(), "/kinds[0]".to_string(), "".to_string()),
            ("400".to_string(), "".to_string(), "detail".to_string()),
        ]
    );
    assert_eq!(response[1].body.expected, "string enum=standard,express");
    assert!(!response[1].body.mandatory);
}
