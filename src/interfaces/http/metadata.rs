//! Static documents served by the info endpoints.

use serde_json::{Value, json};

pub const HEALTH_MESSAGE: &str = "Sales Predicting App is all ready to go!";

pub const GITHUB_REPO: &str = "https://github.com/anhlevn149/amla_at2";

/// Project description returned by `GET /`.
pub fn project_info() -> Value {
    json!({
        "Project_Objectives": "A predictive model using SGD algorithm (Stochastic Gradient Descent) to predict the sales revenue for a given item in a specific store at a given date.",
        "Endpoints": [
            {
                "endpoint": "/",
                "description": "Displaying a brief description of the project objectives, list of endpoints, expected input parameters and output format of the model, link to the Github repo related to this project.",
                "input_parameters": "No input parameters needed"
            },
            {
                "endpoint": "/health",
                "description": "Returning status code 200 with a string with a welcome message of your choice.",
                "input_parameters": "No input parameters needed",
                "output_message": HEALTH_MESSAGE
            },
            {
                "endpoint": "/sales/stores/items",
                "description": "Predict sales for a given item in a specific store.",
                "input_parameters": [
                    {
                        "name": "store_id",
                        "type": "str",
                        "description": "The store ID where the item is sold."
                    },
                    {
                        "name": "item_id",
                        "type": "str",
                        "description": "The ID of the item to predict sales for."
                    },
                    {
                        "name": "date",
                        "type": "str (YYYY-MM-DD)",
                        "description": "The date for which to make the sales prediction."
                    }
                ],
                "output_format": {
                    "prediction": "float"
                }
            }
        ],
        "github_repo": GITHUB_REPO
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_route() {
        let info = project_info();
        let routes: Vec<&str> = info["Endpoints"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|e| e["endpoint"].as_str())
            .collect();
        assert_eq!(routes, vec!["/", "/health", "/sales/stores/items"]);
    }

    #[test]
    fn test_health_message_matches_docs() {
        let info = project_info();
        assert_eq!(info["Endpoints"][1]["output_message"], HEALTH_MESSAGE);
    }
}
