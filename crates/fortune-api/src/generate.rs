//! AI generation services, proxied through the backend.
//!
//! The backend exposes a single `/api/gemini` route that takes a prompt and
//! returns the model's reply as one string. The two services here differ in
//! what they do with that string: the scaffold service insists on a valid
//! file tree and rejects anything else, while the strategy service hands
//! the text back untouched for the caller to render.

use fortune_core::{parse_json, strip_code_fences, FileNode};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::client::ApiClient;
use crate::config::endpoints;
use crate::error::ApiError;

/// Request body for the AI proxy route.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    prompt: String,
}

/// Reply body from the AI proxy route.
#[derive(Debug, Deserialize)]
struct GeminiReply {
    response: String,
}

const SCAFFOLD_FALLBACK: &str =
    "Failed to generate file system. Please check your backend connection.";
const STRATEGY_FALLBACK: &str =
    "Failed to generate strategy. Please check your backend connection.";
const BAD_STRUCTURE: &str =
    "The AI returned an invalid structure. Please try rephrasing your prompt.";

fn scaffold_prompt(prompt: &str) -> String {
    format!(
        "You are an expert file system generator. Your task is to interpret the user's request and create a JSON representation of the desired folder and file structure.\n\
         - The root of the structure must be a single folder.\n\
         - If a file is requested with content, include it in the 'content' property.\n\
         - If a file is requested without specified content (e.g., 'an empty file.txt'), the 'content' property should be an empty string \"\".\n\
         - Your output MUST be a single, valid JSON object and nothing else. Do not wrap it in markdown.\n\
         The user's request is: \"{prompt}\""
    )
}

fn strategy_prompt(prompt: &str) -> String {
    format!(
        "You are an expert in quantitative trading strategies. Based on the user's prompt, generate a detailed trading strategy. The output can be pseudo-code, Python code using a common library like 'pandas' or 'backtrader', or a JSON object defining the parameters. The response should be clear, concise, and directly usable.\n\
         The user's prompt is: \"{prompt}\""
    )
}

fn invalid_structure() -> ApiError {
    ApiError::Structure(BAD_STRUCTURE.to_string())
}

/// Ask the AI to design a folder and file tree for `prompt`.
///
/// The reply must be a JSON `FileNode` tree, optionally wrapped in a
/// markdown code fence. Anything JSON-flavored going wrong maps to the
/// "invalid structure" message so the user knows to reword the prompt;
/// every other failure maps to the backend-connection fallback.
pub async fn generate_file_system(
    client: &ApiClient,
    prompt: &str,
) -> Result<FileNode, ApiError> {
    let request = GeminiRequest {
        prompt: scaffold_prompt(prompt),
    };
    let reply: GeminiReply = match client.post_json(endpoints::GEMINI, &request).await {
        Ok(reply) => reply,
        Err(ApiError::Parse(_)) => return Err(invalid_structure()),
        Err(err) => {
            error!("file system generation failed: {err}");
            return Err(ApiError::Service(SCAFFOLD_FALLBACK.to_string()));
        }
    };

    let body = strip_code_fences(&reply.response);
    let node: FileNode = match parse_json(body) {
        Ok(node) => node,
        Err(failure) => {
            error!("AI scaffold reply is not a JSON tree: {failure}");
            return Err(invalid_structure());
        }
    };
    if let Err(shape) = node.validate() {
        error!("AI scaffold reply parsed but has the wrong shape: {shape}");
        return Err(invalid_structure());
    }
    Ok(node)
}

/// Ask the AI for a trading strategy write-up for `prompt`.
///
/// The reply is free text and is returned verbatim. Every failure maps to
/// one fixed user-facing message; the underlying cause is logged.
pub async fn generate_strategy(client: &ApiClient, prompt: &str) -> Result<String, ApiError> {
    let request = GeminiRequest {
        prompt: strategy_prompt(prompt),
    };
    match client
        .post_json::<_, GeminiReply>(endpoints::GEMINI, &request)
        .await
    {
        Ok(reply) => Ok(reply.response),
        Err(err) => {
            error!("strategy generation failed: {err}");
            Err(ApiError::Service(STRATEGY_FALLBACK.to_string()))
        }
    }
}
