//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the readability metrics over MCP so AI assistants can score text
//! via stdio transport.
//!
//! Each `#[tool]` method delegates to `kincaid-core`; this module only
//! handles parameter decoding, input limits, and JSON encoding.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use kincaid_core::config::Config;
use kincaid_core::readability::{self, ReadabilityOptions};
use kincaid_core::syllables::{self, SyllableMethod};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `text_metrics` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextMetricsParams {
    /// The text to score.
    pub text: String,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
    /// Syllable estimator: "heuristic" or "patterns".
    pub syllable_method: Option<SyllableMethod>,
    /// Minimum acceptable Flesch Reading Ease.
    pub min_score: Option<f64>,
}

/// Parameters for the `count_syllables` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CountSyllablesParams {
    /// The text whose words should be counted.
    pub text: String,
    /// Syllable estimator: "heuristic" or "patterns".
    pub syllable_method: Option<SyllableMethod>,
}

/// MCP server exposing readability metrics to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
    default_method: SyllableMethod,
    default_min_score: Option<f64>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server with the default input limit and no configured defaults.
    pub fn new() -> Self {
        Self::with_config(Some(kincaid_core::DEFAULT_MAX_INPUT_BYTES), &Config::default())
    }

    /// Create a server that applies `config` defaults and the given input limit.
    pub fn with_config(max_input_bytes: Option<usize>, config: &Config) -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes,
            default_method: config.syllable_method.unwrap_or_default(),
            default_min_score: config.min_score,
        }
    }

    fn check_input(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Word, sentence, and syllable counts plus Flesch scores.
    #[tool(
        description = "Score readability of text. Returns word, sentence, and syllable counts, Flesch Reading Ease, and Flesch-Kincaid grade. Scores are null when the text has no words or no sentences."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn text_metrics(
        &self,
        Parameters(params): Parameters<TextMetricsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "text_metrics",
            strip_md = params.strip_markdown,
            method = ?params.syllable_method,
            "executing MCP tool"
        );
        self.check_input(&params.text)?;

        let options = ReadabilityOptions {
            strip_markdown: params.strip_markdown,
            method: params.syllable_method.unwrap_or(self.default_method),
            min_score: params.min_score.or(self.default_min_score),
        };
        let report = readability::check_readability(&params.text, &options);

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "text_metrics",
            words = report.words,
            reading_ease = ?report.reading_ease,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Per-word syllable estimates.
    #[tool(description = "Estimate syllables for every word in text. Returns each word with its count and the total.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn count_syllables(
        &self,
        Parameters(params): Parameters<CountSyllablesParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "count_syllables", method = ?params.syllable_method, "executing MCP tool");
        self.check_input(&params.text)?;

        let method = params.syllable_method.unwrap_or(self.default_method);
        let report = syllables::syllable_breakdown(&params.text, method);

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "count_syllables", total = report.total, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use text_metrics to score readability and count_syllables for per-word estimates.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn server_info_has_correct_name() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn server_has_tools_capability() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn server_has_instructions() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        let instructions = info.instructions.expect("server should have instructions");
        assert!(instructions.contains(env!("CARGO_PKG_NAME")));
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn json_of(result: &CallToolResult) -> serde_json::Value {
        let text = extract_text(result).expect("should have text content");
        serde_json::from_str(text).expect("valid JSON")
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let server = ProjectServer::new();
        let params = Parameters(GetInfoParams {
            format: "text".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let text = extract_text(&result).expect("should have text content");
        assert!(text.contains(env!("CARGO_PKG_NAME")));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = ProjectServer::new();
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let json = json_of(&result);
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn text_metrics_tool_works() {
        let server = ProjectServer::new();
        let params = Parameters(TextMetricsParams {
            text: "The cat sat on the mat.".to_string(),
            strip_markdown: false,
            syllable_method: None,
            min_score: None,
        });

        let result = server
            .text_metrics(params)
            .expect("text_metrics should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let json = json_of(&result);
        assert_eq!(json["words"], 6);
        assert_eq!(json["sentences"], 1);
        assert_eq!(json["syllables"], 6);
        assert!(json["reading_ease"].as_f64().unwrap() > 100.0);
        assert_eq!(json["syllable_method"], "heuristic");
    }

    #[test]
    fn text_metrics_reports_null_for_empty_text() {
        let server = ProjectServer::new();
        let params = Parameters(TextMetricsParams {
            text: "   ".to_string(),
            strip_markdown: false,
            syllable_method: None,
            min_score: None,
        });

        let result = server.text_metrics(params).unwrap();
        let json = json_of(&result);
        assert_eq!(json["words"], 0);
        assert!(json["reading_ease"].is_null());
        assert!(json["grade"].is_null());
    }

    #[test]
    fn text_metrics_uses_configured_defaults() {
        let config = Config {
            syllable_method: Some(SyllableMethod::Patterns),
            min_score: Some(200.0),
            ..Default::default()
        };
        let server = ProjectServer::with_config(None, &config);
        let params = Parameters(TextMetricsParams {
            text: "The cat sat on the mat.".to_string(),
            strip_markdown: false,
            syllable_method: None,
            min_score: None,
        });

        let json = json_of(&server.text_metrics(params).unwrap());
        assert_eq!(json["syllable_method"], "patterns");
        assert_eq!(json["min_score"], 200.0);
        assert_eq!(json["below_min"], true);
    }

    #[test]
    fn count_syllables_tool_works() {
        let server = ProjectServer::new();
        let params = Parameters(CountSyllablesParams {
            text: "banana like".to_string(),
            syllable_method: Some(SyllableMethod::Heuristic),
        });

        let result = server
            .count_syllables(params)
            .expect("count_syllables should succeed");
        let json = json_of(&result);
        assert_eq!(json["total"], 4);
        assert_eq!(json["words"][0]["word"], "banana");
        assert_eq!(json["words"][0]["syllables"], 3);
    }

    #[test]
    fn oversized_input_is_rejected() {
        let server = ProjectServer::with_config(Some(8), &Config::default());
        let params = Parameters(CountSyllablesParams {
            text: "a sentence well past eight bytes".to_string(),
            syllable_method: None,
        });

        assert!(server.count_syllables(params).is_err());
    }
}
