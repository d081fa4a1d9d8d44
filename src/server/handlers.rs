//! MCP tool handlers for the LotsEye site.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::domain::{
    digits_of, email_form_message, phone_form_message, validate_email, validate_phone,
};
use crate::form::ContactField;
use crate::metrics::Metrics;
use crate::search::search_url;
use crate::session::{ActiveView, SiteSession};
use crate::site::{page, Route};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The MCP server that lets an assistant browse and use the site.
#[derive(Clone)]
pub struct SiteMcpServer {
    session: Arc<Mutex<SiteSession>>,
    metrics: Metrics,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for SiteMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "lotseye-site".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: Some("LotsEye".into()),
                website_url: None,
            },
            instructions: Some("MCP server for the LotsEye marketing site - browse pages, search content, and fill in and send the contact form.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct NavigateParams {
    path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct GetPageParams {
    #[serde(default)]
    path: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct UpdateFieldParams {
    /// One of name, email, phone, subject, message
    field: String,
    value: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ValidateEmailParams {
    email: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ValidatePhoneParams {
    phone: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchSiteParams {
    query: String,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &impl serde::Serialize) -> Result<CallToolResult, McpError> {
    let json_response = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(json_response)]))
}

/// JSON description of whatever is mounted.
fn describe_view(session: &SiteSession) -> serde_json::Value {
    let route = session.route();
    let state = match session.view() {
        ActiveView::Home(view) => serde_json::json!({ "typewriter": view.snapshot() }),
        ActiveView::Services(view) => serde_json::json!({ "offerings": view.offerings() }),
        ActiveView::Contact(view) => serde_json::json!({ "contact": view.state() }),
    };

    serde_json::json!({
        "route": route,
        "path": route.path(),
        "state": state,
    })
}

// Tool router implementation
#[tool_router]
impl SiteMcpServer {
    /// Create a new server around a session.
    pub fn new(session: SiteSession) -> Self {
        let metrics = session.metrics().clone();
        Self {
            session: Arc::new(Mutex::new(session)),
            metrics,
            tool_router: Self::tool_router(),
        }
    }

    /// Shared handle to the session, for embedding and tests.
    pub fn session(&self) -> Arc<Mutex<SiteSession>> {
        Arc::clone(&self.session)
    }

    /// Navigate to a page, tearing down the previous one.
    #[tool(
        description = "Navigate to a page of the site (/, /service or /contact). Leaving a page stops its timers and discards unsent form input."
    )]
    async fn navigate(
        &self,
        params: Parameters<NavigateParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::info!("MCP Handler: navigate to {}", params.path);

        let mut session = self.session.lock().await;
        session.navigate(&params.path).map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "view": describe_view(&session),
            "page": session.current_page(),
        }))
    }

    /// Read the content of a page without navigating.
    #[tool(
        description = "Get the content of a page (defaults to the current page) including navigation, sections and footer"
    )]
    async fn get_page(
        &self,
        params: Parameters<GetPageParams>,
    ) -> Result<CallToolResult, McpError> {
        let route = match params.0.path {
            Some(path) => Route::from_path(&path).map_err(to_mcp_error)?,
            None => self.session.lock().await.route(),
        };

        json_result(&page(route))
    }

    /// Describe the mounted view and its live state.
    #[tool(
        description = "Describe the current page and its live state: typewriter headline on the home page, form values, errors and toast on the contact page"
    )]
    async fn current_view(&self) -> Result<CallToolResult, McpError> {
        let session = self.session.lock().await;
        json_result(&describe_view(&session))
    }

    /// Edit one contact form field.
    #[tool(
        description = "Set a contact form field (name, email, phone, subject or message). Clears that field's error. Requires the contact page to be open."
    )]
    async fn update_contact_field(
        &self,
        params: Parameters<UpdateFieldParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let field: ContactField = params.field.parse().map_err(to_mcp_error)?;
        tracing::debug!("Parameters: field={}, value_len={}", field, params.value.len());

        let mut session = self.session.lock().await;
        let view = session.contact_mut().map_err(to_mcp_error)?;
        view.set_field(field, params.value);

        json_result(&view.state())
    }

    /// Submit the contact form.
    #[tool(
        description = "Submit the contact form. Returns per-field errors when validation fails, otherwise delivers the message and shows a confirmation toast."
    )]
    async fn submit_contact_form(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: submit_contact_form called");

        let mut session = self.session.lock().await;
        let view = session.contact_mut().map_err(to_mcp_error)?;
        let report = view.submit().await;

        json_result(&serde_json::json!({
            "report": report,
            "form": view.form(),
        }))
    }

    /// Close the toast.
    #[tool(description = "Dismiss the notification toast on the contact page")]
    async fn dismiss_toast(&self) -> Result<CallToolResult, McpError> {
        let mut session = self.session.lock().await;
        let view = session.contact_mut().map_err(to_mcp_error)?;
        view.dismiss_toast();

        json_result(&view.state())
    }

    /// Check an email address the way the contact form does.
    #[tool(
        description = "Check an email address with the contact form's rules. Returns whether it is valid, the reason and the message the form would show."
    )]
    async fn validate_email(
        &self,
        params: Parameters<ValidateEmailParams>,
    ) -> Result<CallToolResult, McpError> {
        let email = params.0.email;
        let response = match validate_email(&email) {
            Ok(()) => serde_json::json!({
                "email": email.trim(),
                "valid": true,
            }),
            Err(reason) => serde_json::json!({
                "email": email.trim(),
                "valid": false,
                "reason": reason.to_string(),
                "message": email_form_message(&email),
            }),
        };

        json_result(&response)
    }

    /// Check a phone number the way the contact form does.
    #[tool(
        description = "Check an Indian mobile number with the contact form's rules. Formatting characters are ignored."
    )]
    async fn validate_phone(
        &self,
        params: Parameters<ValidatePhoneParams>,
    ) -> Result<CallToolResult, McpError> {
        let phone = params.0.phone;
        let digits = digits_of(&phone);
        let response = match validate_phone(&phone) {
            Ok(()) => serde_json::json!({
                "phone": phone,
                "digits": digits,
                "valid": true,
            }),
            Err(reason) => serde_json::json!({
                "phone": phone,
                "digits": digits,
                "valid": false,
                "reason": reason.to_string(),
                "message": phone_form_message(&phone),
            }),
        };

        json_result(&response)
    }

    /// Search the site's content.
    #[tool(
        description = "Search all page content using substring and fuzzy matching. Returns ranked sections with snippets and the search page link."
    )]
    async fn search_site(
        &self,
        params: Parameters<SearchSiteParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = params.0.query;

        let results = self
            .session
            .lock()
            .await
            .search(&query)
            .map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "query": query.trim(),
            "search_url": search_url(&query),
            "result_count": results.len(),
            "results": results,
        }))
    }

    /// Runtime counters.
    #[tool(description = "Get submission, delivery and search counters for this server")]
    async fn metrics(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.metrics.summary())
    }
}
