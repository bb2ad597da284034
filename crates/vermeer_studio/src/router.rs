//! Natural-language command routing via function calling.

use std::sync::Arc;

use tracing::{debug, error, instrument, warn};

use vermeer_core::CommandResponse;
use vermeer_error::{BuilderError, VermeerResult};
use vermeer_interface::{
    Content, ContentBackend, FunctionCall, GenerateContentRequest, GenerateContentResponse,
    GenerativeModel,
};

use crate::prompts::{
    GENERIC_ERROR_MESSAGE, REPHRASE_MESSAGE, ROUTER_SYSTEM_INSTRUCTION,
    unimplemented_function_message,
};
use crate::schemas::{GENERATE_POST_BRIEFS, SCHEDULE_POST, SUMMARIZE_METRICS, router_tool};

/// A function call the router knows how to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutedCall {
    /// `generatePostBriefs(topic, tone)`
    GeneratePostBriefs {
        /// Subject of the posts
        topic: String,
        /// Voice of the posts
        tone: String,
    },
    /// `summarizeMetrics(period)`
    SummarizeMetrics {
        /// Reporting period label
        period: String,
    },
    /// `schedulePost(datetime, platform)`
    SchedulePost {
        /// Publication date and time
        datetime: String,
        /// Target platform
        platform: String,
    },
    /// Any other name the model produced
    Unhandled {
        /// The unrecognized function name
        name: String,
    },
}

/// A known function was called without one of its required arguments.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Function {function} is missing required argument '{argument}'.")]
pub struct MissingArgument {
    /// Function that was called
    pub function: String,
    /// Argument that was absent or not a string
    pub argument: &'static str,
}

impl RoutedCall {
    /// Interpret a model function call.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use vermeer_interface::FunctionCall;
    /// use vermeer_studio::RoutedCall;
    ///
    /// let call = FunctionCall {
    ///     name: "summarizeMetrics".to_string(),
    ///     args: json!({"period": "last7days"}),
    /// };
    /// assert_eq!(
    ///     RoutedCall::parse(&call).unwrap(),
    ///     RoutedCall::SummarizeMetrics { period: "last7days".to_string() }
    /// );
    /// ```
    pub fn parse(call: &FunctionCall) -> Result<Self, MissingArgument> {
        let arg = |argument: &'static str| {
            call.str_arg(argument)
                .map(str::to_string)
                .ok_or_else(|| MissingArgument {
                    function: call.name.clone(),
                    argument,
                })
        };

        Ok(match call.name.as_str() {
            GENERATE_POST_BRIEFS => Self::GeneratePostBriefs {
                topic: arg("topic")?,
                tone: arg("tone")?,
            },
            SUMMARIZE_METRICS => Self::SummarizeMetrics {
                period: arg("period")?,
            },
            SCHEDULE_POST => Self::SchedulePost {
                datetime: arg("datetime")?,
                platform: arg("platform")?,
            },
            other => Self::Unhandled {
                name: other.to_string(),
            },
        })
    }
}

/// Turns a free-text command into a structured result.
///
/// The model picks one of three declared functions; the matching
/// [`ContentBackend`] handler produces the answer. Every outcome, including
/// failures, comes back as a [`CommandResponse`].
pub struct CommandRouter<M: ?Sized, B: ?Sized> {
    model: Arc<M>,
    backend: Arc<B>,
    model_name: String,
}

impl<M, B> CommandRouter<M, B>
where
    M: GenerativeModel + ?Sized,
    B: ContentBackend + ?Sized,
{
    /// Router using `model_name` on `model`, dispatching to `backend`.
    pub fn new(model: Arc<M>, backend: Arc<B>, model_name: impl Into<String>) -> Self {
        Self {
            model,
            backend,
            model_name: model_name.into(),
        }
    }

    /// Route `prompt` to a handler.
    ///
    /// Only the first function call in the reply is honoured.
    #[instrument(skip(self, prompt), fields(model = %self.model_name))]
    pub async fn route(&self, prompt: &str) -> CommandResponse {
        let response = match self.request(prompt).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Command routing request failed");
                return CommandResponse::error(GENERIC_ERROR_MESSAGE);
            }
        };

        let calls = response.function_calls();
        let Some(call) = calls.first() else {
            debug!("Model did not call a function");
            return CommandResponse::error(REPHRASE_MESSAGE);
        };
        if calls.len() > 1 {
            debug!(ignored = calls.len() - 1, "Ignoring additional function calls");
        }

        match RoutedCall::parse(call) {
            Ok(routed) => self.dispatch(routed).await,
            Err(e) => {
                warn!(function = %e.function, argument = e.argument, "Function call missing argument");
                CommandResponse::error(e.to_string())
            }
        }
    }

    async fn request(&self, prompt: &str) -> VermeerResult<GenerateContentResponse> {
        let request = GenerateContentRequest::builder()
            .contents(vec![Content::user(prompt)])
            .system_instruction(Content::instruction(ROUTER_SYSTEM_INSTRUCTION))
            .tools(vec![router_tool()])
            .build()
            .map_err(|e| BuilderError::new(e.to_string()))?;

        self.model.generate_content(&self.model_name, &request).await
    }

    /// Run the handler for `call`.
    #[instrument(skip(self))]
    pub async fn dispatch(&self, call: RoutedCall) -> CommandResponse {
        let result = match call {
            RoutedCall::GeneratePostBriefs { topic, tone } => self
                .backend
                .generate_post_briefs(&topic, &tone)
                .await
                .map(CommandResponse::from),
            RoutedCall::SummarizeMetrics { period } => self
                .backend
                .summarize_metrics(&period)
                .await
                .map(CommandResponse::from),
            RoutedCall::SchedulePost { datetime, platform } => self
                .backend
                .schedule_post(&datetime, &platform)
                .await
                .map(CommandResponse::from),
            RoutedCall::Unhandled { name } => {
                warn!(function = %name, "Model called an unknown function");
                return CommandResponse::error(unimplemented_function_message(&name));
            }
        };

        result.unwrap_or_else(|e| {
            error!(error = %e, "Command handler failed");
            CommandResponse::error(GENERIC_ERROR_MESSAGE)
        })
    }
}

impl<M: ?Sized, B: ?Sized> Clone for CommandRouter<M, B> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
            backend: Arc::clone(&self.backend),
            model_name: self.model_name.clone(),
        }
    }
}
