//! Action handlers and the dispatch entry point.
//!
//! Each handler is a pure function from a typed payload to its response
//! envelope. The dispatcher validates body shape, resolves the action,
//! runs the handler, and returns its output unchanged.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::dispatch::action::Action;
use crate::dispatch::defaults;
use crate::dispatch::error::{DispatchError, DispatchResult};
use crate::dispatch::payload::{
    is_falsy, ArchitectPayload, CustomActionPayload, DispatchRequest, KnowledgeBasePayload,
    OptimizePayload, TroubleshootPayload,
};

/// Dispatch a request body to its handler.
///
/// Presence checks run first (both fields, loose falsiness), then the
/// action lookup, then the handler. Handler output is returned as-is.
pub fn dispatch(request: DispatchRequest) -> DispatchResult<Value> {
    let action_value = request.action.filter(|value| !is_falsy(value));
    let payload = request.payload.filter(|value| !is_falsy(value));
    let (Some(action_value), Some(payload)) = (action_value, payload) else {
        return Err(DispatchError::MissingFields);
    };

    let name = wire_name(&action_value);
    let Some(action) = Action::parse(&name) else {
        tracing::warn!(action = %name, "Unrecognized action");
        return Err(DispatchError::UnknownAction(name));
    };

    tracing::debug!(action = %action, "Dispatching action");

    match action {
        Action::DesignCustomActions => to_envelope(design_custom_actions(decode(payload)?)),
        Action::TroubleshootApi => to_envelope(troubleshoot_api(decode(payload)?)),
        Action::OptimizePerformance => to_envelope(optimize_performance(decode(payload)?)),
        Action::CreateGptArchitect => to_envelope(create_gpt_architect(decode(payload)?)),
        Action::CreateKnowledgeBase => to_envelope(create_knowledge_base(decode(payload)?)),
    }
}

/// Render the action value for lookup and echoing. Strings are used
/// verbatim; any other JSON value is rendered in its JSON form.
fn wire_name(value: &Value) -> String {
    match value {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    }
}

fn decode<P: DeserializeOwned>(payload: Value) -> DispatchResult<P> {
    serde_json::from_value(payload).map_err(|err| DispatchError::Internal(err.to_string()))
}

fn to_envelope<T: Serialize>(envelope: T) -> DispatchResult<Value> {
    serde_json::to_value(envelope).map_err(|err| DispatchError::Internal(err.to_string()))
}

// --- designCustomActions ---

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomActionEnvelope {
    pub action_specification: ActionSpecification,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSpecification {
    pub custom_action: CustomAction,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_handling: Option<Value>,
}

/// Pure passthrough: fields land under `actionSpecification.customAction`
/// with no defaults; absent inputs stay absent.
pub fn design_custom_actions(payload: CustomActionPayload) -> CustomActionEnvelope {
    CustomActionEnvelope {
        action_specification: ActionSpecification {
            custom_action: CustomAction {
                name: payload.action_name,
                parameters: payload.parameters,
                auth: payload.authentication,
                error_handling: payload.error_handling,
            },
        },
    }
}

// --- troubleshootAPI ---

#[derive(Debug, Clone, Serialize)]
pub struct TroubleshootEnvelope {
    pub troubleshooting: Troubleshooting,
}

#[derive(Debug, Clone, Serialize)]
pub struct Troubleshooting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<Value>,
    pub suggestions: [&'static str; 3],
}

/// Passthrough plus the fixed suggestion list. `suggestions` is never
/// taken from input.
pub fn troubleshoot_api(payload: TroubleshootPayload) -> TroubleshootEnvelope {
    TroubleshootEnvelope {
        troubleshooting: Troubleshooting {
            error: payload.error_type,
            context: payload.context,
            request: payload.request_details,
            suggestions: defaults::TROUBLESHOOT_SUGGESTIONS,
        },
    }
}

// --- optimizePerformance ---

#[derive(Debug, Clone, Serialize)]
pub struct OptimizeEnvelope {
    pub optimization: Optimization,
}

#[derive(Debug, Clone, Serialize)]
pub struct Optimization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottlenecks: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<Value>,
    pub recommendations: [&'static str; 3],
}

/// Passthrough plus the fixed recommendation list.
pub fn optimize_performance(payload: OptimizePayload) -> OptimizeEnvelope {
    OptimizeEnvelope {
        optimization: Optimization {
            current: payload.current_metrics,
            bottlenecks: payload.bottlenecks,
            goals: payload.optimization_goals,
            recommendations: defaults::OPTIMIZE_RECOMMENDATIONS,
        },
    }
}

// --- createGPTArchitect ---

#[derive(Debug, Clone, Serialize)]
pub struct ArchitectEnvelope {
    pub configuration: ArchitectConfiguration,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectConfiguration {
    pub name: Value,
    pub description: Value,
    pub instructions: ArchitectInstructions,
    pub conversation_starters: [&'static str; 3],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectInstructions {
    pub role: &'static str,
    pub core_functions: Value,
    pub process_steps: Value,
    pub response_guidelines: Value,
    pub limitations: [&'static str; 3],
}

/// Caller-overridable fields take their documented fallback on falsy
/// input; `role`, `limitations`, and `conversationStarters` are fixed and
/// never overridable.
pub fn create_gpt_architect(payload: ArchitectPayload) -> ArchitectEnvelope {
    ArchitectEnvelope {
        configuration: ArchitectConfiguration {
            name: or_fallback(payload.name, || Value::from(defaults::ARCHITECT_NAME)),
            description: or_fallback(payload.description, || {
                Value::from(defaults::ARCHITECT_DESCRIPTION)
            }),
            instructions: ArchitectInstructions {
                role: defaults::ARCHITECT_ROLE,
                core_functions: or_fallback(payload.core_functions, || {
                    string_list(&defaults::ARCHITECT_CORE_FUNCTIONS)
                }),
                process_steps: or_fallback(payload.process_steps, || {
                    string_list(&defaults::ARCHITECT_PROCESS_STEPS)
                }),
                response_guidelines: or_fallback(payload.response_guidelines, || {
                    string_list(&defaults::ARCHITECT_RESPONSE_GUIDELINES)
                }),
                limitations: defaults::ARCHITECT_LIMITATIONS,
            },
            conversation_starters: defaults::CONVERSATION_STARTERS,
        },
    }
}

/// Fallback policy for architect fields: any falsy value falls back, and
/// so does an explicitly supplied empty list.
fn or_fallback(value: Option<Value>, fallback: impl FnOnce() -> Value) -> Value {
    match value {
        None => fallback(),
        Some(Value::Array(items)) if items.is_empty() => fallback(),
        Some(value) if is_falsy(&value) => fallback(),
        Some(value) => value,
    }
}

fn string_list(items: &[&str]) -> Value {
    Value::from(items.iter().map(|item| Value::from(*item)).collect::<Vec<_>>())
}

// --- createKnowledgeBase ---

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBaseEnvelope {
    pub knowledge_base: KnowledgeBase,
}

#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeBase {
    pub domains: KnowledgeDomains,
}

#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeDomains {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functional: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operational: Option<Value>,
}

/// Pure passthrough of the three knowledge domains.
pub fn create_knowledge_base(payload: KnowledgeBasePayload) -> KnowledgeBaseEnvelope {
    KnowledgeBaseEnvelope {
        knowledge_base: KnowledgeBase {
            domains: KnowledgeDomains {
                technical: payload.technical,
                functional: payload.functional,
                operational: payload.operational,
            },
        },
    }
}
