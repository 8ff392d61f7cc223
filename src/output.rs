use serde::Serialize;

/// Permission decisions this hook can make. It only ever approves; anything
/// it won't approve is left to Claude Code's normal permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    Allow,
}

/// Output JSON for the Claude Code hook system
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: &'static str,
    pub permission_decision: PermissionDecision,
    pub permission_decision_reason: String,
}

impl HookOutput {
    pub fn allow(reason: &str) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: "PreToolUse",
                permission_decision: PermissionDecision::Allow,
                permission_decision_reason: reason.to_string(),
            },
        }
    }
}
