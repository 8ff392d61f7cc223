use crate::input::HookInput;
use crate::output::HookOutput;

/// How a rule tests the extracted `tool_input` field
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    Contains(&'static str),
    StartsWith(&'static str),
}

impl Matcher {
    fn matches(self, value: &str) -> bool {
        match self {
            Matcher::Contains(needle) => value.contains(needle),
            Matcher::StartsWith(prefix) => value.starts_with(prefix),
        }
    }
}

/// A single auto-approval rule
#[derive(Debug)]
pub struct Rule {
    /// Tool this rule applies to
    pub tool_name: &'static str,
    /// Key in `tool_input` to test
    pub field: &'static str,
    pub matcher: Matcher,
    /// Reason reported back in `permissionDecisionReason`
    pub reason: &'static str,
}

/// Built-in rules, checked in order. `${CLAUDE_PLUGIN_ROOT}` is matched
/// literally, never expanded.
pub static RULES: &[Rule] = &[
    Rule {
        tool_name: "Bash",
        field: "command",
        matcher: Matcher::Contains("bash ${CLAUDE_PLUGIN_ROOT}/scripts/"),
        reason: "Plugin script auto-approved",
    },
    Rule {
        tool_name: "Write",
        field: "file_path",
        matcher: Matcher::StartsWith("/tmp/"),
        reason: "Write to /tmp/ auto-approved for plugin workflow",
    },
];

/// Find the first rule that approves this tool call.
pub fn find_match<'a>(rules: &'a [Rule], input: &HookInput) -> Option<&'a Rule> {
    rules.iter().find(|rule| {
        rule.tool_name == input.tool_name && rule.matcher.matches(input.input_str(rule.field))
    })
}

/// Evaluate the built-in rules against a hook input.
/// Returns Some(output) to approve, None to defer to the normal permission flow.
pub fn evaluate(input: &HookInput) -> Option<HookOutput> {
    find_match(RULES, input).map(|rule| HookOutput::allow(rule.reason))
}
