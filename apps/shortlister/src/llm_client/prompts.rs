// Shared system prompts. Task-specific prompt text lives beside the module
// that builds it (see screening::prompts).

/// System role for every screening call.
pub const HR_ASSISTANT_SYSTEM: &str = "You are an expert HR assistant.";
