// Cross-cutting prompt fragments. Task prompts live beside the service that
// owns them (scoring/prompts.rs, the prompt registry); only transport-level
// fragments belong here.

/// System prompt used for every generation call. Task prompts carry their own
/// output-format contract (markdown resume vs JSON-only).
pub const GENERATION_SYSTEM: &str = "You are an expert career assistant. \
    Follow the task instructions exactly. \
    When a task demands JSON output, respond with valid JSON only, \
    with no code fences and no commentary.";
