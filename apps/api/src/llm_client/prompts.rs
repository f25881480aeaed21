// Prompt templates for the skill assistant.
// Placeholders in braces are filled with `str::replace` by the caller.

/// System prompt for translations. `{target_language}` is replaced.
pub const TRANSLATE_SYSTEM_TEMPLATE: &str = "You are a professional translator. \
    Translate the following text to {target_language}. \
    Provide only the translation with no additional explanation.";

/// System prompt for recommendations.
pub const RECOMMEND_SYSTEM: &str = "You are a content recommendation engine that analyzes \
    user preferences and recommends relevant content. \
    You MUST respond with valid JSON only. \
    Do NOT use markdown code fences. \
    Do NOT include explanations.";

pub const RECOMMEND_INTRO: &str = "Based on the user's watched skills and interests, \
    recommend the most relevant skills from the following list:";

pub const RECOMMEND_OUTPUT_INSTRUCTION: &str = "Return a JSON object of the skill IDs you \
    recommend, in order of relevance. Format: {\"recommendedSkills\": [1, 5, 3]}";
